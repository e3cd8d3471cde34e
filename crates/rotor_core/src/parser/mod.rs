//! Front-end infrastructure: lexer, AST, and recursive-descent parser.
//!
//! - [`scanner`] — lexer that converts raw source text into a stream of
//!   [`scanner::Token`]s.
//! - [`ast`] — AST node definitions and their diagnostic renderings.
//! - [`Parser`] — recursive-descent parser from a token sequence to a
//!   [`ast::Program`] plus a fresh global scope handle.
//!
//! Data flow: source bytes → [`scanner::Lexer`] → ordered token sequence →
//! [`Parser`] → [`ast::Program`] → (external) evaluator.

/// AST node definitions.
pub mod ast;
/// Lexer for the Rotor JavaScript subset.
pub mod scanner;

use crate::error::{RotorError, RotorResult};
use crate::parser::ast::{
    ArgList, AssignExpr, BinaryExpr, BlockStmt, BreakStmt, CallExpr, ContinueStmt, Expr, ExprStmt,
    FnDecl, ForStmt, Ident, IfStmt, Literal, Op, Param, ParamList, Program, ReturnStmt, Stmt,
    VarDecl, WhileStmt,
};
use crate::parser::scanner::{Span, Token, TokenKind};
use crate::runtime::scope::{Scope, ScopeHandle};
use crate::runtime::value::JsValue;

// ─────────────────────────────────────────────────────────────────────────────
// Operator precedence
// ─────────────────────────────────────────────────────────────────────────────

/// Binding power of a binary operator token, or `None` for non-operators.
/// Higher binds tighter; all levels are left associative.
fn binding_power(kind: TokenKind) -> Option<(u8, Op)> {
    match kind {
        TokenKind::Star => Some((5, Op::Mult)),
        TokenKind::Slash => Some((5, Op::Div)),
        TokenKind::Percent => Some((5, Op::Mod)),
        TokenKind::Plus => Some((4, Op::Plus)),
        TokenKind::Minus => Some((4, Op::Minus)),
        TokenKind::Ampersand => Some((3, Op::And)),
        TokenKind::Pipe => Some((3, Op::Or)),
        TokenKind::Caret => Some((3, Op::Xor)),
        TokenKind::Less => Some((2, Op::Less)),
        TokenKind::Greater => Some((2, Op::Greater)),
        TokenKind::LessEqual => Some((2, Op::LessEqual)),
        TokenKind::GreaterEqual => Some((2, Op::GreaterEqual)),
        TokenKind::EqualEqual => Some((1, Op::EqualEqual)),
        TokenKind::EqualEqualEqual => Some((1, Op::EqualEqualEqual)),
        TokenKind::BangEqual => Some((1, Op::NotEqual)),
        TokenKind::BangEqualEqual => Some((1, Op::NotEqualEqual)),
        _ => None,
    }
}

/// Merge two spans into one covering both, keeping the first span's file.
fn merge_spans(start: &Span, end: &Span) -> Span {
    Span {
        file: start.file.clone(),
        start: start.start,
        end: end.end,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

/// Recursive-descent parser for the Rotor JavaScript subset.
///
/// Consumes the filtered token sequence produced by
/// [`scanner::Lexer::lex`] (whitespace and invalid tokens removed, exactly
/// one trailing [`TokenKind::Eof`]) and builds the AST bottom-up with no
/// backtracking. The first structural mismatch aborts the whole parse; a
/// partially built [`Program`] is never returned.
///
/// # Example
///
/// ```
/// use rotor_core::parser::Parser;
/// use rotor_core::parser::scanner::Lexer;
///
/// let tokens = Lexer::new("let x = 1 + 2;", "example.js").lex().unwrap();
/// let (program, _globals) = Parser::new(tokens).parse().unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    /// Create a parser over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    // ── Cursor helpers ──────────────────────────────────────────────────────

    /// Inspect the token `offset` positions ahead without consuming.
    /// Clamps to the trailing end-of-file token.
    fn peek(&self, offset: usize) -> &Token {
        let i = (self.index + offset).min(self.tokens.len() - 1);
        &self.tokens[i]
    }

    /// Span of the most recently consumed token.
    fn prev_span(&self) -> &Span {
        &self.tokens[self.index.saturating_sub(1)].span
    }

    /// Advance and return the current token.
    fn consume(&mut self) -> RotorResult<Token> {
        if self.index >= self.tokens.len() {
            return Err(RotorError::UnexpectedEndOfInput {
                span: self.tokens[self.tokens.len() - 1].span.clone(),
            });
        }
        let token = self.tokens[self.index].clone();
        self.index += 1;
        Ok(token)
    }

    /// Advance past the current token, failing with
    /// [`RotorError::UnexpectedToken`] when it is not of `expected` kind.
    fn expect(&mut self, expected: TokenKind) -> RotorResult<Token> {
        let token = self.peek(0);
        if token.kind == expected {
            return self.consume();
        }
        if token.kind == TokenKind::Eof {
            return Err(RotorError::UnexpectedEndOfInput {
                span: token.span.clone(),
            });
        }
        Err(RotorError::UnexpectedToken {
            expected: expected.as_str().to_string(),
            found: token.describe(),
            span: token.span.clone(),
        })
    }

    fn eat_semicolon_if_present(&mut self) -> RotorResult<()> {
        if self.peek(0).kind == TokenKind::Semicolon {
            self.consume()?;
        }
        Ok(())
    }

    // ── Entry point ─────────────────────────────────────────────────────────

    /// Parse the whole token sequence into a [`Program`] and a freshly
    /// created, empty global scope handle.
    pub fn parse(mut self) -> RotorResult<(Program, ScopeHandle)> {
        if self.tokens.is_empty() {
            return Err(RotorError::Internal(
                "token stream must end with an end-of-file token".into(),
            ));
        }
        let loc = merge_spans(
            &self.tokens[0].span,
            &self.tokens[self.tokens.len() - 1].span,
        );
        let mut program = Program {
            loc,
            body: Vec::new(),
        };
        for statement in self.parse_block(&[])? {
            program.add_statement(statement);
        }
        Ok((program, Scope::new_global()))
    }

    // ── Statements ──────────────────────────────────────────────────────────

    /// Statement dispatch loop: parse statements until a token in
    /// `stop_kinds` or end of input is seen.
    fn parse_block(&mut self, stop_kinds: &[TokenKind]) -> RotorResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        loop {
            let kind = self.peek(0).kind;
            if kind == TokenKind::Eof || stop_kinds.contains(&kind) {
                return Ok(statements);
            }
            statements.push(self.parse_statement()?);
        }
    }

    fn parse_statement(&mut self) -> RotorResult<Stmt> {
        match self.peek(0).kind {
            TokenKind::Let | TokenKind::Const | TokenKind::Var => {
                self.parse_variable_declaration()
            }
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Return => {
                let keyword = self.consume()?;
                self.eat_semicolon_if_present()?;
                Ok(Stmt::Return(ReturnStmt { loc: keyword.span }))
            }
            TokenKind::Break => {
                let keyword = self.consume()?;
                self.eat_semicolon_if_present()?;
                Ok(Stmt::Break(BreakStmt { loc: keyword.span }))
            }
            TokenKind::Continue => {
                let keyword = self.consume()?;
                self.eat_semicolon_if_present()?;
                Ok(Stmt::Continue(ContinueStmt { loc: keyword.span }))
            }
            _ => {
                let expr = self.parse_expression()?;
                self.eat_semicolon_if_present()?;
                let loc = merge_spans(expr.loc(), self.prev_span());
                Ok(Stmt::Expr(ExprStmt { loc, expr }))
            }
        }
    }

    /// `let` / `const` / `var` name (`=` expr)? `;`?
    fn parse_variable_declaration(&mut self) -> RotorResult<Stmt> {
        let keyword = self.consume()?;
        let name_token = self.expect(TokenKind::Identifier)?;
        let name = name_token.str_value()?.to_string();
        let init = if self.peek(0).kind == TokenKind::Equal {
            self.consume()?;
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.eat_semicolon_if_present()?;
        let loc = merge_spans(&keyword.span, self.prev_span());
        Ok(Stmt::VarDecl(VarDecl { loc, name, init }))
    }

    /// `function` name `(` params `)` `{` block `}`
    fn parse_function_declaration(&mut self) -> RotorResult<Stmt> {
        let keyword = self.expect(TokenKind::Function)?;
        let name_token = self.expect(TokenKind::Identifier)?;
        let name = name_token.str_value()?.to_string();
        let params = self.parse_parameters()?;
        let body = self.parse_braced_block()?;
        let loc = merge_spans(&keyword.span, &body.loc);
        Ok(Stmt::FnDecl(Box::new(FnDecl {
            loc,
            name,
            params,
            body,
        })))
    }

    /// `(` identifier (`,` identifier)* `)` — bare names only, no defaults,
    /// no rest/spread.
    fn parse_parameters(&mut self) -> RotorResult<ParamList> {
        self.expect(TokenKind::LeftParen)?;
        let mut params = ParamList::new();
        if self.peek(0).kind != TokenKind::RightParen {
            loop {
                let token = self.expect(TokenKind::Identifier)?;
                let name = token.str_value()?.to_string();
                params.push(Param {
                    loc: token.span,
                    name,
                });
                if self.peek(0).kind == TokenKind::Comma {
                    self.consume()?;
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(params)
    }

    /// `{` statements `}`
    fn parse_braced_block(&mut self) -> RotorResult<BlockStmt> {
        let open = self.expect(TokenKind::LeftBrace)?;
        let body = self.parse_block(&[TokenKind::RightBrace])?;
        let close = self.expect(TokenKind::RightBrace)?;
        Ok(BlockStmt {
            loc: merge_spans(&open.span, &close.span),
            body,
        })
    }

    /// `if` `(` expr `)` `{` block `}` — no `else` clause in this grammar.
    fn parse_if_statement(&mut self) -> RotorResult<Stmt> {
        let keyword = self.expect(TokenKind::If)?;
        self.expect(TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_braced_block()?;
        let loc = merge_spans(&keyword.span, &body.loc);
        Ok(Stmt::If(IfStmt { loc, test, body }))
    }

    /// `while` `(` expr `)` `{` block `}`
    fn parse_while_statement(&mut self) -> RotorResult<Stmt> {
        let keyword = self.expect(TokenKind::While)?;
        self.expect(TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_braced_block()?;
        let loc = merge_spans(&keyword.span, &body.loc);
        Ok(Stmt::While(WhileStmt { loc, test, body }))
    }

    /// `for` `(` expr `)` `{` block `}` — the header is a single expression
    /// slot, not the classic init/condition/update triple.
    fn parse_for_statement(&mut self) -> RotorResult<Stmt> {
        let keyword = self.expect(TokenKind::For)?;
        self.expect(TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_braced_block()?;
        let loc = merge_spans(&keyword.span, &body.loc);
        Ok(Stmt::For(ForStmt { loc, test, body }))
    }

    // ── Expressions ─────────────────────────────────────────────────────────

    /// Parse one expression at the lowest precedence level.
    fn parse_expression(&mut self) -> RotorResult<Expr> {
        self.parse_binary_expression(1)
    }

    /// Precedence climbing: fold binary operators whose binding power is at
    /// least `min_power` into a left-associative tree.
    fn parse_binary_expression(&mut self, min_power: u8) -> RotorResult<Expr> {
        let mut left = self.parse_primary()?;
        while let Some((power, op)) = binding_power(self.peek(0).kind) {
            if power < min_power {
                break;
            }
            self.consume()?;
            let right = self.parse_binary_expression(power + 1)?;
            let loc = merge_spans(left.loc(), right.loc());
            left = Expr::Binary(Box::new(BinaryExpr {
                loc,
                left,
                right,
                op,
            }));
        }
        Ok(left)
    }

    /// Base case: literal, identifier (possibly a call or assignment), or a
    /// parenthesised sub-expression.
    fn parse_primary(&mut self) -> RotorResult<Expr> {
        match self.peek(0).kind {
            TokenKind::Integer => {
                let token = self.consume()?;
                let value = JsValue::Number(f64::from(token.int_value()?));
                Ok(Expr::Literal(Literal {
                    loc: token.span,
                    value,
                }))
            }
            TokenKind::Float => {
                let token = self.consume()?;
                let value = JsValue::Number(token.float_value()?);
                Ok(Expr::Literal(Literal {
                    loc: token.span,
                    value,
                }))
            }
            TokenKind::SingleQuotedString | TokenKind::DoubleQuotedString => {
                let token = self.consume()?;
                let value = JsValue::String(token.str_value()?.to_string());
                Ok(Expr::Literal(Literal {
                    loc: token.span,
                    value,
                }))
            }
            TokenKind::Identifier => match self.peek(1).kind {
                TokenKind::LeftParen => self.parse_function_call(),
                TokenKind::Equal => self.parse_variable_assignment(),
                _ => {
                    let token = self.consume()?;
                    let name = token.str_value()?.to_string();
                    Ok(Expr::Ident(Ident {
                        loc: token.span,
                        name,
                    }))
                }
            },
            TokenKind::LeftParen => {
                self.consume()?;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(inner)
            }
            TokenKind::Eof => Err(RotorError::UnexpectedEndOfInput {
                span: self.peek(0).span.clone(),
            }),
            _ => {
                let token = self.peek(0);
                Err(RotorError::UnexpectedToken {
                    expected: "an expression".to_string(),
                    found: token.describe(),
                    span: token.span.clone(),
                })
            }
        }
    }

    /// name `(` expr (`,` expr)* `)`
    fn parse_function_call(&mut self) -> RotorResult<Expr> {
        let name_token = self.expect(TokenKind::Identifier)?;
        let callee = name_token.str_value()?.to_string();
        self.expect(TokenKind::LeftParen)?;
        let mut args = ArgList::new();
        if self.peek(0).kind != TokenKind::RightParen {
            loop {
                args.push(self.parse_expression()?);
                if self.peek(0).kind == TokenKind::Comma {
                    self.consume()?;
                } else {
                    break;
                }
            }
        }
        let close = self.expect(TokenKind::RightParen)?;
        let loc = merge_spans(&name_token.span, &close.span);
        Ok(Expr::Call(Box::new(CallExpr { loc, callee, args })))
    }

    /// name `=` expr
    fn parse_variable_assignment(&mut self) -> RotorResult<Expr> {
        let name_token = self.expect(TokenKind::Identifier)?;
        let name = name_token.str_value()?.to_string();
        self.expect(TokenKind::Equal)?;
        let value = self.parse_expression()?;
        let loc = merge_spans(&name_token.span, value.loc());
        Ok(Expr::Assign(Box::new(AssignExpr { loc, name, value })))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::scanner::Lexer;

    fn parse_src(src: &str) -> RotorResult<(Program, ScopeHandle)> {
        let tokens = Lexer::new(src, "test.js").lex()?;
        Parser::new(tokens).parse()
    }

    /// Parse `src` and return the program's diagnostic rendering.
    fn rendered(src: &str) -> String {
        parse_src(src).unwrap().0.to_string()
    }

    // ── Variable declarations ───────────────────────────────────────────────

    #[test]
    fn test_let_with_binary_initializer() {
        assert_eq!(
            rendered("let x = 1 + 2;"),
            "Program [VariableDeclaration [name=x, init=BinaryExpression [Literal [1] Plus Literal [2]]]]"
        );
    }

    #[test]
    fn test_declaration_without_initializer() {
        assert_eq!(rendered("var y;"), "Program [VariableDeclaration [name=y]]");
    }

    #[test]
    fn test_declaration_without_semicolon() {
        assert_eq!(
            rendered("let z = 3"),
            "Program [VariableDeclaration [name=z, init=Literal [3]]]"
        );
    }

    #[test]
    fn test_const_declaration() {
        assert_eq!(
            rendered("const k = 'v';"),
            "Program [VariableDeclaration [name=k, init=Literal [v]]]"
        );
    }

    #[test]
    fn test_missing_identifier_after_let_fails() {
        let err = parse_src("let = 1;").unwrap_err();
        match err {
            RotorError::UnexpectedToken {
                expected, found, ..
            } => {
                assert_eq!(expected, "identifier");
                assert_eq!(found, "=");
            }
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    // ── Function declarations ───────────────────────────────────────────────

    #[test]
    fn test_function_declaration_shape() {
        assert_eq!(
            rendered("function f(a, b) { return; }"),
            "Program [FunctionDeclaration [name=f, params=(a, b), body=BlockStatement [ReturnStatement]]]"
        );
    }

    #[test]
    fn test_function_with_no_parameters() {
        assert_eq!(
            rendered("function g() { }"),
            "Program [FunctionDeclaration [name=g, params=(), body=BlockStatement []]]"
        );
    }

    #[test]
    fn test_function_body_statements_keep_order() {
        assert_eq!(
            rendered("function h(n) { let a = 1; let b = 2; }"),
            "Program [FunctionDeclaration [name=h, params=(n), body=BlockStatement [\
             VariableDeclaration [name=a, init=Literal [1]] \
             VariableDeclaration [name=b, init=Literal [2]]]]]"
        );
    }

    #[test]
    fn test_parameter_list_rejects_non_identifiers() {
        assert!(parse_src("function f(1) { }").is_err());
        assert!(parse_src("function f(a,) { }").is_err());
    }

    // ── Control flow ────────────────────────────────────────────────────────

    #[test]
    fn test_if_statement() {
        assert_eq!(
            rendered("if (x == 1) { return; }"),
            "Program [IfStatement [condition=BinaryExpression [Identifier [x] EqualEqual Literal [1]], \
             body=BlockStatement [ReturnStatement]]]"
        );
    }

    #[test]
    fn test_while_statement() {
        assert_eq!(
            rendered("while (n < 10) { n = n + 1; }"),
            "Program [WhileStatement [condition=BinaryExpression [Identifier [n] Less Literal [10]], \
             body=BlockStatement [ExpressionStatement [VariableAssignment [n=BinaryExpression \
             [Identifier [n] Plus Literal [1]]]]]]]"
        );
    }

    #[test]
    fn test_for_statement_single_expression_header() {
        assert_eq!(
            rendered("for (i < 5) { break; }"),
            "Program [ForStatement [condition=BinaryExpression [Identifier [i] Less Literal [5]], \
             body=BlockStatement [BreakStatement]]]"
        );
    }

    #[test]
    fn test_return_is_bare() {
        assert_eq!(rendered("return;"), "Program [ReturnStatement]");
        // `return x;` is two statements in this grammar.
        assert_eq!(
            rendered("return x;"),
            "Program [ReturnStatement ExpressionStatement [Identifier [x]]]"
        );
    }

    #[test]
    fn test_break_and_continue() {
        assert_eq!(
            rendered("break; continue;"),
            "Program [BreakStatement ContinueStatement]"
        );
    }

    // ── Expression precedence ───────────────────────────────────────────────

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            rendered("1 + 2 * 3;"),
            "Program [ExpressionStatement [BinaryExpression [Literal [1] Plus \
             BinaryExpression [Literal [2] Mult Literal [3]]]]]"
        );
    }

    #[test]
    fn test_addition_binds_tighter_than_bitwise() {
        assert_eq!(
            rendered("1 & 2 + 3;"),
            "Program [ExpressionStatement [BinaryExpression [Literal [1] And \
             BinaryExpression [Literal [2] Plus Literal [3]]]]]"
        );
    }

    #[test]
    fn test_comparison_binds_tighter_than_equality() {
        assert_eq!(
            rendered("a < b == c;"),
            "Program [ExpressionStatement [BinaryExpression [BinaryExpression \
             [Identifier [a] Less Identifier [b]] EqualEqual Identifier [c]]]]"
        );
    }

    #[test]
    fn test_binary_operators_are_left_associative() {
        assert_eq!(
            rendered("1 - 2 - 3;"),
            "Program [ExpressionStatement [BinaryExpression [BinaryExpression \
             [Literal [1] Minus Literal [2]] Minus Literal [3]]]]"
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            rendered("(1 + 2) * 3;"),
            "Program [ExpressionStatement [BinaryExpression [BinaryExpression \
             [Literal [1] Plus Literal [2]] Mult Literal [3]]]]"
        );
    }

    #[test]
    fn test_strict_equality_operator() {
        assert_eq!(
            rendered("a === 3.5;"),
            "Program [ExpressionStatement [BinaryExpression [Identifier [a] \
             EqualEqualEqual Literal [3.5]]]]"
        );
    }

    // ── Calls and assignments ───────────────────────────────────────────────

    #[test]
    fn test_function_call_with_arguments() {
        assert_eq!(
            rendered("print(1, x);"),
            "Program [ExpressionStatement [FunctionCall [name=print, args=(Literal [1], Identifier [x])]]]"
        );
    }

    #[test]
    fn test_call_without_arguments() {
        assert_eq!(
            rendered("tick();"),
            "Program [ExpressionStatement [FunctionCall [name=tick, args=()]]]"
        );
    }

    #[test]
    fn test_call_participates_in_binary_expression() {
        assert_eq!(
            rendered("f(1) + 2;"),
            "Program [ExpressionStatement [BinaryExpression [FunctionCall \
             [name=f, args=(Literal [1])] Plus Literal [2]]]]"
        );
    }

    #[test]
    fn test_nested_call_argument() {
        assert_eq!(
            rendered("f(g(1));"),
            "Program [ExpressionStatement [FunctionCall [name=f, args=(\
             FunctionCall [name=g, args=(Literal [1])])]]]"
        );
    }

    #[test]
    fn test_assignment_expression() {
        assert_eq!(
            rendered("x = 1 + 2;"),
            "Program [ExpressionStatement [VariableAssignment [x=BinaryExpression \
             [Literal [1] Plus Literal [2]]]]]"
        );
    }

    #[test]
    fn test_chained_assignment_is_right_nested() {
        assert_eq!(
            rendered("x = y = 1;"),
            "Program [ExpressionStatement [VariableAssignment [x=VariableAssignment [y=Literal [1]]]]]"
        );
    }

    // ── Fail-fast error policy ──────────────────────────────────────────────

    #[test]
    fn test_missing_closing_paren_fails() {
        assert!(matches!(
            parse_src("f(1;").unwrap_err(),
            RotorError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_truncated_input_fails_with_end_of_input() {
        assert!(matches!(
            parse_src("let x =").unwrap_err(),
            RotorError::UnexpectedEndOfInput { .. }
        ));
        assert!(matches!(
            parse_src("function f(a, b) { return;").unwrap_err(),
            RotorError::UnexpectedEndOfInput { .. }
        ));
    }

    #[test]
    fn test_unexpected_token_in_expression_position() {
        let err = parse_src("let x = ;").unwrap_err();
        match err {
            RotorError::UnexpectedToken { found, .. } => assert_eq!(found, ";"),
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_error_carries_source_location() {
        let err = parse_src("let\nlet x = 1;").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("test.js:2:1"), "unexpected message: {msg}");
    }

    // ── Program shape ───────────────────────────────────────────────────────

    #[test]
    fn test_empty_input_yields_empty_program() {
        let (program, globals) = parse_src("").unwrap();
        assert!(program.body.is_empty());
        assert!(globals.borrow().is_empty());
    }

    #[test]
    fn test_global_scope_handle_is_fresh_and_empty() {
        let (_, globals) = parse_src("let x = 1;").unwrap();
        assert!(globals.borrow().is_empty());
    }

    #[test]
    fn test_top_level_statement_order_is_preserved() {
        let (program, _) = parse_src("let a = 1; let b = 2; tick();").unwrap();
        assert_eq!(program.body.len(), 3);
        assert!(matches!(program.body[0], Stmt::VarDecl(_)));
        assert!(matches!(program.body[2], Stmt::Expr(_)));
    }
}
