//! Abstract Syntax Tree node definitions for the Rotor JavaScript subset.
//!
//! The taxonomy is a closed pair of enums — [`Expr`] and [`Stmt`] — so the
//! "every node is a statement or an expression" invariant is compiler-checked
//! and dispatch is exhaustive pattern matching rather than virtual calls.
//!
//! Every node carries a [`SourceLocation`] copied from its defining tokens.
//! Nodes own their children exclusively: the AST is a tree, never a graph.
//!
//! Each node renders itself through [`std::fmt::Display`] as a deterministic
//! single-line description of its subtree, used for tracing and golden-output
//! tests. Expressions additionally expose [`Expr::evaluate`] and statements
//! [`Stmt::execute`] — the contract surface for the evaluator collaborator.
//! Only [`Literal`] and [`Ident`] have working bodies here; everything else
//! is supplied by the evaluator.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{RotorError, RotorResult};
use crate::parser::scanner::Span;
use crate::runtime::scope::ScopeHandle;
use crate::runtime::value::JsValue;

// ─────────────────────────────────────────────────────────────────────────────
// Source location
// ─────────────────────────────────────────────────────────────────────────────

/// Source location attached to every AST node.
pub type SourceLocation = Span;

// ─────────────────────────────────────────────────────────────────────────────
// Program
// ─────────────────────────────────────────────────────────────────────────────

/// The root node of a parsed source file: an ordered sequence of top-level
/// statements. Insertion order is execution order.
#[derive(Debug, Clone)]
pub struct Program {
    /// Source location of the entire program.
    pub loc: SourceLocation,
    /// Top-level statements.
    pub body: Vec<Stmt>,
}

impl Program {
    /// Append a top-level statement. Only called during construction; the
    /// tree is never mutated once parsing completes.
    pub fn add_statement(&mut self, statement: Stmt) {
        self.body.push(statement);
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program [")?;
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{stmt}")?;
        }
        write!(f, "]")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Common helpers
// ─────────────────────────────────────────────────────────────────────────────

/// A named, type-less formal parameter. No default values, no patterns.
#[derive(Debug, Clone)]
pub struct Param {
    /// Source location.
    pub loc: SourceLocation,
    /// The parameter name.
    pub name: String,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Formal parameter list. Inline storage for the common small case.
pub type ParamList = SmallVec<[Param; 4]>;

/// Call argument list. Inline storage for the common small case.
pub type ArgList = SmallVec<[Expr; 4]>;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `!`
    Not,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `===`
    EqualEqualEqual,
    /// `!=`
    NotEqual,
    /// `!==`
    NotEqualEqual,
}

impl Op {
    /// Stable name used in AST renderings.
    pub fn name(self) -> &'static str {
        match self {
            Op::Plus => "Plus",
            Op::Minus => "Minus",
            Op::Mult => "Mult",
            Op::Div => "Div",
            Op::Mod => "Mod",
            Op::And => "And",
            Op::Or => "Or",
            Op::Xor => "Xor",
            Op::Not => "Not",
            Op::Less => "Less",
            Op::Greater => "Greater",
            Op::LessEqual => "LessEqual",
            Op::GreaterEqual => "GreaterEqual",
            Op::EqualEqual => "EqualEqual",
            Op::EqualEqualEqual => "EqualEqualEqual",
            Op::NotEqual => "NotEqual",
            Op::NotEqualEqual => "NotEqualEqual",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Expressions
// ─────────────────────────────────────────────────────────────────────────────

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A literal wrapping an immutable runtime-value snapshot.
    Literal(Literal),
    /// An identifier reference, resolved through the scope chain.
    Ident(Ident),
    /// A binary expression `left op right`.
    Binary(Box<BinaryExpr>),
    /// A function call `callee(args…)`.
    Call(Box<CallExpr>),
    /// A variable assignment `name = value`.
    Assign(Box<AssignExpr>),
}

impl Expr {
    /// Returns the source location of this expression.
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Expr::Literal(e) => &e.loc,
            Expr::Ident(e) => &e.loc,
            Expr::Binary(e) => &e.loc,
            Expr::Call(e) => &e.loc,
            Expr::Assign(e) => &e.loc,
        }
    }

    /// Evaluate this expression in `scope`, producing a [`JsValue`].
    ///
    /// This is the evaluator-collaborator contract: the front end only
    /// implements the leaves that need no semantics of their own. A literal
    /// yields its value snapshot; an identifier resolves through the scope
    /// chain (failing with [`RotorError::UnboundIdentifier`]). Every other
    /// variant is supplied by the external evaluator.
    pub fn evaluate(&self, scope: &ScopeHandle) -> RotorResult<JsValue> {
        match self {
            Expr::Literal(lit) => Ok(lit.value.clone()),
            Expr::Ident(ident) => scope.borrow().lookup(&ident.name),
            Expr::Binary(_) => Err(RotorError::Internal(
                "evaluation of binary expressions is not implemented".into(),
            )),
            Expr::Call(_) => Err(RotorError::Internal(
                "evaluation of function calls is not implemented".into(),
            )),
            Expr::Assign(_) => Err(RotorError::Internal(
                "evaluation of assignments is not implemented".into(),
            )),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(e) => write!(f, "{e}"),
            Expr::Ident(e) => write!(f, "{e}"),
            Expr::Binary(e) => write!(f, "{e}"),
            Expr::Call(e) => write!(f, "{e}"),
            Expr::Assign(e) => write!(f, "{e}"),
        }
    }
}

/// A literal expression wrapping a runtime value.
///
/// The AST exclusively owns the value snapshot; there is no back-reference
/// from the value to its originating node.
#[derive(Debug, Clone)]
pub struct Literal {
    /// Source location.
    pub loc: SourceLocation,
    /// The wrapped value.
    pub value: JsValue,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal [{}]", self.value)
    }
}

/// An identifier used in expression position.
#[derive(Debug, Clone)]
pub struct Ident {
    /// Source location.
    pub loc: SourceLocation,
    /// The identifier text.
    pub name: String,
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier [{}]", self.name)
    }
}

/// `left op right`.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Left operand.
    pub left: Expr,
    /// Right operand.
    pub right: Expr,
    /// The operator.
    pub op: Op,
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryExpression [{} {} {}]",
            self.left, self.op, self.right
        )
    }
}

/// `callee(args…)`. The callee is a bare name; computed callees are not in
/// the grammar.
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Name of the called function.
    pub callee: String,
    /// Arguments in call order.
    pub args: ArgList,
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionCall [name={}, args=(", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")]")
    }
}

/// `name = value`.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The assignment target name.
    pub name: String,
    /// The assigned value.
    pub value: Expr,
}

impl fmt::Display for AssignExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableAssignment [{}={}]", self.name, self.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statements
// ─────────────────────────────────────────────────────────────────────────────

/// A statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `{ … }` block.
    Block(BlockStmt),
    /// `var` / `let` / `const` declaration.
    VarDecl(VarDecl),
    /// `function` declaration.
    FnDecl(Box<FnDecl>),
    /// `if (test) { body }` — no `else` clause in this grammar.
    If(IfStmt),
    /// `while (test) { body }`.
    While(WhileStmt),
    /// `for (test) { body }` — single-expression header, not the classic
    /// three-clause form.
    For(ForStmt),
    /// Bare `return` — no operand in this grammar.
    Return(ReturnStmt),
    /// `break`.
    Break(BreakStmt),
    /// `continue`.
    Continue(ContinueStmt),
    /// Expression statement `expr ;`.
    Expr(ExprStmt),
}

impl Stmt {
    /// Returns the source location of this statement.
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Stmt::Block(s) => &s.loc,
            Stmt::VarDecl(s) => &s.loc,
            Stmt::FnDecl(s) => &s.loc,
            Stmt::If(s) => &s.loc,
            Stmt::While(s) => &s.loc,
            Stmt::For(s) => &s.loc,
            Stmt::Return(s) => &s.loc,
            Stmt::Break(s) => &s.loc,
            Stmt::Continue(s) => &s.loc,
            Stmt::Expr(s) => &s.loc,
        }
    }

    /// Execute this statement in `scope`.
    ///
    /// Contract surface only: the bodies belong to the evaluator
    /// collaborator, so every variant currently fails with
    /// [`RotorError::Internal`].
    pub fn execute(&self, _scope: &ScopeHandle) -> RotorResult<()> {
        let what = match self {
            Stmt::Block(_) => "block statements",
            Stmt::VarDecl(_) => "variable declarations",
            Stmt::FnDecl(_) => "function declarations",
            Stmt::If(_) => "if statements",
            Stmt::While(_) => "while statements",
            Stmt::For(_) => "for statements",
            Stmt::Return(_) => "return statements",
            Stmt::Break(_) => "break statements",
            Stmt::Continue(_) => "continue statements",
            Stmt::Expr(_) => "expression statements",
        };
        Err(RotorError::Internal(format!(
            "execution of {what} is not implemented"
        )))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Block(s) => write!(f, "{s}"),
            Stmt::VarDecl(s) => write!(f, "{s}"),
            Stmt::FnDecl(s) => write!(f, "{s}"),
            Stmt::If(s) => write!(f, "{s}"),
            Stmt::While(s) => write!(f, "{s}"),
            Stmt::For(s) => write!(f, "{s}"),
            Stmt::Return(s) => write!(f, "{s}"),
            Stmt::Break(s) => write!(f, "{s}"),
            Stmt::Continue(s) => write!(f, "{s}"),
            Stmt::Expr(s) => write!(f, "{s}"),
        }
    }
}

/// `{ statements }`. Insertion order is execution order.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Statements in the block.
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    /// Append a statement. Only called during construction.
    pub fn add_statement(&mut self, statement: Stmt) {
        self.body.push(statement);
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockStatement [")?;
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{stmt}")?;
        }
        write!(f, "]")
    }
}

/// `var` / `let` / `const` declaration with an optional initializer.
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// The declared name.
    pub name: String,
    /// Initializer expression, if present.
    pub init: Option<Expr>,
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.init {
            Some(init) => write!(f, "VariableDeclaration [name={}, init={init}]", self.name),
            None => write!(f, "VariableDeclaration [name={}]", self.name),
        }
    }
}

/// `function name(params) { body }`.
#[derive(Debug, Clone)]
pub struct FnDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// The function name.
    pub name: String,
    /// Formal parameters in declaration order.
    pub params: ParamList,
    /// The function body.
    pub body: BlockStmt,
}

impl fmt::Display for FnDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionDeclaration [name={}, params=(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, "), body={}]", self.body)
    }
}

/// `if (test) { body }`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Condition expression.
    pub test: Expr,
    /// Taken branch.
    pub body: BlockStmt,
}

impl fmt::Display for IfStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IfStatement [condition={}, body={}]", self.test, self.body)
    }
}

/// `while (test) { body }`.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop condition.
    pub test: Expr,
    /// Loop body.
    pub body: BlockStmt,
}

impl fmt::Display for WhileStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WhileStatement [condition={}, body={}]",
            self.test, self.body
        )
    }
}

/// `for (test) { body }`. The header is a single expression slot.
#[derive(Debug, Clone)]
pub struct ForStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop condition.
    pub test: Expr,
    /// Loop body.
    pub body: BlockStmt,
}

impl fmt::Display for ForStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForStatement [condition={}, body={}]",
            self.test, self.body
        )
    }
}

/// Bare `return`.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// Source location.
    pub loc: SourceLocation,
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReturnStatement")
    }
}

/// `break`.
#[derive(Debug, Clone)]
pub struct BreakStmt {
    /// Source location.
    pub loc: SourceLocation,
}

impl fmt::Display for BreakStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BreakStatement")
    }
}

/// `continue`.
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    /// Source location.
    pub loc: SourceLocation,
}

impl fmt::Display for ContinueStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContinueStatement")
    }
}

/// Expression statement `expr ;`.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The expression.
    pub expr: Expr,
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpressionStatement [{}]", self.expr)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
