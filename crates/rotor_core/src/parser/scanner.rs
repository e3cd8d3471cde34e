//! Lexer for the Rotor JavaScript subset.
//!
//! See [`Lexer`] for the main entry point.

use std::fmt;
use std::rc::Rc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity, StderrSink};
use crate::error::{RotorError, RotorResult};

// ─────────────────────────────────────────────────────────────────────────────
// Position / Span
// ─────────────────────────────────────────────────────────────────────────────

/// A byte offset + line/column location in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 1-based line number (incremented on every line terminator).
    pub line: u32,
    /// 1-based column number, measured in Unicode scalar values.
    pub column: u32,
    /// Byte offset from the beginning of the source string.
    pub offset: usize,
}

/// A half-open `[start, end)` source span, tagged with the file it came from.
///
/// The start position is captured at the moment scanning of a token begins;
/// it is never derived by subtracting the token length from the cursor, so
/// line/column values cannot underflow at the start of input or across a
/// line boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Name of the source file, shared by every span from one lex run.
    pub file: Rc<str>,
    /// Inclusive start of the span.
    pub start: Position,
    /// Exclusive end of the span.
    pub end: Position,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.start.line, self.start.column)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────────────

/// The syntactic category of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ── Single-character punctuators ──────────────────────────────────────
    /// `!`
    Bang,
    /// `?`
    Question,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `=`
    Equal,
    /// `|`
    Pipe,
    /// `&`
    Ampersand,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    // ── Multi-character operators ─────────────────────────────────────────
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    StarEqual,
    /// `/=`
    SlashEqual,
    /// `%=`
    PercentEqual,
    /// `&=`
    AmpersandEqual,
    /// `|=`
    PipeEqual,
    /// `^=`
    CaretEqual,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `<<`
    LessLess,
    /// `>>`
    GreaterGreater,
    /// `=>`
    Arrow,
    /// `===`
    EqualEqualEqual,
    /// `!==`
    BangEqualEqual,

    // ── Literals / identifiers ────────────────────────────────────────────
    /// String literal enclosed in `'`.
    SingleQuotedString,
    /// String literal enclosed in `"`.
    DoubleQuotedString,
    /// An identifier that is not a keyword.
    Identifier,
    /// Integer numeric literal (32-bit).
    Integer,
    /// Floating-point numeric literal (64-bit).
    Float,

    // ── Keywords ──────────────────────────────────────────────────────────
    /// `let`
    Let,
    /// `const`
    Const,
    /// `var`
    Var,
    /// `function`
    Function,
    /// `return`
    Return,
    /// `if`
    If,
    /// `for`
    For,
    /// `while`
    While,
    /// `continue`
    Continue,
    /// `break`
    Break,

    // ── Structural markers ────────────────────────────────────────────────
    /// A line terminator. Filtered before the parser sees the stream.
    Newline,
    /// A run of non-terminator whitespace. Filtered before the parser sees
    /// the stream.
    Whitespace,
    /// An unrecognized character. Filtered before the parser sees the
    /// stream; reported through the diagnostic sink.
    Invalid,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short human-readable name for error messages and token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Bang => "!",
            TokenKind::Question => "?",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Backslash => "\\",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Equal => "=",
            TokenKind::Pipe => "|",
            TokenKind::Ampersand => "&",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::EqualEqual => "==",
            TokenKind::BangEqual => "!=",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::SlashEqual => "/=",
            TokenKind::PercentEqual => "%=",
            TokenKind::AmpersandEqual => "&=",
            TokenKind::PipeEqual => "|=",
            TokenKind::CaretEqual => "^=",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LessLess => "<<",
            TokenKind::GreaterGreater => ">>",
            TokenKind::Arrow => "=>",
            TokenKind::EqualEqualEqual => "===",
            TokenKind::BangEqualEqual => "!==",
            TokenKind::SingleQuotedString => "single-quoted string",
            TokenKind::DoubleQuotedString => "double-quoted string",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Function => "function",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Invalid => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenValue
// ─────────────────────────────────────────────────────────────────────────────

/// The payload associated with a [`Token`].
///
/// Populated only for identifier and literal kinds. Accessing the wrong
/// variant through the guarded accessors on [`Token`] fails with
/// [`RotorError::PayloadMismatch`] instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// No semantic value (punctuators, keywords, structural markers).
    None,
    /// Identifier name or string-literal contents.
    Str(String),
    /// Parsed value of an [`TokenKind::Integer`] literal.
    Int(i32),
    /// Parsed value of a [`TokenKind::Float`] literal.
    Float(f64),
}

impl TokenValue {
    fn variant_name(&self) -> &'static str {
        match self {
            TokenValue::None => "none",
            TokenValue::Str(_) => "string",
            TokenValue::Int(_) => "integer",
            TokenValue::Float(_) => "float",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// A single lexical token produced by the [`Lexer`].
///
/// Tokens are immutable value objects: created once by the lexer, consumed
/// read-only by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The syntactic category.
    pub kind: TokenKind,
    /// The associated payload, if any.
    pub value: TokenValue,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// The string payload, or [`RotorError::PayloadMismatch`] when this token
    /// does not carry one.
    pub fn str_value(&self) -> RotorResult<&str> {
        match &self.value {
            TokenValue::Str(s) => Ok(s),
            other => Err(RotorError::PayloadMismatch {
                expected: "string",
                found: other.variant_name(),
            }),
        }
    }

    /// The integer payload, or [`RotorError::PayloadMismatch`].
    pub fn int_value(&self) -> RotorResult<i32> {
        match self.value {
            TokenValue::Int(n) => Ok(n),
            ref other => Err(RotorError::PayloadMismatch {
                expected: "integer",
                found: other.variant_name(),
            }),
        }
    }

    /// The float payload, or [`RotorError::PayloadMismatch`].
    pub fn float_value(&self) -> RotorResult<f64> {
        match self.value {
            TokenValue::Float(n) => Ok(n),
            ref other => Err(RotorError::PayloadMismatch {
                expected: "float",
                found: other.variant_name(),
            }),
        }
    }

    /// Short rendering used inside error messages: the payload for literal
    /// kinds, the punctuator text otherwise.
    pub fn describe(&self) -> String {
        match &self.value {
            TokenValue::None => self.kind.as_str().to_string(),
            TokenValue::Str(s) => format!("{}({s})", self.kind.as_str()),
            TokenValue::Int(n) => format!("{}({n})", self.kind.as_str()),
            TokenValue::Float(n) => format!("{}({n})", self.kind.as_str()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.describe(), self.span)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyword / operator tables
// ─────────────────────────────────────────────────────────────────────────────

/// Keywords, longest first so prefix collisions resolve to the longer word.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("function", TokenKind::Function),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("while", TokenKind::While),
    ("break", TokenKind::Break),
    ("const", TokenKind::Const),
    ("let", TokenKind::Let),
    ("var", TokenKind::Var),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
];

const THREE_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("===", TokenKind::EqualEqualEqual),
    ("!==", TokenKind::BangEqualEqual),
];

const TWO_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("==", TokenKind::EqualEqual),
    ("!=", TokenKind::BangEqual),
    ("+=", TokenKind::PlusEqual),
    ("-=", TokenKind::MinusEqual),
    ("*=", TokenKind::StarEqual),
    ("/=", TokenKind::SlashEqual),
    ("%=", TokenKind::PercentEqual),
    ("&=", TokenKind::AmpersandEqual),
    ("|=", TokenKind::PipeEqual),
    ("^=", TokenKind::CaretEqual),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("<<", TokenKind::LessLess),
    (">>", TokenKind::GreaterGreater),
    ("=>", TokenKind::Arrow),
];

const ONE_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("!", TokenKind::Bang),
    ("?", TokenKind::Question),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    ("[", TokenKind::LeftBracket),
    ("]", TokenKind::RightBracket),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("-", TokenKind::Minus),
    ("+", TokenKind::Plus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("\\", TokenKind::Backslash),
    ("%", TokenKind::Percent),
    ("^", TokenKind::Caret),
    ("=", TokenKind::Equal),
    ("|", TokenKind::Pipe),
    ("&", TokenKind::Ampersand),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
];

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

/// What the lexer does when it meets a character no rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidCharPolicy {
    /// Emit an [`TokenKind::Invalid`] token, report a warning through the
    /// diagnostic sink, and keep lexing. The token is filtered out of the
    /// stream handed to the parser.
    #[default]
    Skip,
    /// Abort lexing with [`RotorError::LexicalError`].
    Fatal,
}

/// Lexer for the Rotor JavaScript subset.
///
/// Produces a stream of [`Token`]s from a UTF-8 source string. Call
/// [`Lexer::next_token`] repeatedly for a pull interface (whitespace and
/// invalid tokens included), or [`Lexer::lex`] for the filtered sequence the
/// parser consumes, terminated by exactly one [`TokenKind::Eof`] token.
///
/// # Example
///
/// ```
/// use rotor_core::parser::scanner::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 42;", "example.js");
/// let tokens = lexer.lex().unwrap();
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    /// The complete source string, borrowed for the duration of lexing.
    source: &'src str,
    /// File name attached to every emitted span. Diagnostics only.
    file: Rc<str>,
    /// Current byte position within `source`.
    pos: usize,
    /// Current 1-based line number.
    line: u32,
    /// Current 1-based column number.
    column: u32,
    /// Recovery policy for unrecognized characters.
    policy: InvalidCharPolicy,
    /// Receiver for non-fatal diagnostics.
    sink: Box<dyn DiagnosticSink>,
    /// Whitespace and invalid tokens filtered out by [`Lexer::lex`], kept for
    /// diagnostics and testing.
    trivia: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `source`. `file_name` is used only in spans and
    /// diagnostics. Non-fatal diagnostics go to stderr; see
    /// [`Lexer::with_sink`] to capture them instead.
    pub fn new(source: &'src str, file_name: &str) -> Self {
        Self::with_sink(source, file_name, Box::new(StderrSink))
    }

    /// Create a lexer that reports non-fatal diagnostics to `sink`.
    pub fn with_sink(source: &'src str, file_name: &str, sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            source,
            file: Rc::from(file_name),
            pos: 0,
            line: 1,
            column: 1,
            policy: InvalidCharPolicy::Skip,
            sink,
            trivia: Vec::new(),
        }
    }

    /// Set the recovery policy for unrecognized characters.
    pub fn invalid_char_policy(mut self, policy: InvalidCharPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns `true` when all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whitespace and invalid tokens dropped by the last [`Lexer::lex`] run.
    pub fn trivia(&self) -> &[Token] {
        &self.trivia
    }

    // ── Low-level character helpers ─────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Advance past the current character and update line/column tracking.
    ///
    /// `\r\n` is treated as a single line terminator; the `\n` is consumed
    /// automatically so callers never see a stray `\r`.
    fn advance(&mut self) -> char {
        let ch = self.source[self.pos..]
            .chars()
            .next()
            .expect("advance called past end of input");
        self.pos += ch.len_utf8();
        match ch {
            '\r' => {
                if self.source[self.pos..].starts_with('\n') {
                    self.pos += 1;
                }
                self.line += 1;
                self.column = 1;
            }
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
            }
        }
        ch
    }

    fn current_pos(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.pos,
        }
    }

    /// Span from an explicitly recorded start position to the cursor.
    fn span_from(&self, start: Position) -> Span {
        Span {
            file: Rc::clone(&self.file),
            start,
            end: self.current_pos(),
        }
    }

    fn token(&self, kind: TokenKind, value: TokenValue, start: Position) -> Token {
        Token {
            kind,
            value,
            span: self.span_from(start),
        }
    }

    /// Report an error-severity diagnostic through the sink, then build the
    /// matching fatal error. Every fatal condition hits the sink exactly once
    /// before lexing aborts.
    fn fatal(&mut self, message: String, span: Span) -> RotorError {
        self.sink.report(Diagnostic {
            severity: Severity::Error,
            message: message.clone(),
            span: span.clone(),
        });
        RotorError::LexicalError { message, span }
    }

    // ── String literals ─────────────────────────────────────────────────────

    /// Scan a quoted string. The opening quote has already been consumed.
    /// There is no escape-sequence handling: the literal runs to the next
    /// occurrence of `quote`, across line terminators if need be.
    fn scan_string(&mut self, quote: char, start: Position) -> RotorResult<Token> {
        let body_start = self.pos;
        loop {
            match self.peek() {
                None => {
                    let span = self.span_from(start);
                    return Err(self.fatal("unterminated string literal".into(), span));
                }
                Some(c) if c == quote => {
                    let body = self.source[body_start..self.pos].to_string();
                    self.advance();
                    let kind = if quote == '\'' {
                        TokenKind::SingleQuotedString
                    } else {
                        TokenKind::DoubleQuotedString
                    };
                    return Ok(self.token(kind, TokenValue::Str(body), start));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    // ── Numeric literals ────────────────────────────────────────────────────

    /// Scan a maximal run of digits with at most one embedded `.`. A second
    /// `.` within the run is a lexical error. No hex/octal/binary/exponent
    /// notation, no numeric separators.
    fn scan_number(&mut self, start: Position) -> RotorResult<Token> {
        let mut has_seen_period = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' {
                if has_seen_period {
                    self.advance(); // include the offending dot in the span
                    let span = self.span_from(start);
                    return Err(self.fatal("number literal with two decimal points".into(), span));
                }
                has_seen_period = true;
                self.advance();
            } else {
                break;
            }
        }

        let raw = &self.source[start.offset..self.pos];
        if has_seen_period {
            match raw.parse::<f64>() {
                Ok(value) => Ok(self.token(TokenKind::Float, TokenValue::Float(value), start)),
                Err(_) => {
                    let span = self.span_from(start);
                    Err(self.fatal(format!("malformed float literal '{raw}'"), span))
                }
            }
        } else {
            match raw.parse::<i32>() {
                Ok(value) => Ok(self.token(TokenKind::Integer, TokenValue::Int(value), start)),
                Err(_) => {
                    let span = self.span_from(start);
                    Err(self.fatal(format!("integer literal '{raw}' out of range"), span))
                }
            }
        }
    }

    // ── Identifiers / keywords ──────────────────────────────────────────────

    /// Try the keyword table against the remaining input. A keyword must not
    /// be a proper prefix of a longer identifier: `functionX` is one
    /// identifier, never `function` + `X`.
    fn match_keyword(&self) -> Option<(&'static str, TokenKind)> {
        let rest = &self.source[self.pos..];
        for &(word, kind) in KEYWORDS {
            if rest.starts_with(word) {
                let boundary = rest[word.len()..].chars().next();
                if !matches!(boundary, Some(c) if c.is_alphanumeric()) {
                    return Some((word, kind));
                }
            }
        }
        None
    }

    /// Scan an identifier: an alphabetic lead character followed by a maximal
    /// alphanumeric run. The keyword table has already been exhausted, so
    /// this path only reaches true identifiers.
    fn scan_identifier(&mut self, start: Position) -> Token {
        while matches!(self.peek(), Some(c) if c.is_alphanumeric()) {
            self.advance();
        }
        let name = self.source[start.offset..self.pos].to_string();
        self.token(TokenKind::Identifier, TokenValue::Str(name), start)
    }

    // ── Main public API ─────────────────────────────────────────────────────

    /// Scan and return the next [`Token`].
    ///
    /// This is the raw pull interface: whitespace, newline, and invalid
    /// tokens are returned like any other. Returns [`TokenKind::Eof`] once
    /// the input is exhausted.
    ///
    /// Classification order per position, first match wins: whitespace,
    /// quoted strings, keywords, operators (longest first), identifiers,
    /// numbers, and finally the unrecognized-character policy.
    pub fn next_token(&mut self) -> RotorResult<Token> {
        let start = self.current_pos();

        let Some(c) = self.peek() else {
            return Ok(self.token(TokenKind::Eof, TokenValue::None, start));
        };

        // 1. Whitespace. One token per line terminator, one per maximal run
        //    of other whitespace.
        if is_line_terminator(c) {
            self.advance();
            return Ok(self.token(TokenKind::Newline, TokenValue::None, start));
        }
        if c.is_whitespace() {
            while matches!(self.peek(), Some(w) if w.is_whitespace() && !is_line_terminator(w)) {
                self.advance();
            }
            return Ok(self.token(TokenKind::Whitespace, TokenValue::None, start));
        }

        // 2. Quoted strings.
        if c == '"' || c == '\'' {
            self.advance();
            return self.scan_string(c, start);
        }

        // 3. Keywords.
        if let Some((word, kind)) = self.match_keyword() {
            for _ in 0..word.len() {
                self.advance();
            }
            return Ok(self.token(kind, TokenValue::None, start));
        }

        // 4. Operators and punctuation, longest first.
        let rest = &self.source[self.pos..];
        for table in [THREE_CHAR_OPERATORS, TWO_CHAR_OPERATORS, ONE_CHAR_OPERATORS] {
            for &(symbol, kind) in table {
                if rest.starts_with(symbol) {
                    for _ in 0..symbol.chars().count() {
                        self.advance();
                    }
                    return Ok(self.token(kind, TokenValue::None, start));
                }
            }
        }

        // 5. Identifiers.
        if c.is_alphabetic() {
            self.advance();
            return Ok(self.scan_identifier(start));
        }

        // 6. Numbers.
        if c.is_ascii_digit() {
            return self.scan_number(start);
        }

        // 7. Unrecognized character.
        self.advance();
        let span = self.span_from(start);
        match self.policy {
            InvalidCharPolicy::Fatal => {
                Err(self.fatal(format!("unrecognized character {c:?}"), span))
            }
            InvalidCharPolicy::Skip => {
                self.sink.report(Diagnostic {
                    severity: Severity::Warning,
                    message: format!("unrecognized character {c:?}"),
                    span: span.clone(),
                });
                Ok(Token {
                    kind: TokenKind::Invalid,
                    value: TokenValue::None,
                    span,
                })
            }
        }
    }

    /// Tokenize the entire source and return the sequence the parser
    /// consumes: whitespace, newline, and invalid tokens are dropped (but
    /// retained via [`Lexer::trivia`]), and the sequence is terminated by
    /// exactly one [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns the first [`RotorError::LexicalError`] encountered.
    pub fn lex(&mut self) -> RotorResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            match tok.kind {
                TokenKind::Whitespace | TokenKind::Newline | TokenKind::Invalid => {
                    self.trivia.push(tok);
                }
                TokenKind::Eof => {
                    tokens.push(tok);
                    return Ok(tokens);
                }
                _ => tokens.push(tok),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
