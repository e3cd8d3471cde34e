//! Error types for the Rotor front end.

use thiserror::Error;

use crate::parser::scanner::Span;

/// All errors that can be produced by the Rotor front end.
///
/// Lexing and parsing fail fast: the first malformed construct aborts the
/// whole operation and surfaces here with the file, line, and column of the
/// offending span. There is no partial-result recovery.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RotorError {
    /// A malformed literal, an unterminated quoted string, or (under
    /// [`InvalidCharPolicy::Fatal`][crate::parser::scanner::InvalidCharPolicy])
    /// an unrecognized character.
    #[error("{span}: SyntaxError: {message}")]
    LexicalError {
        /// Human-readable description of the malformed input.
        message: String,
        /// Location of the offending characters.
        span: Span,
    },

    /// The parser required a specific token kind and found another.
    #[error("{span}: SyntaxError: unexpected token {found} (expected {expected})")]
    UnexpectedToken {
        /// Description of what the grammar required here.
        expected: String,
        /// Rendering of the token actually found.
        found: String,
        /// Location of the offending token.
        span: Span,
    },

    /// The parser ran past the end of the token stream while expecting more
    /// input.
    #[error("{span}: SyntaxError: unexpected end of input")]
    UnexpectedEndOfInput {
        /// Location of the end of input.
        span: Span,
    },

    /// Internal contract violation: a token's payload was requested as a type
    /// the token does not carry. A correct lexer/parser pairing never
    /// produces this.
    #[error("internal error: token payload mismatch (expected {expected}, found {found})")]
    PayloadMismatch {
        /// The payload variant the caller asked for.
        expected: &'static str,
        /// The payload variant actually present.
        found: &'static str,
    },

    /// Name resolution failed at every level of the scope chain.
    #[error("ReferenceError: {name} is not defined")]
    UnboundIdentifier {
        /// The unresolved identifier.
        name: String,
    },

    /// A runtime value was unwrapped as a type it does not hold.
    #[error("TypeError: {0}")]
    TypeError(String),

    /// An internal front-end defect (including the placeholder evaluator
    /// bodies) that should not occur in normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenient `Result` alias for fallible front-end operations.
pub type RotorResult<T> = Result<T, RotorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::scanner::{Position, Span};
    use std::rc::Rc;

    fn span() -> Span {
        let file: Rc<str> = Rc::from("test.js");
        Span {
            file,
            start: Position {
                line: 3,
                column: 7,
                offset: 41,
            },
            end: Position {
                line: 3,
                column: 9,
                offset: 43,
            },
        }
    }

    #[test]
    fn test_lexical_error_display_includes_location() {
        let err = RotorError::LexicalError {
            message: "unterminated string literal".into(),
            span: span(),
        };
        let msg = err.to_string();
        assert!(msg.contains("test.js:3:7"));
        assert!(msg.contains("unterminated string literal"));
    }

    #[test]
    fn test_unexpected_token_display() {
        let err = RotorError::UnexpectedToken {
            expected: "Identifier".into(),
            found: "=".into(),
            span: span(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unexpected token ="));
        assert!(msg.contains("expected Identifier"));
    }

    #[test]
    fn test_unbound_identifier_uses_reference_error_wording() {
        let err = RotorError::UnboundIdentifier { name: "foo".into() };
        assert_eq!(err.to_string(), "ReferenceError: foo is not defined");
    }
}
