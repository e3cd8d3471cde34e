//! `rotor_core` — the front-end library for the Rotor JavaScript subset.
//!
//! # Crate layout
//!
//! - [`parser`] — lexer, AST, and recursive-descent parser.
//! - [`runtime`] — runtime values and lexical scopes the AST contracts with.
//! - [`error`] — the [`error::RotorError`] taxonomy and result alias.
//! - [`diagnostics`] — non-fatal diagnostic reporting via injected sinks.

/// Non-fatal diagnostic reporting via injected sinks.
pub mod diagnostics;
/// Error taxonomy and the crate-wide result alias.
pub mod error;
/// Lexer, AST, and recursive-descent parser.
pub mod parser;
/// Runtime values and lexical scopes.
pub mod runtime;
