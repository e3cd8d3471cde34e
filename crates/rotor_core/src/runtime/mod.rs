//! Runtime contract surface for the evaluator collaborator.
//!
//! - [`value`] — [`value::JsValue`], the tagged-union runtime datum that
//!   [`Literal`][crate::parser::ast::Literal] nodes wrap.
//! - [`scope`] — lexical environments with parent-chain name resolution;
//!   [`crate::parser::Parser::parse`] hands back a fresh global
//!   [`scope::ScopeHandle`] alongside the AST.
//!
//! The front end defines these types and their resolution/unwrap behavior;
//! arithmetic, coercion, and tree-walking execution belong to the evaluator.

/// Lexical environments with parent-chain name resolution.
pub mod scope;
/// Runtime value representation.
pub mod value;
