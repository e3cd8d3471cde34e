//! Runtime value representation.
//!
//! [`JsValue`] is the tagged union the evaluator computes with and the type
//! that [`Literal`][crate::parser::ast::Literal] nodes snapshot. The front
//! end defines the shape, the guarded unwrap accessors, and the JS-console
//! rendering; arithmetic and coercion semantics live in the evaluator.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{RotorError, RotorResult};

// ─────────────────────────────────────────────────────────────────────────────
// JsFunction
// ─────────────────────────────────────────────────────────────────────────────

/// A callable runtime function value.
///
/// Wraps a reference-counted closure so values stay cheap to clone. Equality
/// is identity: two function values compare equal only when they share the
/// same underlying closure.
#[derive(Clone)]
pub struct JsFunction(Rc<dyn Fn(&[JsValue]) -> RotorResult<JsValue>>);

impl JsFunction {
    /// Wrap a native closure as a function value.
    pub fn new(f: impl Fn(&[JsValue]) -> RotorResult<JsValue> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the function with `args`.
    pub fn call(&self, args: &[JsValue]) -> RotorResult<JsValue> {
        (self.0)(args)
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsFunction")
    }
}

impl PartialEq for JsFunction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JsValue
// ─────────────────────────────────────────────────────────────────────────────

/// Any runtime value of the Rotor JavaScript subset.
///
/// The special numeric values `NaN`, `Infinity`, and `-Infinity` are
/// first-class variants, matching the surface language where they are
/// distinct global names rather than number syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// A double-precision number.
    Number(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A string value.
    String(String),
    /// An ordered array of values.
    Array(Vec<JsValue>),
    /// A string-keyed object.
    Object(HashMap<String, JsValue>),
    /// A callable function.
    Function(JsFunction),
    /// `undefined`.
    Undefined,
    /// `null`.
    Null,
    /// `NaN`.
    NaN,
    /// `Infinity`.
    Infinity,
    /// `-Infinity`.
    NegInfinity,
}

impl JsValue {
    /// Short name of the variant, used in `TypeError` messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsValue::Number(_) => "number",
            JsValue::Boolean(_) => "boolean",
            JsValue::String(_) => "string",
            JsValue::Array(_) => "array",
            JsValue::Object(_) => "object",
            JsValue::Function(_) => "function",
            JsValue::Undefined => "undefined",
            JsValue::Null => "null",
            JsValue::NaN => "NaN",
            JsValue::Infinity => "Infinity",
            JsValue::NegInfinity => "-Infinity",
        }
    }

    fn unwrap_error(&self, wanted: &str) -> RotorError {
        RotorError::TypeError(format!("expected a {wanted}, found {}", self.type_name()))
    }

    /// The numeric content. The special numeric variants map onto the
    /// corresponding `f64` values; everything else is a `TypeError`.
    pub fn as_number(&self) -> RotorResult<f64> {
        match self {
            JsValue::Number(n) => Ok(*n),
            JsValue::NaN => Ok(f64::NAN),
            JsValue::Infinity => Ok(f64::INFINITY),
            JsValue::NegInfinity => Ok(f64::NEG_INFINITY),
            other => Err(other.unwrap_error("number")),
        }
    }

    /// The boolean content, or a `TypeError`.
    pub fn as_boolean(&self) -> RotorResult<bool> {
        match self {
            JsValue::Boolean(b) => Ok(*b),
            other => Err(other.unwrap_error("boolean")),
        }
    }

    /// The string content, or a `TypeError`.
    pub fn as_str(&self) -> RotorResult<&str> {
        match self {
            JsValue::String(s) => Ok(s),
            other => Err(other.unwrap_error("string")),
        }
    }

    /// The array content, or a `TypeError`.
    pub fn as_array(&self) -> RotorResult<&[JsValue]> {
        match self {
            JsValue::Array(items) => Ok(items),
            other => Err(other.unwrap_error("array")),
        }
    }

    /// The object content, or a `TypeError`.
    pub fn as_object(&self) -> RotorResult<&HashMap<String, JsValue>> {
        match self {
            JsValue::Object(props) => Ok(props),
            other => Err(other.unwrap_error("object")),
        }
    }

    /// The function content, or a `TypeError`.
    pub fn as_function(&self) -> RotorResult<&JsFunction> {
        match self {
            JsValue::Function(f) => Ok(f),
            other => Err(other.unwrap_error("function")),
        }
    }

    /// Returns `true` for `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Null | JsValue::Undefined)
    }
}

/// JS-console style number rendering: integral values print without a
/// decimal point.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Number(n) => f.write_str(&format_number(*n)),
            JsValue::Boolean(b) => write!(f, "{b}"),
            JsValue::String(s) => f.write_str(s),
            JsValue::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            JsValue::Object(_) => f.write_str("[object Object]"),
            JsValue::Function(_) => f.write_str("function"),
            JsValue::Undefined => f.write_str("undefined"),
            JsValue::Null => f.write_str("null"),
            JsValue::NaN => f.write_str("NaN"),
            JsValue::Infinity => f.write_str("Infinity"),
            JsValue::NegInfinity => f.write_str("-Infinity"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Guarded accessors ───────────────────────────────────────────────────

    #[test]
    fn test_as_number_accepts_special_numerics() {
        assert_eq!(JsValue::Number(2.5).as_number().unwrap(), 2.5);
        assert!(JsValue::NaN.as_number().unwrap().is_nan());
        assert_eq!(JsValue::Infinity.as_number().unwrap(), f64::INFINITY);
        assert_eq!(
            JsValue::NegInfinity.as_number().unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_wrong_unwrap_is_a_type_error() {
        let err = JsValue::String("hi".into()).as_number().unwrap_err();
        assert!(matches!(err, RotorError::TypeError(_)));
        assert!(err.to_string().contains("expected a number, found string"));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(JsValue::String("abc".into()).as_str().unwrap(), "abc");
        assert!(JsValue::Null.as_str().is_err());
    }

    // ── Function values ─────────────────────────────────────────────────────

    #[test]
    fn test_function_call() {
        let double = JsValue::Function(JsFunction::new(|args| {
            let n = args[0].as_number()?;
            Ok(JsValue::Number(n * 2.0))
        }));
        let result = double
            .as_function()
            .unwrap()
            .call(&[JsValue::Number(21.0)])
            .unwrap();
        assert_eq!(result, JsValue::Number(42.0));
    }

    #[test]
    fn test_function_equality_is_identity() {
        let f = JsFunction::new(|_| Ok(JsValue::Undefined));
        let g = JsFunction::new(|_| Ok(JsValue::Undefined));
        assert_eq!(f.clone(), f);
        assert_ne!(f, g);
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    #[test]
    fn test_display_numbers() {
        assert_eq!(JsValue::Number(1.0).to_string(), "1");
        assert_eq!(JsValue::Number(3.14).to_string(), "3.14");
        assert_eq!(JsValue::Number(-2.0).to_string(), "-2");
    }

    #[test]
    fn test_display_special_values() {
        assert_eq!(JsValue::Undefined.to_string(), "undefined");
        assert_eq!(JsValue::Null.to_string(), "null");
        assert_eq!(JsValue::NaN.to_string(), "NaN");
        assert_eq!(JsValue::Infinity.to_string(), "Infinity");
        assert_eq!(JsValue::NegInfinity.to_string(), "-Infinity");
    }

    #[test]
    fn test_display_array_joins_with_commas() {
        let arr = JsValue::Array(vec![
            JsValue::Number(1.0),
            JsValue::Number(2.0),
            JsValue::String("x".into()),
        ]);
        assert_eq!(arr.to_string(), "1,2,x");
    }

    #[test]
    fn test_display_object() {
        assert_eq!(
            JsValue::Object(HashMap::new()).to_string(),
            "[object Object]"
        );
    }
}
