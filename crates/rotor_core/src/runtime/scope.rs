//! Lexical environments (scopes) with parent-chain name resolution.
//!
//! [`crate::parser::Parser::parse`] returns a freshly created, empty global
//! [`ScopeHandle`] alongside the [`Program`][crate::parser::ast::Program].
//! The evaluator creates child scopes for function bodies and blocks;
//! resolution walks the parent chain and fails with
//! [`RotorError::UnboundIdentifier`] when a name is absent at every level.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{RotorError, RotorResult};
use crate::runtime::value::JsValue;

/// Shared, interiorly mutable handle to a [`Scope`].
///
/// Scopes are single-threaded (like the rest of the front end), so plain
/// reference counting is sufficient.
pub type ScopeHandle = Rc<RefCell<Scope>>;

/// One lexical environment: a name→value map plus an optional parent.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: HashMap<String, JsValue>,
    parent: Option<ScopeHandle>,
}

impl Scope {
    /// Create a fresh, empty global scope.
    pub fn new_global() -> ScopeHandle {
        Rc::new(RefCell::new(Scope::default()))
    }

    /// Create an empty scope chained to `parent`.
    pub fn new_child(parent: &ScopeHandle) -> ScopeHandle {
        Rc::new(RefCell::new(Scope {
            bindings: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Bind `name` in this scope, shadowing any binding of the same name in
    /// an ancestor. Rebinding in the same scope overwrites.
    pub fn bind(&mut self, name: &str, value: JsValue) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Resolve `name`, walking the parent chain outward.
    pub fn lookup(&self, name: &str) -> RotorResult<JsValue> {
        if let Some(value) = self.bindings.get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().lookup(name),
            None => Err(RotorError::UnboundIdentifier {
                name: name.to_string(),
            }),
        }
    }

    /// Overwrite the nearest existing binding of `name`, walking the parent
    /// chain outward. Fails with [`RotorError::UnboundIdentifier`] when no
    /// scope in the chain binds the name.
    pub fn assign(&mut self, name: &str, value: JsValue) -> RotorResult<()> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RotorError::UnboundIdentifier {
                name: name.to_string(),
            }),
        }
    }

    /// Returns `true` when this scope (ignoring ancestors) has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scope_starts_empty() {
        let scope = Scope::new_global();
        assert!(scope.borrow().is_empty());
    }

    #[test]
    fn test_bind_then_lookup() {
        let scope = Scope::new_global();
        scope.borrow_mut().bind("x", JsValue::Number(1.0));
        assert_eq!(scope.borrow().lookup("x").unwrap(), JsValue::Number(1.0));
    }

    #[test]
    fn test_lookup_walks_parent_chain() {
        let global = Scope::new_global();
        global.borrow_mut().bind("x", JsValue::Number(1.0));
        let inner = Scope::new_child(&global);
        let innermost = Scope::new_child(&inner);
        assert_eq!(
            innermost.borrow().lookup("x").unwrap(),
            JsValue::Number(1.0)
        );
    }

    #[test]
    fn test_child_binding_shadows_parent() {
        let global = Scope::new_global();
        global.borrow_mut().bind("x", JsValue::Number(1.0));
        let child = Scope::new_child(&global);
        child.borrow_mut().bind("x", JsValue::Number(2.0));
        assert_eq!(child.borrow().lookup("x").unwrap(), JsValue::Number(2.0));
        assert_eq!(global.borrow().lookup("x").unwrap(), JsValue::Number(1.0));
    }

    #[test]
    fn test_unbound_name_fails_at_every_level() {
        let global = Scope::new_global();
        let child = Scope::new_child(&global);
        let err = child.borrow().lookup("nope").unwrap_err();
        assert_eq!(
            err,
            RotorError::UnboundIdentifier {
                name: "nope".into()
            }
        );
    }

    #[test]
    fn test_assign_updates_nearest_binding() {
        let global = Scope::new_global();
        global.borrow_mut().bind("x", JsValue::Number(1.0));
        let child = Scope::new_child(&global);
        child
            .borrow_mut()
            .assign("x", JsValue::Number(5.0))
            .unwrap();
        assert_eq!(global.borrow().lookup("x").unwrap(), JsValue::Number(5.0));
    }

    #[test]
    fn test_assign_to_unbound_name_fails() {
        let scope = Scope::new_global();
        let err = scope
            .borrow_mut()
            .assign("ghost", JsValue::Null)
            .unwrap_err();
        assert!(matches!(err, RotorError::UnboundIdentifier { .. }));
    }
}
