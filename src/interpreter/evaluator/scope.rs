use std::collections::HashMap;

use crate::{ast::Name, interpreter::value::core::Value};

/// Handle to one frame inside a [`ScopeArena`].
///
/// Handles are only meaningful for the arena that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A single level of the scope chain.
#[derive(Debug, Default)]
struct Frame {
    bindings: HashMap<Name, Value>,
    parent:   Option<ScopeId>,
}

/// Owns every scope frame created during a run.
///
/// Frames point at their parent by handle, so a chain can be walked without
/// any frame borrowing another. Frames are never freed before the arena.
///
/// # Example
/// ```
/// use sprig::{
///     ast::Name,
///     interpreter::{evaluator::scope::ScopeArena, value::core::Value},
/// };
///
/// let mut arena = ScopeArena::new();
/// let root = arena.allocate(None);
/// let inner = arena.allocate(Some(root));
///
/// arena.define(root, Name::simple("x"), Value::Integer(1));
/// arena.assign(inner, Name::simple("x"), Value::Integer(2));
///
/// assert_eq!(arena.lookup(root, &Name::simple("x")), Some(&Value::Integer(2)));
/// assert!(arena.get_local(inner, &Name::simple("x")).is_none());
/// ```
#[derive(Debug, Default)]
pub struct ScopeArena {
    frames: Vec<Frame>,
}

impl ScopeArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Adds an empty frame with the given parent and returns its handle.
    pub fn allocate(&mut self, parent: Option<ScopeId>) -> ScopeId {
        self.frames.push(Frame { bindings: HashMap::new(),
                                 parent });
        ScopeId(self.frames.len() - 1)
    }

    /// Points `scope` at a new parent frame.
    pub fn reparent(&mut self, scope: ScopeId, parent: ScopeId) {
        self.frames[scope.0].parent = Some(parent);
    }

    /// The parent of `scope`, or `None` for a root frame.
    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.frames[scope.0].parent
    }

    /// Number of frames allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Reads a name, searching `scope` first and then each ancestor.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &Name) -> Option<&Value> {
        self.chain(scope)
            .find_map(|id| self.frames[id.0].bindings.get(name))
    }

    /// Reads a name from `scope` alone, ignoring its ancestors.
    #[must_use]
    pub fn get_local(&self, scope: ScopeId, name: &Name) -> Option<&Value> {
        self.frames[scope.0].bindings.get(name)
    }

    /// Binds a name in `scope` itself, shadowing any ancestor binding.
    pub fn define(&mut self, scope: ScopeId, name: Name, value: Value) {
        self.frames[scope.0].bindings.insert(name, value);
    }

    /// Applies the write rule.
    ///
    /// The binding is overwritten in the nearest frame on the chain that
    /// already holds `name`; if none does, it is created in `scope`.
    pub fn assign(&mut self, scope: ScopeId, name: Name, value: Value) {
        let target = self.resolve_owner(scope, &name).unwrap_or(scope);
        self.define(target, name, value);
    }

    /// The nearest frame on the chain from `scope` that binds `name`.
    #[must_use]
    pub fn resolve_owner(&self, scope: ScopeId, name: &Name) -> Option<ScopeId> {
        self.chain(scope)
            .find(|id| self.frames[id.0].bindings.contains_key(name))
    }

    /// Iterates over `scope` and then each of its ancestors up to the root.
    fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |id| self.frames[id.0].parent)
    }
}
