use crate::{
    ast::{Expr, Name, WriteTarget},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::ScopeId,
            utils::first_index,
        },
        value::core::Value,
    },
    util::num::resolve_index,
};

/// The resolved left-hand side of an assignment.
///
/// A setter is built before the right-hand side is evaluated and consumed
/// once the value is known.
#[derive(Debug)]
pub enum Setter<'e> {
    /// Writes a whole binding.
    Binding {
        /// Frame that receives the write: the nearest frame already binding
        /// the name, or the current frame if there is none.
        owner: ScopeId,
        /// The name being bound.
        name:  Name,
    },
    /// Replaces one element of a list in place.
    Element {
        /// Name of the list variable.
        name:  Name,
        /// The index bracket, evaluated after the right-hand side.
        index: &'e Expr,
        /// Scope the list and the index are read from.
        scope: ScopeId,
        /// Line number for error reporting.
        line:  usize,
    },
}

impl<'e> Setter<'e> {
    /// Resolves `target` against `scope`.
    #[must_use]
    pub fn resolve(context: &Context, target: &'e WriteTarget, scope: ScopeId) -> Self {
        match target {
            WriteTarget::Variable { name, .. } => {
                let name = Name::simple(name);
                let owner = context.scopes()
                                   .resolve_owner(scope, &name)
                                   .unwrap_or(scope);
                Self::Binding { owner, name }
            },
            WriteTarget::Element { name, index, line } => Self::Element { name: Name::simple(name),
                                                                          index,
                                                                          scope,
                                                                          line: *line },
        }
    }

    /// Stores `value` through this setter.
    ///
    /// # Returns
    /// The stored value.
    ///
    /// # Errors
    /// For element writes:
    /// - `UnknownVariable` or `ExpectedList` if the name does not hold a list.
    /// - `MissingIndex` or `ExpectedInteger` for a bad index bracket.
    /// - `IndexOutOfBounds` if the index falls outside the list.
    pub fn assign(self, context: &mut Context, value: Value) -> EvalResult<Value> {
        match self {
            Self::Binding { owner, name } => {
                context.scopes_mut().define(owner, name, value.clone());
            },
            Self::Element { name,
                            index,
                            scope,
                            line, } => {
                let list = context.eval_variable(&name, line, scope)?.as_list(line)?;
                let bracket = context.eval(index, scope)?;
                let index = first_index(&bracket, line)?;

                let mut items = list.borrow_mut();
                let position = resolve_index(index, items.len(), line)?;
                items[position] = value.clone();
            },
        }
        Ok(value)
    }
}

impl Context {
    /// Evaluates an assignment.
    ///
    /// The target is resolved first, then the right-hand side is evaluated,
    /// then the write is applied.
    ///
    /// # Returns
    /// The assigned value.
    pub(crate) fn eval_assign(&mut self,
                              target: &WriteTarget,
                              value: &Expr,
                              scope: ScopeId)
                              -> EvalResult<Value> {
        let setter = Setter::resolve(self, target, scope);
        let value = self.eval(value, scope)?;
        setter.assign(self, value)
    }
}
