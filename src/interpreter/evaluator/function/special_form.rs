use tracing::trace;

use crate::{
    ast::Expr,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        scope::ScopeId,
    },
};

/// `while (head) { body }`
///
/// Evaluates `head` in the caller's scope; while it is truthy, evaluates
/// `body` and tests again. The loop has no iteration bound.
pub fn while_loop(context: &mut Context,
                  head: &Expr,
                  body: &Expr,
                  scope: ScopeId)
                  -> EvalResult<()> {
    let mut iterations = 0usize;
    while context.eval(head, scope)?.is_truthy() {
        context.eval(body, scope)?;
        iterations += 1;
        trace!(iterations, line = head.line_number(), "while iteration");
    }
    Ok(())
}

/// `if (head) { body }`
///
/// Evaluates `body` only when `head` is truthy.
pub fn if_then(context: &mut Context, head: &Expr, body: &Expr, scope: ScopeId) -> EvalResult<()> {
    if context.eval(head, scope)?.is_truthy() {
        context.eval(body, scope)?;
    }
    Ok(())
}

/// `if (head) { first } else { second }`
///
/// Evaluates exactly one of the two blocks.
pub fn if_else(context: &mut Context,
               head: &Expr,
               first: &Expr,
               second: &Expr,
               scope: ScopeId)
               -> EvalResult<()> {
    let branch = if context.eval(head, scope)?.is_truthy() {
        first
    } else {
        second
    };
    context.eval(branch, scope)?;
    Ok(())
}
