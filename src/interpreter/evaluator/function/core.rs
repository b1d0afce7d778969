use std::fmt;

use crate::{
    ast::{Expr, Name},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, special_form},
            scope::ScopeId,
        },
        value::core::Value,
    },
};

/// Handler of a plain builtin function.
///
/// A builtin receives the context, the evaluated arguments and the line
/// number of the call.
pub type NativeFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;
/// Handler of a one-block special form: context, head, block, caller scope.
pub type OneBlockFn = fn(&mut Context, &Expr, &Expr, ScopeId) -> EvalResult<()>;
/// Handler of a two-block special form: context, head, both blocks, caller
/// scope.
pub type TwoBlockFn = fn(&mut Context, &Expr, &Expr, &Expr, ScopeId) -> EvalResult<()>;

/// Table entry for a plain builtin function.
pub struct FunctionDef {
    /// Name the function is bound to in the root scope.
    pub name:  &'static str,
    /// Exact number of arguments.
    pub arity: usize,
    /// The implementation.
    pub func:  NativeFn,
}

/// Table entry for a one-block special form.
pub struct OneBlockDef {
    /// Name the form is bound to in the root scope.
    pub name: &'static str,
    /// The implementation.
    pub func: OneBlockFn,
}

/// Table entry for a two-block special form, bound under the compound name
/// `(first, second)`.
pub struct TwoBlockDef {
    /// Identifier before the first block.
    pub first:  &'static str,
    /// Identifier before the second block.
    pub second: &'static str,
    /// The implementation.
    pub func:   TwoBlockFn,
}

/// A callable value: a plain builtin function or a special form.
///
/// All three kinds share this one type so that they can live side by side in
/// the root scope. Calling a special form with arguments, or giving a plain
/// function blocks, is a runtime error.
#[derive(Clone, Copy)]
pub enum Builtin {
    /// A plain function such as `print`.
    Function(&'static FunctionDef),
    /// A special form taking one block, such as `while`.
    OneBlock(&'static OneBlockDef),
    /// A special form taking two blocks, such as `if/else`.
    TwoBlock(&'static TwoBlockDef),
}

/// Defines the builtins by generating one static table per kind.
///
/// Each function entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// Special form entries provide their name (a pair of names for two-block
/// forms) and their implementation.
macro_rules! builtins {
    (
        functions {
            $(
                $name:literal => {
                    arity: $arity:expr,
                    func: $func:expr $(,)?
                }
            ),* $(,)?
        }
        one_block {
            $( $form:literal => $form_func:expr ),* $(,)?
        }
        two_block {
            $( ($first:literal, $second:literal) => $pair_func:expr ),* $(,)?
        }
    ) => {
        static FUNCTIONS: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        static ONE_BLOCK_FORMS: &[OneBlockDef] = &[
            $(
                OneBlockDef { name: $form, func: $form_func },
            )*
        ];
        static TWO_BLOCK_FORMS: &[TwoBlockDef] = &[
            $(
                TwoBlockDef { first: $first, second: $second, func: $pair_func },
            )*
        ];
    };
}

builtins! {
    functions {
        "print" => { arity: 1, func: builtin::print },
        "add"   => { arity: 2, func: builtin::add },
    }
    one_block {
        "while" => special_form::while_loop,
        "if"    => special_form::if_then,
    }
    two_block {
        ("if", "else") => special_form::if_else,
    }
}

/// Every builtin, in the order they are installed into a root scope.
pub fn builtins() -> impl Iterator<Item = Builtin> {
    FUNCTIONS.iter()
             .map(Builtin::Function)
             .chain(ONE_BLOCK_FORMS.iter().map(Builtin::OneBlock))
             .chain(TWO_BLOCK_FORMS.iter().map(Builtin::TwoBlock))
}

impl Builtin {
    /// The name this builtin is bound to in the root scope.
    ///
    /// # Example
    /// ```
    /// use sprig::{ast::Name, interpreter::evaluator::function::core::builtins};
    ///
    /// let keys = builtins().map(|b| b.key()).collect::<Vec<_>>();
    ///
    /// assert!(keys.contains(&Name::simple("while")));
    /// assert!(keys.contains(&Name::compound("if", "else")));
    /// ```
    #[must_use]
    pub fn key(&self) -> Name {
        match self {
            Self::Function(def) => Name::simple(def.name),
            Self::OneBlock(def) => Name::simple(def.name),
            Self::TwoBlock(def) => Name::compound(def.first, def.second),
        }
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => std::ptr::eq(*a, *b),
            (Self::OneBlock(a), Self::OneBlock(b)) => std::ptr::eq(*a, *b),
            (Self::TwoBlock(a), Self::TwoBlock(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.key())
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The callee is looked up first and must be a plain builtin function.
    /// The arguments are then evaluated left to right, their count is checked
    /// against the function's arity, and the function is invoked.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `scope`: Frame the callee and the arguments are evaluated in.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or the call fails.
    pub(crate) fn eval_call(&mut self,
                            name: &Name,
                            arguments: &[Expr],
                            line: usize,
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let Value::Callable(Builtin::Function(def)) = self.eval_variable(name, line, scope)? else {
            return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                   line });
        };

        let args = arguments.iter()
                            .map(|argument| self.eval(argument, scope))
                            .collect::<EvalResult<Vec<_>>>()?;

        if args.len() != def.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.arity,
                                                             found: args.len(),
                                                             line });
        }
        (def.func)(self, &args, line)
    }

    /// Evaluates a one-block form such as `while (c) { ... }`.
    ///
    /// The name must be bound to a one-block special form, which receives the
    /// head and the block unevaluated.
    pub(crate) fn eval_one_block_form(&mut self,
                                      name: &Name,
                                      head: &Expr,
                                      body: &Expr,
                                      line: usize,
                                      scope: ScopeId)
                                      -> EvalResult<()> {
        let Value::Callable(Builtin::OneBlock(def)) = self.eval_variable(name, line, scope)? else {
            return Err(RuntimeError::NotASpecialForm { name: name.to_string(),
                                                       blocks: 1,
                                                       line });
        };
        (def.func)(self, head, body, scope)
    }

    /// Evaluates a two-block form such as `if (c) { ... } else { ... }`.
    ///
    /// The compound name must be bound to a two-block special form, which
    /// receives the head and both blocks unevaluated.
    pub(crate) fn eval_two_block_form(&mut self,
                                      name: &Name,
                                      head: &Expr,
                                      first: &Expr,
                                      second: &Expr,
                                      line: usize,
                                      scope: ScopeId)
                                      -> EvalResult<()> {
        let Value::Callable(Builtin::TwoBlock(def)) = self.eval_variable(name, line, scope)? else {
            return Err(RuntimeError::NotASpecialForm { name: name.to_string(),
                                                       blocks: 2,
                                                       line });
        };
        (def.func)(self, head, first, second, scope)
    }
}
