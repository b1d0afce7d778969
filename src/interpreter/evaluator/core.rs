use std::{
    collections::HashMap,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    ast::{Block, BlockId, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::core::builtins,
            scope::{ScopeArena, ScopeId},
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct owns every scope frame created while evaluating, the handle
/// of the root frame holding the builtins, and the sink `print` writes to.
///
/// ## Usage
///
/// A `Context` is created once per run. The frame of each block it enters
/// is recorded here rather than in the tree, so one parsed program can be
/// evaluated by any number of contexts.
pub struct Context {
    scopes: ScopeArena,
    root:   ScopeId,
    blocks: HashMap<BlockId, ScopeId>,
    output: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that prints to standard output.
    ///
    /// The root frame has no parent and holds the builtins `if`, `if/else`,
    /// `while`, `print` and `add`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Creates a context whose `print` writes to `output`.
    ///
    /// # Example
    /// ```
    /// use std::{cell::RefCell, io, rc::Rc};
    ///
    /// use sprig::{interpreter::evaluator::core::Context, parse};
    ///
    /// #[derive(Clone, Default)]
    /// struct Sink(Rc<RefCell<Vec<u8>>>);
    ///
    /// impl io::Write for Sink {
    ///     fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    ///         self.0.borrow_mut().extend_from_slice(buf);
    ///         Ok(buf.len())
    ///     }
    ///
    ///     fn flush(&mut self) -> io::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let sink = Sink::default();
    /// let mut context = Context::with_output(sink.clone());
    /// let program = parse(r#"print("hi")"#).unwrap();
    /// context.evaluate(&program).unwrap();
    ///
    /// assert_eq!(sink.0.borrow().as_slice(), b"\"hi\"\n");
    /// ```
    pub fn with_output(output: impl Write + 'static) -> Self {
        let mut scopes = ScopeArena::new();
        let root = scopes.allocate(None);
        for builtin in builtins() {
            scopes.define(root, builtin.key(), Value::Callable(builtin));
        }

        Self { scopes,
               root,
               blocks: HashMap::new(),
               output: Box::new(output) }
    }

    /// The root frame, where the builtins live.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        self.root
    }

    /// Read access to every frame created so far.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeArena {
        &self.scopes
    }

    pub(crate) const fn scopes_mut(&mut self) -> &mut ScopeArena {
        &mut self.scopes
    }

    /// The frame this context allocated for `block`, if it has entered it.
    #[must_use]
    pub fn block_frame(&self, block: &Block) -> Option<ScopeId> {
        self.blocks.get(&block.id()).copied()
    }

    /// The frame of `block`, allocating it under `parent` on first entry.
    pub(crate) fn block_frame_or_init(&mut self, block: &Block, parent: ScopeId) -> ScopeId {
        *self.blocks
             .entry(block.id())
             .or_insert_with(|| self.scopes.allocate(Some(parent)))
    }

    /// Evaluates `expr` against the root scope.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse,
    /// };
    ///
    /// let mut context = Context::new();
    /// let program = parse("{ x = 4; x * 2; }").unwrap();
    ///
    /// assert_eq!(context.evaluate(&program).unwrap(), Value::Integer(8));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        let result = self.eval(expr, self.root);
        debug!(frames = self.scopes.len(), ok = result.is_ok(), "evaluated program");
        result
    }

    /// Evaluates an expression in the given scope and returns the resulting
    /// value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Operands of unary and binary
    /// operators are all evaluated, left to right, before the operator is
    /// applied, so `and` and `or` never short-circuit.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: Frame that names are read from and written to.
    ///
    /// # Returns
    /// The value of the expression. Constructs without a meaningful result,
    /// such as the block forms, yield `Value::Unit`.
    pub fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line, scope),
            Expr::Assign { target, value, .. } => self.eval_assign(target, value, scope),
            Expr::List { elements, .. } => self.eval_list(elements, scope),
            Expr::Block(block) => self.eval_block(block, scope),
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line, scope),
            Expr::OneBlockForm { name,
                                 head,
                                 body,
                                 line, } => {
                self.eval_one_block_form(name, head, body, *line, scope)?;
                Ok(Value::Unit)
            },
            Expr::TwoBlockForm { name,
                                 head,
                                 first,
                                 second,
                                 line, } => {
                self.eval_two_block_form(name, head, first, second, *line, scope)?;
                Ok(Value::Unit)
            },
            Expr::Unary { op, operand, line } => {
                let operand = self.eval(operand, scope)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Writes the display form of `value` and a newline to the output sink.
    pub(crate) fn write_line(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                            line })
    }
}
