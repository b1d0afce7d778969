use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::Builtin},
};

/// Shared, mutable storage behind a list value.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Lists are shared
/// by reference: cloning a `Value::List` aliases the same storage, so writes
/// through one name are visible through every other.
///
/// A list may contain itself. Equality and both printed forms stop at a list
/// they are already inside, so such values stay printable and comparable.
#[derive(Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A piece of text.
    Text(String),
    /// A shared, mutable list of values.
    List(ListRef),
    /// A builtin function or special form.
    Callable(Builtin),
    /// The absence of a meaningful result, produced by `print`, empty blocks
    /// and the block forms.
    Unit,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

/// Relational and logical results are the integers `0` and `1`.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<Builtin> for Value {
    fn from(b: Builtin) -> Self {
        Self::Callable(b)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Real(r) => Self::Real(*r),
            LiteralValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl Value {
    /// Tests the value for truthiness.
    ///
    /// `0`, `0.0`, empty text, the empty list and `Unit` are falsy. Everything
    /// else, callables included, is truthy.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// assert!(!Value::Unit.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.borrow().is_empty(),
            Self::Callable(_) => true,
            Self::Unit => false,
        }
    }

    /// A short name for the kind of this value, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Callable(_) => "builtin",
            Self::Unit => "none",
        }
    }

    /// Returns the integer inside the value, or an error if it is not an
    /// integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(RuntimeError::ExpectedInteger { found: other.to_string(),
                                                         line }),
        }
    }

    /// Returns the shared storage of a list value, or an error if the value
    /// is not a list.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_list(&self, line: usize) -> EvalResult<ListRef> {
        match self {
            Self::List(items) => Ok(Rc::clone(items)),
            other => Err(RuntimeError::ExpectedList { found: other.to_string(),
                                                      line }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Callable(a), Self::Callable(b)) => a == b,
            (Self::Unit, Self::Unit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Writes the display form.
    ///
    /// # Example
    /// ```
    /// use sprig::{interpreter::value::core::Value, run};
    ///
    /// assert_eq!(run("[1, 2.5, \"a\"]").unwrap().to_string(), "[1, 2.5, \"a\"]");
    /// assert_eq!(run("{ a = [1]; a[0] = a; a; }").unwrap().to_string(), "[[...]]");
    /// assert_eq!(Value::Unit.to_string(), "None");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Real(r) => write!(f, "Real({r:?})"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::List(_) => write!(f, "List({self})"),
            Self::Callable(builtin) => write!(f, "Callable({builtin:?})"),
            Self::Unit => write!(f, "Unit"),
        }
    }
}

/// Writes `value`, printing `[...]` for any list already in `open`, the
/// lists currently being written.
fn write_value(value: &Value,
               f: &mut fmt::Formatter<'_>,
               open: &mut Vec<*const RefCell<Vec<Value>>>)
               -> fmt::Result {
    match value {
        Value::Integer(n) => write!(f, "{n}"),
        Value::Real(r) => write!(f, "{r:?}"),
        Value::Text(s) => write!(f, "\"{s}\""),
        Value::List(items) => {
            let ptr = Rc::as_ptr(items);
            if open.contains(&ptr) {
                return write!(f, "[...]");
            }

            open.push(ptr);
            write!(f, "[")?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_value(item, f, open)?;
            }
            open.pop();
            write!(f, "]")
        },
        Value::Callable(builtin) => write!(f, "<builtin {}>", builtin.key()),
        Value::Unit => write!(f, "None"),
    }
}
