use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read a name that is bound nowhere on the scope chain.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operand kinds it does not support.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called something that is not a builtin function.
    #[error("Error on line {line}: '{name}' is not callable.")]
    NotCallable {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block form named something that is not a matching special form.
    #[error("Error on line {line}: '{name}' is not a special form taking {blocks} block(s).")]
    NotASpecialForm {
        /// The name used by the block form.
        name:   String,
        /// The number of blocks the form supplied.
        blocks: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: '{name}' expects {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The arity of the function.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A list value was expected, but not found.
    #[error("Error on line {line}: Expected list, found {found}.")]
    ExpectedList {
        /// The display form of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer value was expected, but not found.
    #[error("Error on line {line}: Expected integer, found {found}.")]
    ExpectedInteger {
        /// The display form of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access a list element outside the list.
    #[error("Error on line {line}: Index {index} out of bounds for list of length {len}.")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the list.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index bracket evaluated to an empty list.
    #[error("Error on line {line}: Index brackets are empty.")]
    MissingIndex {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    #[error("Error on line {line}: Failed to write output: {details}.")]
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
