use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. Lists are not literals: their elements are expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A double-quoted text literal, without its quotes.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A key in a scope frame.
///
/// Most bindings are simple identifiers. Two-block forms such as
/// `if (c) { ... } else { ... }` are looked up by the pair of identifiers
/// surrounding their blocks, which user code can never assign to directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    /// A plain identifier such as `x` or `print`.
    Simple(String),
    /// Two identifiers naming a two-block form, such as `("if", "else")`.
    Compound(String, String),
}

impl Name {
    /// Builds a simple name.
    #[must_use]
    pub fn simple(name: &str) -> Self {
        Self::Simple(name.to_string())
    }

    /// Builds a compound name from the two identifiers of a two-block form.
    #[must_use]
    pub fn compound(first: &str, second: &str) -> Self {
        Self::Compound(first.to_string(), second.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(name) => write!(f, "{name}"),
            Self::Compound(first, second) => write!(f, "{first}/{second}"),
        }
    }
}

/// The left-hand side of an assignment.
///
/// The parser decides at construction time whether an identifier is read or
/// written, so a write target never shares a node type with a variable read.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteTarget {
    /// `name = value`
    Variable {
        /// Name being bound or rebound.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `name[index] = value`
    Element {
        /// Name of the list being written into.
        name:  String,
        /// The bracketed index list; only its first element selects the slot.
        index: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Identity of a block node.
///
/// Every block built by the parser, and every clone of one, receives an id
/// no other block in the process shares. A `Context` keys the frame it
/// allocates for a block by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

impl BlockId {
    fn fresh() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A braced sequence of statements.
///
/// Each block owns one scope frame per context that evaluates it. The frame
/// is allocated on the first evaluation and reused afterwards, so bindings
/// made inside the block survive between evaluations of the same node.
#[derive(Debug)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Expr>,
    /// Line number of the opening brace.
    pub line:       usize,
    id:             BlockId,
}

impl Block {
    /// Creates a block with a fresh identity.
    #[must_use]
    pub fn new(statements: Vec<Expr>, line: usize) -> Self {
        Self { statements,
               line,
               id: BlockId::fresh() }
    }

    /// The identity the evaluator keys this block's frame by.
    #[must_use]
    pub const fn id(&self) -> BlockId {
        self.id
    }
}

impl Clone for Block {
    /// Copies the statements into a new block with its own identity, and
    /// therefore its own frames.
    fn clone(&self) -> Self {
        Self::new(self.statements.clone(), self.line)
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.statements == other.statements
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every construct in the language is an expression, including blocks and
/// the special forms `if`, `if/else` and `while`. A whole program is a single
/// `Expr`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, real or text).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: Name,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to a variable or to a list element.
    Assign {
        /// What is being written.
        target: WriteTarget,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// List literal expression.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A block containing multiple statements.
    Block(Block),
    /// Function call expression (e.g. `print(x)`).
    Call {
        /// Name of the function being called.
        name:      Name,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A special form with one block, such as `while (c) { ... }`.
    OneBlockForm {
        /// Name the special form is looked up by.
        name: Name,
        /// The parenthesized head expression, passed unevaluated.
        head: Box<Self>,
        /// The block, passed unevaluated.
        body: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A special form with two blocks, such as `if (c) { ... } else { ... }`.
    TwoBlockForm {
        /// Compound name the special form is looked up by.
        name:   Name,
        /// The parenthesized head expression, passed unevaluated.
        head:   Box<Self>,
        /// The first block.
        first:  Box<Self>,
        /// The second block.
        second: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A unary operation (`not`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation, including indexing.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sprig::ast::{Expr, Name};
    ///
    /// let expr = Expr::Variable { name: Name::simple("x"),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::List { line, .. }
            | Self::Call { line, .. }
            | Self::OneBlockForm { line, .. }
            | Self::TwoBlockForm { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. } => *line,
            Self::Block(block) => block.line,
        }
    }

    /// Returns `true` for the one- and two-block special forms, which may be
    /// used as statements without a terminating `;`.
    #[must_use]
    pub const fn is_block_form(&self) -> bool {
        matches!(self, Self::OneBlockForm { .. } | Self::TwoBlockForm { .. })
    }
}

/// Represents a binary operator.
///
/// The variants are listed from the loosest to the tightest binding tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`or`)
    Or,
    /// Logical and (`and` or `&&`)
    And,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Membership (`in`)
    In,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Floor division (`//`)
    FloorDiv,
    /// Exponentiation (`**`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Indexing (`list[index]`)
    Index,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`not x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Index, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Or => "or",
            And => "and",
            LessEqual => "<=",
            Equal => "==",
            NotEqual => "<>",
            GreaterEqual => ">=",
            Less => "<",
            Greater => ">",
            In => "in",
            Add => "+",
            Sub => "-",
            FloorDiv => "//",
            Pow => "**",
            Mod => "%",
            Mul => "*",
            Div => "/",
            Index => "[]",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "not"),
        }
    }
}
