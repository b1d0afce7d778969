use std::fmt;

use logos::{Lexer, Logos};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Operator tokens
/// are listed by precedence tier, loosest first.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Text literal tokens, such as `"hello"`. The quotes are stripped.
    #[regex(r#""[^"]*""#, parse_text)]
    Text(String),
    /// Identifier tokens; names such as `x`, `print` or `while`.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `=`, only when not touching `=`, `!`, `<` or `>`.
    #[token("=", standalone_assignment)]
    Assign,
    /// `or`
    #[token("or")]
    Or,
    /// `and` or `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `not`
    #[token("not")]
    Not,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    LessGreater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `in`
    #[token("in")]
    In,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `**`
    #[token("**")]
    StarStar,
    /// `%`
    #[token("%")]
    Percent,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// `# Comments` running to the end of the line.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `@ Comments spanning any number of lines @`
    #[regex(r"@[^@]*@", |lex| {
        lex.extras.line += count_newlines(lex.slice());
        logos::Skip
    })]
    BlockComment,
    /// Line breaks, counted for diagnostics and otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Assign => write!(f, "'='"),
            Self::Or => write!(f, "'or'"),
            Self::And => write!(f, "'and'"),
            Self::Not => write!(f, "'not'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::LessGreater => write!(f, "'<>'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::In => write!(f, "'in'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::SlashSlash => write!(f, "'//'"),
            Self::StarStar => write!(f, "'**'"),
            Self::Percent => write!(f, "'%'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::Comment | Self::BlockComment | Self::NewLine => write!(f, "comment"),
        }
    }
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Trailing-dot forms like `2.` parse too.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`, which makes it a lexing
///   error.
fn parse_integer(lex: &Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a text literal, counting any line breaks it spans.
fn parse_text(lex: &mut Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += count_newlines(slice);
    slice[1..slice.len() - 1].to_string()
}

/// Accepts `=` only when neither neighbour is one of `=`, `!`, `<`, `>`, so
/// that a stray `=` next to a comparison symbol is rejected rather than
/// silently split into two tokens.
fn standalone_assignment(lex: &Lexer<Token>) -> bool {
    const CLASHING: &[u8] = b"=!<>";

    let before = lex.source().as_bytes()[..lex.span().start].last();
    let after = lex.remainder().as_bytes().first();

    !before.is_some_and(|b| CLASHING.contains(b)) && !after.is_some_and(|b| CLASHING.contains(b))
}

/// The line on which the current token starts.
///
/// Callbacks of tokens that span lines have already counted their newlines
/// into `extras.line`, which then holds the line the token ends on.
pub(crate) fn token_line(lex: &Lexer<Token>) -> usize {
    lex.extras.line - count_newlines(lex.slice())
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
