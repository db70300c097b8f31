use std::fmt::{self, Display, Formatter};

/// Kinds of tokens found in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer or floating point literal
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Any other word, resolved to a function at evaluation time
    Function,
    /// The free variable, `x` or `t`
    Variable,
}

impl TokenKind {
    /// Get the kind of a single-character terminal, if `word` is one
    pub fn terminal(word: &str) -> Option<Self> {
        match word {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            "(" => Some(Self::LeftParen),
            ")" => Some(Self::RightParen),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let name = match *self {
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::Power => "'^'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Function => "function",
            Self::Variable => "variable",
        };
        write!(fmt, "{}", name)
    }
}

/// A single lexed word of an expression, with its classification.
///
/// Two tokens are equal when both their kind and their text match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Create a new token of the given `kind`
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Get the classification of this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the raw text of this token, as found in the input
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.text)
    }
}
