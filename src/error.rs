use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the graphcalc crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Error while parsing an expression
    ParseError(String),
    /// Structural problem found while evaluating an expression: unknown
    /// function, or a variable where a constant was expected
    EvalError(String),
    /// Invalid step or domain given for curve sampling
    SampleError(String),
    /// A plot slot holds no curve
    SlotError(String),
}

/// Name under which collaborators usually refer to compilation and
/// evaluation failures.
pub type ExpressionError = Error;

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::ParseError(ref message) => write!(fmt, "ParseError: {}", message),
            Self::EvalError(ref message) => write!(fmt, "EvalError: {}", message),
            Self::SampleError(ref message) => write!(fmt, "SampleError: {}", message),
            Self::SlotError(ref message) => write!(fmt, "SlotError: {}", message),
        }
    }
}

impl error::Error for Error {}
