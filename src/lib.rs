#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::non_ascii_literal
)]

//! Graphcalc, the expression core of a graphing calculator.
//!
//! This crate compiles mathematical expressions written as text, evaluates
//! them with or without a value for their variable, samples them into plot
//! points and computes tangent lines. The easiest way to use this crate is
//! with the [`eval`](fn.eval.html) function:
//!
//! ```
//! assert_eq!(graphcalc::eval("5 * (4 + 2)"), Ok(30.0));
//! ```
//!
//! Expressions can contain one free variable, `x` or `t`. They are compiled
//! once with [`compile`](fn.compile.html) and evaluated for as many values as
//! needed:
//!
//! ```
//! use graphcalc::compile;
//!
//! let expr = compile("x^2 - 1").unwrap();
//! assert_eq!(expr.evaluate_at(3.0), Ok(8.0));
//! assert_eq!(expr.evaluate_at(-1.0), Ok(0.0));
//! assert!(expr.evaluate().is_err());
//! ```
//!
//! Curves wrap expressions with a domain, and can be sampled:
//!
//! ```
//! use graphcalc::{compile, sample, tangent_at, Curve};
//!
//! let curve = Curve::single_variate(compile("2 * x").unwrap(), -1.0, 1.0);
//! let samples = sample(&curve, 0.1).unwrap();
//! assert_eq!(samples.len(), 21);
//!
//! let tangent = tangent_at(&compile("x^2").unwrap(), 1.0, 0.1).unwrap();
//! assert_eq!(tangent.to_string(), "2.1 * x + -1.1");
//! ```
//!
//! # Language definition
//!
//! Expressions are made of words separated by whitespace. Parenthesis and
//! `^` are split from their neighbours automatically, every other operator
//! must be surrounded by spaces. `2*x` is a single word, read as a function
//! name: alone it lacks an operand and does not compile, and `2*x 1`
//! compiles but fails to evaluate.
//!
//! - number literals: `12`, `-3.5`, `1e-3`, ...;
//! - the variable: `x` or `t`;
//! - operators `+`, `-`, `*`, `/` and `^`. Products bind tighter than sums
//!   and `^` tighter than products. All operators are left associative,
//!   `^` included: `2 ^ 3 ^ 2` is `64`;
//! - left and right parenthesis;
//! - functions: `sin`, `cos`, `tan`, their inverses `sin^-1`, `cos^-1`,
//!   `tan^-1`, the exponential `e^`, `ln` and `log` (base 10). A function
//!   applies to the whole expression that follows it: `sin(x) + 1` is
//!   `sin(x + 1)`.
//!
//! Parenthesis and function operands nest at most
//! [`MAX_DEPTH`](constant.MAX_DEPTH.html) levels deep, and an expression holds
//! at most [`MAX_TOKENS`](constant.MAX_TOKENS.html) words. Longer or deeper
//! input is a parse error.
//!
//! Unknown function names are accepted by the parser, and reported when the
//! expression is evaluated. Division by zero, logarithms of negative values
//! and so on give infinities and `NaN`, not errors.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod ast;
mod curve;
mod error;
mod expr;
mod lexer;
mod parser;
mod plot;
mod tangent;
mod token;
mod util;

pub use ast::Ast;
pub use curve::{sample, Color, Curve, Iter, Point, Samples, Shape};
pub use error::{Error, ExpressionError};
pub use expr::{compile, eval, Expression};
pub use lexer::{is_variable, tokenize, Lexer};
pub use parser::{parse, Parser, MAX_DEPTH, MAX_TOKENS};
pub use plot::{calculate, Plot, INVALID_EXPRESSION};
pub use tangent::{tangent_at, Tangent};
pub use token::{Token, TokenKind};
pub use util::FUNCTIONS;
