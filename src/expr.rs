use crate::ast::Ast;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::token::{Token, TokenKind};
use crate::util::FUNCTIONS;
use crate::Error;
use std::fmt::{self, Display, Formatter};

/// Compile `input` into an `Expression`.
///
/// # Example
///
/// ```
/// # use graphcalc::compile;
/// let expr = compile("x^2 + 1").unwrap();
/// assert_eq!(expr.evaluate_at(3.0), Ok(10.0));
///
/// assert!(compile("(5 + 3").is_err());
/// ```
pub fn compile(input: &str) -> Result<Expression, Error> {
    Expression::compile(input)
}

/// Evaluate a single constant expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use graphcalc::eval;
/// assert_eq!(eval("45 - 2 ^ 3"), Ok(37.0));
/// assert!(eval("2 * x").is_err());
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    compile(input).and_then(|expr| expr.evaluate())
}

/// A compiled mathematical expression.
///
/// The expression keeps the text it was compiled from, which is also its
/// `Display` form.
///
/// # Examples
/// ```
/// # use graphcalc::Expression;
/// let expr = Expression::compile("5 * (4 + 2)").unwrap();
/// assert_eq!(expr.evaluate(), Ok(30.0));
/// assert_eq!(expr.to_string(), "5 * (4 + 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: Ast,
}

impl Expression {
    /// Compile the given mathematical `input` into an `Expression`.
    ///
    /// # Examples
    /// ```
    /// # use graphcalc::Expression;
    /// // A valid expression
    /// assert!(Expression::compile("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expression::compile("3 + 5 *").is_err());
    /// ```
    pub fn compile(input: &str) -> Result<Self, Error> {
        match parse(tokenize(input)) {
            Ok(ast) => {
                debug!("compiled expression '{}'", input);
                Ok(Self {
                    source: input.to_owned(),
                    ast,
                })
            }
            Err(err) => {
                debug!("could not compile '{}': {}", input, err);
                Err(err)
            }
        }
    }

    /// Evaluate the expression without any value for the variable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphcalc::Expression;
    /// let expr = Expression::compile("log(1000)").unwrap();
    /// assert!((expr.evaluate().unwrap() - 3.0).abs() < 1e-12);
    ///
    /// let expr = Expression::compile("x + 1").unwrap();
    /// assert!(expr.evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> Result<f64, Error> {
        Self::inner_eval(&self.ast, None)
    }

    /// Evaluate the expression, substituting `value` for the variable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphcalc::Expression;
    /// let expr = Expression::compile("x^2").unwrap();
    /// assert_eq!(expr.evaluate_at(3.0), Ok(9.0));
    /// assert_eq!(expr.evaluate_at(-0.5), Ok(0.25));
    /// ```
    pub fn evaluate_at(&self, value: f64) -> Result<f64, Error> {
        Self::inner_eval(&self.ast, Some(value))
    }

    fn inner_eval(ast: &Ast, variable: Option<f64>) -> Result<f64, Error> {
        match *ast {
            Ast::Number(ref token) => token.text().parse().map_err(|_| {
                Error::EvalError(format!("invalid number '{}'", token))
            }),
            Ast::Variable(ref token) => variable.ok_or_else(|| {
                Error::EvalError(format!(
                    "variable '{}' in expression when none expected",
                    token
                ))
            }),
            Ast::Function { ref name, ref arg } => {
                // unknown names are reported before errors in the operand
                let func = FUNCTIONS.get(name.text()).ok_or_else(|| {
                    Error::EvalError(format!("unknown function '{}'", name))
                })?;
                Ok(func(Self::inner_eval(arg, variable)?))
            }
            Ast::Binary { .. } => {
                // operator chains are left-deep: walk down their left side
                // in a loop and only recurse into right operands
                let mut chain = Vec::new();
                let mut node = ast;
                while let Ast::Binary {
                    ref op,
                    ref left,
                    ref right,
                } = *node
                {
                    chain.push((op, &**right));
                    node = &**left;
                }
                let mut value = Self::inner_eval(node, variable)?;
                for (op, right) in chain.into_iter().rev() {
                    let right = Self::inner_eval(right, variable)?;
                    value = apply(op, value, right)?;
                }
                Ok(value)
            }
        }
    }

    /// Check if the expression uses the variable.
    ///
    /// # Examples
    /// ```
    /// # use graphcalc::Expression;
    /// assert!(!Expression::compile("3 + 5 * 2").unwrap().has_variable());
    /// assert!(Expression::compile("3 + t").unwrap().has_variable());
    /// ```
    pub fn has_variable(&self) -> bool {
        self.ast.has_variable()
    }

    /// The text this expression was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The syntax tree of this expression
    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}

fn apply(op: &Token, left: f64, right: f64) -> Result<f64, Error> {
    match op.kind() {
        TokenKind::Plus => Ok(left + right),
        TokenKind::Minus => Ok(left - right),
        TokenKind::Multiply => Ok(left * right),
        TokenKind::Divide => Ok(left / right),
        TokenKind::Power => Ok(libm::pow(left, right)),
        _ => Err(Error::EvalError(format!("invalid operator '{}'", op))),
    }
}

impl Display for Expression {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::{compile, eval, Expression};
    use crate::parser::MAX_DEPTH;
    use crate::Error;
    use test_case::test_case;

    #[test]
    fn compile_keeps_source() {
        let sources = [
            "7 + 6",
            "5 * (4 + 2)",
            "sin^-1(x)",
            "e^x",
            "  x^2  ",
            "log(9)",
            "cos t * 3",
        ];
        for source in &sources {
            assert_eq!(compile(source).unwrap().to_string(), *source);
        }
    }

    #[test_case("7 + 6" => Ok(13.0))]
    #[test_case("5 * (4 + 2)" => Ok(30.0))]
    #[test_case("5 / 2" => Ok(2.5))]
    #[test_case("8 - 4 - 2" => Ok(2.0) ; "subtraction is left associative")]
    #[test_case("16 / 4 / 2" => Ok(2.0) ; "division is left associative")]
    #[test_case("2 ^ 3 ^ 2" => Ok(64.0) ; "power is left associative")]
    #[test_case("2 + 3 * 4 ^ 2" => Ok(50.0) ; "power binds tighter than products")]
    #[test_case("-3 + 1" => Ok(-2.0) ; "negative literal")]
    #[test_case("1.5e1 * 2" => Ok(30.0) ; "scientific literal")]
    #[test_case("ln(1)" => Ok(0.0) ; "natural log")]
    #[test_case("cos 0" => Ok(1.0) ; "function without parenthesis")]
    fn constant(input: &str) -> Result<f64, Error> {
        eval(input)
    }

    #[test]
    fn decimal_log() {
        let value = eval("log(9)").unwrap();
        assert!((value - 0.954_242_509_439_324_9).abs() < 1e-15);
    }

    #[test]
    fn inverse_functions() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert!((eval("sin^-1(1)").unwrap() - half_pi).abs() < 1e-12);
        assert!((eval("cos^-1(0)").unwrap() - half_pi).abs() < 1e-12);
        assert!((eval("tan^-1(1)").unwrap() - half_pi / 2.0).abs() < 1e-12);
        assert!((eval("e^(1)").unwrap() - std::f64::consts::E).abs() < 1e-12);
        assert!((eval("e^ 2").unwrap() - std::f64::consts::E.powi(2)).abs() < 1e-12);
    }

    #[test]
    fn function_takes_the_rest() {
        assert_eq!(eval("cos(0) + 1"), Ok(libm::cos(1.0)));
        assert_eq!(eval("2 * sin(0) + 1"), Ok(2.0 * libm::sin(1.0)));
    }

    #[test]
    fn ieee_values_are_not_errors() {
        assert_eq!(eval("1 / 0"), Ok(f64::INFINITY));
        assert_eq!(eval("-1 / 0"), Ok(f64::NEG_INFINITY));
        assert!(eval("0 / 0").unwrap().is_nan());
        assert!(eval("ln(-1)").unwrap().is_nan());
        assert!(eval("sin^-1(2)").unwrap().is_nan());
        assert_eq!(eval("ln(0)"), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn variable() {
        let expr = Expression::compile("x^2").unwrap();
        assert_eq!(expr.evaluate_at(3.0), Ok(9.0));
        assert!(matches!(expr.evaluate(), Err(Error::EvalError(_))));

        let expr = Expression::compile("2 * t + 1").unwrap();
        assert_eq!(expr.evaluate_at(4.0), Ok(9.0));

        let expr = Expression::compile("x * x - x").unwrap();
        assert_eq!(expr.evaluate_at(5.0), Ok(20.0));

        // constants ignore the substituted value
        let expr = Expression::compile("7 + 6").unwrap();
        assert_eq!(expr.evaluate_at(100.0), Ok(13.0));
    }

    #[test]
    fn errors() {
        assert_eq!(
            eval("foo(2)"),
            Err(Error::EvalError("unknown function 'foo'".into()))
        );
        assert_eq!(
            eval("x + 1"),
            Err(Error::EvalError(
                "variable 'x' in expression when none expected".into()
            ))
        );
        // without spaces, operators are swallowed in a single word, read as
        // a function name which then lacks an operand
        assert!(matches!(eval("2*3"), Err(Error::ParseError(_))));
        assert_eq!(
            eval("2*3 4"),
            Err(Error::EvalError("unknown function '2*3'".into()))
        );
        assert!(matches!(eval("(5 + 3"), Err(Error::ParseError(_))));
        assert!(matches!(eval(""), Err(Error::ParseError(_))));
    }

    #[test]
    fn idempotent() {
        let expr = Expression::compile("sin(x) * e^(x / 3) - log(x)").unwrap();
        for &x in &[0.1, 1.0, 2.5, 17.0] {
            let first = expr.evaluate_at(x).unwrap();
            let second = expr.evaluate_at(x).unwrap();
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn long_chains() {
        let expr = compile(&vec!["x"; 600].join(" + ")).unwrap();
        assert_eq!(expr.evaluate_at(1.0), Ok(600.0));
        assert_eq!(expr.clone(), expr);

        let expr = compile(&vec!["1"; 2048].join(" - ")).unwrap();
        assert_eq!(expr.evaluate(), Ok(-2046.0));
        assert!(!expr.has_variable());
    }

    #[test]
    fn deepest_nesting() {
        let expr = compile(&format!("{}x", "sin ".repeat(MAX_DEPTH))).unwrap();
        assert!(expr.evaluate_at(1.0).unwrap() < 1.0);

        let input = format!("{}x{}", "(x + ".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let expr = compile(&input).unwrap();
        assert_eq!(expr.evaluate_at(1.0), Ok(MAX_DEPTH as f64 + 1.0));
        assert!(expr.has_variable());

        let input = format!("{}1", "sin ".repeat(MAX_DEPTH + 1));
        assert!(matches!(compile(&input), Err(Error::ParseError(_))));
    }

    #[test]
    fn has_variable() {
        assert!(compile("x^2").unwrap().has_variable());
        assert!(compile("log(t)").unwrap().has_variable());
        assert!(!compile("log(9)").unwrap().has_variable());
    }
}
