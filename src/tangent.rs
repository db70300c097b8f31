use crate::error::Error;
use crate::expr::Expression;
use crate::util::{format_float, round_to};
use std::fmt::{self, Display, Formatter};

/// Line `y = slope * x + intercept` approximating a curve at a point.
///
/// Both coefficients are rounded for display: the slope to 2 decimal places
/// and the intercept to 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangent {
    /// Slope of the line, rounded to 2 decimal places
    pub slope: f64,
    /// Value at `x = 0`, rounded to 3 decimal places
    pub intercept: f64,
}

impl Tangent {
    /// Ordinate of the line at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Display for Tangent {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(
            fmt,
            "{} * x + {}",
            format_float(self.slope),
            format_float(self.intercept)
        )
    }
}

/// Compute the tangent of `expr` at `x1`, using the forward difference over
/// `step` as slope.
///
/// The slope is the secant slope between `x1` and `x1 + step`, not the exact
/// derivative. The intercept is computed from the unrounded slope, then both
/// are rounded, halves going up.
///
/// `step` is not checked. A zero step gives `NaN` or infinite coefficients,
/// as does a `Plot` whose step was set to `0.0`.
///
/// # Examples
///
/// ```
/// # use graphcalc::{compile, tangent_at};
/// let tangent = tangent_at(&compile("x^2").unwrap(), 1.0, 0.1).unwrap();
/// assert_eq!(tangent.slope, 2.1);
/// assert_eq!(tangent.intercept, -1.1);
/// assert_eq!(tangent.to_string(), "2.1 * x + -1.1");
/// ```
pub fn tangent_at(expr: &Expression, x1: f64, step: f64) -> Result<Tangent, Error> {
    let y1 = expr.evaluate_at(x1)?;
    let y2 = expr.evaluate_at(x1 + step)?;
    let slope = (y2 - y1) / step;
    let intercept = y1 - slope * x1;
    trace!(
        "tangent of '{}' at {}: slope {}, intercept {}",
        expr,
        x1,
        slope,
        intercept
    );
    Ok(Tangent {
        slope: round_to(slope, 2),
        intercept: round_to(intercept, 3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::compile;
    use test_case::test_case;

    #[test_case(0.0 => "0.1 * x + 0.0".to_string() ; "at zero")]
    #[test_case(1.0 => "2.1 * x + -1.1".to_string() ; "at one")]
    #[test_case(-3.0 => "-5.9 * x + -8.7".to_string() ; "at minus three")]
    fn square(x1: f64) -> String {
        let expr = compile("x^2").unwrap();
        tangent_at(&expr, x1, 0.1).unwrap().to_string()
    }

    #[test]
    fn finite_difference_is_not_the_derivative() {
        let expr = compile("x^2").unwrap();
        let tangent = tangent_at(&expr, 2.0, 0.5).unwrap();
        // (2.5^2 - 2^2) / 0.5 = 4.5, and 4 - 4.5 * 2 = -5
        assert_eq!(tangent.slope, 4.5);
        assert_eq!(tangent.intercept, -5.0);
        assert_eq!(tangent.value_at(2.0), 4.0);
    }

    #[test]
    fn lines_are_their_own_tangent() {
        let expr = compile("3 * x - 2").unwrap();
        let tangent = tangent_at(&expr, 7.0, 0.1).unwrap();
        assert_eq!(tangent.slope, 3.0);
        assert_eq!(tangent.intercept, -2.0);
        assert_eq!(tangent.to_string(), "3.0 * x + -2.0");
    }

    #[test]
    fn negative_halves_round_up() {
        let expr = compile("-0.125 * x").unwrap();
        let tangent = tangent_at(&expr, 0.0, 0.5).unwrap();
        assert_eq!(tangent.slope, -0.12);
        assert_eq!(tangent.intercept, 0.0);
    }

    #[test]
    fn zero_step_gives_undefined_coefficients() {
        let expr = compile("x^2").unwrap();
        let tangent = tangent_at(&expr, 1.0, 0.0).unwrap();
        assert!(tangent.slope.is_nan());
        assert!(tangent.intercept.is_nan());
    }

    #[test]
    fn errors_propagate() {
        let expr = compile("foo(x)").unwrap();
        assert!(matches!(
            tangent_at(&expr, 1.0, 0.1),
            Err(Error::EvalError(_))
        ));
    }

    #[test]
    fn undefined_values_are_not_errors() {
        let expr = compile("ln(x)").unwrap();
        let tangent = tangent_at(&expr, -1.0, 0.1).unwrap();
        assert!(tangent.slope.is_nan());
        assert!(tangent.intercept.is_nan());
        assert_eq!(tangent.to_string(), "NaN * x + NaN");
    }
}
