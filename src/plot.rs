use crate::curve::{sample, Color, Curve, Samples};
use crate::error::Error;
use crate::expr::{compile, eval};
use crate::tangent::{tangent_at, Tangent};
use crate::util::format_float;

/// Message shown instead of a result when an expression can not be computed
pub const INVALID_EXPRESSION: &str = "Invalid Expression";

/// Evaluate a constant expression and format the result for display.
///
/// # Examples
///
/// ```
/// # use graphcalc::calculate;
/// assert_eq!(calculate("7 + 6"), "13.0");
/// assert_eq!(calculate("5 / 2"), "2.5");
/// assert_eq!(calculate("5 * (4 + 2"), "Invalid Expression");
/// ```
pub fn calculate(input: &str) -> String {
    match eval(input) {
        Ok(value) => format_float(value),
        Err(err) => {
            debug!("calculation of '{}' failed: {}", input, err);
            INVALID_EXPRESSION.to_owned()
        }
    }
}

/// State of a graph: the plotted curves, the visible window and the sampling
/// step.
///
/// Curves live in numbered slots. Removing a curve leaves its slot empty so
/// that other curves keep their index.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    curves: Vec<Option<Curve>>,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    step: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            curves: Vec::new(),
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            step: 0.1,
        }
    }
}

impl Plot {
    /// Create an empty plot with the default window and step
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `input` and put the resulting curve in slot `index`, over the
    /// current x bounds. Missing slots before `index` are created empty.
    ///
    /// Nothing changes if `input` is not a valid expression.
    pub fn add_single_variate(&mut self, index: usize, input: &str) -> Result<(), Error> {
        let expr = compile(input)?;
        let curve = Curve::single_variate(expr, self.x_min, self.x_max);
        if index < self.curves.len() {
            self.curves[index] = Some(curve);
        } else {
            self.curves.resize(index, None);
            self.curves.push(Some(curve));
        }
        Ok(())
    }

    /// Replace every curve by the parametric curve `(x(t), y(t))`, with `t`
    /// going from `t_min` to `t_max`.
    ///
    /// Nothing changes if either expression is invalid.
    pub fn add_parametric(
        &mut self,
        x: &str,
        y: &str,
        t_min: f64,
        t_max: f64,
    ) -> Result<(), Error> {
        let curve = Curve::parametric(compile(x)?, compile(y)?, t_min, t_max);
        self.curves.clear();
        self.curves.push(Some(curve));
        Ok(())
    }

    /// Empty slot `index`. Out of range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if let Some(slot) = self.curves.get_mut(index) {
            *slot = None;
        }
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        for slot in &mut self.curves {
            *slot = None;
        }
    }

    /// Drop the empty slots, shifting the following curves down. Returns the
    /// new number of slots.
    pub fn compact(&mut self) -> usize {
        self.curves.retain(Option::is_some);
        self.curves.len()
    }

    /// Curve in slot `index`, if any
    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index).and_then(Option::as_ref)
    }

    /// All the slots, empty ones included
    pub fn curves(&self) -> &[Option<Curve>] {
        &self.curves
    }

    /// Sample the curve in slot `index` over its domain, with the plot step
    pub fn sample(&self, index: usize) -> Result<Samples, Error> {
        let curve = self
            .curve(index)
            .ok_or_else(|| Error::SlotError(format!("no curve in slot {}", index)))?;
        sample(curve, self.step)
    }

    /// Compute the tangent of `input` at `x`, with the plot step as
    /// difference interval.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphcalc::Plot;
    /// let plot = Plot::new();
    /// let tangent = plot.tangent("x^2", -3.0).unwrap();
    /// assert_eq!(tangent.to_string(), "-5.9 * x + -8.7");
    /// ```
    pub fn tangent(&self, input: &str, x: f64) -> Result<Tangent, Error> {
        tangent_at(&compile(input)?, x, self.step)
    }

    /// Change the color of the curve in slot `index`
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), Error> {
        match self.curves.get_mut(index) {
            Some(Some(curve)) => {
                curve.set_color(color);
                Ok(())
            }
            _ => Err(Error::SlotError(format!("no curve in slot {}", index))),
        }
    }

    /// Left edge of the window
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right edge of the window
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Bottom edge of the window
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Top edge of the window
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Sampling step, also used for tangents
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move the left edge of the window. The domain of every curve follows.
    pub fn set_x_min(&mut self, x_min: f64) {
        self.x_min = x_min;
        for curve in self.curves.iter_mut().flatten() {
            curve.set_min_range(x_min);
        }
    }

    /// Move the right edge of the window. The domain of every curve follows.
    pub fn set_x_max(&mut self, x_max: f64) {
        self.x_max = x_max;
        for curve in self.curves.iter_mut().flatten() {
            curve.set_max_range(x_max);
        }
    }

    /// Move the bottom edge of the window
    pub fn set_y_min(&mut self, y_min: f64) {
        self.y_min = y_min;
    }

    /// Move the top edge of the window
    pub fn set_y_max(&mut self, y_max: f64) {
        self.y_max = y_max;
    }

    /// Change the sampling step
    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }
}
