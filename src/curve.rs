use crate::error::Error;
use crate::expr::Expression;
use crate::util::{round_half_up, round_to};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A point of a curve. A `NaN` coordinate marks a point where the curve is
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check if both coordinates are defined
    pub fn is_defined(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

/// Colors a curve can be drawn with
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Orange,
    White,
    Cyan,
}

impl Color {
    /// Every available color, in menu order
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::Orange,
        Color::White,
        Color::Cyan,
    ];

    /// The color name
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Orange => "Orange",
            Self::White => "White",
            Self::Cyan => "Cyan",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Black
    }
}

impl Display for Color {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| format!("unknown color '{}'", name))
    }
}

/// The expressions a curve is made of
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// y = f(x)
    SingleVariate(Expression),
    /// (x(t), y(t))
    Parametric {
        /// Abscissa as a function of `t`
        x: Expression,
        /// Ordinate as a function of `t`
        y: Expression,
    },
}

/// A colored, domain-bounded curve.
///
/// The expressions can not be changed once the curve exists, but the domain
/// and the color can.
///
/// # Examples
///
/// ```
/// # use graphcalc::{compile, Curve, Point};
/// let curve = Curve::single_variate(compile("x^2").unwrap(), -10.0, 10.0);
/// assert_eq!(curve.evaluate_at(3.0), Point::new(3.0, 9.0));
///
/// let curve = Curve::parametric(compile("t").unwrap(), compile("t^2").unwrap(), 0.0, 5.0);
/// assert_eq!(curve.evaluate_at(2.0), Point::new(2.0, 4.0));
/// assert_eq!(curve.to_string(), "t;t^2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    shape: Shape,
    min_range: f64,
    max_range: f64,
    color: Color,
}

impl Curve {
    /// Create the curve of `y = expr(x)` over `[min_range, max_range]`
    pub fn single_variate(expr: Expression, min_range: f64, max_range: f64) -> Self {
        Self {
            shape: Shape::SingleVariate(expr),
            min_range,
            max_range,
            color: Color::default(),
        }
    }

    /// Create the curve of `(x(t), y(t))` for `t` in `[min_range, max_range]`
    pub fn parametric(x: Expression, y: Expression, min_range: f64, max_range: f64) -> Self {
        Self {
            shape: Shape::Parametric { x, y },
            min_range,
            max_range,
            color: Color::default(),
        }
    }

    /// Compute the point of the curve for parameter `t`. Coordinates which
    /// fail to evaluate are `NaN`.
    pub fn evaluate_at(&self, t: f64) -> Point {
        match self.shape {
            Shape::SingleVariate(ref expr) => Point::new(t, coordinate(expr, t)),
            Shape::Parametric { ref x, ref y } => Point::new(coordinate(x, t), coordinate(y, t)),
        }
    }

    /// The expressions of this curve
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Lower bound of the domain
    pub fn min_range(&self) -> f64 {
        self.min_range
    }

    /// Upper bound of the domain
    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Change the lower bound of the domain
    pub fn set_min_range(&mut self, min_range: f64) {
        self.min_range = min_range;
    }

    /// Change the upper bound of the domain
    pub fn set_max_range(&mut self, max_range: f64) {
        self.max_range = max_range;
    }

    /// Color the curve is drawn with
    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the color of the curve
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

fn coordinate(expr: &Expression, t: f64) -> f64 {
    expr.evaluate_at(t).unwrap_or_else(|err| {
        trace!("'{}' is undefined at {}: {}", expr, t, err);
        f64::NAN
    })
}

impl Display for Curve {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self.shape {
            Shape::SingleVariate(ref expr) => write!(fmt, "{}", expr),
            Shape::Parametric { ref x, ref y } => write!(fmt, "{};{}", x, y),
        }
    }
}

/// Points of a sampled curve, keyed by their parameter rounded to one
/// decimal place and ordered by increasing parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    // keys are counted in tenths, so that they are exact
    points: BTreeMap<i64, Point>,
}

impl Samples {
    fn insert(&mut self, t: f64, point: Point) {
        self.points.insert(tenths(t), point);
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point was sampled
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point sampled for parameter `t`, after rounding it to one
    /// decimal place.
    pub fn get(&self, t: f64) -> Option<&Point> {
        self.points.get(&tenths(t))
    }

    /// Iterate over `(t, point)` pairs, by increasing `t`
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.points.iter(),
        }
    }

    /// Iterate over the points, by increasing parameter
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }
}

/// Iterator over the entries of `Samples`
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, i64, Point>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (f64, &'a Point);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&key, point)| (key as f64 / 10.0, point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = (f64, &'a Point);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn tenths(t: f64) -> i64 {
    round_half_up(t * 10.0) as i64
}

/// Sample `curve` over its whole domain.
///
/// The parameter goes from the lower to the upper bound of the domain, both
/// included, by increments of `step`. The loop variable is rounded to one
/// decimal place at each iteration, before it is used to evaluate the curve
/// and as key of the result.
///
/// `step` must be finite and positive, the domain must be finite and ordered,
/// and `step` must be large enough to move the rounded parameter forward.
///
/// # Examples
///
/// ```
/// # use graphcalc::{compile, sample, Curve};
/// let curve = Curve::single_variate(compile("2 * x").unwrap(), 0.0, 1.0);
/// let samples = sample(&curve, 0.5).unwrap();
/// assert_eq!(samples.len(), 3);
/// assert_eq!(samples.get(0.5).map(|p| p.y), Some(1.0));
///
/// assert!(sample(&curve, 0.0).is_err());
/// ```
pub fn sample(curve: &Curve, step: f64) -> Result<Samples, Error> {
    let (min, max) = (curve.min_range, curve.max_range);
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::SampleError(format!(
            "step must be a positive number, got {}",
            step
        )));
    }
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(Error::SampleError(format!(
            "invalid domain [{}, {}]",
            min, max
        )));
    }

    let mut samples = Samples::default();
    let mut t = round_to(min, 1);
    while t <= max {
        samples.insert(t, curve.evaluate_at(t));
        let next = round_to(t + step, 1);
        if next <= t {
            return Err(Error::SampleError(format!(
                "step {} is too small to advance from {}",
                step, t
            )));
        }
        t = next;
    }
    debug!(
        "sampled '{}' over [{}, {}] with step {}: {} points",
        curve,
        min,
        max,
        step,
        samples.len()
    );
    Ok(samples)
}
