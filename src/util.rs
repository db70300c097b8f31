use hashbrown::HashMap;

lazy_static! {
    /// Unary functions usable in expressions, by name
    pub static ref FUNCTIONS: HashMap<&'static str, fn(f64) -> f64> = {
        let mut map = HashMap::<&'static str, fn(f64) -> f64>::new();
        map.insert("e^", libm::exp);
        map.insert("sin", libm::sin);
        map.insert("cos", libm::cos);
        map.insert("tan", libm::tan);
        map.insert("sin^-1", libm::asin);
        map.insert("cos^-1", libm::acos);
        map.insert("tan^-1", libm::atan);
        map.insert("ln", libm::log);
        map.insert("log", libm::log10);
        map.shrink_to_fit();
        map
    };
}

/// Round `value` to `decimals` places after the point. Halves round up,
/// towards positive infinity: `-0.25` gives `-0.2`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    round_half_up(value * scale) / scale
}

/// Round to the nearest integer, halves going up
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Format a float the way calculators show results: integral values keep a
/// trailing `.0`.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
