/// Tolerance used by every float comparison in the crate.
pub const EPSILON: f64 = 1e-8;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn less_or_equal(a: f64, b: f64) -> bool {
    a < b || approx_eq(a, b)
}

pub fn greater_or_equal(a: f64, b: f64) -> bool {
    a > b || approx_eq(a, b)
}
