//! Closed-form solutions to compare numerical results against.

use ndarray::prelude::*;

/// Solution of `dx/dt = c` with `x(0) = x0`.
pub fn linear(x0: f64, c: f64, t: f64) -> f64 {
    x0 + c * t
}

/// Solution of `dx/dt = 2t` with `x(0) = 0`.
pub fn square(t: f64) -> f64 {
    t * t
}

/// Solution of `dx/dt = x²` with `x(0) = x0`.
///
/// The solution blows up at [`blow_up_time`]; past it the formula returns
/// the other branch of the hyperbola, which is not a continuation of the
/// solution.
pub fn blow_up(x0: f64, t: f64) -> f64 {
    1. / (1. / x0 - t)
}

/// Time at which the solution of `dx/dt = x²` with `x(0) = x0 > 0` becomes
/// infinite.
pub fn blow_up_time(x0: f64) -> f64 {
    1. / x0
}

/// Evaluates a closed form at every point of a time grid.
pub fn sample<F>(t: ArrayView1<f64>, solution: F) -> Array1<f64>
where
    F: Fn(f64) -> f64,
{
    t.mapv(solution)
}
