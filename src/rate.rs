//! Rate functions, the right-hand side of `dx/dt = f(t, x)`.
//!
//! A rate may depend on time only, on state only, or on both. Every form is
//! seen by the stepping rules through [`Rate::rate`], so a rule never needs
//! to know which arguments a rate actually uses.

/// Right-hand side of a scalar difference equation.
///
/// Implementations must be pure: the same `(t, x)` always gives the same
/// value.
pub trait Rate {
    fn rate(&self, t: f64, x: f64) -> f64;
}

impl<F> Rate for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rate(&self, t: f64, x: f64) -> f64 {
        self(t, x)
    }
}

/// A rate that depends on time only.
#[derive(Debug, Clone, Copy)]
pub struct TimeRate<F>(F);

impl<F> TimeRate<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> TimeRate<F> {
        TimeRate(f)
    }
}

impl<F> Rate for TimeRate<F>
where
    F: Fn(f64) -> f64,
{
    fn rate(&self, t: f64, _x: f64) -> f64 {
        (self.0)(t)
    }
}

/// A rate that depends on state only.
#[derive(Debug, Clone, Copy)]
pub struct StateRate<F>(F);

impl<F> StateRate<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> StateRate<F> {
        StateRate(f)
    }
}

impl<F> Rate for StateRate<F>
where
    F: Fn(f64) -> f64,
{
    fn rate(&self, _t: f64, x: f64) -> f64 {
        (self.0)(x)
    }
}

/// A constant rate. The default is zero, which leaves the state unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant(pub f64);

impl Rate for Constant {
    fn rate(&self, _t: f64, _x: f64) -> f64 {
        self.0
    }
}
