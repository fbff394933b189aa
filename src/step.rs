//! Fixed-step integration along a uniform time grid.

use ndarray::prelude::*;
use ndarray::s;
use tracing::{debug, trace, warn};

use crate::grid::check_spacing;
use crate::rate::Rate;
use crate::rule::StepRule;
use crate::{InvalidArgument, OdeIntegrate};

/// Fixed-step ODE IVP solver over a given time grid.
pub struct FixedStep<'a, R, S>
where
    R: Rate + ?Sized,
    S: StepRule,
{
    rate: &'a R,
    rule: S,
    /// Step size.
    dt: f64,
    /// Time grid, shape `n + 1`.
    t: Array1<f64>,
    /// States computed so far; entries past `index` are not yet valid.
    x: Array1<f64>,
    /// Index of the current grid point.
    index: usize,
    /// Whether a non-finite state has already been reported.
    reported_non_finite: bool,
}

impl<'a, R, S> FixedStep<'a, R, S>
where
    R: Rate + ?Sized,
    S: StepRule,
{
    /// Creates a new `FixedStep` solver positioned at the first grid point.
    ///
    /// # Parameters
    ///
    /// * `t`: Time grid, non-empty and uniformly spaced by `dt`.
    ///
    /// * `x0`: Initial state at `t[0]`.
    ///
    /// * `dt`: Step size.
    ///
    /// * `rate`: Right-hand side of the equation.
    ///
    /// * `rule`: Where within each step the rate is evaluated.
    pub fn new(
        t: ArrayView1<f64>,
        x0: f64,
        dt: f64,
        rate: &'a R,
        rule: S,
    ) -> Result<FixedStep<'a, R, S>, InvalidArgument> {
        check_spacing(t, dt)?;

        let mut x = Array1::zeros(t.len());
        x[0] = x0;

        debug!(rule = rule.name(), steps = t.len() - 1, dt, x0, "starting integration");

        Ok(FixedStep {
            rate,
            rule,
            dt,
            t: t.to_owned(),
            x,
            index: 0,
            reported_non_finite: false,
        })
    }

    /// Index of the current grid point.
    pub fn index(&self) -> usize {
        self.index
    }

    /// States computed so far, including the current one.
    pub fn states(&self) -> ArrayView1<f64> {
        self.x.slice(s![..self.index + 1])
    }

    /// Consumes the solver and returns the states computed so far, one per
    /// grid point reached. Call [`OdeIntegrate::run_to_bound`] first to get
    /// the whole sequence.
    pub fn into_states(self) -> Array1<f64> {
        let end = self.index + 1;
        self.x.slice_move(s![..end])
    }
}

impl<'a, R, S> OdeIntegrate for FixedStep<'a, R, S>
where
    R: Rate + ?Sized,
    S: StepRule,
{
    fn step(&mut self) {
        if self.finished() {
            return;
        }
        let t0 = self.t[self.index];
        let x0 = self.x[self.index];
        let x1 = x0 + self.rule.increment(t0, x0, self.dt, self.rate);
        self.index += 1;
        self.x[self.index] = x1;
        trace!(index = self.index, t = self.t[self.index], x = x1, "step");

        if !x1.is_finite() && !self.reported_non_finite {
            self.reported_non_finite = true;
            warn!(index = self.index, t = self.t[self.index], x = x1, "state is no longer finite");
        }
        if self.finished() {
            debug!(rule = self.rule.name(), x = x1, "finished integration");
        }
    }

    fn time(&self) -> f64 {
        self.t[self.index]
    }

    fn time_bound(&self) -> f64 {
        self.t[self.t.len() - 1]
    }

    fn state(&self) -> f64 {
        self.x[self.index]
    }

    fn finished(&self) -> bool {
        self.index + 1 == self.t.len()
    }
}

/// Integrates `dx/dt = rate(t, x)` along the grid `t` from `x0`.
///
/// Returns the states at every grid point: `x[0] = x0` and
/// `x[i] = x[i-1] + rule.increment(t[i-1], x[i-1], dt, rate)`.
///
/// Non-finite values returned by `rate` are not trapped; they show up in the
/// returned sequence.
///
/// # Errors
///
/// Fails if `t` is empty, `dt` is not positive, or the spacing of `t` does
/// not match `dt`.
pub fn integrate<R, S>(
    t: ArrayView1<f64>,
    x0: f64,
    dt: f64,
    rate: &R,
    rule: S,
) -> Result<Array1<f64>, InvalidArgument>
where
    R: Rate + ?Sized,
    S: StepRule,
{
    let mut solver = FixedStep::new(t, x0, dt, rate, rule)?;
    solver.run_to_bound();
    Ok(solver.into_states())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use crate::rate::{Constant, StateRate};
    use crate::rule::{Average, Mid, Rule, Start};
    use crate::TimeGrid;

    #[test]
    fn steps_one_at_a_time() {
        let grid = TimeGrid::new(0.5, 3).unwrap();
        let rate = Constant(2.);
        let mut solver = FixedStep::new(grid.view(), 1., 0.5, &rate, Rule::Start).unwrap();
        assert_eq!(solver.time(), 0.);
        assert_eq!(solver.state(), 1.);
        assert!(!solver.finished());

        solver.step();
        assert_eq!(solver.index(), 1);
        assert_eq!(solver.time(), 0.5);
        assert_eq!(solver.state(), 2.);
        assert_eq!(solver.states(), aview1(&[1., 2.]));

        solver.run_to_bound();
        assert!(solver.finished());
        assert_eq!(solver.time(), solver.time_bound());
        assert_eq!(solver.state(), 4.);

        // Stepping past the end leaves everything in place.
        solver.step();
        assert_eq!(solver.index(), 3);
        assert_eq!(solver.into_states(), array![1., 2., 3., 4.]);
    }

    #[test]
    fn consumed_before_finishing() {
        let grid = TimeGrid::new(0.5, 3).unwrap();
        let rate = Constant(1.);
        let solver = FixedStep::new(grid.view(), 5., 0.5, &rate, Rule::Start).unwrap();
        assert_eq!(solver.into_states(), array![5.]);

        let mut solver = FixedStep::new(grid.view(), 5., 0.5, &rate, Rule::Start).unwrap();
        solver.step();
        assert_eq!(solver.into_states(), array![5., 5.5]);
    }

    #[test]
    fn rule_types_match_selector() {
        let grid = TimeGrid::new(0.1, 8).unwrap();
        let rate = StateRate::new(|x| -x);
        let pairs = [
            (integrate(grid.view(), 1., 0.1, &rate, Start), Rule::Start),
            (integrate(grid.view(), 1., 0.1, &rate, Mid), Rule::Mid),
            (integrate(grid.view(), 1., 0.1, &rate, Average), Rule::Average),
        ];
        for (typed, rule) in pairs.iter() {
            let selected = integrate(grid.view(), 1., 0.1, &rate, *rule).unwrap();
            assert_eq!(typed.as_ref().unwrap(), &selected);
        }
    }

    #[test]
    fn single_point_grid() {
        let grid = TimeGrid::new(0.1, 0).unwrap();
        let x = integrate(grid.view(), 3., 0.1, &Constant(1.), Rule::Mid).unwrap();
        assert_eq!(x, array![3.]);
    }

    #[test]
    fn rejects_mismatched_step() {
        let grid = TimeGrid::new(0.1, 4).unwrap();
        let err = integrate(grid.view(), 0., 0.2, &Constant(1.), Rule::Start).unwrap_err();
        match err {
            InvalidArgument::StepMismatch { index, .. } => assert_eq!(index, 0),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            integrate(Array1::<f64>::zeros(0).view(), 0., 0.1, &Constant(1.), Rule::Start),
            Err(InvalidArgument::EmptyGrid)
        );
        assert_eq!(
            integrate(grid.view(), 0., 0., &Constant(1.), Rule::Start),
            Err(InvalidArgument::NonPositiveStep(0.))
        );
    }
}
