//! Uniform time grids.

use ndarray::prelude::*;

use crate::InvalidArgument;

/// Relative tolerance used when checking a grid's spacing against a step size.
pub(crate) const SPACING_RTOL: f64 = 1e-9;

/// The ordered times `[0, dt, 2 dt, …, n dt]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    t: Array1<f64>,
}

impl TimeGrid {
    /// Creates the grid of `steps + 1` points spaced by `dt`.
    ///
    /// Each point is computed as `i * dt` so rounding does not accumulate
    /// along the grid.
    ///
    /// # Errors
    ///
    /// Fails if `dt` is not positive (this includes NaN), `steps` is
    /// negative, or the last grid time `steps * dt` is not finite.
    pub fn new(dt: f64, steps: i64) -> Result<TimeGrid, InvalidArgument> {
        check_step(dt)?;
        if steps < 0 {
            return Err(InvalidArgument::NegativeStepCount(steps));
        }
        if !(steps as f64 * dt).is_finite() {
            return Err(InvalidArgument::NonFiniteStep(dt));
        }
        let t = Array1::from_shape_fn(steps as usize + 1, |i| i as f64 * dt);
        Ok(TimeGrid { dt, t })
    }

    /// Step size.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps, one less than the number of points.
    pub fn steps(&self) -> usize {
        self.t.len() - 1
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always `false`: a grid holds at least its starting time.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Last time of the grid.
    pub fn end(&self) -> f64 {
        self.t[self.t.len() - 1]
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.t.view()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.t
    }
}

fn check_step(dt: f64) -> Result<(), InvalidArgument> {
    if !(dt > 0.) {
        return Err(InvalidArgument::NonPositiveStep(dt));
    }
    if !dt.is_finite() {
        return Err(InvalidArgument::NonFiniteStep(dt));
    }
    Ok(())
}

/// Checks that `t` is non-empty and uniformly spaced by `dt`.
pub(crate) fn check_spacing(t: ArrayView1<f64>, dt: f64) -> Result<(), InvalidArgument> {
    check_step(dt)?;
    if t.is_empty() {
        return Err(InvalidArgument::EmptyGrid);
    }
    for index in 0..t.len() - 1 {
        let spacing = t[index + 1] - t[index];
        let tol = SPACING_RTOL * t[index + 1].abs().max(dt);
        if !((spacing - dt).abs() <= tol) {
            return Err(InvalidArgument::StepMismatch { dt, spacing, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn grid_points() {
        let grid = TimeGrid::new(0.25, 4).unwrap();
        assert_eq!(grid.view(), aview1(&[0., 0.25, 0.5, 0.75, 1.]));
        assert_eq!(grid.steps(), 4);
        assert_eq!(grid.end(), 1.);
    }

    #[test]
    fn zero_steps() {
        let grid = TimeGrid::new(0.1, 0).unwrap();
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_empty());
        assert_eq!(grid.end(), 0.);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(TimeGrid::new(0., 3), Err(InvalidArgument::NonPositiveStep(0.)));
        assert_eq!(TimeGrid::new(-0.5, 3), Err(InvalidArgument::NonPositiveStep(-0.5)));
        assert!(TimeGrid::new(::std::f64::NAN, 3).is_err());
        assert_eq!(
            TimeGrid::new(::std::f64::INFINITY, 3),
            Err(InvalidArgument::NonFiniteStep(::std::f64::INFINITY))
        );
        assert_eq!(
            TimeGrid::new(1e308, 10),
            Err(InvalidArgument::NonFiniteStep(1e308))
        );
        assert_eq!(TimeGrid::new(0.1, -1), Err(InvalidArgument::NegativeStepCount(-1)));
    }

    #[test]
    fn spacing() {
        let grid = TimeGrid::new(0.1, 50).unwrap();
        assert!(check_spacing(grid.view(), 0.1).is_ok());
        assert_eq!(
            check_spacing(grid.view(), 0.2),
            Err(InvalidArgument::StepMismatch { dt: 0.2, spacing: 0.1, index: 0 })
        );
        assert_eq!(
            check_spacing(grid.view(), ::std::f64::INFINITY),
            Err(InvalidArgument::NonFiniteStep(::std::f64::INFINITY))
        );
        assert_eq!(
            check_spacing(Array1::<f64>::zeros(0).view(), 0.1),
            Err(InvalidArgument::EmptyGrid)
        );
        let uneven = array![0., 0.1, 0.3];
        match check_spacing(uneven.view(), 0.1) {
            Err(InvalidArgument::StepMismatch { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected {:?}", other),
        }
    }
}
