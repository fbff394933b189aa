//! Fixed-step integration of scalar initial-value problems on a uniform
//! time grid.
//!
//! ```
//! use ndarray_fixed_step::rate::StateRate;
//! use ndarray_fixed_step::{Rule, StepConfig};
//!
//! let config = StepConfig::default().dt(0.2).steps(10).x0(0.4).rule(Rule::Mid);
//! let trajectory = config.solve(&StateRate::new(|x| x * x)).unwrap();
//! assert_eq!(trajectory.time.len(), trajectory.state.len());
//! ```

pub mod compare;
pub mod config;
pub mod exact;
pub mod grid;
pub mod rate;
pub mod rule;
pub mod step;

pub use crate::config::{StepConfig, Trajectory};
pub use crate::grid::TimeGrid;
pub use crate::rate::Rate;
pub use crate::rule::{Average, Mid, Rule, Start, StepRule};
pub use crate::step::{integrate, FixedStep};

use thiserror::Error;

/// An argument was rejected before any stepping took place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("step size must be positive, got {0}")]
    NonPositiveStep(f64),
    /// The step size, or a grid time built from it, is infinite.
    #[error("step size {0} gives a grid that is not finite")]
    NonFiniteStep(f64),
    #[error("step count must not be negative, got {0}")]
    NegativeStepCount(i64),
    #[error("time grid is empty")]
    EmptyGrid,
    /// The grid gap starting at `index` differs from the requested step.
    #[error("step size {dt} does not match grid spacing {spacing} at index {index}")]
    StepMismatch { dt: f64, spacing: f64, index: usize },
    #[error("sequences have unequal lengths {0} and {1}")]
    LengthMismatch(usize, usize),
}

pub trait OdeIntegrate {
    /// Perform one step along the grid. Does nothing once finished.
    fn step(&mut self);
    /// Current time.
    fn time(&self) -> f64;
    /// The last time of the grid.
    fn time_bound(&self) -> f64;
    /// Current state.
    fn state(&self) -> f64;
    /// Returns `true` if the integration has reached `time_bound`.
    fn finished(&self) -> bool {
        self.time() == self.time_bound()
    }
    /// Integrate until reaching `time_bound`.
    fn run_to_bound(&mut self) {
        while !self.finished() {
            self.step();
        }
    }
}
