//! Problem configuration with stated defaults.

use ndarray::prelude::*;

use crate::rate::Rate;
use crate::rule::Rule;
use crate::step::integrate;
use crate::{InvalidArgument, TimeGrid};

/// Everything needed to integrate a scalar problem apart from its rate.
///
/// The defaults are `dt = 0.1`, `steps = 10`, `x0 = 0.0` and the
/// [`Rule::Start`] rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StepConfig {
    pub dt: f64,
    pub steps: i64,
    pub x0: f64,
    pub rule: Rule,
}

impl Default for StepConfig {
    fn default() -> StepConfig {
        StepConfig {
            dt: 0.1,
            steps: 10,
            x0: 0.,
            rule: Rule::default(),
        }
    }
}

impl StepConfig {
    pub fn dt(mut self, dt: f64) -> StepConfig {
        self.dt = dt;
        self
    }

    pub fn steps(mut self, steps: i64) -> StepConfig {
        self.steps = steps;
        self
    }

    pub fn x0(mut self, x0: f64) -> StepConfig {
        self.x0 = x0;
        self
    }

    pub fn rule(mut self, rule: Rule) -> StepConfig {
        self.rule = rule;
        self
    }

    /// Builds the time grid `[0, dt, …, steps * dt]`.
    pub fn grid(&self) -> Result<TimeGrid, InvalidArgument> {
        TimeGrid::new(self.dt, self.steps)
    }

    /// Integrates `rate` from `x0` over the configured grid.
    pub fn solve<R>(&self, rate: &R) -> Result<Trajectory, InvalidArgument>
    where
        R: Rate + ?Sized,
    {
        let grid = self.grid()?;
        let state = integrate(grid.view(), self.x0, self.dt, rate, self.rule)?;
        Ok(Trajectory {
            time: grid.into_inner(),
            state,
        })
    }
}

/// Times and states of a solved problem, ready to be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Array1<f64>,
    pub state: Array1<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over `(t, x)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().cloned().zip(self.state.iter().cloned())
    }

    /// Final state, or `None` for an empty trajectory.
    pub fn last(&self) -> Option<f64> {
        self.state.iter().last().copied()
    }
}
