//! Error norms between a numerical sequence and a reference one.

use ndarray::prelude::*;
use ndarray::{FoldWhile, Zip};

use crate::InvalidArgument;

fn check_lengths(x: ArrayView1<f64>, reference: ArrayView1<f64>) -> Result<(), InvalidArgument> {
    if x.len() != reference.len() {
        return Err(InvalidArgument::LengthMismatch(x.len(), reference.len()));
    }
    Ok(())
}

/// Largest absolute difference between `x` and `reference`.
///
/// A NaN difference makes the result NaN. Empty sequences give zero.
pub fn max_abs_error(x: ArrayView1<f64>, reference: ArrayView1<f64>) -> Result<f64, InvalidArgument> {
    check_lengths(x, reference)?;
    Ok(Zip::from(x)
        .and(reference)
        .fold_while(0., |acc: f64, &x, &r| {
            let diff = (x - r).abs();
            if diff.is_nan() {
                FoldWhile::Done(diff)
            } else {
                FoldWhile::Continue(acc.max(diff))
            }
        })
        .into_inner())
}

/// Root-mean-square difference between `x` and `reference`.
///
/// Empty sequences give zero.
pub fn rms_error(x: ArrayView1<f64>, reference: ArrayView1<f64>) -> Result<f64, InvalidArgument> {
    check_lengths(x, reference)?;
    if x.is_empty() {
        return Ok(0.);
    }
    Ok((Zip::from(x)
        .and(reference)
        .fold_while(0., |acc, &x, &r| {
            let diff = x - r;
            FoldWhile::Continue(acc + diff * diff)
        })
        .into_inner()
        / x.len() as f64)
        .sqrt())
}
