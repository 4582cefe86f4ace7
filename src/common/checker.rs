//! This file defines some functions that check some pre-conditions
//! E.g., ranges of hyperparameters.
use crate::{MiniLabError, Result};

use std::ops::RangeBounds;
use std::fmt::Debug;


/// Check whether `value` lies in `range`.
/// `name` is used for the error message.
#[inline(always)]
pub(crate) fn check_range<R>(name: &str, value: f64, range: R) -> Result<()>
    where R: RangeBounds<f64> + Debug,
{
    if value.is_finite() && range.contains(&value) {
        return Ok(());
    }
    Err(MiniLabError::invalid(
        format!("`{name}` must be in {range:?}, got {value}")
    ))
}


/// Check whether the given value is a finite, non-negative number.
#[inline(always)]
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<()> {
    check_range(name, value, 0f64..)
}


/// Check whether the given value is a finite, positive number.
#[inline(always)]
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0f64 {
        return Ok(());
    }
    Err(MiniLabError::invalid(
        format!("`{name}` must be positive, got {value}")
    ))
}


/// Check whether the coordinates of a point are finite.
#[inline(always)]
pub(crate) fn check_finite_point(x: f64, y: f64) -> Result<()> {
    if x.is_finite() && y.is_finite() {
        return Ok(());
    }
    Err(MiniLabError::invalid(
        format!("point coordinates must be finite, got ({x}, {y})")
    ))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert!(check_range("alpha", 0.5, 0f64..=1f64).is_ok());
        assert!(check_range("alpha", 1.5, 0f64..=1f64).is_err());
        assert!(check_range("alpha", f64::NAN, 0f64..=1f64).is_err());
        assert!(check_non_negative("h", 0.0).is_ok());
        assert!(check_non_negative("h", -1.0).is_err());
        assert!(check_positive("cost", 0.0).is_err());
        assert!(check_finite_point(0.1, f64::INFINITY).is_err());
    }
}
