//! Tilt and scale mapping: turns two category counts into seesaw motion.

use seesaw_protocol::{BalanceConfig, BalanceInput, BalanceResult, Side};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BalanceConfigError {
    #[error("max tilt must be a finite, non-negative angle (got {0})")]
    InvalidMaxTilt(f64),
    #[error("size change ratio must be finite and greater than zero (got {0})")]
    InvalidSizeRatio(f64),
    #[error("size change ratio {0} has no finite reciprocal")]
    UnrepresentableReciprocal(f64),
}

/// Check that a configuration yields finite, positive output for every input.
pub fn validate_config(config: &BalanceConfig) -> Result<(), BalanceConfigError> {
    if !config.max_tilt_degrees.is_finite() || config.max_tilt_degrees < 0.0 {
        return Err(BalanceConfigError::InvalidMaxTilt(config.max_tilt_degrees));
    }
    if !config.size_change_ratio.is_finite() || config.size_change_ratio <= 0.0 {
        return Err(BalanceConfigError::InvalidSizeRatio(
            config.size_change_ratio,
        ));
    }
    if !(1.0 / config.size_change_ratio).is_finite() {
        return Err(BalanceConfigError::UnrepresentableReciprocal(
            config.size_change_ratio,
        ));
    }
    Ok(())
}

/// Map two counts to a tilt angle and a pair of scale factors.
///
/// The tilt is the difference of the two shares of the total, scaled to
/// `max_tilt_degrees`: positive when `good_count` dominates, negative when
/// `low_count` does. The dominant side grows by `size_change_ratio` and the
/// other shrinks by its reciprocal. Both zero yields the neutral result.
pub fn compute_balance(good_count: u64, low_count: u64, config: &BalanceConfig) -> BalanceResult {
    if good_count == 0 && low_count == 0 {
        return BalanceResult::NEUTRAL;
    }

    // Difference and total are taken exactly before rounding to f64, so counts
    // above 2^53 that differ still tilt toward the larger side.
    let difference = i128::from(good_count) - i128::from(low_count);
    let total = u128::from(good_count) + u128::from(low_count);
    let tilt_degrees = (difference as f64 / total as f64) * config.max_tilt_degrees;

    let grown = config.size_change_ratio;
    let shrunk = 1.0 / config.size_change_ratio;

    let (good_scale_factor, low_scale_factor, dominant) = match good_count.cmp(&low_count) {
        std::cmp::Ordering::Greater => (grown, shrunk, Some(Side::Good)),
        std::cmp::Ordering::Less => (shrunk, grown, Some(Side::Low)),
        std::cmp::Ordering::Equal => (1.0, 1.0, None),
    };

    BalanceResult {
        tilt_degrees,
        good_scale_factor,
        low_scale_factor,
        dominant,
    }
}

/// Shorthand for [`compute_balance`] on a bundled input.
pub fn compute(input: &BalanceInput) -> BalanceResult {
    compute_balance(input.good_count, input.low_count, &input.config)
}
