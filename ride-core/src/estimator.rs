//! Trip time and fare estimation.
//!
//! There is no routing backend. [`MockEstimator`] draws a uniformly random
//! estimate from the ranges in [`EstimateConfig`] and ignores the locations.
//! A real routing service would implement [`RideEstimator`] instead.
//!
//! # Ranges
//!
//! | Field   | Default          | Interval  |
//! |---------|------------------|-----------|
//! | minutes | 10 to 40         | `[min, max)` |
//! | cost    | $10.00 to $30.00 | `[min, max)` |
//!
//! Cost is drawn as a whole number of cents, so the two-decimal value shown
//! to the user never rounds up to the upper bound.
//!
//! # Example
//!
//! ```
//! use ride_core::estimator::{EstimateConfig, MockEstimator, RideEstimator};
//!
//! let mut estimator = MockEstimator::seeded(EstimateConfig::default(), 7).unwrap();
//! let estimate = estimator.estimate("Home", "Office");
//!
//! assert!((10..40).contains(&estimate.minutes));
//! ```

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Estimate;

/// Source of estimates for a pickup/destination pair.
pub trait RideEstimator: fmt::Debug {
    fn estimate(
        &mut self,
        pickup: &str,
        destination: &str,
    ) -> Estimate;
}

/// Errors raised when an [`EstimateConfig`] describes an unusable range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateConfigError {
    #[error("minute range is empty: min {min} must be below max {max}")]
    InvalidMinuteRange { min: u32, max: u32 },

    #[error("cost range is empty: min {min} must be below max {max}")]
    InvalidCostRange { min: Decimal, max: Decimal },

    #[error("cost bound must be non-negative, got {0}")]
    NegativeCost(Decimal),

    #[error("cost bound must have at most two decimals, got {0}")]
    CostPrecision(Decimal),

    #[error("cost bound is too large, got {0}")]
    CostOverflow(Decimal),
}

/// Ranges the mock estimator draws from. Both ranges are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub min_cost: Decimal,
    pub max_cost: Decimal,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            min_minutes: 10,
            max_minutes: 40,
            min_cost: Decimal::new(1000, 2),
            max_cost: Decimal::new(3000, 2),
        }
    }
}

impl EstimateConfig {
    /// Checks that both ranges are non-empty and the cost bounds are whole cents.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateConfigError`] for the first problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ride_core::estimator::{EstimateConfig, EstimateConfigError};
    ///
    /// let config = EstimateConfig {
    ///     min_minutes: 40,
    ///     max_minutes: 10,
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(EstimateConfigError::InvalidMinuteRange { min: 40, max: 10 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), EstimateConfigError> {
        self.cents_range().map(|_| ())
    }

    fn cents_range(&self) -> Result<(i64, i64), EstimateConfigError> {
        if self.min_minutes >= self.max_minutes {
            return Err(EstimateConfigError::InvalidMinuteRange {
                min: self.min_minutes,
                max: self.max_minutes,
            });
        }
        let min = to_cents(self.min_cost)?;
        let max = to_cents(self.max_cost)?;
        if min >= max {
            return Err(EstimateConfigError::InvalidCostRange {
                min: self.min_cost,
                max: self.max_cost,
            });
        }
        Ok((min, max))
    }
}

fn to_cents(cost: Decimal) -> Result<i64, EstimateConfigError> {
    if cost.is_sign_negative() && !cost.is_zero() {
        return Err(EstimateConfigError::NegativeCost(cost));
    }
    let cents = cost
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(EstimateConfigError::CostOverflow(cost))?;
    if !cents.fract().is_zero() {
        return Err(EstimateConfigError::CostPrecision(cost));
    }
    cents.to_i64().ok_or(EstimateConfigError::CostOverflow(cost))
}

/// Random estimates within the configured ranges.
#[derive(Debug)]
pub struct MockEstimator {
    minutes: (u32, u32),
    cents: (i64, i64),
    rng: StdRng,
}

impl MockEstimator {
    /// Creates an estimator seeded from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateConfigError`] if the configuration is invalid.
    pub fn new(config: EstimateConfig) -> Result<Self, EstimateConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an estimator that yields the same sequence for the same seed.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateConfigError`] if the configuration is invalid.
    pub fn seeded(
        config: EstimateConfig,
        seed: u64,
    ) -> Result<Self, EstimateConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: EstimateConfig,
        rng: StdRng,
    ) -> Result<Self, EstimateConfigError> {
        let cents = config.cents_range()?;
        Ok(Self {
            minutes: (config.min_minutes, config.max_minutes),
            cents,
            rng,
        })
    }
}

impl RideEstimator for MockEstimator {
    fn estimate(
        &mut self,
        _pickup: &str,
        _destination: &str,
    ) -> Estimate {
        let minutes = self.rng.gen_range(self.minutes.0..self.minutes.1);
        let cents = self.rng.gen_range(self.cents.0..self.cents.1);
        Estimate {
            minutes,
            cost: Decimal::new(cents, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EstimateConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_minute_range() {
        let config = EstimateConfig {
            min_minutes: 20,
            max_minutes: 20,
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(EstimateConfigError::InvalidMinuteRange { min: 20, max: 20 })
        );
    }

    #[test]
    fn validate_rejects_inverted_cost_range() {
        let config = EstimateConfig {
            min_cost: dec!(30.00),
            max_cost: dec!(10.00),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(EstimateConfigError::InvalidCostRange {
                min: dec!(30.00),
                max: dec!(10.00)
            })
        );
    }

    #[test]
    fn validate_rejects_negative_cost() {
        let config = EstimateConfig {
            min_cost: dec!(-1.00),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(EstimateConfigError::NegativeCost(dec!(-1.00)))
        );
    }

    #[test]
    fn validate_rejects_sub_cent_bounds() {
        let config = EstimateConfig {
            max_cost: dec!(30.005),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(EstimateConfigError::CostPrecision(dec!(30.005)))
        );
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = EstimateConfig {
            min_minutes: 50,
            ..Default::default()
        };

        assert!(MockEstimator::new(config).is_err());
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimates_stay_within_default_ranges() {
        let mut estimator = MockEstimator::seeded(EstimateConfig::default(), 42).unwrap();

        for _ in 0..500 {
            let estimate = estimator.estimate("Home", "Office");
            assert!((10..40).contains(&estimate.minutes), "{estimate}");
            assert!(estimate.cost >= dec!(10.00), "{estimate}");
            assert!(estimate.cost < dec!(30.00), "{estimate}");
            assert_eq!(estimate.cost.scale(), 2);
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = MockEstimator::seeded(EstimateConfig::default(), 9).unwrap();
        let mut b = MockEstimator::seeded(EstimateConfig::default(), 9).unwrap();

        for _ in 0..10 {
            assert_eq!(a.estimate("A", "B"), b.estimate("A", "B"));
        }
    }

    #[test]
    fn narrow_range_yields_single_value() {
        let config = EstimateConfig {
            min_minutes: 15,
            max_minutes: 16,
            min_cost: dec!(12.34),
            max_cost: dec!(12.35),
        };
        let mut estimator = MockEstimator::seeded(config, 1).unwrap();

        let estimate = estimator.estimate("A", "B");

        assert_eq!(estimate.minutes, 15);
        assert_eq!(estimate.cost_label(), "$12.34");
    }
}
