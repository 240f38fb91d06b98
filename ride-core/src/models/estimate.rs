use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projected trip time and fare for a pickup/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub minutes: u32,
    pub cost: Decimal,
}

impl Estimate {
    pub fn time_label(&self) -> String {
        format!("{} minutes", self.minutes)
    }

    /// Fare with a dollar sign and exactly two decimals.
    pub fn cost_label(&self) -> String {
        format!("${:.2}", self.cost)
    }
}

impl fmt::Display for Estimate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}, {}", self.time_label(), self.cost_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn labels_format_minutes_and_dollars() {
        let estimate = Estimate {
            minutes: 23,
            cost: dec!(17.5),
        };

        assert_eq!(estimate.time_label(), "23 minutes");
        assert_eq!(estimate.cost_label(), "$17.50");
        assert_eq!(estimate.to_string(), "23 minutes, $17.50");
    }
}
