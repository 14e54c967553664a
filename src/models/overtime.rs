//! Overtime category model for the payroll engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of overtime worked, determining the rate multiplier.
///
/// Each category is bound to a fixed multiplier applied to the hourly rate:
/// regular weekday overtime pays 1.25x, holiday overtime pays 2.0x, and
/// night differential (10 PM - 6 AM) pays 1.5x. The multiplier is a pure
/// function of the category and is not independently settable.
///
/// # Example
///
/// ```
/// use payroll_engine::models::OvertimeCategory;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let multiplier = OvertimeCategory::Holiday.multiplier();
/// assert_eq!(multiplier, Decimal::from_str("2.0").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCategory {
    /// Weekday overtime at 1.25x the hourly rate.
    Regular,
    /// Holiday overtime at 2.0x the hourly rate.
    Holiday,
    /// Night differential (10 PM - 6 AM) at 1.5x the hourly rate.
    NightDifferential,
}

impl OvertimeCategory {
    /// Returns the fixed rate multiplier for this category.
    pub fn multiplier(self) -> Decimal {
        match self {
            OvertimeCategory::Regular => Decimal::new(125, 2),
            OvertimeCategory::Holiday => Decimal::new(20, 1),
            OvertimeCategory::NightDifferential => Decimal::new(15, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_regular_multiplier_is_1_25() {
        assert_eq!(OvertimeCategory::Regular.multiplier(), dec("1.25"));
    }

    #[test]
    fn test_holiday_multiplier_is_2_0() {
        assert_eq!(OvertimeCategory::Holiday.multiplier(), dec("2.0"));
    }

    #[test]
    fn test_night_differential_multiplier_is_1_5() {
        assert_eq!(OvertimeCategory::NightDifferential.multiplier(), dec("1.5"));
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let json = serde_json::to_string(&OvertimeCategory::NightDifferential).unwrap();
        assert_eq!(json, "\"night_differential\"");

        let json = serde_json::to_string(&OvertimeCategory::Regular).unwrap();
        assert_eq!(json, "\"regular\"");
    }

    #[test]
    fn test_deserialization_rejects_unknown_category() {
        let result: Result<OvertimeCategory, _> = serde_json::from_str("\"weekend\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_all_categories() {
        for category in [
            OvertimeCategory::Regular,
            OvertimeCategory::Holiday,
            OvertimeCategory::NightDifferential,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            let parsed: OvertimeCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }
}
