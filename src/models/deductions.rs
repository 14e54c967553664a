//! Deduction breakdown model for the payroll engine.
//!
//! This module contains the [`DeductionBreakdown`] type capturing the four
//! employee-side statutory deductions and their total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four statutory deductions withheld from an employee's base salary.
///
/// The `total` field is always derived from the four components via
/// [`DeductionBreakdown::new`]; it is never an independently supplied value.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = DeductionBreakdown::new(
///     Decimal::from_str("900.00").unwrap(),
///     Decimal::from_str("300.00").unwrap(),
///     Decimal::from_str("400.00").unwrap(),
///     Decimal::ZERO,
/// );
/// assert_eq!(breakdown.total, Decimal::from_str("1600.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// SSS contribution (employee share).
    pub social_insurance: Decimal,
    /// PhilHealth premium (employee half of the 3% premium).
    pub health_insurance: Decimal,
    /// Pag-IBIG fund contribution.
    pub housing_fund: Decimal,
    /// BIR withholding tax for the month.
    pub withholding_tax: Decimal,
    /// Sum of the four components.
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// Builds a breakdown from the four components, deriving the total.
    pub fn new(
        social_insurance: Decimal,
        health_insurance: Decimal,
        housing_fund: Decimal,
        withholding_tax: Decimal,
    ) -> Self {
        let total = social_insurance + health_insurance + housing_fund + withholding_tax;
        Self {
            social_insurance,
            health_insurance,
            housing_fund,
            withholding_tax,
            total,
        }
    }

    /// Returns the sum of the four components.
    ///
    /// For a breakdown built with [`DeductionBreakdown::new`] this always
    /// equals `total`.
    pub fn components_sum(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_fund + self.withholding_tax
    }
}
