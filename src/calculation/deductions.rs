//! Aggregate deduction computation.
//!
//! Composes the four statutory deduction lookups into a single
//! [`DeductionBreakdown`].

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::DeductionBreakdown;

use super::{
    compute_health_insurance, compute_housing_fund, compute_social_insurance,
    compute_withholding_tax,
};

/// Computes all four statutory deductions for a monthly salary.
///
/// The breakdown's `total` is derived from the components; see
/// [`DeductionBreakdown::new`].
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidSalary`] when the salary is
/// negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = compute_deductions(Decimal::from(20000)).unwrap();
/// assert_eq!(deductions.social_insurance, Decimal::from_str("900.00").unwrap());
/// assert_eq!(deductions.total, Decimal::from_str("1600.00").unwrap());
/// ```
pub fn compute_deductions(monthly_salary: Decimal) -> EngineResult<DeductionBreakdown> {
    let social_insurance = compute_social_insurance(monthly_salary)?;
    let health_insurance = compute_health_insurance(monthly_salary)?;
    let housing_fund = compute_housing_fund(monthly_salary)?;
    let withholding_tax = compute_withholding_tax(monthly_salary)?;

    Ok(DeductionBreakdown::new(
        social_insurance,
        health_insurance,
        housing_fund,
        withholding_tax,
    ))
}
