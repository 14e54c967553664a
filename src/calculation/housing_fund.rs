//! Pag-IBIG fund contribution calculation.
//!
//! The Pag-IBIG (housing fund) contribution is a tiered percentage of the
//! monthly salary: 1% at or below the 1,500 threshold, 2% above it.
//!
//! The published policy text mentions a ₱100 monthly cap, but contributions
//! have always been remitted uncapped and historical payroll records were
//! generated that way, so no cap is applied here.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The salary threshold at which the contribution rate steps up.
const HOUSING_FUND_RATE_THRESHOLD: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// The contribution rate at or below the threshold (1%).
const HOUSING_FUND_LOWER_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// The contribution rate above the threshold (2%).
const HOUSING_FUND_UPPER_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Computes the monthly Pag-IBIG fund contribution.
///
/// Salaries at or below 1,500 contribute 1%; salaries strictly above 1,500
/// contribute 2%. The rate switch at the threshold means the contribution
/// jumps from 15 at a salary of 1,500 to roughly 30 just above it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the salary is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_housing_fund;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contribution = compute_housing_fund(Decimal::from(20000)).unwrap();
/// assert_eq!(contribution, Decimal::from_str("400").unwrap());
/// ```
pub fn compute_housing_fund(monthly_salary: Decimal) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
        });
    }

    let rate = if monthly_salary <= HOUSING_FUND_RATE_THRESHOLD {
        HOUSING_FUND_LOWER_RATE
    } else {
        HOUSING_FUND_UPPER_RATE
    };

    Ok(monthly_salary * rate)
}
