//! PhilHealth premium calculation.
//!
//! The PhilHealth premium is 3% of the monthly salary, split evenly between
//! employer and employee, with the salary base clamped into the published
//! floor and ceiling before the rate is applied. This module computes the
//! employee half (1.5%).

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The salary floor: lower salaries are billed as if they earned this much.
const PHILHEALTH_SALARY_FLOOR: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// The salary ceiling: higher salaries are billed at this cap.
const PHILHEALTH_SALARY_CEILING: Decimal = Decimal::from_parts(8_000_000, 0, 0, false, 2);

/// The employee share of the premium: half of the 3% rate.
const EMPLOYEE_PREMIUM_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// Computes the employee share of the monthly PhilHealth premium.
///
/// The salary is clamped into `[10,000, 80,000]` (ceiling applied first,
/// then floor: `max(floor, min(ceiling, salary))`) and the 1.5% employee
/// rate is applied to the clamped base. The premium therefore never falls
/// below 150 or rises above 1,200.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the salary is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_health_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let premium = compute_health_insurance(Decimal::from(20000)).unwrap();
/// assert_eq!(premium, Decimal::from_str("300").unwrap());
/// ```
pub fn compute_health_insurance(monthly_salary: Decimal) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
        });
    }

    let clamped = monthly_salary
        .min(PHILHEALTH_SALARY_CEILING)
        .max(PHILHEALTH_SALARY_FLOOR);

    Ok(clamped * EMPLOYEE_PREMIUM_RATE)
}
