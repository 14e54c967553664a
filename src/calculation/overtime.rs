//! Overtime pay calculation.
//!
//! Overtime pay is a pure multiplication: hourly rate x hours x category
//! multiplier. The hourly rate is derived from the monthly salary assuming
//! 22 working days of 8 hours. Hours bounds (the timesheet form caps an
//! entry at 12 hours) are the caller's responsibility; this module only
//! rejects negative inputs.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::OvertimeCategory;

/// Working hours in a month: 22 working days x 8 hours.
const MONTHLY_WORK_HOURS: Decimal = Decimal::from_parts(176, 0, 0, false, 0);

/// Derives the hourly rate from a monthly salary.
///
/// The divisor is the standard 176-hour month (22 working days x 8 hours).
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the salary is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::hourly_rate_from_monthly_salary;
/// use rust_decimal::Decimal;
///
/// let rate = hourly_rate_from_monthly_salary(Decimal::from(17600)).unwrap();
/// assert_eq!(rate, Decimal::from(100));
/// ```
pub fn hourly_rate_from_monthly_salary(monthly_salary: Decimal) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
        });
    }

    Ok(monthly_salary / MONTHLY_WORK_HOURS)
}

/// Computes overtime pay from an hourly rate, hours worked, and a rate
/// multiplier.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRate`], [`EngineError::InvalidHours`], or
/// [`EngineError::InvalidMultiplier`] when the corresponding input is
/// negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = compute_overtime_pay(
///     Decimal::from(200),
///     Decimal::from(2),
///     Decimal::from_str("1.25").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(pay, Decimal::from(500));
/// ```
pub fn compute_overtime_pay(
    hourly_rate: Decimal,
    hours: Decimal,
    multiplier: Decimal,
) -> EngineResult<Decimal> {
    if hourly_rate < Decimal::ZERO {
        return Err(EngineError::InvalidRate { rate: hourly_rate });
    }
    if hours < Decimal::ZERO {
        return Err(EngineError::InvalidHours { hours });
    }
    if multiplier < Decimal::ZERO {
        return Err(EngineError::InvalidMultiplier { multiplier });
    }

    Ok(hourly_rate * hours * multiplier)
}

/// Computes overtime pay directly from a monthly salary and an overtime
/// category.
///
/// Derives the hourly rate via [`hourly_rate_from_monthly_salary`] and
/// applies the category's fixed multiplier. This is the composition an
/// overtime entry form performs before persisting an overtime record.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] or [`EngineError::InvalidHours`]
/// when the corresponding input is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_overtime_pay_for_category;
/// use payroll_engine::models::OvertimeCategory;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = compute_overtime_pay_for_category(
///     Decimal::from(17600),
///     Decimal::from(2),
///     OvertimeCategory::Regular,
/// )
/// .unwrap();
/// assert_eq!(pay, Decimal::from(250));
/// ```
pub fn compute_overtime_pay_for_category(
    monthly_salary: Decimal,
    hours: Decimal,
    category: OvertimeCategory,
) -> EngineResult<Decimal> {
    let hourly_rate = hourly_rate_from_monthly_salary(monthly_salary)?;
    compute_overtime_pay(hourly_rate, hours, category.multiplier())
}
