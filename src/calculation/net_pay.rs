//! Gross and net pay composition.
//!
//! Combines base salary, overtime pay, and allowances into gross pay and
//! subtracts the statutory deductions to reach net pay.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PayBreakdown;

use super::compute_deductions;

/// Computes the full pay breakdown for a pay period.
///
/// `gross_pay = base_salary + overtime_pay + allowances`, with the optional
/// earnings defaulting to zero. Deductions are computed from the base salary
/// only: overtime and allowances are not subject to the four statutory
/// deductions. `net_pay = gross_pay - deductions.total`, with no floor
/// applied; when deductions exceed gross pay the caller sees the negative
/// figure.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the base salary is negative
/// and [`EngineError::InvalidAmount`] when overtime pay or allowances are
/// negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_net_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = compute_net_pay(
///     Decimal::from(20000),
///     Some(Decimal::from(2000)),
///     Some(Decimal::from(500)),
/// )
/// .unwrap();
/// assert_eq!(pay.gross_pay, Decimal::from(22500));
/// assert_eq!(pay.net_pay, Decimal::from_str("20900").unwrap());
/// ```
pub fn compute_net_pay(
    base_salary: Decimal,
    overtime_pay: Option<Decimal>,
    allowances: Option<Decimal>,
) -> EngineResult<PayBreakdown> {
    let overtime_pay = overtime_pay.unwrap_or(Decimal::ZERO);
    let allowances = allowances.unwrap_or(Decimal::ZERO);

    if overtime_pay < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "overtime pay".to_string(),
            amount: overtime_pay,
        });
    }
    if allowances < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "allowances".to_string(),
            amount: allowances,
        });
    }

    let deductions = compute_deductions(base_salary)?;
    let gross_pay = base_salary + overtime_pay + allowances;

    Ok(PayBreakdown::new(gross_pay, deductions))
}
