//! Pay breakdown model for the payroll engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DeductionBreakdown;

/// The complete pay picture for one pay period.
///
/// `net_pay` is always `gross_pay - deductions.total`, derived via
/// [`PayBreakdown::new`] and never independently set. No floor is applied:
/// when deductions exceed gross pay the net figure goes negative and the
/// caller decides how to handle it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DeductionBreakdown, PayBreakdown};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = DeductionBreakdown::new(
///     Decimal::from_str("900.00").unwrap(),
///     Decimal::from_str("300.00").unwrap(),
///     Decimal::from_str("400.00").unwrap(),
///     Decimal::ZERO,
/// );
/// let pay = PayBreakdown::new(Decimal::from_str("22500.00").unwrap(), deductions);
/// assert_eq!(pay.net_pay, Decimal::from_str("20900.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Base salary plus overtime pay plus allowances.
    pub gross_pay: Decimal,
    /// Statutory deductions, computed from base salary only.
    pub deductions: DeductionBreakdown,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}

impl PayBreakdown {
    /// Builds a pay breakdown, deriving net pay from the inputs.
    pub fn new(gross_pay: Decimal, deductions: DeductionBreakdown) -> Self {
        let net_pay = gross_pay - deductions.total;
        Self {
            gross_pay,
            deductions,
            net_pay,
        }
    }
}
