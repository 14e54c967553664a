//! Request types for the payroll engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OvertimeCategory;

/// Request body for `POST /net-pay`.
///
/// `overtime_pay` and `allowances` default to zero when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetPayRequest {
    /// The employee's monthly base salary.
    pub base_salary: Decimal,
    /// Approved overtime pay for the period, if any.
    #[serde(default)]
    pub overtime_pay: Option<Decimal>,
    /// Allowances for the period, if any.
    #[serde(default)]
    pub allowances: Option<Decimal>,
}

/// Request body for `POST /deductions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsRequest {
    /// The employee's monthly base salary.
    pub monthly_salary: Decimal,
}

/// Request body for `POST /overtime-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimePayRequest {
    /// The employee's monthly base salary, from which the hourly rate is
    /// derived.
    pub monthly_salary: Decimal,
    /// Overtime hours worked.
    pub hours: Decimal,
    /// The overtime category, determining the rate multiplier.
    pub category: OvertimeCategory,
}
