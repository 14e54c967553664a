//! Calculation logic for the payroll engine.
//!
//! This module contains all the computation functions: the SSS bracket
//! lookup, the PhilHealth clamped percentage, the Pag-IBIG tiered
//! percentage, the BIR progressive withholding tax, the aggregate deduction
//! breakdown, net-pay composition, and overtime pay.
//!
//! Every function here is pure and stateless: a closed-form function of its
//! arguments with no I/O, no shared state, and no ordering requirements
//! between calls. Callers may invoke them concurrently without
//! coordination.

mod deductions;
mod health_insurance;
mod housing_fund;
mod net_pay;
mod overtime;
mod social_insurance;
mod withholding_tax;

pub use deductions::compute_deductions;
pub use health_insurance::compute_health_insurance;
pub use housing_fund::compute_housing_fund;
pub use net_pay::compute_net_pay;
pub use overtime::{
    compute_overtime_pay, compute_overtime_pay_for_category, hourly_rate_from_monthly_salary,
};
pub use social_insurance::compute_social_insurance;
pub use withholding_tax::compute_withholding_tax;
