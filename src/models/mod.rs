//! Core data models for the payroll engine.
//!
//! This module contains all the value types used throughout the engine.

mod deductions;
mod money;
mod overtime;
mod pay;

pub use deductions::DeductionBreakdown;
pub use money::{format_peso, round_centavos};
pub use overtime::OvertimeCategory;
pub use pay::PayBreakdown;
