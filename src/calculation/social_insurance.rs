//! SSS contribution bracket lookup.
//!
//! This module computes the employee share of the monthly SSS (Social
//! Security System) contribution. The contribution schedule is a step
//! function over salary brackets of width 500: the first bracket whose
//! ceiling is at or above the salary determines the contribution. Salaries
//! above the last published bracket pay the maximum contribution.
//!
//! The schedule is kept as an explicit ordered table of `(ceiling,
//! contribution)` pairs rather than a formula, matching the published SSS
//! table and making bracket updates a data change.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Builds a peso amount from centavos at compile time.
const fn peso(centavos: u32) -> Decimal {
    Decimal::from_parts(centavos, 0, 0, false, 2)
}

/// The SSS contribution schedule as `(salary ceiling, employee contribution)`
/// pairs, ordered by ascending ceiling. Bracket tests are inclusive of the
/// ceiling.
const SSS_BRACKETS: [(Decimal, Decimal); 42] = [
    (peso(425_000), peso(18_000)),
    (peso(475_000), peso(20_250)),
    (peso(525_000), peso(22_500)),
    (peso(575_000), peso(24_750)),
    (peso(625_000), peso(27_000)),
    (peso(675_000), peso(29_250)),
    (peso(725_000), peso(31_500)),
    (peso(775_000), peso(33_750)),
    (peso(825_000), peso(36_000)),
    (peso(875_000), peso(38_250)),
    (peso(925_000), peso(40_500)),
    (peso(975_000), peso(42_750)),
    (peso(1_025_000), peso(45_000)),
    (peso(1_075_000), peso(47_250)),
    (peso(1_125_000), peso(49_500)),
    (peso(1_175_000), peso(51_750)),
    (peso(1_225_000), peso(54_000)),
    (peso(1_275_000), peso(56_250)),
    (peso(1_325_000), peso(58_500)),
    (peso(1_375_000), peso(60_750)),
    (peso(1_425_000), peso(63_000)),
    (peso(1_475_000), peso(65_250)),
    (peso(1_525_000), peso(67_500)),
    (peso(1_575_000), peso(69_750)),
    (peso(1_625_000), peso(72_000)),
    (peso(1_675_000), peso(74_250)),
    (peso(1_725_000), peso(76_500)),
    (peso(1_775_000), peso(78_750)),
    (peso(1_825_000), peso(81_000)),
    (peso(1_875_000), peso(83_250)),
    (peso(1_925_000), peso(85_500)),
    (peso(1_975_000), peso(87_750)),
    (peso(2_025_000), peso(90_000)),
    (peso(2_075_000), peso(92_250)),
    (peso(2_125_000), peso(94_500)),
    (peso(2_175_000), peso(96_750)),
    (peso(2_225_000), peso(99_000)),
    (peso(2_275_000), peso(101_250)),
    (peso(2_325_000), peso(103_500)),
    (peso(2_375_000), peso(105_750)),
    (peso(2_425_000), peso(108_000)),
    (peso(2_475_000), peso(110_250)),
];

/// The maximum employee contribution, paid on any salary above the last
/// bracket ceiling of 24,750.
const SSS_MAX_CONTRIBUTION: Decimal = peso(112_500);

/// Computes the employee share of the monthly SSS contribution.
///
/// The first bracket whose ceiling is greater than or equal to the salary
/// determines the contribution. The lookup has no lower bound, so a salary
/// of zero still lands in the first bracket and yields 180. Salaries above
/// 24,750 pay the maximum of 1,125.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the salary is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_social_insurance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contribution = compute_social_insurance(Decimal::from(20000)).unwrap();
/// assert_eq!(contribution, Decimal::from_str("900.00").unwrap());
/// ```
pub fn compute_social_insurance(monthly_salary: Decimal) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
        });
    }

    for (ceiling, contribution) in SSS_BRACKETS {
        if monthly_salary <= ceiling {
            return Ok(contribution);
        }
    }

    Ok(SSS_MAX_CONTRIBUTION)
}
