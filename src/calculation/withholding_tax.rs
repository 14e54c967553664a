//! BIR withholding tax calculation.
//!
//! Monthly withholding tax follows the BIR progressive schedule, which is
//! expressed in annual terms: the monthly salary is annualized (x12), the
//! marginal bracket schedule is applied to the annual figure, and the annual
//! tax is divided back by 12.
//!
//! Each bracket's base constant is the total tax accumulated at the
//! bracket's lower bound, so the schedule composes exactly with the marginal
//! rates. The schedule is kept as an explicit ordered table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Builds a whole-peso amount at compile time.
const fn pesos(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

/// Builds a percentage rate from hundredths at compile time.
const fn rate(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

/// One row of the annual tax schedule: tax is `base_tax + (annual salary -
/// excess_over) * marginal_rate` for annual salaries at or below `ceiling`.
struct TaxBracket {
    ceiling: Decimal,
    base_tax: Decimal,
    marginal_rate: Decimal,
    excess_over: Decimal,
}

/// The bounded brackets of the annual schedule, ordered by ascending
/// ceiling. Bracket tests are inclusive of the ceiling.
const BOUNDED_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        ceiling: pesos(250_000),
        base_tax: pesos(0),
        marginal_rate: rate(0),
        excess_over: pesos(0),
    },
    TaxBracket {
        ceiling: pesos(400_000),
        base_tax: pesos(0),
        marginal_rate: rate(15),
        excess_over: pesos(250_000),
    },
    TaxBracket {
        ceiling: pesos(800_000),
        base_tax: pesos(22_500),
        marginal_rate: rate(20),
        excess_over: pesos(400_000),
    },
    TaxBracket {
        ceiling: pesos(2_000_000),
        base_tax: pesos(102_500),
        marginal_rate: rate(25),
        excess_over: pesos(800_000),
    },
    TaxBracket {
        ceiling: pesos(8_000_000),
        base_tax: pesos(402_500),
        marginal_rate: rate(30),
        excess_over: pesos(2_000_000),
    },
];

/// The unbounded top bracket: 2,202,500 plus 35% of the excess over
/// 8,000,000.
const TOP_TAX_BRACKET: TaxBracket = TaxBracket {
    ceiling: pesos(0), // unused; the top bracket has no ceiling
    base_tax: pesos(2_202_500),
    marginal_rate: rate(35),
    excess_over: pesos(8_000_000),
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the monthly BIR withholding tax for a monthly salary.
///
/// The salary is annualized, taxed through the progressive schedule, and
/// the annual tax is divided by 12. Annual salaries at or below 250,000 are
/// tax-exempt.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] when the salary is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 50,000/month annualizes to 600,000: 22,500 + 20% of 200,000 = 62,500/yr
/// let tax = compute_withholding_tax(Decimal::from(50000)).unwrap();
/// assert_eq!(tax.round_dp(2), Decimal::from_str("5208.33").unwrap());
/// ```
pub fn compute_withholding_tax(monthly_salary: Decimal) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
        });
    }

    let annual_salary = monthly_salary * MONTHS_PER_YEAR;

    for bracket in &BOUNDED_TAX_BRACKETS {
        if annual_salary <= bracket.ceiling {
            let annual_tax = bracket.base_tax
                + (annual_salary - bracket.excess_over) * bracket.marginal_rate;
            return Ok(annual_tax / MONTHS_PER_YEAR);
        }
    }

    let annual_tax = TOP_TAX_BRACKET.base_tax
        + (annual_salary - TOP_TAX_BRACKET.excess_over) * TOP_TAX_BRACKET.marginal_rate;
    Ok(annual_tax / MONTHS_PER_YEAR)
}
