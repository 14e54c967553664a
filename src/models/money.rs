//! Currency display helpers.
//!
//! Internal arithmetic stays in full-precision [`Decimal`]; these helpers are
//! the only place amounts are rounded for presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to centavo precision (2 decimal places, half away from
/// zero).
///
/// # Example
///
/// ```
/// use payroll_engine::models::round_centavos;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("30.0002").unwrap();
/// assert_eq!(round_centavos(amount), Decimal::from_str("30.00").unwrap());
/// ```
pub fn round_centavos(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Philippine pesos for display.
///
/// The amount is rounded to centavos, grouped with thousands separators, and
/// prefixed with the peso sign, e.g. `₱22,500.00`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::format_peso;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234567.891").unwrap();
/// assert_eq!(format_peso(amount), "₱1,234,567.89");
/// ```
pub fn format_peso(amount: Decimal) -> String {
    let rounded = round_centavos(amount);
    let negative = rounded.is_sign_negative();
    let fixed = format!("{:.2}", rounded.abs());

    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, digit) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-₱{}.{}", integer_grouped, fraction_part)
    } else {
        format!("₱{}.{}", integer_grouped, fraction_part)
    }
}
