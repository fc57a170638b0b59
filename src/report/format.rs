//! Display formatting for money, percentages and dates.
//!
//! The engine keeps full decimal precision; rounding to display precision
//! happens only here.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as Brazilian Real: `R$ 1.234.567,89`.
///
/// Rounds half away from zero to two places. Negative amounts get a leading
/// minus sign (`-R$ 500,00`).
///
/// # Examples
///
/// ```
/// use credit_planner::report::format::format_brl;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_brl(dec!(105100)), "R$ 105.100,00");
/// assert_eq!(format_brl(dec!(-42.125)), "-R$ 42,13");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let mut rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, group_thousands(integer), fraction)
}

/// Whole-number percentage, e.g. `40%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}

/// A term in years to one decimal place, e.g. `46` months -> `3.8`.
pub fn years_approx(term_months: u64) -> String {
    let mut years = (Decimal::from(term_months) / Decimal::from(12))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    years.rescale(1);
    years.to_string()
}

/// Brazilian date stamp, `dd/mm/yyyy`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
