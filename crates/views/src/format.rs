//! pt-BR rendering of money, counts and dates. A missing value renders as an
//! empty string; nothing here panics.

use chrono::NaiveDate;
use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "R$";
pub const FREE_SHIPPING_LABEL: &str = "Grátis";

/// `1234.5` renders as `R$ 1.234,50`, `-0.5` as `-R$ 0,50`.
pub fn format_brl(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };
    let rounded = round_cents(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!(
        "{}{CURRENCY_SYMBOL} {},{cents}",
        if negative { "-" } else { "" },
        group_thousands(units)
    )
}

/// Same as [`format_brl`] for floating point input; NaN and infinities are
/// treated as missing.
pub fn format_brl_f64(amount: f64) -> String {
    format_brl(amount.is_finite().then(|| Decimal::from_f64(amount)).flatten())
}

/// Two decimals, no grouping: the money style of the flat order list.
pub fn format_plain_brl(amount: Option<Decimal>) -> String {
    amount
        .map(|amount| format!("{CURRENCY_SYMBOL} {:.2}", round_cents(amount)))
        .unwrap_or_default()
}

pub fn format_shipping(shipping: Option<Decimal>) -> String {
    match shipping {
        Some(amount) if amount > Decimal::ZERO => format_plain_brl(Some(amount)),
        _ => FREE_SHIPPING_LABEL.to_string(),
    }
}

pub fn format_count(count: Option<i64>) -> String {
    let Some(count) = count else {
        return String::new();
    };
    let digits = count.unsigned_abs().to_string();
    format!(
        "{}{}",
        if count < 0 { "-" } else { "" },
        group_thousands(&digits)
    )
}

pub fn format_quantity(quantity: Option<i64>) -> String {
    quantity.map(|quantity| quantity.to_string()).unwrap_or_default()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
