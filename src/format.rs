//! lakh/crore number formatting
//!
//! The rightmost three digits form one group and every group to the left
//! holds two digits: `12345678` becomes `1,23,45,678`. Amounts are always
//! rounded to whole rupees first; no decimal places are ever shown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::Money;

const DEVANAGARI_ZERO: u32 = '०' as u32;

/// round half up to a whole number and group in the lakh/crore style
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.abs().to_string();
    let grouped = group_lakh(&digits);

    if rounded < Decimal::ZERO {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// nearest integer, halves rounded towards positive infinity
pub fn round_half_up(amount: Decimal) -> Decimal {
    if amount.fract().is_zero() {
        return amount.normalize();
    }
    // only whole numbers sit close enough to the limits to overflow here
    match amount.checked_add(dec!(0.5)) {
        Some(shifted) => shifted.floor().normalize(),
        None => amount.floor().normalize(),
    }
}

fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (others, last_three) = digits.split_at(digits.len() - 3);
    let lead = match others.len() % 2 {
        0 => 2,
        n => n,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    out.push_str(&others[..lead]);
    let mut rest = &others[lead..];
    while !rest.is_empty() {
        out.push(',');
        out.push_str(&rest[..2]);
        rest = &rest[2..];
    }
    out.push(',');
    out.push_str(last_three);
    out
}

/// replace ascii digits with devanagari digits
pub fn to_devanagari_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(DEVANAGARI_ZERO + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// replace devanagari digits with ascii digits
pub fn from_devanagari_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            let code = c as u32;
            if (DEVANAGARI_ZERO..DEVANAGARI_ZERO + 10).contains(&code) {
                char::from_digit(code - DEVANAGARI_ZERO, 10).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

impl Money {
    /// whole-rupee amount in lakh/crore grouping
    pub fn to_lakh_string(&self) -> String {
        format_amount(self.as_decimal())
    }
}
