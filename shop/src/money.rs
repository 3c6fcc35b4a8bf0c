//! Prices in Thai baht, stored as whole satang.
//!
//! Prices arrive from markup as decimal strings (`data-price="6490"`) and are
//! summed over line items, so they are kept as integers to make totals exact.
//! Display follows the en-US grouping the page has always used: `฿6,490`,
//! `฿1,250.5`.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

const SATANG_PER_BAHT: u64 = 100;

/// Error returned by [`Money::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// The input was empty or whitespace.
    #[error("price is empty")]
    Empty,
    /// The input is not a plain decimal number.
    #[error("price is not a number: {0:?}")]
    Invalid(String),
    /// More than two fraction digits.
    #[error("price has more than two decimal places: {0:?}")]
    TooPrecise(String),
    /// A leading minus sign.
    #[error("price is negative: {0:?}")]
    Negative(String),
}

/// An amount of money in satang (1/100 baht).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero baht.
    pub const ZERO: Self = Self(0);

    /// Build from whole baht.
    #[must_use]
    pub const fn from_baht(baht: u64) -> Self {
        Self(baht * SATANG_PER_BAHT)
    }

    /// Build from satang.
    #[must_use]
    pub const fn from_satang(satang: u64) -> Self {
        Self(satang)
    }

    /// The amount in satang.
    #[must_use]
    pub const fn satang(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units, saturating on overflow.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Parse a decimal price string such as `"6490"` or `" 1250.50 "`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] when the input is empty, negative, not a plain
    /// decimal number, or carries more than two fraction digits.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(PriceError::Empty);
        }
        if text.starts_with('-') {
            return Err(PriceError::Negative(text.to_string()));
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(PriceError::Invalid(text.to_string()));
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(text.to_string()));
        }

        let baht: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| PriceError::Invalid(text.to_string()))?
        };
        let satang: u64 = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction.parse().map_err(|_| PriceError::Invalid(text.to_string()))?,
        };

        baht.checked_mul(SATANG_PER_BAHT)
            .and_then(|v| v.checked_add(satang))
            .map(Self)
            .ok_or_else(|| PriceError::Invalid(text.to_string()))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / SATANG_PER_BAHT;
        let fraction = self.0 % SATANG_PER_BAHT;

        write!(f, "฿{}", group_thousands(whole))?;
        match fraction {
            0 => Ok(()),
            tens if tens % 10 == 0 => write!(f, ".{}", tens / 10),
            cents => write!(f, ".{cents:02}"),
        }
    }
}

/// Format an integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
