//! Price type backed by decimal arithmetic.
//!
//! Catalog prices arrive as free-form spreadsheet cells (`"15 990 ₽"`,
//! `"1299.50"`, `"—"`). [`Price::parse_cell`] normalizes them; a cell that
//! yields no parseable non-negative amount produces `None` and the caller
//! rejects the row.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount of money in rubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rubles.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Returns `None` for negative amounts; a `Price` is always finite and
    /// non-negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() {
            return None;
        }
        Some(Self(amount))
    }

    /// Parse a raw spreadsheet cell into a price.
    ///
    /// Strips every character that is not an ASCII digit or a decimal
    /// point, then parses the residue. An empty residue (e.g. `"—"`) or a
    /// malformed one (e.g. `"1.2.3"`) yields `None`.
    #[must_use]
    pub fn parse_cell(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        let amount: Decimal = cleaned.parse().ok()?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format in the ru-RU currency style: `15 990,00 ₽`.
    ///
    /// Thousands are grouped with no-break spaces and the decimal separator
    /// is a comma, matching how the storefront has always displayed ruble
    /// amounts.
    #[must_use]
    pub fn display_rub(&self) -> String {
        let fixed = format!("{:.2}", self.0);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let digits = int_part.len();
        let mut grouped = String::with_capacity(digits + digits / 3 + 8);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                grouped.push('\u{a0}');
            }
            grouped.push(c);
        }

        format!("{grouped},{frac_part}\u{a0}\u{20bd}")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_rub())
    }
}
