// ============================================================================
// Amount
// Whole-đồng monetary amount and its caller-side conversions
// ============================================================================

use super::errors::{AmountError, AmountResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thousands separator used by vi-VN digit grouping.
const GROUP_SEPARATOR: char = '.';

/// A signed whole number of đồng.
///
/// Every `i64` is a valid amount, so the numeral renderer is total over this
/// type. Conversions from user input and from decimals are fallible and live
/// here rather than in the renderer.
///
/// # Example
/// ```
/// use dong_words::numeric::Amount;
///
/// let amount: Amount = "1.234.567".parse().unwrap();
/// assert_eq!(amount.value(), 1_234_567);
/// assert_eq!(amount.to_string(), "1.234.567");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero đồng
    pub const ZERO: Self = Self(0);

    /// Largest representable amount
    pub const MAX: Self = Self(i64::MAX);

    /// Smallest representable amount
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse an amount the way an amount field reads what the user typed.
    ///
    /// Every character that is not an ASCII digit is dropped, so grouping
    /// separators, spaces and a trailing `₫` are all accepted. A `-` seen
    /// before the first digit makes the amount negative.
    ///
    /// # Errors
    /// - `Empty` if the input holds no digits
    /// - `Overflow` if the magnitude does not fit in an i64
    pub fn parse_input(input: &str) -> AmountResult<Self> {
        let mut negative = false;
        let mut seen_digit = false;
        let mut magnitude: u64 = 0;

        for c in input.chars() {
            match c.to_digit(10) {
                Some(digit) => {
                    seen_digit = true;
                    magnitude = magnitude
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(u64::from(digit)))
                        .ok_or(AmountError::Overflow)?;
                },
                None if c == '-' && !seen_digit => negative = true,
                None => {},
            }
        }

        if !seen_digit {
            tracing::debug!(input, "rejected amount input without digits");
            return Err(AmountError::Empty);
        }

        Self::from_sign_magnitude(negative, magnitude).inspect_err(|_| {
            tracing::debug!(input, "rejected amount input outside the i64 range");
        })
    }

    /// Combine a sign flag and a magnitude, accepting |i64::MIN|.
    fn from_sign_magnitude(negative: bool, magnitude: u64) -> AmountResult<Self> {
        if negative {
            if magnitude == i64::MIN.unsigned_abs() {
                Ok(Self::MIN)
            } else {
                i64::try_from(magnitude)
                    .map(|m| Self(-m))
                    .map_err(|_| AmountError::Overflow)
            }
        } else {
            i64::try_from(magnitude)
                .map(Self)
                .map_err(|_| AmountError::Overflow)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value as u64, defined for i64::MIN as well.
    #[inline]
    pub const fn magnitude(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Spell this amount out in Vietnamese with the default style.
    pub fn to_words(self) -> String {
        crate::words::spell_out(self.0)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Amount {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    #[inline]
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl TryFrom<rust_decimal::Decimal> for Amount {
    type Error = AmountError;

    /// Convert a decimal amount, as stored by ledgers, into whole đồng.
    ///
    /// # Errors
    /// - `Fractional` if the decimal has a nonzero fractional part
    /// - `Overflow` if the value is outside the i64 range
    fn try_from(d: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        use rust_decimal::prelude::ToPrimitive;

        if !d.fract().is_zero() {
            return Err(AmountError::Fractional);
        }

        d.to_i64().map(Self).ok_or(AmountError::Overflow)
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountError;

    /// Same rules as [`Amount::parse_input`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_input(s)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Amount {
    /// vi-VN grouping: `1234567` is shown as `1.234.567`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.is_negative() {
            grouped.push('-');
        }

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(c);
        }

        f.write_str(&grouped)
    }
}

// ============================================================================
// Tests
// ============================================================================
