// ============================================================================
// Amount Errors
// Error types for turning caller input into an Amount
// ============================================================================

use std::fmt;

/// Errors that can occur while converting caller input into an [`Amount`].
///
/// Rendering itself never fails; these only surface at the parsing boundary.
///
/// [`Amount`]: super::Amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountError {
    /// Input contained no digits
    Empty,
    /// Magnitude does not fit in an i64
    Overflow,
    /// Value has a nonzero fractional part
    Fractional,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "empty input: no digits to parse"),
            AmountError::Overflow => {
                write!(f, "amount overflow: value exceeds the 64-bit range")
            },
            AmountError::Fractional => {
                write!(f, "fractional amount: only whole đồng can be spelled out")
            },
        }
    }
}

impl std::error::Error for AmountError {}

/// Result type alias for amount conversions
pub type AmountResult<T> = Result<T, AmountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AmountError::Empty.to_string(),
            "empty input: no digits to parse"
        );
        assert_eq!(
            AmountError::Fractional.to_string(),
            "fractional amount: only whole đồng can be spelled out"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AmountError::Overflow);
        assert!(err.to_string().contains("64-bit"));
    }
}
