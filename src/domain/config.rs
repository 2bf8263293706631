// ============================================================================
// Spelling Configuration
// Style options for how amounts are read aloud
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Zero Hundreds
// ============================================================================

/// How a non-leading group without a hundreds digit is read.
///
/// Only groups below the leading one are affected: `5` on its own is always
/// `"năm"`, but `1005` has a rank-0 group `005` whose empty hundreds slot
/// is either dropped or spoken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroHundreds {
    /// Drop the hundreds phrase, keep the "lẻ" filler
    /// - 1005 → "một nghìn lẻ năm"
    /// - 1050 → "một nghìn năm mươi"
    #[default]
    Omit,

    /// Read the empty hundreds slot as "không trăm"
    /// - 1005 → "một nghìn không trăm lẻ năm"
    /// - 1050 → "một nghìn không trăm năm mươi"
    Spoken,
}

// ============================================================================
// Thousand Word
// ============================================================================

/// Regional word for one thousand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ThousandWord {
    /// Northern "nghìn"
    #[default]
    Nghin,

    /// Southern "ngàn"
    Ngan,
}

impl ThousandWord {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThousandWord::Nghin => "nghìn",
            ThousandWord::Ngan => "ngàn",
        }
    }
}

// ============================================================================
// Complete Spelling Configuration
// ============================================================================

/// Style options for the numeral renderer.
///
/// The default reproduces the plain reading: "nghìn" for thousands and no
/// "không trăm" inside lower groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellingConfig {
    /// Reading of an empty hundreds slot in a non-leading group
    pub zero_hundreds: ZeroHundreds,

    /// Word used for the thousand scale (rank 1, and inside "nghìn tỷ")
    pub thousand_word: ThousandWord,
}

impl SpellingConfig {
    pub const fn new(zero_hundreds: ZeroHundreds, thousand_word: ThousandWord) -> Self {
        Self {
            zero_hundreds,
            thousand_word,
        }
    }

    /// Builder method: Set how empty hundreds slots are read
    pub fn with_zero_hundreds(mut self, zero_hundreds: ZeroHundreds) -> Self {
        self.zero_hundreds = zero_hundreds;
        self
    }

    /// Builder method: Set the thousand word
    pub fn with_thousand_word(mut self, thousand_word: ThousandWord) -> Self {
        self.thousand_word = thousand_word;
        self
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SpellingConfig {
    /// Everyday reading used on entry forms
    /// - "nghìn"
    /// - empty hundreds slots dropped
    pub const fn colloquial() -> Self {
        Self::new(ZeroHundreds::Omit, ThousandWord::Nghin)
    }

    /// Formal reading, as written on cheques and invoices
    /// - "nghìn"
    /// - empty hundreds slots read as "không trăm"
    pub const fn formal() -> Self {
        Self::new(ZeroHundreds::Spoken, ThousandWord::Nghin)
    }

    /// Southern reading
    /// - "ngàn"
    /// - empty hundreds slots dropped
    pub const fn southern() -> Self {
        Self::new(ZeroHundreds::Omit, ThousandWord::Ngan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_colloquial() {
        let config = SpellingConfig::default();
        assert_eq!(config, SpellingConfig::colloquial());
        assert_eq!(config.zero_hundreds, ZeroHundreds::Omit);
        assert_eq!(config.thousand_word, ThousandWord::Nghin);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SpellingConfig::southern().with_zero_hundreds(ZeroHundreds::Spoken);

        assert_eq!(config.zero_hundreds, ZeroHundreds::Spoken);
        assert_eq!(config.thousand_word, ThousandWord::Ngan);
    }

    #[test]
    fn test_preset_configs() {
        assert!(matches!(
            SpellingConfig::formal().zero_hundreds,
            ZeroHundreds::Spoken
        ));
        assert_eq!(SpellingConfig::southern().thousand_word.as_str(), "ngàn");
        assert_eq!(SpellingConfig::colloquial().thousand_word.as_str(), "nghìn");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_config() {
        let config: SpellingConfig =
            serde_json::from_str(r#"{ "zero_hundreds": "Spoken" }"#).unwrap();
        assert_eq!(config, SpellingConfig::formal());

        let json = serde_json::to_string(&SpellingConfig::southern()).unwrap();
        assert_eq!(json, r#"{"zero_hundreds":"Omit","thousand_word":"Ngan"}"#);
    }
}
