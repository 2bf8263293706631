// ============================================================================
// Numeral Renderer
// Spells a signed amount out as Vietnamese words ending in "đồng"
// ============================================================================

use super::tables::{
    digit_word, scale_word, CURRENCY, FILLER, FIVE_AFTER_TENS, HUNDRED, NEGATIVE, ONE_AFTER_TENS,
    TEN, TENS_SUFFIX, ZERO_AMOUNT, ZERO_DIGIT,
};
use crate::domain::{decompose, Group, SpellingConfig, ZeroHundreds};
use crate::numeric::Amount;

/// Renders amounts with a fixed [`SpellingConfig`].
///
/// The renderer holds no mutable state; one instance can be shared freely
/// across threads.
///
/// # Example
/// ```
/// use dong_words::prelude::*;
///
/// let renderer = NumeralRenderer::new(SpellingConfig::formal());
/// assert_eq!(renderer.render(1005), "Một nghìn không trăm lẻ năm đồng");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumeralRenderer {
    config: SpellingConfig,
}

impl NumeralRenderer {
    pub const fn new(config: SpellingConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> SpellingConfig {
        self.config
    }

    /// Spell out `amount`, e.g. `-50` → `"Âm năm mươi đồng"`.
    ///
    /// Total over i64: every value, including i64::MIN, yields a capitalized
    /// sentence ending in `" đồng"`.
    pub fn render(&self, amount: i64) -> String {
        if amount == 0 {
            return ZERO_AMOUNT.to_string();
        }

        let groups = decompose(amount.unsigned_abs());
        let mut words: Vec<&'static str> = Vec::with_capacity(groups.len() * 7 + 2);

        if amount < 0 {
            words.push(NEGATIVE);
        }

        // Most significant first; zero groups contribute neither words nor scale
        for group in groups.iter().rev().filter(|g| !g.is_zero()) {
            push_group_words(&mut words, *group, self.config.zero_hundreds);

            let scale = scale_word(group.rank, self.config.thousand_word);
            if !scale.is_empty() {
                words.push(scale);
            }
        }

        words.push(CURRENCY);

        tracing::trace!(amount, groups = groups.len(), "spelled out amount");

        capitalize_first(&words.join(" "))
    }

    pub fn render_amount(&self, amount: Amount) -> String {
        self.render(amount.value())
    }
}

/// Spell out `amount` with the default style.
///
/// ```
/// assert_eq!(
///     dong_words::spell_out(1_234_567),
///     "Một triệu hai trăm ba mươi bốn nghìn năm trăm sáu mươi bảy đồng"
/// );
/// ```
pub fn spell_out(amount: i64) -> String {
    NumeralRenderer::default().render(amount)
}

/// Words for a single group value (0..=999), without scale word.
///
/// A non-leading group keeps track of its hundreds slot even when empty, so
/// `5` reads "năm" as the leading group but "lẻ năm" below it.
pub fn render_group(value: u16, is_leading: bool, zero_hundreds: ZeroHundreds) -> String {
    let group = Group {
        value: value % 1000,
        rank: 0,
        is_leading,
    };

    let mut words = Vec::with_capacity(7);
    push_group_words(&mut words, group, zero_hundreds);
    words.join(" ")
}

fn push_group_words(words: &mut Vec<&'static str>, group: Group, zero_hundreds: ZeroHundreds) {
    if group.is_zero() {
        return;
    }

    let (hundred, ten, unit) = (group.hundred(), group.ten(), group.unit());

    if hundred > 0 {
        words.push(digit_word(hundred));
        words.push(HUNDRED);
    } else if !group.is_leading && zero_hundreds == ZeroHundreds::Spoken {
        words.push(ZERO_DIGIT);
        words.push(HUNDRED);
    }

    match ten {
        0 => {
            if unit > 0 && (hundred > 0 || !group.is_leading) {
                words.push(FILLER);
            }
        },
        1 => words.push(TEN),
        _ => {
            words.push(digit_word(ten));
            words.push(TENS_SUFFIX);
        },
    }

    match unit {
        0 => {},
        1 if ten > 1 => words.push(ONE_AFTER_TENS),
        5 if ten > 0 => words.push(FIVE_AFTER_TENS),
        _ => words.push(digit_word(unit)),
    }
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
