// ============================================================================
// Word Tables
// Vietnamese digit and scale vocabulary
// ============================================================================

use crate::domain::{ThousandWord, MAX_GROUPS};

/// Digit words indexed by digit. Index 0 never reaches the output.
pub static DIGIT_WORDS: [&str; 10] = [
    "", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Scale words indexed by group rank, northern "nghìn".
pub static SCALE_WORDS: [&str; MAX_GROUPS] =
    ["", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ", "tỷ tỷ"];

/// Scale words indexed by group rank, southern "ngàn".
pub static SCALE_WORDS_NGAN: [&str; MAX_GROUPS] =
    ["", "ngàn", "triệu", "tỷ", "ngàn tỷ", "triệu tỷ", "tỷ tỷ"];

pub const HUNDRED: &str = "trăm";
pub const TEN: &str = "mười";
pub const TENS_SUFFIX: &str = "mươi";
pub const FILLER: &str = "lẻ";
/// 1 after a tens digit of 2 or more
pub const ONE_AFTER_TENS: &str = "mốt";
/// 5 after any nonzero tens digit
pub const FIVE_AFTER_TENS: &str = "lăm";
/// Spoken empty hundreds digit
pub const ZERO_DIGIT: &str = "không";

pub const ZERO_AMOUNT: &str = "Không đồng";
pub const NEGATIVE: &str = "âm";
pub const CURRENCY: &str = "đồng";

#[inline]
pub fn digit_word(digit: u16) -> &'static str {
    DIGIT_WORDS[digit as usize]
}

/// Scale word for a rank; empty at rank 0.
#[inline]
pub fn scale_word(rank: u8, thousand: ThousandWord) -> &'static str {
    match thousand {
        ThousandWord::Nghin => SCALE_WORDS[rank as usize],
        ThousandWord::Ngan => SCALE_WORDS_NGAN[rank as usize],
    }
}
