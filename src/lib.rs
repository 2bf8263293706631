// ============================================================================
// Dong Words Library
// Vietnamese spelled-out amounts for đồng values
// ============================================================================

//! # Dong Words
//!
//! Spells a signed whole-đồng amount out in Vietnamese, the way it is shown
//! under an amount field as a human-readable confirmation.
//!
//! ## Features
//!
//! - **Total over i64**: every value, `i64::MIN` included, renders
//! - **Base-1000 short scale**: nghìn, triệu, tỷ, nghìn tỷ, triệu tỷ, tỷ tỷ
//! - **Spelling rules**: "mười", "mốt", "lăm" and the "lẻ" filler
//! - **Styles**: colloquial, formal ("không trăm") and southern ("ngàn")
//! - **Input boundary**: `Amount` parses what a user typed into an amount field
//!
//! ## Example
//!
//! ```rust
//! use dong_words::prelude::*;
//!
//! assert_eq!(
//!     spell_out(1_234_567),
//!     "Một triệu hai trăm ba mươi bốn nghìn năm trăm sáu mươi bảy đồng"
//! );
//! assert_eq!(spell_out(-50), "Âm năm mươi đồng");
//!
//! // Parse what the user typed, show it back grouped and spelled out
//! let amount: Amount = "1.005 ₫".parse().unwrap();
//! assert_eq!(amount.to_string(), "1.005");
//! assert_eq!(amount.to_words(), "Một nghìn lẻ năm đồng");
//!
//! let formal = NumeralRenderer::new(SpellingConfig::formal());
//! assert_eq!(formal.render_amount(amount), "Một nghìn không trăm lẻ năm đồng");
//! ```

pub mod domain;
pub mod numeric;
pub mod words;

pub use words::spell_out;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{SpellingConfig, ThousandWord, ZeroHundreds};
    pub use crate::numeric::{Amount, AmountError, AmountResult};
    pub use crate::words::{render_group, spell_out, NumeralRenderer};
}
