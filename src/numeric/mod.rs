// ============================================================================
// Numeric Module
// The integer amount domain accepted by the numeral renderer
// ============================================================================
//
// This module provides:
// - Amount: whole-đồng amount backed by an i64
// - AmountError: failures when parsing caller input or converting decimals
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result (no panics)
// - Every i64, including i64::MIN, is a valid Amount

mod amount;
mod errors;

pub use amount::Amount;
pub use errors::{AmountError, AmountResult};
