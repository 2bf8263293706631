// ============================================================================
// Domain Models Module
// Value objects shared by the numeral renderer
// ============================================================================

pub mod config;
pub mod group;

pub use config::{SpellingConfig, ThousandWord, ZeroHundreds};
pub use group::{decompose, Group, Groups, MAX_GROUPS};
