// ============================================================================
// Words Module
// Vietnamese spelling of whole-đồng amounts
// ============================================================================
//
// Two phases:
// - decomposition into base-1000 groups (domain::group)
// - per-group phrase assembly plus scale words (renderer)
//
// Tables are static and read-only; rendering is pure and allocation-light.

pub mod renderer;
pub mod tables;

pub use renderer::{render_group, spell_out, NumeralRenderer};
