//! Dependency-free primitives for kundali chart data.
//!
//! This crate provides:
//! - The 12 rashis and the longitude → (sign, degree) converter
//! - The canonical graha table with chart-data codes and display glyphs
//! - The 8 special lagna variants and their formulas

pub mod graha;
pub mod rashi;
pub mod special_lagna;
pub mod util;

pub use graha::{ALL_GRAHAS, ASCENDANT_CODE, Graha, decode_code_point, rashi_lord};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, Units, longitude_to_units};
pub use special_lagna::{
    ALL_SPECIAL_LAGNAS, LAGNA_FORMULAS, LagnaInputs, SpecialLagna, ghatikas_since_sunrise,
};
pub use util::{normalize_360, wrap_once};
