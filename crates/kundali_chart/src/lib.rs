//! Kundali chart data model.
//!
//! A [`Chart`] is built from a [`RawBundle`] of ephemeris output. Building
//! it validates the bundle against a [`ChartSchema`], converts every
//! longitude into sign and degree, and synthesizes equal houses from the
//! ascendant when no `bhava` block is supplied. The chart then answers
//! rashi → bhava, graha → bhava, and graha → rashi queries, renders graha
//! labels, and merges special lagnas into its `extra` block.
//!
//! ```rust,ignore
//! use kundali_chart::{Chart, LabelMode, StandardLagnaCalculator};
//!
//! let mut chart = Chart::from_json(&bundle_json)?;
//! let saturn = chart.bhava_of("Sa")?;
//! let label = chart.get_graha_label("Sa", LabelMode::Symbol, None)?;
//! chart.calc_extra_lagna(None, &StandardLagnaCalculator::new(12.5))?;
//! ```

pub mod bundle;
pub mod chart;
pub mod data;
pub mod error;
pub mod extra_lagna;
pub mod label;
pub mod placement;
pub mod schema;

pub use bundle::RawBundle;
pub use chart::Chart;
pub use data::{ChartData, Element, equal_bhavas};
pub use error::{ChartError, ValidationError};
pub use extra_lagna::{Position, SpecialPointCalculator, StandardLagnaCalculator};
pub use label::{GrahaLabeler, LabelMode};
pub use placement::{
    BhavaPlacement, Direction, GrahaInBhava, GrahaInRashi, RashiInBhava, RashiPlacement,
};
pub use schema::{ALL_BLOCKS, BHAVA_COUNT, Block, BlockTemplate, ChartSchema};

pub use kundali_base::{ASCENDANT_CODE, Graha, Rashi, SpecialLagna};
