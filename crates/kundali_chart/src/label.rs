//! Graha display labels.
//!
//! A label is the graha code, its astronomical glyph, or whatever a caller
//! supplied [`GrahaLabeler`] returns. Retrograde grahas are parenthesized,
//! except the lunar nodes and the ascendant.

use kundali_base::{ASCENDANT_CODE, Graha};

use crate::error::ChartError;
use crate::placement::Direction;

/// How a graha label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelMode {
    /// The raw graha code.
    #[default]
    Code,
    /// The graha's astronomical glyph.
    Symbol,
    /// Delegated to a caller-supplied [`GrahaLabeler`].
    Custom,
}

/// Numeric modes: 0 code, 1 symbol, 2 custom; anything else falls back to code.
impl From<u8> for LabelMode {
    fn from(mode: u8) -> Self {
        match mode {
            1 => Self::Symbol,
            2 => Self::Custom,
            _ => Self::Code,
        }
    }
}

/// Produces labels for [`LabelMode::Custom`].
pub trait GrahaLabeler {
    fn label(&self, code: &str) -> String;
}

impl<F> GrahaLabeler for F
where
    F: Fn(&str) -> String,
{
    fn label(&self, code: &str) -> String {
        self(code)
    }
}

/// Codes that are never parenthesized: Rahu, Ketu, and the ascendant.
pub fn is_direction_exempt(code: &str) -> bool {
    code == ASCENDANT_CODE
        || Graha::from_code(code).is_some_and(|g| g.is_node())
}

/// Label text before the retrograde convention is applied.
pub fn base_label(
    code: &str,
    mode: LabelMode,
    labeler: Option<&dyn GrahaLabeler>,
) -> Result<String, ChartError> {
    match mode {
        LabelMode::Code => Ok(code.to_string()),
        LabelMode::Symbol if code == ASCENDANT_CODE => Ok(code.to_string()),
        LabelMode::Symbol => Graha::from_code(code)
            .and_then(Graha::glyph)
            .map(String::from)
            .ok_or_else(|| ChartError::UnknownGraha(code.to_string())),
        LabelMode::Custom => labeler
            .map(|l| l.label(code))
            .ok_or(ChartError::MissingFormatter),
    }
}

/// Wrap a retrograde label in parentheses.
pub fn with_direction(label: String, direction: Direction) -> String {
    if direction.is_retrograde() {
        format!("({label})")
    } else {
        label
    }
}
