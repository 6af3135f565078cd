//! Error types for chart construction and derivation.

use thiserror::Error;

/// Raised while checking a raw bundle against the chart schema.
///
/// Any of these aborts construction; no partial chart is produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("block '{block}' is not found in the data")]
    MissingBlock { block: String },
    #[error("block '{block}' must be a mapping of elements")]
    MalformedBlock { block: String },
    #[error("key '{key}' in block '{block}' is not found")]
    MissingElement { block: String, key: String },
    #[error("element '{key}' in block '{block}' must be a mapping of properties")]
    MalformedElement { block: String, key: String },
    #[error("property '{property}' in element '{key}' of block '{block}' is not found")]
    MissingProperty {
        block: String,
        key: String,
        property: String,
    },
    #[error("property '{property}' in element '{key}' of block '{block}' is not a finite number")]
    NonNumericProperty {
        block: String,
        key: String,
        property: String,
    },
    #[error("rashi {value} in element '{key}' of block '{block}' is outside 1..=12")]
    InvalidRashi {
        block: String,
        key: String,
        value: f64,
    },
}

/// Errors from chart construction, special points, derivation, and labels.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Construction rejected the input bundle.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A requested special point code is not a known lagna variant.
    #[error("lagna with the key '{0}' does not exist")]
    UnknownSpecialPoint(String),
    /// Custom label mode was selected without a labeler.
    #[error("custom label mode requires a labeler")]
    MissingFormatter,
    /// A graha code is not present in the chart or has no glyph.
    #[error("graha '{0}' is not known to this chart")]
    UnknownGraha(String),
    /// A graha sits in a rashi that no bhava claims.
    #[error("graha '{graha}' is in rashi {rashi}, which no bhava maps to")]
    RashiWithoutBhava { graha: String, rashi: u8 },
    /// The ascendant entry is missing from the `extra` block.
    #[error("ascendant is missing from the extra block")]
    MissingAscendant,
    /// A position a calculation depends on is absent from the chart.
    #[error("position '{0}' required for the calculation is missing")]
    MissingPosition(String),
    /// Bundle JSON could not be parsed or chart data could not be encoded.
    #[error("json error: {0}")]
    Json(String),
}

impl ChartError {
    /// Caller supplied an argument the chart cannot act on.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownSpecialPoint(_) | Self::MissingFormatter | Self::UnknownGraha(_)
        )
    }

    /// Chart data broke an invariant that construction should have established.
    pub fn is_internal_consistency(&self) -> bool {
        matches!(
            self,
            Self::RashiWithoutBhava { .. } | Self::MissingAscendant | Self::MissingPosition(_)
        )
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_chart_error() {
        let err: ChartError = ValidationError::MissingBlock {
            block: "graha".into(),
        }
        .into();
        assert_eq!(err.to_string(), "block 'graha' is not found in the data");
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn classification() {
        assert!(ChartError::MissingFormatter.is_invalid_argument());
        assert!(ChartError::UnknownSpecialPoint("XX".into()).is_invalid_argument());
        assert!(ChartError::MissingAscendant.is_internal_consistency());
        assert!(
            ChartError::RashiWithoutBhava {
                graha: "Sy".into(),
                rashi: 3
            }
            .is_internal_consistency()
        );
    }
}
