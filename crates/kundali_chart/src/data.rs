//! Normalized chart data: the blocks after validation and unit conversion.

use std::collections::BTreeMap;

use kundali_base::{ASCENDANT_CODE, longitude_to_units, wrap_once};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ChartError, ValidationError};
use crate::schema::{
    BHAVA_COUNT, Block, PROP_DEGREE, PROP_LATITUDE, PROP_LONGITUDE, PROP_RASHI, PROP_SPEED,
};

/// One positional element of the `graha`, `extra`, or `bhava` block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// 1-based sign number.
    pub rashi: u8,
    /// Degrees within the sign.
    pub degree: f64,
}

impl Element {
    /// Element at a longitude with sign and degree derived from it.
    pub fn at_longitude(longitude: f64) -> Self {
        let units = longitude_to_units(longitude);
        Self {
            longitude,
            latitude: None,
            speed: None,
            rashi: units.rashi,
            degree: units.degree,
        }
    }

    /// Build an element from its raw property mapping.
    ///
    /// A pre-supplied `rashi` is trusted as is, along with its `degree` when
    /// present. Without a `rashi`, both are derived from the longitude and any
    /// supplied `degree` is ignored.
    pub(crate) fn from_raw(block: Block, key: &str, raw: &Value) -> Result<Self, ValidationError> {
        let Some(props) = raw.as_object() else {
            return Err(ValidationError::MalformedElement {
                block: block.name().to_string(),
                key: key.to_string(),
            });
        };
        let prop = |name: &str| number_prop(block, key, props, name);

        let longitude = prop(PROP_LONGITUDE)?.ok_or_else(|| ValidationError::MissingProperty {
            block: block.name().to_string(),
            key: key.to_string(),
            property: PROP_LONGITUDE.to_string(),
        })?;
        let units = longitude_to_units(longitude);

        let (rashi, degree) = match prop(PROP_RASHI)? {
            None => (units.rashi, units.degree),
            Some(r) if r.fract() == 0.0 && (1.0..=12.0).contains(&r) => {
                (r as u8, prop(PROP_DEGREE)?.unwrap_or(units.degree))
            }
            Some(r) => {
                return Err(ValidationError::InvalidRashi {
                    block: block.name().to_string(),
                    key: key.to_string(),
                    value: r,
                });
            }
        };

        Ok(Self {
            longitude,
            latitude: prop(PROP_LATITUDE)?,
            speed: prop(PROP_SPEED)?,
            rashi,
            degree,
        })
    }
}

fn number_prop(
    block: Block,
    key: &str,
    props: &Map<String, Value>,
    name: &str,
) -> Result<Option<f64>, ValidationError> {
    match props.get(name) {
        None => Ok(None),
        Some(v) => match v.as_f64() {
            Some(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(ValidationError::NonNumericProperty {
                block: block.name().to_string(),
                key: key.to_string(),
                property: name.to_string(),
            }),
        },
    }
}

/// The normalized chart: recognized blocks only, every element positioned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub graha: BTreeMap<String, Element>,
    pub extra: BTreeMap<String, Element>,
    /// Houses keyed 1..=12.
    pub bhava: BTreeMap<u8, Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more: Option<Value>,
}

impl ChartData {
    /// The ascendant entry of the `extra` block.
    pub fn ascendant(&self) -> Option<&Element> {
        self.extra.get(ASCENDANT_CODE)
    }

    /// Pretty JSON dump of the normalized data.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Normalize validated blocks. `bhava` is synthesized when `None`.
    pub(crate) fn from_blocks(
        graha: &Value,
        extra: &Value,
        bhava: Option<&Value>,
        user: Option<&Value>,
        more: Option<&Value>,
    ) -> Result<Self, ChartError> {
        let graha = positional_block(Block::Graha, graha)?;
        let extra = positional_block(Block::Extra, extra)?;

        let bhava = match bhava {
            Some(raw) => bhava_block(raw)?,
            None => {
                let lagna = extra.get(ASCENDANT_CODE).ok_or(ChartError::MissingAscendant)?;
                equal_bhavas(lagna.longitude)
            }
        };

        Ok(Self {
            graha,
            extra,
            bhava,
            user: user.cloned(),
            more: more.cloned(),
        })
    }
}

fn elements_of(block: Block, raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or_else(|| ValidationError::MalformedBlock {
        block: block.name().to_string(),
    })
}

fn positional_block(
    block: Block,
    raw: &Value,
) -> Result<BTreeMap<String, Element>, ValidationError> {
    elements_of(block, raw)?
        .iter()
        .map(|(key, value)| Ok((key.clone(), Element::from_raw(block, key, value)?)))
        .collect()
}

fn bhava_block(raw: &Value) -> Result<BTreeMap<u8, Element>, ValidationError> {
    let mut houses = BTreeMap::new();
    for (key, value) in elements_of(Block::Bhava, raw)? {
        match key.parse::<u8>() {
            Ok(n) if (1..=BHAVA_COUNT).contains(&n) => {
                houses.insert(n, Element::from_raw(Block::Bhava, key, value)?);
            }
            _ => log::debug!("skipping bhava key '{key}': not a house number"),
        }
    }
    Ok(houses)
}

/// Equal houses of 30 degrees starting at the ascendant.
///
/// Each cusp is wrapped by a single subtraction of 360, so an ascendant in
/// [0, 360) always yields cusps in [0, 360).
pub fn equal_bhavas(lagna_lon: f64) -> BTreeMap<u8, Element> {
    (1..=BHAVA_COUNT)
        .map(|b| {
            let lon = wrap_once(lagna_lon + 30.0 * (b - 1) as f64);
            log::trace!("bhava {b}: cusp {lon:.4}");
            (b, Element::at_longitude(lon))
        })
        .collect()
}
