//! Rashi/bhava placement mappings derived from normalized chart data.
//!
//! - rashi → bhava: which house each sign falls in
//! - graha → bhava: which house each graha occupies, with its direction
//! - graha → rashi: which sign each graha occupies, with its direction;
//!   also carries the ascendant, always direct

use std::collections::BTreeMap;

use kundali_base::ASCENDANT_CODE;
use serde::Serialize;

use crate::data::{ChartData, Element};
use crate::error::ChartError;

/// Apparent motion of a graha along the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
pub enum Direction {
    Direct,
    Retrograde,
}

impl Direction {
    /// Direct for a positive speed; zero, negative, or absent speed is retrograde.
    pub fn from_speed(speed: Option<f64>) -> Self {
        match speed {
            Some(s) if s > 0.0 => Self::Direct,
            _ => Self::Retrograde,
        }
    }

    /// `1` for direct, `-1` for retrograde.
    pub const fn value(self) -> i8 {
        match self {
            Self::Direct => 1,
            Self::Retrograde => -1,
        }
    }

    pub const fn is_retrograde(self) -> bool {
        matches!(self, Self::Retrograde)
    }
}

impl From<Direction> for i8 {
    fn from(d: Direction) -> i8 {
        d.value()
    }
}

/// House occupied by a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BhavaPlacement {
    pub bhava: u8,
    pub direction: Direction,
}

/// Sign occupied by a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RashiPlacement {
    pub rashi: u8,
    pub direction: Direction,
}

/// Sign number → house number.
pub type RashiInBhava = BTreeMap<u8, u8>;
/// Graha code → house placement.
pub type GrahaInBhava = BTreeMap<String, BhavaPlacement>;
/// Graha code → sign placement.
pub type GrahaInRashi = BTreeMap<String, RashiPlacement>;

/// Map each bhava's sign to the bhava, in house order.
///
/// When two houses share a sign the later house wins. Equal houses never
/// collide; unequal cusp systems may, and the overwrite is only logged.
pub fn rashi_in_bhava(bhava: &BTreeMap<u8, Element>) -> RashiInBhava {
    let mut map = RashiInBhava::new();
    for (house, element) in bhava {
        if let Some(prev) = map.insert(element.rashi, *house) {
            log::warn!(
                "rashi {} claimed by bhava {prev} and bhava {house}; keeping {house}",
                element.rashi
            );
        }
    }
    map
}

/// House and direction of every graha, via its sign.
pub fn graha_in_bhava(
    data: &ChartData,
    rashi_in_bhava: &RashiInBhava,
) -> Result<GrahaInBhava, ChartError> {
    data.graha
        .iter()
        .map(|(code, element)| {
            let bhava = *rashi_in_bhava.get(&element.rashi).ok_or_else(|| {
                ChartError::RashiWithoutBhava {
                    graha: code.clone(),
                    rashi: element.rashi,
                }
            })?;
            let placement = BhavaPlacement {
                bhava,
                direction: Direction::from_speed(element.speed),
            };
            Ok((code.clone(), placement))
        })
        .collect()
}

/// Sign and direction of every graha, plus the ascendant as direct.
pub fn graha_in_rashi(data: &ChartData) -> Result<GrahaInRashi, ChartError> {
    let mut map: GrahaInRashi = data
        .graha
        .iter()
        .map(|(code, element)| {
            let placement = RashiPlacement {
                rashi: element.rashi,
                direction: Direction::from_speed(element.speed),
            };
            (code.clone(), placement)
        })
        .collect();

    let lagna = data.ascendant().ok_or(ChartError::MissingAscendant)?;
    map.insert(
        ASCENDANT_CODE.to_string(),
        RashiPlacement {
            rashi: lagna.rashi,
            direction: Direction::Direct,
        },
    );
    Ok(map)
}
