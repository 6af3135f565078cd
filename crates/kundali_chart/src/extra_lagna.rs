//! Special-point (extra lagna) calculation capability.
//!
//! The chart asks a [`SpecialPointCalculator`] for each requested
//! [`SpecialLagna`] and stores the resulting [`Position`] in its `extra`
//! block. [`StandardLagnaCalculator`] evaluates the built-in formulas from
//! the chart's Sun, Moon, and ascendant plus the time elapsed since sunrise.

use kundali_base::{ASCENDANT_CODE, Graha, LagnaInputs, SpecialLagna, ghatikas_since_sunrise};
use serde::Serialize;

use crate::data::{ChartData, Element};
use crate::error::ChartError;

/// A computed special point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub longitude: f64,
    pub rashi: u8,
    pub degree: f64,
}

impl Position {
    /// Position at a longitude in [0, 360), with sign and degree derived.
    pub fn from_longitude(longitude: f64) -> Self {
        let element = Element::at_longitude(longitude);
        Self {
            longitude,
            rashi: element.rashi,
            degree: element.degree,
        }
    }
}

impl From<Position> for Element {
    fn from(p: Position) -> Self {
        Element {
            longitude: p.longitude,
            latitude: None,
            speed: None,
            rashi: p.rashi,
            degree: p.degree,
        }
    }
}

/// Computes special points from chart data.
pub trait SpecialPointCalculator {
    fn calculate(&self, lagna: SpecialLagna, data: &ChartData) -> Result<Position, ChartError>;
}

impl<F> SpecialPointCalculator for F
where
    F: Fn(SpecialLagna, &ChartData) -> Result<Position, ChartError>,
{
    fn calculate(&self, lagna: SpecialLagna, data: &ChartData) -> Result<Position, ChartError> {
        self(lagna, data)
    }
}

/// Built-in calculator for the 8 standard special lagnas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardLagnaCalculator {
    /// Ghatikas elapsed since sunrise at the chart moment.
    pub ghatikas: f64,
}

impl StandardLagnaCalculator {
    pub fn new(ghatikas: f64) -> Self {
        Self { ghatikas }
    }

    /// Calculator for a moment given as Julian dates of the moment and the
    /// bracketing sunrises.
    pub fn from_sunrise(jd_moment: f64, jd_sunrise: f64, jd_next_sunrise: f64) -> Self {
        Self::new(ghatikas_since_sunrise(jd_moment, jd_sunrise, jd_next_sunrise))
    }

    fn inputs(&self, data: &ChartData) -> Result<LagnaInputs, ChartError> {
        let graha_lon = |g: Graha| {
            data.graha
                .get(g.code())
                .map(|e| e.longitude)
                .ok_or_else(|| ChartError::MissingPosition(g.code().to_string()))
        };
        let lagna = data
            .extra
            .get(ASCENDANT_CODE)
            .ok_or(ChartError::MissingAscendant)?;
        Ok(LagnaInputs {
            sun_lon: graha_lon(Graha::Surya)?,
            moon_lon: graha_lon(Graha::Chandra)?,
            lagna_lon: lagna.longitude,
            ghatikas: self.ghatikas,
        })
    }
}

impl SpecialPointCalculator for StandardLagnaCalculator {
    fn calculate(&self, lagna: SpecialLagna, data: &ChartData) -> Result<Position, ChartError> {
        let inputs = self.inputs(data)?;
        Ok(Position::from_longitude(lagna.compute(&inputs)))
    }
}
