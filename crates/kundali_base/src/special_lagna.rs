//! Special Lagna (ascendant variant) calculations.
//!
//! 8 special lagnas, all pure math on sidereal longitudes:
//! - Time-based: Bhava Lagna, Hora Lagna, Ghati Lagna, Vighati Lagna
//! - Composite: Varnada Lagna, Pranapada Lagna
//! - Moon-based: Sree Lagna
//! - Wealth-based: Indu Lagna
//!
//! Each variant is resolved through [`LAGNA_FORMULAS`], a static table from
//! variant to formula, so callers never dispatch on names at runtime.

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, longitude_to_units};
use crate::util::normalize_360;

/// The 8 Special Lagnas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialLagna {
    BhavaLagna,
    HoraLagna,
    GhatiLagna,
    VighatiLagna,
    VarnadaLagna,
    SreeLagna,
    PranapadaLagna,
    InduLagna,
}

/// All 8 special lagnas in standard order.
pub const ALL_SPECIAL_LAGNAS: [SpecialLagna; 8] = [
    SpecialLagna::BhavaLagna,
    SpecialLagna::HoraLagna,
    SpecialLagna::GhatiLagna,
    SpecialLagna::VighatiLagna,
    SpecialLagna::VarnadaLagna,
    SpecialLagna::SreeLagna,
    SpecialLagna::PranapadaLagna,
    SpecialLagna::InduLagna,
];

impl SpecialLagna {
    /// Name of the special lagna.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BhavaLagna => "Bhava Lagna",
            Self::HoraLagna => "Hora Lagna",
            Self::GhatiLagna => "Ghati Lagna",
            Self::VighatiLagna => "Vighati Lagna",
            Self::VarnadaLagna => "Varnada Lagna",
            Self::SreeLagna => "Sree Lagna",
            Self::PranapadaLagna => "Pranapada Lagna",
            Self::InduLagna => "Indu Lagna",
        }
    }

    /// Key under which the lagna is stored in the `extra` block.
    pub const fn code(self) -> &'static str {
        match self {
            Self::BhavaLagna => "BL",
            Self::HoraLagna => "HL",
            Self::GhatiLagna => "GL",
            Self::VighatiLagna => "VgL",
            Self::VarnadaLagna => "VL",
            Self::SreeLagna => "SL",
            Self::PranapadaLagna => "PL",
            Self::InduLagna => "IL",
        }
    }

    /// Look up a special lagna by its `extra` block code.
    pub fn from_code(code: &str) -> Option<SpecialLagna> {
        ALL_SPECIAL_LAGNAS.iter().copied().find(|l| l.code() == code)
    }

    /// 0-based index into ALL_SPECIAL_LAGNAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::BhavaLagna => 0,
            Self::HoraLagna => 1,
            Self::GhatiLagna => 2,
            Self::VighatiLagna => 3,
            Self::VarnadaLagna => 4,
            Self::SreeLagna => 5,
            Self::PranapadaLagna => 6,
            Self::InduLagna => 7,
        }
    }

    /// Longitude of this lagna for the given inputs, in [0, 360).
    pub fn compute(self, inputs: &LagnaInputs) -> f64 {
        (LAGNA_FORMULAS[self.index() as usize].1)(inputs)
    }
}

/// Chart positions and time needed by the special lagna formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaInputs {
    /// Sun's sidereal longitude in degrees.
    pub sun_lon: f64,
    /// Moon's sidereal longitude in degrees.
    pub moon_lon: f64,
    /// Birth lagna (ascendant) sidereal longitude in degrees.
    pub lagna_lon: f64,
    /// Ghatikas elapsed since sunrise.
    pub ghatikas: f64,
}

/// Formula for one special lagna.
pub type LagnaFormula = fn(&LagnaInputs) -> f64;

/// Variant → formula table, in [`ALL_SPECIAL_LAGNAS`] order.
pub const LAGNA_FORMULAS: [(SpecialLagna, LagnaFormula); 8] = [
    (SpecialLagna::BhavaLagna, bhava_lagna_from_inputs),
    (SpecialLagna::HoraLagna, hora_lagna_from_inputs),
    (SpecialLagna::GhatiLagna, ghati_lagna_from_inputs),
    (SpecialLagna::VighatiLagna, vighati_lagna_from_inputs),
    (SpecialLagna::VarnadaLagna, varnada_lagna_from_inputs),
    (SpecialLagna::SreeLagna, sree_lagna_from_inputs),
    (SpecialLagna::PranapadaLagna, pranapada_lagna_from_inputs),
    (SpecialLagna::InduLagna, indu_lagna_from_inputs),
];

fn bhava_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    bhava_lagna(i.sun_lon, i.ghatikas)
}

fn hora_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    hora_lagna(i.sun_lon, i.ghatikas)
}

fn ghati_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    ghati_lagna(i.sun_lon, i.ghatikas)
}

fn vighati_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    vighati_lagna(i.lagna_lon, i.ghatikas * 60.0)
}

fn varnada_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    varnada_lagna(i.lagna_lon, hora_lagna(i.sun_lon, i.ghatikas))
}

fn sree_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    sree_lagna(i.moon_lon, i.lagna_lon)
}

fn pranapada_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    pranapada_lagna(i.sun_lon, i.ghatikas)
}

fn indu_lagna_from_inputs(i: &LagnaInputs) -> f64 {
    let lagna_lord = rashi_lord(Rashi::from_longitude(i.lagna_lon));
    let moon_9th_lord = rashi_lord(Rashi::from_longitude(i.moon_lon).nth_from(9));
    indu_lagna(i.moon_lon, lagna_lord, moon_9th_lord)
}

// ---------------------------------------------------------------------------
// Time helpers
// ---------------------------------------------------------------------------

/// Compute ghatikas elapsed since sunrise.
///
/// A ghatika = 24 minutes. One Vedic day (sunrise to next sunrise) = 60 ghatikas.
pub fn ghatikas_since_sunrise(jd_moment: f64, jd_sunrise: f64, jd_next_sunrise: f64) -> f64 {
    let day_length = jd_next_sunrise - jd_sunrise;
    if day_length <= 0.0 {
        return 0.0;
    }
    (jd_moment - jd_sunrise) / day_length * 60.0
}

// ---------------------------------------------------------------------------
// Individual special lagna formulas
// ---------------------------------------------------------------------------

/// Bhava Lagna: advances 1 sign (30 deg) per 5 ghatikas from Sun.
pub fn bhava_lagna(sun_lon: f64, ghatikas: f64) -> f64 {
    normalize_360(sun_lon + ghatikas * 6.0)
}

/// Hora Lagna: advances 1 sign (30 deg) per 2.5 ghatikas from Sun.
pub fn hora_lagna(sun_lon: f64, ghatikas: f64) -> f64 {
    normalize_360(sun_lon + ghatikas * 12.0)
}

/// Ghati Lagna: advances 1 sign (30 deg) per ghatika from Sun.
pub fn ghati_lagna(sun_lon: f64, ghatikas: f64) -> f64 {
    normalize_360(sun_lon + ghatikas * 30.0)
}

/// Vighati Lagna: `(lagna_lon + vighatikas * 0.5) % 360`.
pub fn vighati_lagna(lagna_lon: f64, vighatikas: f64) -> f64 {
    normalize_360(lagna_lon + vighatikas * 0.5)
}

/// Varnada Lagna: parity-based combination of Lagna and Hora Lagna.
///
/// - Both odd: add longitudes
/// - Both even: add complements (360 - longitude)
/// - Lagna odd, Hora even: absolute difference
/// - Lagna even, Hora odd: 360 - absolute difference
pub fn varnada_lagna(lagna_lon: f64, hora_lagna_lon: f64) -> f64 {
    let lagna_odd = longitude_to_units(lagna_lon).rashi % 2 == 1;
    let hora_odd = longitude_to_units(hora_lagna_lon).rashi % 2 == 1;

    let result = match (lagna_odd, hora_odd) {
        (true, true) => lagna_lon + hora_lagna_lon,
        (false, false) => (360.0 - lagna_lon) + (360.0 - hora_lagna_lon),
        (true, false) => (lagna_lon - hora_lagna_lon).abs(),
        (false, true) => 360.0 - (lagna_lon - hora_lagna_lon).abs(),
    };

    normalize_360(result)
}

/// Sree Lagna: Moon's nakshatra fraction scaled to 360 and added to Lagna.
pub fn sree_lagna(moon_lon: f64, lagna_lon: f64) -> f64 {
    let nakshatra_span = 360.0 / 27.0;
    let moon_in_nakshatra = moon_lon % nakshatra_span;
    let scaled = (moon_in_nakshatra / nakshatra_span) * 360.0;
    normalize_360(lagna_lon + scaled)
}

/// Pranapada Lagna: `sun + ghatikas * 120`, adjusted by the Sun's sign type.
///
/// - Movable (1,4,7,10): no addition
/// - Fixed (2,5,8,11): +240 deg
/// - Dual (3,6,9,12): +120 deg
pub fn pranapada_lagna(sun_lon: f64, ghatikas: f64) -> f64 {
    let base = normalize_360(sun_lon + (ghatikas * 120.0) % 360.0);

    match longitude_to_units(sun_lon).rashi % 3 {
        1 => base,
        2 => normalize_360(base + 240.0),
        _ => normalize_360(base + 120.0),
    }
}

/// Indu Lagna: wealth indicator based on kaksha values.
///
/// total = lagna lord kaksha + Moon's 9th lord kaksha; remainder = total % 12
/// (0 counts as 12); Indu = Moon + (remainder - 1) * 30.
pub fn indu_lagna(moon_lon: f64, lagna_lord: Graha, moon_9th_lord: Graha) -> f64 {
    let total = lagna_lord.kaksha_value() as u16 + moon_9th_lord.kaksha_value() as u16;
    let remainder = match total % 12 {
        0 => 12,
        r => r,
    };
    normalize_360(moon_lon + (remainder as f64 - 1.0) * 30.0)
}
