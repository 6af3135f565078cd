//! Rashi (zodiac sign) lookup and the longitude → units converter.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Chart data stores positions as a 1-based sign number plus the degree
//! within that sign, so [`longitude_to_units`] is the one conversion every
//! block element passes through.

use crate::util::normalize_360;

/// Arc spanned by one rashi, in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (index 0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12), as stored in chart data.
    pub const fn number(self) -> u8 {
        match self {
            Self::Mesha => 1,
            Self::Vrishabha => 2,
            Self::Mithuna => 3,
            Self::Karka => 4,
            Self::Simha => 5,
            Self::Kanya => 6,
            Self::Tula => 7,
            Self::Vrischika => 8,
            Self::Dhanu => 9,
            Self::Makara => 10,
            Self::Kumbha => 11,
            Self::Meena => 12,
        }
    }

    /// Rashi for a 1-based sign number. Returns None outside 1..=12.
    pub fn from_number(number: u8) -> Option<Rashi> {
        if (1..=12).contains(&number) {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Rashi containing a longitude; any real input is normalized first.
    pub fn from_longitude(lon_deg: f64) -> Rashi {
        let idx = (normalize_360(lon_deg) / RASHI_SPAN_DEG).floor() as usize;
        // Clamp in case of floating point edge just below 360.0
        ALL_RASHIS[idx.min(11)]
    }

    /// The n-th rashi counted from this one (1-based: 1 = same sign).
    pub fn nth_from(self, offset: u8) -> Rashi {
        ALL_RASHIS[((self.number() as u16 + offset as u16 + 10) % 12) as usize]
    }
}

/// A longitude split into its sign and the remainder within the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    /// 1-based sign number, 1..=12.
    pub rashi: u8,
    /// Degrees within the sign, [0.0, 30.0).
    pub degree: f64,
}

/// Convert an ecliptic longitude in [0, 360) to sign number and degree.
///
/// `rashi = floor(lon / 30) + 1`, `degree = lon mod 30`. Longitudes outside
/// the circle are not normalized, but the sign index wraps modulo 12, so the
/// conversion never panics and always yields a sign in 1..=12.
pub fn longitude_to_units(lon_deg: f64) -> Units {
    let idx = (lon_deg / RASHI_SPAN_DEG).floor() as i64;
    let degree = lon_deg - idx as f64 * RASHI_SPAN_DEG;
    Units {
        rashi: idx.rem_euclid(12) as u8 + 1,
        degree,
    }
}
