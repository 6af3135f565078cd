//! Graha (celestial body) table: codes, names, glyphs, and rashi lordship.
//!
//! Chart data addresses every body by a two-letter code. The 9 grahas below
//! are the canonical set a chart must carry; the ascendant travels alongside
//! them under [`ASCENDANT_CODE`] but lives in the `extra` block.

use crate::rashi::Rashi;

/// Code of the ascendant (Lagna) in chart data.
pub const ASCENDANT_CODE: &str = "Lg";

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Key of the graha in chart data.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Surya => "Sy",
            Self::Chandra => "Ch",
            Self::Mangal => "Ma",
            Self::Buddh => "Bu",
            Self::Guru => "Gu",
            Self::Shukra => "Sk",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// Look up a graha by its chart-data code.
    pub fn from_code(code: &str) -> Option<Graha> {
        ALL_GRAHAS.iter().copied().find(|g| g.code() == code)
    }

    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Astronomical symbol as an escaped hex code point (e.g. `"2609"`).
    pub const fn unicode(self) -> &'static str {
        match self {
            Self::Surya => "2609",
            Self::Chandra => "263D",
            Self::Mangal => "2642",
            Self::Buddh => "263F",
            Self::Guru => "2643",
            Self::Shukra => "2640",
            Self::Shani => "2644",
            Self::Rahu => "260A",
            Self::Ketu => "260B",
        }
    }

    /// Displayable glyph decoded from [`Graha::unicode`].
    pub fn glyph(self) -> Option<char> {
        decode_code_point(self.unicode())
    }

    /// Rahu and Ketu, the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Kaksha value for Indu Lagna calculation.
    /// Returns 0 for Rahu/Ketu (not used in standard calculation).
    pub const fn kaksha_value(self) -> u8 {
        match self {
            Self::Surya => 30,
            Self::Chandra => 16,
            Self::Mangal => 6,
            Self::Buddh => 8,
            Self::Guru => 10,
            Self::Shukra => 12,
            Self::Shani => 1,
            Self::Rahu | Self::Ketu => 0,
        }
    }
}

/// Decode a hex code point such as `"263D"` into a char.
pub fn decode_code_point(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS):
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}
