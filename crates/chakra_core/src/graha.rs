//! Vedic planet (graha) enum, name tables, and rashi lordship.
//!
//! The 9 grahas in traditional order. The upstream chart API identifies
//! grahas by their Sinhala glyph abbreviation (ර, ච, කු, ...), so the glyph
//! is both a display string and the wire identifier; `from_glyph` is the
//! parse direction used when consuming API data.

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Full Sinhala name of the graha.
    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Surya => "සූර්ය",
            Self::Chandra => "චන්ද්‍ර",
            Self::Mangal => "කුජ",
            Self::Buddh => "බුධ",
            Self::Guru => "ගුරු",
            Self::Shukra => "ශුක්‍ර",
            Self::Shani => "ශනි",
            Self::Rahu => "රාහු",
            Self::Ketu => "කේතු",
        }
    }

    /// Sinhala glyph abbreviation — the identifier the upstream API uses.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Surya => "ර",
            Self::Chandra => "ච",
            Self::Mangal => "කු",
            Self::Buddh => "බු",
            Self::Guru => "ගු",
            Self::Shukra => "ශු",
            Self::Shani => "ශ",
            Self::Rahu => "රා",
            Self::Ketu => "කේ",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Parse a graha from its Sinhala glyph identifier.
    ///
    /// Returns None for strings outside the fixed 9-glyph set.
    pub fn from_glyph(glyph: &str) -> Option<Graha> {
        ALL_GRAHAS.into_iter().find(|g| g.glyph() == glyph)
    }

    /// Parse a graha from its English name (case-insensitive).
    pub fn from_english_name(name: &str) -> Option<Graha> {
        ALL_GRAHAS
            .into_iter()
            .find(|g| g.english_name().eq_ignore_ascii_case(name))
    }
}

/// A graha placed in a rashi — one row of a chart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrahaPosition {
    pub graha: Graha,
    pub rashi: Rashi,
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 1-based chart number.
///
/// Returns None if the number is outside 1-12.
pub fn rashi_lord_by_number(number: u8) -> Option<Graha> {
    Rashi::from_number(number).map(rashi_lord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
            assert!(!g.sinhala_name().is_empty());
            assert!(!g.glyph().is_empty());
        }
    }

    #[test]
    fn glyphs_unique() {
        for a in ALL_GRAHAS {
            for b in ALL_GRAHAS {
                if a != b {
                    assert_ne!(a.glyph(), b.glyph(), "{} vs {}", a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn from_glyph_round_trip() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_glyph(g.glyph()), Some(g));
        }
    }

    #[test]
    fn from_glyph_unknown() {
        assert_eq!(Graha::from_glyph(""), None);
        assert_eq!(Graha::from_glyph("Pluto"), None);
        // Full name is not the glyph
        assert_eq!(Graha::from_glyph("සූර්ය"), None);
    }

    #[test]
    fn from_english_name_case_insensitive() {
        assert_eq!(Graha::from_english_name("Sun"), Some(Graha::Surya));
        assert_eq!(Graha::from_english_name("saturn"), Some(Graha::Shani));
        assert_eq!(Graha::from_english_name("RAHU"), Some(Graha::Rahu));
        assert_eq!(Graha::from_english_name("Earth"), None);
    }

    #[test]
    fn rashi_lordship_mesha() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
    }

    #[test]
    fn rashi_lordship_simha() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
    }

    #[test]
    fn rashi_lordship_karka() {
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        // Mars rules both Mesha and Vrischika
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        // Venus rules both Vrishabha and Tula
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        // Mercury rules both Mithuna and Kanya
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        // Jupiter rules both Dhanu and Meena
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        // Saturn rules both Makara and Kumbha
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_number_valid() {
        assert_eq!(rashi_lord_by_number(1), Some(Graha::Mangal));
        assert_eq!(rashi_lord_by_number(5), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_number(12), Some(Graha::Guru));
    }

    #[test]
    fn rashi_lord_by_number_invalid() {
        assert_eq!(rashi_lord_by_number(0), None);
        assert_eq!(rashi_lord_by_number(13), None);
    }
}
