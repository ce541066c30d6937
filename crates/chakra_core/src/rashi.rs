//! Rashi (zodiac sign) identifiers and name tables.
//!
//! The 12 rashis in traditional order, starting from Mesha (Aries).
//! Chart data from the upstream API numbers rashis 1-12 in this order,
//! so both a 0-based index and the 1-based chart number are exposed.

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
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

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Sinhala name of the rashi, as shown in chart labels.
    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Mesha => "මේෂ",
            Self::Vrishabha => "වෘෂභ",
            Self::Mithuna => "මිථුන",
            Self::Karka => "කර්කට",
            Self::Simha => "සිංහ",
            Self::Kanya => "කන්‍යා",
            Self::Tula => "තුලා",
            Self::Vrischika => "වෘශ්චික",
            Self::Dhanu => "ධනු",
            Self::Makara => "මකර",
            Self::Kumbha => "කුම්භ",
            Self::Meena => "මීන",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based chart number (Mesha=1 .. Meena=12), as used by the upstream API.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from its 1-based chart number.
    ///
    /// Returns None if the number is outside 1-12.
    pub fn from_number(number: u8) -> Option<Rashi> {
        if number < 1 || number > 12 {
            return None;
        }
        Some(ALL_RASHIS[(number - 1) as usize])
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}
