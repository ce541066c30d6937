//! Placement dignity of a graha in a rashi.
//!
//! Seven-level classification used to color grahas in the rendered chart:
//! exaltation (uchcha), moolatrikona, own house (swakshetra), strong,
//! medium, weak, and debilitation (neecha). The full 12×9 table is the
//! chart renderer's convention and is transcribed as-is; do not alter
//! without domain input.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Dignity of a graha placed in a rashi, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    /// Uchcha — exaltation.
    Exaltation,
    /// Moolatrikona — own trine.
    Moolatrikona,
    /// Swakshetra — own house.
    Own,
    /// Balavat — strong placement.
    Strong,
    /// Madhyama — middling placement.
    Medium,
    /// Durbala — weak placement.
    Weak,
    /// Neecha — debilitation.
    Debilitated,
}

impl Dignity {
    /// English label of the dignity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exaltation => "Exaltation",
            Self::Moolatrikona => "Moolatrikona",
            Self::Own => "Own",
            Self::Strong => "Strong",
            Self::Medium => "Medium",
            Self::Weak => "Weak",
            Self::Debilitated => "Debilitated",
        }
    }

    /// Sinhala label of the dignity.
    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Exaltation => "උච්ච",
            Self::Moolatrikona => "මුලත්‍රිකෝණ",
            Self::Own => "ස්වගෘහ",
            Self::Strong => "බලවත්",
            Self::Medium => "මධ්‍යම",
            Self::Weak => "දුර්වල",
            Self::Debilitated => "නීච",
        }
    }
}

use Dignity::{Debilitated as D, Exaltation as E, Medium as M, Moolatrikona as T, Own as O};
use Dignity::{Strong as S, Weak as W};

/// `DIGNITY_TABLE[rashi.index()][graha.index()]`, graha columns in
/// traditional order (Surya .. Ketu).
const DIGNITY_TABLE: [[Dignity; 9]; 12] = [
    // Mesha
    [E, M, T, S, S, W, D, M, M],
    // Vrishabha
    [S, E, M, M, M, T, O, M, W],
    // Mithuna
    [M, M, W, T, M, S, M, T, M],
    // Karka
    [M, T, W, M, E, S, D, M, M],
    // Simha
    [T, M, O, M, S, M, M, M, M],
    // Kanya
    [M, S, W, E, T, M, S, M, W],
    // Tula
    [D, M, M, M, M, T, E, M, T],
    // Vrischika
    [M, D, T, M, M, M, W, T, M],
    // Dhanu
    [M, M, M, M, T, E, M, M, M],
    // Makara
    [D, M, E, M, M, W, O, M, M],
    // Kumbha
    [M, M, M, M, W, M, O, O, M],
    // Meena
    [M, M, M, W, T, E, M, W, O],
];

/// Dignity of a graha placed in a rashi.
pub const fn dignity(graha: Graha, rashi: Rashi) -> Dignity {
    DIGNITY_TABLE[rashi.index() as usize][graha.index() as usize]
}
