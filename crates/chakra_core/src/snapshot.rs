//! Wire types for the upstream birth-chart calculation API.
//!
//! The API speaks camelCase JSON: an ascendant endpoint returning
//! `{"sign": n}` and chart endpoints returning
//! `{"zodiacNumber": n, "planetSigns": [{"planet": glyph, "sign": n}, ..]}`.
//! These shapes are deserialized as-is and converted into typed positions
//! with [`ChartData::positions`]; rows with unknown glyphs or out-of-range
//! signs are dropped with a warning rather than failing the whole chart.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, GrahaPosition};
use crate::rashi::Rashi;

/// One planet row from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSign {
    /// Graha identifier — a Sinhala glyph from the fixed 9-glyph set.
    pub planet: String,
    /// 1-based rashi number.
    pub sign: u8,
    /// When the planet next changes sign (ISO date), if the API sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_sign_change_date: Option<String>,
    /// When the planet last changed sign (ISO date), if the API sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_change_date: Option<String>,
}

/// Ascendant endpoint response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscendantResponse {
    /// 1-based rashi number of the lagna.
    pub sign: u8,
}

impl AscendantResponse {
    /// Typed lagna, None if the sign number is out of range.
    pub fn lagna(&self) -> Option<Rashi> {
        Rashi::from_number(self.sign)
    }
}

/// One chart snapshot (rasi, navamsa, or thathkala — same shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// 1-based rashi number of the lagna for this chart.
    pub zodiac_number: u8,
    /// Planet rows, at most one per graha.
    pub planet_signs: Vec<PlanetSign>,
}

impl ChartData {
    /// Typed lagna, None if the sign number is out of range.
    pub fn lagna(&self) -> Option<Rashi> {
        Rashi::from_number(self.zodiac_number)
    }

    /// Typed positions, preserving row order.
    ///
    /// Rows with an unrecognized glyph or an out-of-range sign number are
    /// skipped with a warning; the remaining rows are still returned.
    pub fn positions(&self) -> Vec<GrahaPosition> {
        let mut positions = Vec::with_capacity(self.planet_signs.len());
        for row in &self.planet_signs {
            let Some(graha) = Graha::from_glyph(&row.planet) else {
                log::warn!("no graha mapping for planet identifier: {}", row.planet);
                continue;
            };
            let Some(rashi) = Rashi::from_number(row.sign) else {
                log::warn!(
                    "sign {} out of range for planet {}, skipping",
                    row.sign,
                    row.planet
                );
                continue;
            };
            positions.push(GrahaPosition { graha, rashi });
        }
        positions
    }
}
