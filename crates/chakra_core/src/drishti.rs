//! Graha drishti (planetary aspect) calculation by whole-sign steps.
//!
//! Each graha aspects the signs at fixed step distances from its own sign
//! (Sun/Moon/Saturn 3-7-10, Mars/Mercury 4-7-8, Jupiter/Venus 5-7-9,
//! nodes 7 only). The step table is an astrological domain constant and is
//! not tunable.
//!
//! The whole map is recomputed from the full position list per chart
//! snapshot; there is no incremental update.

use crate::graha::{Graha, GrahaPosition};
use crate::rashi::Rashi;

/// Aspect step distances for a graha, in sign-steps from its own sign.
pub const fn drishti_steps(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[3, 7, 10],
        Graha::Chandra => &[3, 7, 10],
        Graha::Mangal => &[4, 7, 8],
        Graha::Buddh => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shukra => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Rahu => &[7],
        Graha::Ketu => &[7],
    }
}

/// Sign aspected by a graha in `sign` at one step distance.
///
/// Chart-number arithmetic: `((sign + step + 1) % 12) + 1`, both sides
/// 1-based.
fn aspected_sign(sign: Rashi, step: u8) -> Rashi {
    let number = ((sign.number() as u16 + step as u16 + 1) % 12) as u8 + 1;
    // number is always in 1-12 after the modulo
    crate::rashi::ALL_RASHIS[(number - 1) as usize]
}

/// Which grahas aspect each sign, for one chart snapshot.
///
/// Per-sign lists keep append order: input position order, then ascending
/// step order within each graha. Signs nobody aspects read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrishtiMap {
    /// `signs[rashi.index()]` — grahas aspecting that rashi.
    signs: [Vec<Graha>; 12],
}

impl DrishtiMap {
    /// Grahas aspecting a sign, empty if none.
    pub fn grahas_aspecting(&self, sign: Rashi) -> &[Graha] {
        &self.signs[sign.index() as usize]
    }

    /// True if no graha aspects any sign.
    pub fn is_empty(&self) -> bool {
        self.signs.iter().all(Vec::is_empty)
    }

    /// Aspected signs with their aspecting grahas, in zodiacal order,
    /// skipping unaspected signs.
    pub fn iter(&self) -> impl Iterator<Item = (Rashi, &[Graha])> {
        crate::rashi::ALL_RASHIS
            .into_iter()
            .map(|r| (r, self.grahas_aspecting(r)))
            .filter(|(_, grahas)| !grahas.is_empty())
    }

    /// Multi-line rendering, one `Sign N: [..]` line per aspected sign.
    pub fn format(&self) -> String {
        let lines: Vec<String> = self
            .iter()
            .map(|(sign, grahas)| {
                let glyphs: Vec<&str> = grahas.iter().map(|g| g.glyph()).collect();
                format!("Sign {}: [{}]", sign.number(), glyphs.join(", "))
            })
            .collect();
        lines.join("\n")
    }
}

/// Compute the drishti map for a chart snapshot.
///
/// Processes positions in input order and each graha's steps in table
/// order, appending to the aspected sign's list. An empty position list
/// yields an empty map.
pub fn calculate_drishti(positions: &[GrahaPosition]) -> DrishtiMap {
    let mut map = DrishtiMap::default();
    for pos in positions {
        for &step in drishti_steps(pos.graha) {
            let target = aspected_sign(pos.rashi, step);
            map.signs[target.index() as usize].push(pos.graha);
        }
    }
    map
}
