//! Grid-area ↔ rashi rotation and planet bucketing for the 12-house chart.
//!
//! The chart layout is a fixed geometric arrangement of 12 areas (ids 1-12)
//! around a non-interactive center cell (id 0). Which rashi occupies which
//! area is a pure rotation of the sign wheel: the lagna (ascendant) rashi
//! lands on area 1 and the rest follow in order.
//!
//! The rotation formula lives here and nowhere else; historical chart
//! renderers that inlined it are consolidated into these two functions.

use std::collections::BTreeMap;

use crate::error::ChakraError;
use crate::graha::{Graha, GrahaPosition};
use crate::rashi::{ALL_RASHIS, Rashi};

/// Area id of the non-interactive center/reference cell.
pub const CENTER_AREA: u8 = 0;

/// Rashi occupying a grid area for a chart with the given lagna.
///
/// Area 1 always holds the lagna itself; areas 2-12 follow in zodiacal
/// order, wrapping after Meena.
///
/// Rejects area ids outside 1-12 (including [`CENTER_AREA`], which holds
/// no rashi).
pub fn sign_for_area(area_id: u8, lagna: Rashi) -> Result<Rashi, ChakraError> {
    if area_id < 1 || area_id > 12 {
        return Err(ChakraError::InvalidArea(area_id));
    }
    let raw = (lagna.number() as u16 - 1 + area_id as u16) % 12;
    let number = if raw == 0 { 12 } else { raw as u8 };
    Ok(ALL_RASHIS[(number - 1) as usize])
}

/// Grid area (1-12) holding a rashi for a chart with the given lagna.
///
/// Inverse of [`sign_for_area`]: for every lagna the two functions are
/// inverse bijections over the 12-sign cycle.
pub fn area_for_sign(sign: Rashi, lagna: Rashi) -> u8 {
    let mut area = sign.number() as i16 - lagna.number() as i16 + 1;
    while area <= 0 {
        area += 12;
    }
    while area > 12 {
        area -= 12;
    }
    area as u8
}

/// Group chart positions by the grid area that displays them.
///
/// Bucket contents keep the input list's order; areas with no grahas are
/// absent from the map. An empty position list yields an empty map.
pub fn bucket_by_area(positions: &[GrahaPosition], lagna: Rashi) -> BTreeMap<u8, Vec<Graha>> {
    let mut buckets: BTreeMap<u8, Vec<Graha>> = BTreeMap::new();
    for pos in positions {
        let area = area_for_sign(pos.rashi, lagna);
        buckets.entry(area).or_default().push(pos.graha);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_1_is_lagna_itself() {
        for lagna in ALL_RASHIS {
            assert_eq!(sign_for_area(1, lagna), Ok(lagna));
        }
    }

    #[test]
    fn no_wrap_boundaries() {
        // Lagna Mesha: identity rotation
        assert_eq!(sign_for_area(1, Rashi::Mesha), Ok(Rashi::Mesha));
        assert_eq!(sign_for_area(12, Rashi::Mesha), Ok(Rashi::Meena));
    }

    #[test]
    fn wraparound_case() {
        // Lagna Meena (12), area 2: (12-1+2) % 12 = 1 → Mesha
        assert_eq!(sign_for_area(2, Rashi::Meena), Ok(Rashi::Mesha));
    }

    #[test]
    fn simha_lagna_worked_example() {
        // mapAreaToSign(1, 5) == 5
        assert_eq!(sign_for_area(1, Rashi::Simha), Ok(Rashi::Simha));
        assert_eq!(sign_for_area(8, Rashi::Simha), Ok(Rashi::Meena));
        assert_eq!(sign_for_area(9, Rashi::Simha), Ok(Rashi::Mesha));
    }

    #[test]
    fn center_and_out_of_range_rejected() {
        assert_eq!(
            sign_for_area(CENTER_AREA, Rashi::Mesha),
            Err(ChakraError::InvalidArea(0))
        );
        assert_eq!(
            sign_for_area(13, Rashi::Simha),
            Err(ChakraError::InvalidArea(13))
        );
    }

    #[test]
    fn round_trip_all_pairs() {
        for lagna in ALL_RASHIS {
            for area in 1..=12u8 {
                let sign = sign_for_area(area, lagna).unwrap();
                assert_eq!(area_for_sign(sign, lagna), area, "lagna {lagna:?}");
            }
            for sign in ALL_RASHIS {
                let area = area_for_sign(sign, lagna);
                assert_eq!(sign_for_area(area, lagna), Ok(sign), "lagna {lagna:?}");
            }
        }
    }

    #[test]
    fn sign_in_lagna_maps_to_area_1() {
        assert_eq!(area_for_sign(Rashi::Simha, Rashi::Simha), 1);
    }

    #[test]
    fn bucket_empty_input() {
        assert!(bucket_by_area(&[], Rashi::Mesha).is_empty());
        assert!(bucket_by_area(&[], Rashi::Meena).is_empty());
    }

    #[test]
    fn bucket_sun_in_lagna_sign() {
        // Sun in Simha with Simha lagna → area 1
        let positions = [GrahaPosition {
            graha: Graha::Surya,
            rashi: Rashi::Simha,
        }];
        let buckets = bucket_by_area(&positions, Rashi::Simha);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.get(&1), Some(&vec![Graha::Surya]));
    }

    #[test]
    fn bucket_preserves_input_order() {
        // Saturn listed before Sun, both in Tula
        let positions = [
            GrahaPosition {
                graha: Graha::Shani,
                rashi: Rashi::Tula,
            },
            GrahaPosition {
                graha: Graha::Surya,
                rashi: Rashi::Tula,
            },
            GrahaPosition {
                graha: Graha::Chandra,
                rashi: Rashi::Karka,
            },
        ];
        let buckets = bucket_by_area(&positions, Rashi::Karka);
        assert_eq!(buckets.get(&1), Some(&vec![Graha::Chandra]));
        assert_eq!(buckets.get(&4), Some(&vec![Graha::Shani, Graha::Surya]));
        assert_eq!(buckets.get(&2), None);
    }

    #[test]
    fn bucket_all_nine_in_one_sign() {
        let positions: Vec<GrahaPosition> = crate::graha::ALL_GRAHAS
            .into_iter()
            .map(|graha| GrahaPosition {
                graha,
                rashi: Rashi::Dhanu,
            })
            .collect();
        let buckets = bucket_by_area(&positions, Rashi::Mesha);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.get(&9).map(Vec::len), Some(9));
    }
}
