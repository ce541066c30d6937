//! Chart-layout and aspect calculations for Vedic (jyotish) charts.
//!
//! This crate provides:
//! - The 9 grahas and 12 rashis with their traditional name tables
//! - Grid-area ↔ rashi rotation for the fixed 12-house chart layout
//! - Graha drishti (planetary aspect) calculation by whole-sign steps
//! - Placement dignity classification (exaltation .. debilitation)
//! - Wire types for the upstream chart-calculation API
//!
//! All positional computation (lagna, graha longitudes, dasha periods) is
//! performed upstream; everything here is pure arithmetic over sign numbers.

pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod grid;
pub mod rashi;
pub mod snapshot;

pub use dignity::{Dignity, dignity};
pub use drishti::{DrishtiMap, calculate_drishti, drishti_steps};
pub use error::ChakraError;
pub use graha::{ALL_GRAHAS, Graha, GrahaPosition, rashi_lord, rashi_lord_by_number};
pub use grid::{CENTER_AREA, area_for_sign, bucket_by_area, sign_for_area};
pub use rashi::{ALL_RASHIS, Rashi};
pub use snapshot::{AscendantResponse, ChartData, PlanetSign};
