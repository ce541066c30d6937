//! Error types for chart-layout calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart-layout calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChakraError {
    /// Grid area id outside 1-12 (0 is the non-interactive center cell).
    InvalidArea(u8),
    /// Rashi number outside 1-12.
    InvalidSign(u8),
}

impl Display for ChakraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArea(a) => write!(f, "invalid grid area id: {a} (expected 1-12)"),
            Self::InvalidSign(s) => write!(f, "invalid rashi number: {s} (expected 1-12)"),
        }
    }
}

impl Error for ChakraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_value() {
        assert!(ChakraError::InvalidArea(13).to_string().contains("13"));
        assert!(ChakraError::InvalidSign(0).to_string().contains('0'));
    }
}
