// Error taxonomy for the random subsystem.
//
// Every failure here is a synchronous, caller-input validation error. None
// is fatal to the subsystem: a rejected call consumes no entropy and leaves
// the caller's `SeedState` untouched, so retrying after fixing the input is
// always safe.

use std::fmt;

/// Validation failures reported by the random subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngError {
    /// The seed descriptor was malformed (wrong-length pair, non-finite float).
    InvalidSeed,
    /// A bound was non-positive, or `min > max`.
    InvalidRange,
    /// Uniform or weighted choice over zero candidates.
    EmptyCollection,
    /// Weighted choice where no candidate carries positive weight.
    ZeroWeight,
}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngError::InvalidSeed => write!(f, "malformed seed descriptor"),
            RngError::InvalidRange => write!(f, "invalid range bound"),
            RngError::EmptyCollection => write!(f, "choice from an empty collection"),
            RngError::ZeroWeight => write!(f, "weighted set has no positive weight"),
        }
    }
}

impl std::error::Error for RngError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(RngError::InvalidSeed.to_string(), "malformed seed descriptor");
        assert_eq!(
            RngError::ZeroWeight.to_string(),
            "weighted set has no positive weight"
        );
    }
}
