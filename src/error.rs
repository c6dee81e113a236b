//! Error type shared by every fallible simulation operation.

use thiserror::Error;

/// Failures are total: a call either returns its metric or one of these.
///
/// A non-Mersenne anchor exponent is deliberately absent here; it yields
/// the `0.0` sentinel instead.
#[derive(Error, Debug)]
pub enum SimError {
    /// The operation needs at least one zone.
    #[error("at least one zone is required")]
    NoZones,

    /// A configuration field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Anchor exponents run from 1 to `anchor::MAX_ANCHOR_EXPONENT`.
    #[error("anchor exponent must be in 1..={max}, got {0}", max = crate::anchor::MAX_ANCHOR_EXPONENT)]
    InvalidExponent(u32),

    /// Gap transmission was requested with no resonance pass attached.
    #[error("no resonance pass collaborator configured")]
    MissingResonancePass,

    /// A transform produced NaN or infinity.
    #[error("numerical error: {0}")]
    Numerical(String),

    /// The chart backend failed while drawing.
    #[error("render error: {0}")]
    Render(String),

    /// Writing a rendered artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        SimError::InvalidConfig(message.into())
    }

    /// Creates a numerical error.
    pub fn numerical(message: impl Into<String>) -> Self {
        SimError::Numerical(message.into())
    }

    /// Creates a render error.
    pub fn render(message: impl Into<String>) -> Self {
        SimError::Render(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_descriptive() {
        assert_eq!(SimError::NoZones.to_string(), "at least one zone is required");
        assert_eq!(
            SimError::InvalidExponent(0).to_string(),
            "anchor exponent must be in 1..=127, got 0"
        );
        assert_eq!(
            SimError::config("zones must be >= 1").to_string(),
            "invalid configuration: zones must be >= 1"
        );
        assert_eq!(
            SimError::render("backend closed").to_string(),
            "render error: backend closed"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SimError = io.into();
        assert!(matches!(err, SimError::Io(_)));
    }
}
