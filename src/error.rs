use thiserror::Error;

/// The single failure condition for the analysis primitives.
///
/// Everything these functions can reject (empty sequences, mismatched
/// lengths, degenerate parameters) collapses into one generic invalid-input
/// condition. Saturation in the quantizer and the epsilon guard in the
/// equalizer are deliberate non-errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric input: {reason}")]
pub struct InvalidInput {
    reason: &'static str,
}

impl InvalidInput {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Human-readable explanation of what was rejected.
    pub fn reason(&self) -> &str {
        self.reason
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, InvalidInput>;

pub(crate) fn ensure(condition: bool, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(InvalidInput::new(reason))
    }
}
