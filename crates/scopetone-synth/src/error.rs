//! Error types for the synthesis core.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during waveform rendering.
///
/// The synthesis stages themselves are total over validated input; every
/// variant here is raised either by boundary validation or by the mode-level
/// empty checks.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Static render of a pattern with zero active cells. Non-fatal to the
    /// application: callers surface it as a warning and skip the export.
    #[error("pattern has no active cells")]
    EmptyPattern,

    /// Animated render of a sequence with zero frames.
    #[error("sequence contains no frames")]
    EmptySequence,

    /// Grid dimension below 2, a non-square frame, or a frame that does not
    /// match the configured grid dimension.
    #[error("invalid grid dimension: {message}")]
    InvalidGridDimension {
        /// Error message.
        message: String,
    },

    /// Cell value outside {0, 1}.
    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: u8,
    },

    /// Non-finite or non-positive duration.
    #[error("invalid duration: {seconds} seconds")]
    InvalidDuration {
        /// The invalid duration.
        seconds: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl RenderError {
    /// Creates an invalid grid dimension error.
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGridDimension {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::EmptyPattern => "SYNTH_001",
            RenderError::EmptySequence => "SYNTH_002",
            RenderError::InvalidGridDimension { .. } => "SYNTH_003",
            RenderError::InvalidCellValue { .. } => "SYNTH_004",
            RenderError::InvalidDuration { .. } => "SYNTH_005",
            RenderError::InvalidSampleRate { .. } => "SYNTH_006",
            RenderError::InvalidParameter { .. } => "SYNTH_007",
        }
    }

    /// Returns true for the warning-grade condition: a static export whose
    /// sole pattern is blank. The caller should warn and skip the export
    /// rather than fail.
    pub fn is_warning(&self) -> bool {
        matches!(self, RenderError::EmptyPattern)
    }
}
