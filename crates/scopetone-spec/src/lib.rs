//! Scopetone Project Document Library
//!
//! This crate provides the types and validation for scopetone project
//! documents. A project is a JSON document describing a square binary pixel
//! grid dimension and an ordered list of frames to be rendered into a stereo
//! waveform for oscilloscope-style visualizers.
//!
//! # Overview
//!
//! - **Contract fields**: `format_version`, `grid_size`, and the ordered
//!   `frames` array
//! - **Validation**: accumulated errors (`E001`..`E006`) and warnings
//!   (`W001`) rather than fail-on-first, so an editor or CLI can report every
//!   problem in one pass
//!
//! # Example
//!
//! ```
//! use scopetone_spec::{Pattern, Project};
//! use scopetone_spec::validation::validate_project;
//!
//! let mut frame = Pattern::blank(16);
//! frame.set_cell(0, 0, true);
//!
//! let project = Project::builder(16)
//!     .description("single dot, top-left")
//!     .frame(frame)
//!     .build();
//!
//! let result = validate_project(&project);
//! assert!(result.is_ok());
//! ```

pub mod error;
pub mod pattern;
pub mod project;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use pattern::Pattern;
pub use project::{Project, ProjectBuilder, FORMAT_VERSION};
pub use validation::{validate_project, MIN_GRID_SIZE};
