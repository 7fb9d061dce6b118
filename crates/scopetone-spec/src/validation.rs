//! Project validation logic.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::pattern::Pattern;
use crate::project::{Project, FORMAT_VERSION};

/// Minimum supported grid dimension. The coordinate mapping divides by
/// `grid_size - 1`, so a 1x1 grid has no defined geometry.
pub const MIN_GRID_SIZE: usize = 2;

/// Validates a project and returns an accumulated validation result.
///
/// Checks the document contract: supported format version, grid dimension,
/// at least one frame, every frame square and matching `grid_size`, and every
/// cell value in {0, 1}. Blank frames are legal (they render as silence in
/// animated exports) and only produce a warning.
///
/// # Example
/// ```
/// use scopetone_spec::{Pattern, Project};
/// use scopetone_spec::validation::validate_project;
///
/// let project = Project::builder(16).frame(Pattern::blank(16)).build();
/// let result = validate_project(&project);
/// assert!(result.is_ok());
/// ```
pub fn validate_project(project: &Project) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_format_version(project, &mut result);
    validate_grid_size(project, &mut result);
    validate_frames(project, &mut result);

    result
}

fn validate_format_version(project: &Project, result: &mut ValidationResult) {
    if project.format_version != FORMAT_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedFormatVersion,
            format!(
                "format_version must be {}, got {}",
                FORMAT_VERSION, project.format_version
            ),
            "format_version",
        ));
    }
}

fn validate_grid_size(project: &Project, result: &mut ValidationResult) {
    if project.grid_size < MIN_GRID_SIZE {
        result.add_error(ValidationError::with_path(
            ErrorCode::GridTooSmall,
            format!(
                "grid_size must be at least {}, got {}",
                MIN_GRID_SIZE, project.grid_size
            ),
            "grid_size",
        ));
    }
}

fn validate_frames(project: &Project, result: &mut ValidationResult) {
    if project.frames.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoFrames,
            "frames array must have at least one entry",
            "frames",
        ));
        return;
    }

    for (i, frame) in project.frames.iter().enumerate() {
        validate_frame_shape(frame, project.grid_size, i, result);
        validate_frame_cells(frame, i, result);

        if frame.is_blank() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::BlankFrame,
                "frame has no active cells",
                format!("frames[{}]", i),
            ));
        }
    }
}

fn validate_frame_shape(
    frame: &Pattern,
    grid_size: usize,
    index: usize,
    result: &mut ValidationResult,
) {
    let rows = frame.row_count();
    let square = frame.rows().iter().all(|r| r.len() == rows);

    if !square {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonSquareFrame,
            format!("frame has {} rows but unequal row lengths", rows),
            format!("frames[{}]", index),
        ));
        return;
    }

    if rows != grid_size {
        result.add_error(ValidationError::with_path(
            ErrorCode::FrameDimensionMismatch,
            format!("frame is {0}x{0}, expected {1}x{1}", rows, grid_size),
            format!("frames[{}]", index),
        ));
    }
}

fn validate_frame_cells(frame: &Pattern, index: usize, result: &mut ValidationResult) {
    for (r, row) in frame.rows().iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value > 1 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidCellValue,
                    format!("cell value must be 0 or 1, got {}", value),
                    format!("frames[{}][{}][{}]", index, r, c),
                ));
            }
        }
    }
}
