//! Error and warning types for project validation.

/// Error codes for project validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported format_version
    UnsupportedFormatVersion,
    /// E002: Grid dimension below the minimum of 2
    GridTooSmall,
    /// E003: No frames declared
    NoFrames,
    /// E004: Frame is not square
    NonSquareFrame,
    /// E005: Frame dimension does not match grid_size
    FrameDimensionMismatch,
    /// E006: Cell value outside {0, 1}
    InvalidCellValue,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedFormatVersion => "E001",
            ErrorCode::GridTooSmall => "E002",
            ErrorCode::NoFrames => "E003",
            ErrorCode::NonSquareFrame => "E004",
            ErrorCode::FrameDimensionMismatch => "E005",
            ErrorCode::InvalidCellValue => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for project validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Frame has no active cells
    BlankFrame,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::BlankFrame => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "frames[2]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a document path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the field the warning refers to.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a document path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of project validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResult {
    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}
