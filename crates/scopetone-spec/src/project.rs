//! The persisted project document.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Current project format version.
pub const FORMAT_VERSION: u32 = 1;

/// A scopetone project: one grid dimension and an ordered list of frames.
///
/// Frame order is temporal playback order for animated exports. A project
/// with a single frame is the static-export case (the frame is looped to fill
/// a long duration rather than played once).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Schema version; must be 1 for v1 documents.
    pub format_version: u32,

    /// Grid dimension shared by every frame. Must be at least 2.
    pub grid_size: usize,

    /// Ordered frame list (length >= 1 after validation).
    pub frames: Vec<Pattern>,

    /// Human-readable description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Creates a new project builder.
    pub fn builder(grid_size: usize) -> ProjectBuilder {
        ProjectBuilder::new(grid_size)
    }

    /// Parses a project from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a project from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serializes the project to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the project to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Builder for constructing Project instances.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    grid_size: usize,
    frames: Vec<Pattern>,
    description: Option<String>,
}

impl ProjectBuilder {
    /// Creates a new project builder.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            frames: Vec::new(),
            description: None,
        }
    }

    /// Adds a frame.
    pub fn frame(mut self, frame: Pattern) -> Self {
        self.frames.push(frame);
        self
    }

    /// Sets all frames.
    pub fn frames(mut self, frames: Vec<Pattern>) -> Self {
        self.frames = frames;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the project.
    pub fn build(self) -> Project {
        Project {
            format_version: FORMAT_VERSION,
            grid_size: self.grid_size,
            frames: self.frames,
            description: self.description,
        }
    }
}
