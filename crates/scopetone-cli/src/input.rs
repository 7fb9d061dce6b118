//! Project file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scopetone_spec::Project;

/// Loads a project document from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read project file: {}", path.display()))?;
    let project = Project::from_json(&text)
        .with_context(|| format!("failed to parse project file: {}", path.display()))?;
    Ok(project)
}
