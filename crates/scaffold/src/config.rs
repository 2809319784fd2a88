//! Project configuration and its validation

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;

/// Go version written to `go.mod` when none is given
pub const DEFAULT_RUNTIME_VERSION: &str = "1.21";

static RUNTIME_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\.[0-9]+(\.[0-9]+)?$").expect("version pattern is valid"));

/// The three answers a scaffolding run is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    /// Root directory name, also used in the greeting and README heading
    pub project_name: String,
    /// Go module path
    pub module_name: String,
    /// Go version for the `go` directive
    pub runtime_version: String,
}

impl ProjectConfig {
    /// Build a configuration from raw answers.
    ///
    /// All fields are trimmed. A blank version falls back to
    /// [`DEFAULT_RUNTIME_VERSION`]; blank names are kept for [`validate`](Self::validate)
    /// to reject.
    pub fn new(project_name: &str, module_name: &str, runtime_version: &str) -> Self {
        let runtime_version = match runtime_version.trim() {
            "" => DEFAULT_RUNTIME_VERSION,
            v => v,
        };

        Self {
            project_name: project_name.trim().to_string(),
            module_name: module_name.trim().to_string(),
            runtime_version: runtime_version.to_string(),
        }
    }

    /// Check the fields in order: project name, module name, version.
    /// The first failing rule is returned. Fields are checked as stored;
    /// trimming belongs to [`new`](Self::new).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.project_name.as_str();
        if name.is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidProjectName(name.to_string()));
        }

        if self.module_name.is_empty() {
            return Err(ValidationError::EmptyModuleName);
        }

        if !RUNTIME_VERSION.is_match(&self.runtime_version) {
            return Err(ValidationError::InvalidRuntimeVersion(
                self.runtime_version.clone(),
            ));
        }

        Ok(())
    }
}
