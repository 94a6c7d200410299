//! Updater run configuration

use std::path::PathBuf;

/// Runtimes ordering at or below this value are considered outdated.
pub const DEFAULT_THRESHOLD: &str = "python3.8";

/// Value written over outdated runtimes.
pub const DEFAULT_REPLACEMENT: &str = "python3.9";

/// Configuration for a single updater run.
///
/// Carried explicitly through every operation; there is no module-level
/// default state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Path to the template file to patch in place
    pub template_path: PathBuf,
    /// Runtimes at or below this version are rewritten
    pub threshold: String,
    /// Replacement value for outdated runtimes
    pub replacement: String,
}

impl UpdaterConfig {
    /// Create a configuration for `template_path` with the default
    /// threshold and replacement versions.
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            threshold: DEFAULT_THRESHOLD.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }

    /// Override the threshold version.
    pub fn with_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Override the replacement version.
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }
}
