//! Load / update / save orchestration

use serde_yaml::Value;

use crate::config::UpdaterConfig;
use crate::document;
use crate::error::Result;
use crate::update::{self, RuntimeChange};

/// Result of one full run against a template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The template held outdated runtimes; one record per rewrite.
    Updated(Vec<RuntimeChange>),
    /// Nothing qualified; the file was not touched.
    UpToDate,
}

/// Patches outdated `Runtime` values in a single template file.
///
/// A linear three-step pipeline: load the template, rewrite qualifying
/// runtimes in the parsed tree, and save the tree back iff anything
/// changed. Each run is independent; a second run over an already-updated
/// template is a no-op.
#[derive(Debug, Clone)]
pub struct TemplateUpdater {
    config: UpdaterConfig,
}

impl TemplateUpdater {
    pub fn new(config: UpdaterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Load the configured template into a generic YAML tree.
    pub fn load(&self) -> Result<Value> {
        document::load(&self.config.template_path)
    }

    /// Rewrite outdated runtimes in `document`, returning the changes made.
    pub fn update_runtime(&self, document: &mut Value) -> Vec<RuntimeChange> {
        update::update_runtime(document, &self.config)
    }

    /// Serialize `document` back over the configured template file.
    pub fn save(&self, document: &Value) -> Result<()> {
        document::save(&self.config.template_path, document)
    }

    /// Run the full pipeline, writing the file back if anything changed.
    pub fn process(&self) -> Result<Outcome> {
        self.run(true)
    }

    /// Run the pipeline without writing, reporting what would change.
    pub fn preview(&self) -> Result<Outcome> {
        self.run(false)
    }

    fn run(&self, apply: bool) -> Result<Outcome> {
        let mut document = self.load()?;
        let changes = self.update_runtime(&mut document);

        if changes.is_empty() {
            tracing::debug!(path = ?self.config.template_path, "No runtime updates necessary");
            return Ok(Outcome::UpToDate);
        }

        if apply {
            self.save(&document)?;
        }
        Ok(Outcome::Updated(changes))
    }
}
