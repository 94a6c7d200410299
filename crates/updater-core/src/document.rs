//! Template document I/O using serde_yaml

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};

/// Load a template file into a generic YAML tree.
///
/// CloudFormation intrinsic-function tags (`!Sub`, `!Ref`, `!GetAtt`, ...)
/// are not part of the YAML core schema; serde_yaml parses them as tagged
/// nodes, which are folded down to their untagged payloads here so the rest
/// of the crate only ever sees plain mappings, sequences, and scalars.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value =
        serde_yaml::from_str(&source).map_err(|e| Error::parse(path, e.to_string()))?;

    tracing::debug!(?path, "Loaded template");
    Ok(fold_tags(value))
}

/// Serialize the document back to YAML, replacing the file at `path`.
///
/// The write is atomic (temp file in the same directory, then rename) so a
/// failure mid-write never leaves a truncated template behind. Formatting,
/// key order, and comments from the original file are not preserved.
pub fn save(path: &Path, document: &Value) -> Result<()> {
    let rendered = serde_yaml::to_string(document)
        .map_err(|e| Error::write(path, std::io::Error::other(e)))?;

    write_atomic(path, rendered.as_bytes())?;
    tracing::debug!(?path, "Saved template");
    Ok(())
}

/// Replace tagged nodes with their payloads, recursively.
fn fold_tags(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => fold_tags(tagged.value),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(fold_tags).collect()),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (fold_tags(k), fold_tags(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Write content via write-to-temp-then-rename to prevent partial writes.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::write(&temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::write(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::write(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| Error::write(path, e))?;

    Ok(())
}
