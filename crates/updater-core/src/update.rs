//! Runtime scan and in-place mutation

use serde_yaml::Value;

use crate::config::UpdaterConfig;

/// One `Runtime` rewrite performed during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeChange {
    /// Resource name under `Resources`
    pub resource: String,
    /// Value found in the template
    pub from: String,
    /// Value written in its place
    pub to: String,
}

/// Walk `Resources.*.Properties.Runtime` and rewrite every outdated value.
///
/// Entries that are not mappings, or that lack `Properties` or `Runtime`,
/// are skipped without comment. Returns one record per rewrite; an empty
/// vec means the document was left untouched.
pub fn update_runtime(document: &mut Value, config: &UpdaterConfig) -> Vec<RuntimeChange> {
    let mut changes = Vec::new();

    let Some(resources) = document
        .get_mut("Resources")
        .and_then(Value::as_mapping_mut)
    else {
        return changes;
    };

    for (name, details) in resources.iter_mut() {
        let Some(properties) = details
            .get_mut("Properties")
            .and_then(Value::as_mapping_mut)
        else {
            continue;
        };
        let Some(runtime) = properties.get_mut("Runtime") else {
            continue;
        };
        let Some(current) = runtime.as_str() else {
            continue;
        };

        if runtime_outdated(current, &config.threshold) {
            let change = RuntimeChange {
                resource: name.as_str().unwrap_or_default().to_string(),
                from: current.to_string(),
                to: config.replacement.clone(),
            };
            tracing::info!(
                resource = %change.resource,
                from = %change.from,
                to = %change.to,
                "Updating runtime"
            );
            *runtime = Value::String(config.replacement.clone());
            changes.push(change);
        }
    }

    changes
}

/// Whether `current` orders at or below `threshold`.
///
/// Identifiers of the shape `<name><major>.<minor>` (e.g. `python3.10`)
/// compare by name, then numerically by component, so `python3.10` sorts
/// above `python3.8` rather than below it as a plain string comparison
/// would have it. Anything else falls back to lexicographic ordering.
fn runtime_outdated(current: &str, threshold: &str) -> bool {
    match (parse_runtime(current), parse_runtime(threshold)) {
        (Some(a), Some(b)) => a <= b,
        _ => current <= threshold,
    }
}

fn parse_runtime(id: &str) -> Option<(&str, u32, u32)> {
    let start = id.find(|c: char| c.is_ascii_digit())?;
    let (name, version) = id.split_at(start);
    let (major, minor) = version.split_once('.')?;
    Some((name, major.parse().ok()?, minor.parse().ok()?))
}
