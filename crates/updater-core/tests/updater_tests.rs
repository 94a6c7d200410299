//! File-based tests for the full load / update / save pipeline.

use std::fs;
use std::path::PathBuf;

use serde_yaml::Value;
use tempfile::TempDir;

use updater_core::{Error, Outcome, TemplateUpdater, UpdaterConfig};

fn write_template(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("template.yaml");
    fs::write(&path, content).unwrap();
    path
}

fn runtime_of(path: &std::path::Path, resource: &str) -> Value {
    let value: Value = serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value["Resources"][resource]["Properties"]["Runtime"].clone()
}

#[test]
fn test_process_rewrites_outdated_runtime_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        "Resources:\n  MyFunc:\n    Properties:\n      Runtime: python3.7\n",
    );

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    let outcome = updater.process().unwrap();

    match outcome {
        Outcome::Updated(changes) => {
            assert_eq!(changes.len(), 1);
            assert_eq!(changes[0].resource, "MyFunc");
            assert_eq!(changes[0].from, "python3.7");
            assert_eq!(changes[0].to, "python3.9");
        }
        Outcome::UpToDate => panic!("expected an update"),
    }

    assert_eq!(
        runtime_of(&path, "MyFunc"),
        Value::String("python3.9".to_string())
    );
}

#[test]
fn test_process_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        "Resources:\n  MyFunc:\n    Properties:\n      Runtime: python3.8\n",
    );

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    assert!(matches!(updater.process().unwrap(), Outcome::Updated(_)));

    let after_first = fs::read_to_string(&path).unwrap();
    assert_eq!(updater.process().unwrap(), Outcome::UpToDate);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_up_to_date_template_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        "Resources:\n  MyFunc:\n    Properties:\n      Runtime: python3.12\n",
    );
    let original = fs::read_to_string(&path).unwrap();

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    assert_eq!(updater.process().unwrap(), Outcome::UpToDate);

    // File must be byte-identical: no save happened, so no normalization.
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_preview_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        "Resources:\n  MyFunc:\n    Properties:\n      Runtime: python3.7\n",
    );
    let original = fs::read_to_string(&path).unwrap();

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    let outcome = updater.preview().unwrap();

    assert!(matches!(outcome, Outcome::Updated(ref c) if c.len() == 1));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_missing_template_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.yaml");

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    let err = updater.process().unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
}

#[test]
fn test_malformed_template_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_template(&dir, "Resources: [unclosed\n");

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    let err = updater.process().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_intrinsic_tags_survive_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        r#"
Resources:
  MyFunc:
    Properties:
      Runtime: python3.7
      Handler: app.handler
      FunctionName: !Sub "fn-${AWS::Region}"
"#,
    );

    let updater = TemplateUpdater::new(UpdaterConfig::new(&path));
    assert!(matches!(updater.process().unwrap(), Outcome::Updated(_)));

    let value: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let properties = &value["Resources"]["MyFunc"]["Properties"];
    assert_eq!(
        properties["Runtime"],
        Value::String("python3.9".to_string())
    );
    // The tag itself is normalized away; its literal payload remains.
    assert_eq!(
        properties["FunctionName"],
        Value::String("fn-${AWS::Region}".to_string())
    );
}

#[test]
fn test_custom_versions_flow_through_process() {
    let dir = TempDir::new().unwrap();
    let path = write_template(
        &dir,
        "Resources:\n  MyFunc:\n    Properties:\n      Runtime: python3.9\n",
    );

    let config = UpdaterConfig::new(&path)
        .with_threshold("python3.9")
        .with_replacement("python3.13");
    let updater = TemplateUpdater::new(config);

    assert!(matches!(updater.process().unwrap(), Outcome::Updated(_)));
    assert_eq!(
        runtime_of(&path, "MyFunc"),
        Value::String("python3.13".to_string())
    );
}
