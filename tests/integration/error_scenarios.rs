//! Exit codes and user-facing error messages.

use predicates::prelude::*;

use crate::common::{PipelineFixture, TestProject};

#[test]
fn test_missing_file() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .args(["extract", "missing.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Path not found: missing.yml"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_missing_scan_directory() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .args(["scan", "does-not-exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_invalid_pattern() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .args(["scan", "--pattern", "("])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid file pattern '('"));
}

#[test]
fn test_invalid_config() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();
    project.write_config("platform = [").unwrap();

    project
        .cidep()
        .args(["extract", ".gitlab-ci.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse global config"));
}

#[test]
fn test_malformed_pipeline_is_not_an_error() {
    let project = TestProject::new().unwrap();
    project.write_fixture("broken.yml", &PipelineFixture::malformed()).unwrap();

    project
        .cidep()
        .args(["extract", "broken.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No include dependencies found"))
        .stderr(predicate::str::contains("YAML exception").not());

    // syntax errors surface at debug level
    project
        .cidep()
        .args(["--verbose", "extract", "broken.yml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("YAML exception extracting pipeline includes"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new().unwrap();

    project.cidep().args(["-v", "-q", "scan"]).assert().failure();
}
