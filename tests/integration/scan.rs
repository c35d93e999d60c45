//! `cidep scan` discovery and reporting.

use predicates::prelude::*;

use crate::common::{PipelineFixture, TestProject};

fn project_with_pipelines() -> TestProject {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();
    project.write_fixture("ci/deploy.gitlab-ci.yaml", &PipelineFixture::nested()).unwrap();
    project.write_fixture("ci/local.gitlab-ci.yml", &PipelineFixture::local_only()).unwrap();
    project.write_fixture("ci/other.yml", &PipelineFixture::mixed()).unwrap();
    project.write_fixture(".git/hooks.gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();
    project
}

fn package_files(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|report| report["packageFile"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_scan_default_patterns() {
    let project = project_with_pipelines();

    let json = project.run_json(&["scan", "--format", "json"]);
    assert_eq!(package_files(&json), [".gitlab-ci.yml", "ci/deploy.gitlab-ci.yaml"]);
    assert_eq!(json[1]["deps"][0]["name"], "group/inner");
}

#[test]
fn test_scan_explicit_directory() {
    let project = project_with_pipelines();
    let dir = project.project_path().join("ci");

    let json = project.run_json(&["scan", dir.to_str().unwrap(), "--format", "json"]);
    assert_eq!(package_files(&json), ["deploy.gitlab-ci.yaml"]);
}

#[test]
fn test_scan_pattern_override() {
    let project = project_with_pipelines();

    let json = project.run_json(&["scan", "--pattern", r"^ci/.*\.yml$", "--format", "json"]);
    assert_eq!(package_files(&json), ["ci/other.yml"]);
}

#[test]
fn test_scan_patterns_from_config() {
    let project = project_with_pipelines();
    project
        .write_config("file_patterns = ['^ci/other\\.yml$', '^\\.gitlab-ci\\.yml$']\n")
        .unwrap();

    let json = project.run_json(&["scan", "--format", "json"]);
    assert_eq!(package_files(&json), [".gitlab-ci.yml", "ci/other.yml"]);
}

#[test]
fn test_scan_text_summary() {
    let project = project_with_pipelines();

    project
        .cidep()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("ci/deploy.gitlab-ci.yaml"))
        .stdout(predicate::str::contains("group/outer @ main"))
        .stdout(predicate::str::contains("4 dependencies in 2 file(s)"));
}

#[test]
fn test_scan_empty_directory() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No include dependencies found"));
}
