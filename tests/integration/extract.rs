//! `cidep extract` end to end.

use predicates::prelude::*;

use crate::common::{PipelineFixture, TestProject};

#[test]
fn test_extract_json() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();

    let json = project.run_json(&["extract", ".gitlab-ci.yml", "--format", "json"]);
    let expected = serde_json::json!([{
        "packageFile": ".gitlab-ci.yml",
        "deps": [
            {
                "datasource": "gitlab-tags",
                "name": "group/templates",
                "type": "repository",
                "version": "v1.4.0"
            },
            {
                "datasource": "gitlab-tags",
                "name": "group/unpinned",
                "type": "repository",
                "skipReason": "unknown-version"
            }
        ]
    }]);
    assert_eq!(json, expected);
}

#[test]
fn test_extract_text() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();

    project
        .cidep()
        .args(["extract", ".gitlab-ci.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".gitlab-ci.yml"))
        .stdout(predicate::str::contains("group/templates @ v1.4.0"))
        .stdout(predicate::str::contains("group/unpinned @ (unknown-version)"))
        .stdout(predicate::str::contains("2 dependencies in 1 file(s)"));
}

#[test]
fn test_extract_nested_includes_in_order() {
    let project = TestProject::new().unwrap();
    project.write_fixture("nested.yml", &PipelineFixture::nested()).unwrap();

    let json = project.run_json(&["extract", "nested.yml", "--format", "json"]);
    let deps = json[0]["deps"].as_array().unwrap();
    let names: Vec<_> = deps.iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["group/inner", "group/outer"]);
    assert_eq!(deps[0]["version"], "2.0");
    assert_eq!(deps[1]["version"], "main");
}

#[test]
fn test_extract_reference_tags() {
    let project = TestProject::new().unwrap();
    project
        .write_fixture(".gitlab-ci.yml", &PipelineFixture::with_reference_tags())
        .unwrap();

    let json = project.run_json(&["extract", ".gitlab-ci.yml", "--format", "json"]);
    assert_eq!(json[0]["deps"][0]["name"], "group/templates");
    assert_eq!(json[0]["deps"][0]["version"], "v2.0.0");
}

#[test]
fn test_extract_skips_files_without_dependencies() {
    let project = TestProject::new().unwrap();
    project.write_fixture("a.yml", &PipelineFixture::mixed()).unwrap();
    project.write_fixture("local.yml", &PipelineFixture::local_only()).unwrap();
    project.write_fixture("broken.yml", &PipelineFixture::malformed()).unwrap();
    project.write_file("empty.yml", "").unwrap();

    let json = project.run_json(&[
        "extract",
        "a.yml",
        "local.yml",
        "broken.yml",
        "empty.yml",
        "--format",
        "json",
    ]);
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["packageFile"], "a.yml");
}

#[test]
fn test_extract_nothing_found() {
    let project = TestProject::new().unwrap();
    project.write_fixture("local.yml", &PipelineFixture::local_only()).unwrap();

    project
        .cidep()
        .args(["extract", "local.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No include dependencies found"));

    let json = project.run_json(&["extract", "local.yml", "--format", "json"]);
    assert_eq!(json, serde_json::json!([]));
}

#[test]
fn test_extract_registry_urls_from_flags() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();

    let json = project.run_json(&[
        "--platform",
        "gitlab",
        "--endpoint",
        "https://gitlab.example.com/api/v4/",
        "extract",
        ".gitlab-ci.yml",
        "--format",
        "json",
    ]);
    for dep in json[0]["deps"].as_array().unwrap() {
        assert_eq!(dep["registryUrls"], serde_json::json!(["https://gitlab.example.com"]));
    }
}

#[test]
fn test_extract_registry_urls_from_environment() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();

    let output = project
        .cidep()
        .env("CIDEP_PLATFORM", "GitLab")
        .env("CIDEP_ENDPOINT", "https://git.corp.example/gitlab/api/v4")
        .args(["extract", ".gitlab-ci.yml", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json[0]["deps"][0]["registryUrls"],
        serde_json::json!(["https://git.corp.example/gitlab"])
    );
}

#[test]
fn test_extract_no_registry_urls_on_other_platform() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();

    let json = project.run_json(&[
        "--platform",
        "github",
        "--endpoint",
        "https://api.github.com/",
        "extract",
        ".gitlab-ci.yml",
        "--format",
        "json",
    ]);
    assert!(json[0]["deps"][0].get("registryUrls").is_none());
}

#[test]
fn test_extract_requires_a_file() {
    let project = TestProject::new().unwrap();
    project.cidep().arg("extract").assert().failure();
}
