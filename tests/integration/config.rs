//! `cidep config` and configuration layering.

use predicates::prelude::*;

use crate::common::{PipelineFixture, TestProject};

#[test]
fn test_config_path() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_and_force() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));
    assert!(project.config_path().exists());

    project
        .cidep()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));

    project
        .cidep()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));
}

#[test]
fn test_config_show_defaults() {
    let project = TestProject::new().unwrap();

    project
        .cidep()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found)"))
        .stdout(predicate::str::contains("platform = (unset)"))
        .stdout(predicate::str::contains("datasource default registry"));
}

#[test]
fn test_config_show_with_overrides() {
    let project = TestProject::new().unwrap();
    project
        .write_config("platform = \"gitlab\"\nendpoint = \"https://gitlab.example.com/api/v4\"\n")
        .unwrap();

    project
        .cidep()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform = gitlab"))
        .stdout(predicate::str::contains("Includes resolve against: https://gitlab.example.com"));

    project
        .cidep()
        .args(["--platform", "github", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform = github"))
        .stdout(predicate::str::contains("datasource default registry"));
}

#[test]
fn test_config_file_drives_registry_urls() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();
    project
        .write_config("platform = \"gitlab\"\nendpoint = \"https://gitlab.example.com/api/v4/\"\n")
        .unwrap();

    let json = project.run_json(&["extract", ".gitlab-ci.yml", "--format", "json"]);
    assert_eq!(json[0]["deps"][0]["registryUrls"], serde_json::json!(["https://gitlab.example.com"]));

    // flags win over the file
    let json = project.run_json(&[
        "extract",
        ".gitlab-ci.yml",
        "--format",
        "json",
        "--endpoint",
        "https://other.example/api/v4",
    ]);
    assert_eq!(json[0]["deps"][0]["registryUrls"], serde_json::json!(["https://other.example"]));
}

#[test]
fn test_explicit_config_flag() {
    let project = TestProject::new().unwrap();
    project.write_fixture(".gitlab-ci.yml", &PipelineFixture::mixed()).unwrap();
    let alt = project
        .write_file("alt.toml", "platform = \"gitlab\"\nendpoint = \"https://alt.example/api/v4\"\n")
        .unwrap();

    let json = project.run_json(&[
        "--config",
        alt.to_str().unwrap(),
        "extract",
        ".gitlab-ci.yml",
        "--format",
        "json",
    ]);
    assert_eq!(json[0]["deps"][0]["registryUrls"], serde_json::json!(["https://alt.example"]));
}
