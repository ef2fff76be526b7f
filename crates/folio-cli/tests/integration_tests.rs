//! End-to-end tests for the `folio` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    // Keep tests hermetic: never pick up a user config or env overrides.
    cmd.env_remove("FOLIO__CONTENT__DIR");
    cmd.env_remove("FOLIO__OUTPUT__FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_prints_cargo_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_then_check_passes() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");

    folio().arg("init").arg(&dir).assert().success();

    assert!(dir.join("profile.json").exists());
    assert!(dir.join("quick_links.json").exists());
    assert!(dir.join("experiences.json").exists());
    assert!(dir.join("projects.json").exists());

    folio().arg("check").arg(&dir).assert().success();
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");

    folio().arg("init").arg(&dir).assert().success();

    folio()
        .arg("init")
        .arg(&dir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already"));

    folio()
        .args(["init", "--force"])
        .arg(&dir)
        .assert()
        .success();
}

#[test]
fn check_invalid_content_exits_2() {
    let temp = TempDir::new().unwrap();
    // A profile that is a string rather than an object fails validation.
    std::fs::write(temp.path().join("profile.json"), r#""not an object""#).unwrap();

    folio()
        .arg("check")
        .arg(temp.path())
        .assert()
        .failure()
        .code(2);
}

#[test]
fn check_no_fail_exits_0_on_invalid_content() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("profile.json"), r#""not an object""#).unwrap();

    folio()
        .args(["check", "--no-fail"])
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn check_missing_directory_exits_3() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    folio().arg("check").arg(&missing).assert().failure().code(3);
}

#[test]
fn check_json_output_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");

    folio().arg("init").arg(&dir).assert().success();

    let output = folio()
        .args(["--output-format", "json", "check"])
        .arg(&dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let audit: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(audit["isValid"], serde_json::Value::Bool(true));
    assert!(audit["runId"].is_string());
}

#[test]
fn show_emits_sanitized_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");

    folio().arg("init").arg(&dir).assert().success();

    let output = folio().arg("show").arg(&dir).output().unwrap();
    assert!(output.status.success());

    let content: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(content["profile"].is_object());
    assert!(content["quickLinks"].is_array());
}

#[test]
fn show_salvages_partially_broken_content() {
    let temp = TempDir::new().unwrap();
    // Second link is missing its url: it should be dropped, not fatal.
    std::fs::write(
        temp.path().join("quick_links.json"),
        r#"[
            {"id": "gh", "label": "GitHub", "url": "https://github.com/x",
             "icon": "FaGithub", "type": "professional", "external": true},
            {"id": "bad", "label": "Broken",
             "icon": "FaQuestion", "type": "professional", "external": true}
        ]"#,
    )
    .unwrap();

    let output = folio().arg("show").arg(temp.path()).output().unwrap();
    assert!(output.status.success());

    let content: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let links = content["quickLinks"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["id"], "gh");
}

#[test]
fn toml_content_is_accepted() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("quick_links.toml"),
        r#"
[[items]]
id = "gh"
label = "GitHub"
url = "https://github.com/x"
icon = "FaGithub"
type = "professional"
external = true
"#,
    )
    .unwrap();

    folio().arg("check").arg(temp.path()).assert().success();
}

#[test]
fn completions_generate_for_bash() {
    folio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn config_list_prints_toml() {
    folio()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[content]"));
}

#[test]
fn config_get_known_key() {
    folio()
        .args(["config", "get", "output.format"])
        .assert()
        .success();
}

#[test]
fn quiet_and_verbose_conflict() {
    folio()
        .args(["--quiet", "--verbose", "config", "list"])
        .assert()
        .failure()
        .code(2);
}
