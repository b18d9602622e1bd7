use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn axle_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("axle").unwrap();
    cmd.env("HOME", home.path()).env_remove("AXLE_MANIFEST");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_resolve_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Axle.toml"));
}

#[test]
fn test_resolve_fixture_as_json() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("freshly.toml"))
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\": \"freshly_app\""))
        .stdout(predicate::str::contains("\"compileSdk\": 35"))
        .stdout(predicate::str::contains("desugar_jdk_libs"));
}

#[test]
fn test_resolve_single_variant_as_toml() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("freshly.toml"))
        .args(["resolve", "--variant", "release", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"release\""))
        .stdout(predicate::str::contains("targetSdk = 34"))
        .stdout(predicate::str::contains("androiddebugkey"));
}

#[test]
fn test_resolve_explain() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("freshly.toml"))
        .args(["resolve", "--variant", "release", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("release (release -> debug)"))
        .stdout(predicate::str::contains("[literal in debug]"));
}

#[test]
fn test_resolve_finds_manifest_in_parent() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Axle.toml"),
        "[package]\nname = \"nested\"\n\n[axes]\ntargetSdk = 34\n",
    )
    .unwrap();
    let nested = tmp.path().join("android").join("app");
    fs::create_dir_all(&nested).unwrap();

    axle_cmd(&tmp)
        .current_dir(&nested)
        .args(["resolve", "--variant", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"targetSdk\": 34"));
}

#[test]
fn test_global_config_default_variant_and_format() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".axle")).unwrap();
    fs::write(
        tmp.path().join(".axle/config.toml"),
        "[resolve]\ndefault-variant = \"release\"\nformat = \"toml\"\n",
    )
    .unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("freshly.toml"))
        .args(["resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"release\""));
}

#[test]
fn test_unknown_format_fails() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("freshly.toml"))
        .args(["resolve", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_cyclic_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    axle_cmd(&tmp)
        .arg("--manifest")
        .arg(fixture("cyclic.toml"))
        .args(["resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("axle::cyclic_variant"));
}
