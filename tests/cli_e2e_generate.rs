//! End-to-end tests for the `generate` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const COMPLETE_MANIFEST: &str = r#"
group: com.example
version: 1.0.0
defaults:
  description: Example library
  url: https://example.com
  licenses:
    - name: MIT License
      url: http://www.opensource.org/licenses/mit-license.php
  developers:
    - name: Dev Eloper
  scm:
    connection: scm:git:git://example.com/repo.git
    developerConnection: scm:git:ssh://example.com/repo.git
    url: https://example.com/repo
modules:
  - name: core
  - name: client
    kind: multi-target
    targets: [jvm, js]
"#;

/// Test that generate writes one POM per publication
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_writes_pom_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child(".central-publish.yaml");
    manifest.write_str(COMPLETE_MANIFEST).unwrap();

    let mut cmd = cargo_bin_cmd!("central-publish");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--config")
        .arg(manifest.path())
        .arg("--out")
        .arg(temp.child("poms").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 4 POM file(s)"));

    temp.child("poms/core-1.0.0.pom").assert(predicate::path::exists());
    temp.child("poms/client-1.0.0.pom").assert(predicate::path::exists());
    temp.child("poms/client-jvm-1.0.0.pom").assert(predicate::path::exists());
    temp.child("poms/client-js-1.0.0.pom").assert(predicate::path::exists());
}

/// Test that generated POM files carry the merged defaults
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_merges_defaults_into_poms() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child(".central-publish.yaml");
    manifest.write_str(COMPLETE_MANIFEST).unwrap();

    let mut cmd = cargo_bin_cmd!("central-publish");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--config")
        .arg(manifest.path())
        .arg("--out")
        .arg(temp.child("poms").path())
        .assert()
        .success();

    temp.child("poms/core-1.0.0.pom").assert(
        predicate::str::contains("<description>Example library</description>")
            .and(predicate::str::contains("<name>core</name>"))
            .and(predicate::str::contains("<developerConnection>")),
    );
}

/// Test that the snapshot flag suffixes every generated version
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_snapshot_versions() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child(".central-publish.yaml");
    manifest
        .write_str(&COMPLETE_MANIFEST.replace("version: 1.0.0", "version: 1.0.0\nsnapshot: true"))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("central-publish");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--config")
        .arg(manifest.path())
        .arg("--out")
        .arg(temp.child("poms").path())
        .assert()
        .success();

    temp.child("poms/core-1.0.0-SNAPSHOT.pom")
        .assert(predicate::str::contains("<version>1.0.0-SNAPSHOT</version>"));
}

/// Test that an invalid publication fails the run but valid POMs are still
/// written
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_partial_failure_still_writes_valid_poms() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child(".central-publish.yaml");
    manifest
        .write_str(&format!(
            "{}  - name: broken\n    pom:\n      description: \"\"\n",
            COMPLETE_MANIFEST
        ))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("central-publish");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--config")
        .arg(manifest.path())
        .arg("--out")
        .arg(temp.child("poms").path())
        .arg("--color")
        .arg("never")
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid pom: description is blank"))
        .stderr(predicate::str::contains("1 publication(s) failed validation"));

    temp.child("poms/core-1.0.0.pom").assert(predicate::path::exists());
    temp.child("poms/broken-1.0.0.pom").assert(predicate::path::missing());
}

/// Test that generated files can be signed with a stand-in command
#[cfg(unix)]
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_sign_runs_configured_command() {
    let temp = assert_fs::TempDir::new().unwrap();
    let manifest = temp.child(".central-publish.yaml");
    manifest
        .write_str(&format!("{}signing:\n  command: touch\n", COMPLETE_MANIFEST))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("central-publish");

    cmd.current_dir(temp.path())
        .arg("generate")
        .arg("--config")
        .arg(manifest.path())
        .arg("--out")
        .arg(temp.child("poms").path())
        .arg("--sign")
        .assert()
        .success()
        .stdout(predicate::str::contains("signed:"));
}
