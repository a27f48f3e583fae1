use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::NamedTempFile;

/// Creates a config file with two selectable sources.
fn create_config() -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(
        config.path(),
        b"bucket: line-lift\nview_base_url: https://viewer.example/list\nsources:\n  - name: \xe6\x9b\xb4\xe6\x96\xb0\xe5\xbd\xb1\xe7\x89\x87\n    sheet_id: sheet-video\n    columns:\n      price: \xe5\x85\xa7\xe5\xae\xb9\n  - name: Vendor A\n    sheet_id: sheet-vendor-a\n    prefix: vendor-a\n",
    )
    .expect("Writing temp config failed");
    config
}

#[test]
fn sources_lists_the_selector_enumeration() {
    let config = create_config();
    let mut cmd = Command::cargo_bin("sheet-bucket").expect("Binary exists");

    cmd.arg("sources").arg("--config").arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("更新影片"))
        .stdout(predicate::str::contains("Vendor A"))
        .stdout(predicate::str::contains("vendor-a"))
        .stdout(predicate::str::contains("sheet-video"));
}

#[test]
fn publish_with_unknown_source_fails_before_contacting_anything() {
    let config = create_config();
    let mut cmd = Command::cargo_bin("sheet-bucket").expect("Binary exists");

    cmd.arg("publish")
        .arg("--config")
        .arg(config.path())
        .arg("--source")
        .arg("nonexistent");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown source"));
}

#[test]
fn publish_with_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("sheet-bucket").expect("Binary exists");

    cmd.arg("publish")
        .arg("--config")
        .arg("./definitely-not-here.yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn publish_without_credentials_reports_the_missing_variable() {
    let config = create_config();
    let mut cmd = Command::cargo_bin("sheet-bucket").expect("Binary exists");

    cmd.arg("publish")
        .arg("--config")
        .arg(config.path())
        .env_remove("R2_ACCESS_KEY")
        .env_remove("R2_SECRET_KEY")
        .env_remove("R2_ACCOUNT_ID");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("R2_ACCESS_KEY"));
}
