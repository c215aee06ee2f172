mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_missing_input_file_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg(fixture.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read"))
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_invalid_json_file_fails() {
    let fixture = TestFixture::new();
    let path = fixture.write_file("broken.json", "{not json");

    fixture
        .command()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_missing_config_fails() {
    let fixture = TestFixture::new();
    let mut cmd = assert_cmd::Command::cargo_bin("yell").unwrap();
    cmd.arg("--config")
        .arg(fixture.path().join("nope.toml"))
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_bad_theme_color_in_config_fails() {
    let fixture = TestFixture::new();
    fixture.write_config("[theme]\nstring = \"plaid\"\n");

    fixture
        .command()
        .write_stdin("\"x\"")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color: plaid"));
}

#[test]
fn test_zero_width_is_rejected() {
    let fixture = TestFixture::new();
    fixture
        .base_command()
        .args(["--width", "0"])
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("width must be greater than zero"));
}

#[test]
fn test_truncate_and_no_wrap_conflict() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["--truncate", "--no-wrap"])
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
