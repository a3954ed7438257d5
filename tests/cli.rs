mod common;

use common::role_with_playbooks;
use std::ffi::OsString;
use std::fs;
use std::os::unix::ffi::OsStringExt;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_ensure_provider_tests");

#[test]
fn test_cli_generate_then_check() {
    let role = role_with_playbooks(&["tests_foo.yml"]);

    let generate = Command::new(BIN).arg("generate").current_dir(role.path()).output().unwrap();
    assert_eq!(generate.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&generate.stdout);
    assert_eq!(stdout, "tests_foo_nm.yml\ntests_foo_initscripts.yml\n");

    let check = Command::new(BIN).current_dir(role.path()).output().unwrap();
    assert_eq!(check.status.code(), Some(0));
    assert!(check.stdout.is_empty());
}

#[test]
fn test_cli_check_reports_missing() {
    let role = role_with_playbooks(&["tests_foo.yml"]);
    let check = Command::new(BIN).current_dir(role.path()).output().unwrap();
    assert_eq!(check.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert!(stdout.contains("ERROR: No NM or initscripts tests found for:\nplaybooks/tests_foo.yml, \nplaybooks/tests_foo.yml\n"));
    assert!(stdout.contains(&format!("Try to generate them with '{} generate'", BIN)));
    assert!(!role.path().join("tests_foo_nm.yml").exists());
}

#[test]
fn test_cli_check_reports_mismatch() {
    let role = role_with_playbooks(&["tests_foo.yml"]);
    Command::new(BIN).arg("generate").current_dir(role.path()).output().unwrap();
    fs::write(role.path().join("tests_foo_nm.yml"), "---\n").unwrap();

    let check = Command::new(BIN).arg("check").current_dir(role.path()).output().unwrap();
    assert_eq!(check.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert_eq!(stdout, "ERROR: Playbook does not match nominal value: tests_foo_nm.yml\n");
}

#[test]
fn test_cli_no_tests() {
    let role = role_with_playbooks(&[]);
    let check = Command::new(BIN).current_dir(role.path()).output().unwrap();
    assert_eq!(check.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&check.stdout), "ERROR: No tests found\n");
}

#[test]
fn test_cli_non_utf8_argument_checks() {
    let role = role_with_playbooks(&["tests_foo.yml"]);
    let check = Command::new(BIN)
        .arg(OsString::from_vec(b"\xff".to_vec()))
        .current_dir(role.path())
        .output()
        .unwrap();
    // check mode with no wrappers present: missing, not a panic
    assert_eq!(check.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&check.stdout).contains("No NM or initscripts tests found for:"));
    assert!(!role.path().join("tests_foo_nm.yml").exists());

    Command::new(BIN).arg("generate").current_dir(role.path()).output().unwrap();
    let clean = Command::new(BIN)
        .arg(OsString::from_vec(b"\xff".to_vec()))
        .current_dir(role.path())
        .output()
        .unwrap();
    assert_eq!(clean.status.code(), Some(0));
}
