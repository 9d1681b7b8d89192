mod common;

use common::cmd;
use predicates::prelude::*;

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn generate_subcommand_help() {
    cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--no-header"));
}

#[test]
fn inspect_subcommand_help() {
    cmd()
        .args(["inspect", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOCATOR"))
        .stdout(predicate::str::contains("--replacement"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("charmapgen"));
}

#[test]
fn no_subcommand_is_usage_error() {
    cmd().assert().failure().code(2);
}

#[test]
fn unknown_subcommand_fails() {
    cmd()
        .arg("decode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn invalid_replacement_byte_rejected() {
    cmd()
        .args(["inspect", "x.ucm", "--replacement", "0x100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid byte '0x100'"));
}

#[test]
fn invalid_format_rejected() {
    cmd()
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}
