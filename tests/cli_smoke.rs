use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(temp_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("formz").unwrap();
    // Keep the session file inside the test sandbox.
    cmd.env("HOME", temp_home)
        .env("XDG_DATA_HOME", temp_home.join("data"));
    cmd
}

#[test]
fn help_lists_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("signup"))
        .stdout(predicates::str::contains("login"))
        .stdout(predicates::str::contains("expense"));
}

#[test]
fn forms_lists_builtin_templates_offline() {
    let temp_dir = tempfile::tempdir().unwrap();
    cmd(temp_dir.path())
        .arg("forms")
        .assert()
        .success()
        .stdout(predicates::str::contains("signup"))
        .stdout(predicates::str::contains("maintenance-plan"));
}

#[test]
fn session_reports_signed_out_state() {
    let temp_dir = tempfile::tempdir().unwrap();
    cmd(temp_dir.path())
        .arg("session")
        .assert()
        .success()
        .stdout(predicates::str::contains("Not signed in"));
}

#[test]
fn expense_requires_a_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    cmd(temp_dir.path())
        .arg("expense")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Not signed in"));
}
