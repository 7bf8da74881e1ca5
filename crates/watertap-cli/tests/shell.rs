use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_shell_navigation_and_status() {
    let home = TempDir::new().expect("create temp watertap home");

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .arg("shell")
        .write_stdin("go link1\ngo link2 --hide-back\nback\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are in Link1 view"))
        .stdout(predicate::str::contains("nav: Home > Screen1 > Screen2"))
        .stdout(predicate::str::contains("session: logged out"));
}

#[test]
fn test_shell_reports_bad_input_and_continues() {
    let home = TempDir::new().expect("create temp watertap home");

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .arg("shell")
        .write_stdin("fly away\nlogin gary@example.com\nlogin  \nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: unrecognized command `fly away`"))
        .stdout(predicate::str::contains("go link1|link2"));
}

#[test]
fn test_shell_logout_without_session() {
    let home = TempDir::new().expect("create temp watertap home");

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .arg("shell")
        .write_stdin("logout
status
")
        .assert()
        .success()
        .stdout(predicate::str::contains("session: logged out"));
}
