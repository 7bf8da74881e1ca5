//! Integration tests for the server-backed commands against a mock server.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp WATERTAP_HOME directory for test isolation.
fn temp_home() -> TempDir {
    TempDir::new().expect("create temp watertap home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_prints_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "gary@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "login",
            "--email",
            "gary@example.com",
            "--password",
            "pw",
            "--print-token",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"))
        .stdout(predicate::str::contains("abc"));
}

#[tokio::test]
async fn test_login_reads_password_from_stdin() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "gary@example.com", "password": "from-stdin"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .env("WATERTAP_BASE_URL", server.uri())
        .args(["login", "--email", "gary@example.com"])
        .write_stdin("from-stdin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));
}

#[tokio::test]
async fn test_login_wrong_password_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(401).set_body_string("Could not verify"),
    )
    .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "login",
            "--email",
            "gary@example.com",
            "--password",
            "bad",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Incorrect username or password (status 401)",
        ));
}

#[tokio::test]
async fn test_login_empty_password_never_calls_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "login",
            "--email",
            "gary@example.com",
            "--password",
            "",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password is empty"));
}

#[test]
fn test_login_unreachable_server() {
    let home = temp_home();

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            "http://127.0.0.1:1",
            "login",
            "--email",
            "gary@example.com",
            "--password",
            "pw",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach the server"));
}

#[tokio::test]
async fn test_signup_created_and_exists() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    for (status, expected) in [(201, "User has been created!"), (202, "User already exists")] {
        let home = temp_home();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .and(body_json(json!({
                "name": "Gary",
                "email": "gary@example.com",
                "password": "Str0ng_pw"
            })))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        cargo_bin_cmd!("watertap")
            .env("WATERTAP_HOME", home.path())
            .args([
                "--base-url",
                server.uri().as_str(),
                "signup",
                "--name",
                "Gary",
                "--email",
                "gary@example.com",
                "--password",
                "Str0ng_pw",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[tokio::test]
async fn test_signup_weak_password_never_calls_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "signup",
            "--name",
            "Gary",
            "--email",
            "gary@example.com",
            "--password",
            "alllowercase_1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs an uppercase letter"));
}

#[tokio::test]
async fn test_usage_prints_table() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({"token": "abc"})),
    )
    .await;
    let records = json!([{
        "session ID": "17", "sink ID": "2", "sensor ID": "3",
        "water amount": "4.25", "duration": "15",
        "start time": "08:00:00", "end time": "08:00:15",
        "date": "04/18/2024", "is error": "False"
    }]);
    Mock::given(method("GET"))
        .and(path("/api/user-data"))
        .and(query_param("date", "2024-04-18"))
        .and(header("x-access-token", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(records.to_string()))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "usage",
            "--email",
            "gary@example.com",
            "--password",
            "pw",
            "--date",
            "2024-04-18",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session"))
        .stdout(predicate::str::contains("08:00:15"))
        .stdout(predicate::str::contains("Total: 4.25"));
}

#[tokio::test]
async fn test_usage_refused_token_ends_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    mount_login(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({"token": "stale"})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/user-data"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Token is invalid !!"})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("watertap")
        .env("WATERTAP_HOME", home.path())
        .args([
            "--base-url",
            server.uri().as_str(),
            "usage",
            "--email",
            "gary@example.com",
            "--password",
            "pw",
            "--date",
            "2024-04-18",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));
}
