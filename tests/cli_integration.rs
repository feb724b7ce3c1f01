//! Integration tests for the profile-cards CLI

mod common;

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::{htb_routes, MockServer, Route};

fn cards() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("profile-cards"));
    for var in [
        "HTB_TOKEN",
        "HTB_USER_ID",
        "HTB_AVATAR_URL",
        "HTB_API_BASE",
        "THM_USER_PUBLIC_ID",
        "THM_BADGE_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    cards()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("htb"))
        .stdout(predicate::str::contains("thm"));
}

#[test]
fn test_missing_token_exits_before_any_work() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start(vec![]);

    cards()
        .current_dir(temp.path())
        .arg("htb")
        .env("HTB_API_BASE", server.url("/api/v4"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("HTB_TOKEN not set"));

    assert_eq!(server.hits(), 0);
    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_empty_token_counts_as_missing() {
    let temp = TempDir::new().unwrap();

    cards()
        .current_dir(temp.path())
        .arg("htb")
        .env("HTB_TOKEN", "")
        .env("HTB_API_BASE", "http://127.0.0.1:9/api/v4")
        .assert()
        .failure()
        .stdout(predicate::str::contains("HTB_TOKEN not set"));

    assert!(!temp.path().join("assets").exists());
}

#[test]
fn test_critical_failure_exits_nonzero_but_saves_state() {
    let temp = TempDir::new().unwrap();
    let mut routes = htb_routes("7", "season_hacker.json");
    routes[0] = Route::status("/api/v4/user/profile/basic/7", 401);
    let server = MockServer::start(routes);

    let state = temp.path().join("state.json");
    let output = temp.path().join("card.svg");

    cards()
        .arg("htb")
        .arg("--state-file")
        .arg(&state)
        .arg("--output")
        .arg(&output)
        .env("HTB_TOKEN", "secret")
        .env("HTB_USER_ID", "7")
        .env("HTB_API_BASE", server.url("/api/v4"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[✗] Profile name"))
        .stdout(predicate::str::contains("critical error(s)"));

    assert!(state.exists());
    assert!(!output.exists());
    assert!(std::fs::read_to_string(&state).unwrap().contains("\"Hacker\""));
}

#[test]
fn test_thm_unreachable_badge_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start(vec![Route::status("/badge", 500)]);
    let output = temp.path().join("thm.svg");

    cards()
        .arg("thm")
        .arg("--badge-url")
        .arg(server.url("/badge"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Page unavailable"));

    assert!(!output.exists());
}
