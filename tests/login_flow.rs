//! End-to-end login/session flow through the CLI actions: login persists the
//! token, whoami resumes it, logout clears it.

use anyhow::Result;
use authctl::cli::actions::Action;
use authctl::cli::globals::GlobalArgs;
use secrecy::SecretString;
use serde_json::json;
use std::net::TcpListener;
use std::path::PathBuf;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn temp_session(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("authctl-test-{name}-{}", std::process::id()));
    path
}

fn user_json() -> serde_json::Value {
    json!({
        "_id": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
        "email": "admin@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "roles": [],
        "mfa": false,
        "disabled": false,
        "createdAt": "2024-01-02 03:04:05.000 +00:00:00"
    })
}

async fn mount_me(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/@me"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "OK",
            "data": user_json()
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_whoami_logout_round_trip() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "Login successful",
            "data": {
                "user": user_json(),
                "token": "session-token",
                "mfaRequired": false,
                "hasPasskeys": false
            }
        })))
        .mount(&server)
        .await;

    mount_me(&server).await;

    let session_file = temp_session("login-round-trip");
    let globals = GlobalArgs::new(server.uri(), session_file.clone());

    Action::Login {
        email: "admin@example.com".to_string(),
        password: SecretString::from("hunter2"),
    }
    .execute(&globals)
    .await?;

    let stored = std::fs::read_to_string(&session_file)?;
    assert_eq!(stored, "session-token");

    // The stored session authenticates subsequent commands.
    Action::Whoami.execute(&globals).await?;

    Action::Logout.execute(&globals).await?;
    assert!(!session_file.exists());
    Ok(())
}

#[tokio::test]
async fn mfa_login_uses_printed_flow_id() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let flow_id = "00000000-0000-0000-0000-000000000007";

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "MFA required",
            "data": {"mfaRequired": true, "hasPasskeys": false, "mfaFlowId": flow_id}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/mfa"))
        .and(body_json(json!({"flowId": flow_id, "code": "123456"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "Login successful",
            "data": {
                "user": user_json(),
                "token": "session-token",
                "mfaRequired": false,
                "hasPasskeys": false
            }
        })))
        .mount(&server)
        .await;

    let session_file = temp_session("mfa-flow");
    let globals = GlobalArgs::new(server.uri(), session_file.clone());

    // The login command stops at the pending second factor without a token.
    Action::Login {
        email: "admin@example.com".to_string(),
        password: SecretString::from("hunter2"),
    }
    .execute(&globals)
    .await?;
    assert!(!session_file.exists());

    // A second invocation completes the flow and stores the session.
    Action::Mfa {
        flow_id: flow_id.parse()?,
        code: "123456".to_string(),
    }
    .execute(&globals)
    .await?;

    let stored = std::fs::read_to_string(&session_file)?;
    assert_eq!(stored, "session-token");
    std::fs::remove_file(&session_file)?;
    Ok(())
}

#[tokio::test]
async fn commands_fail_cleanly_without_session() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    let globals = GlobalArgs::new(server.uri(), temp_session("no-session"));
    let err = Action::Whoami
        .execute(&globals)
        .await
        .err()
        .expect("whoami must fail without a session");

    assert!(err.to_string().contains("not logged in"));
    Ok(())
}
