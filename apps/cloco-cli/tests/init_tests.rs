//! Integration tests for `cloco init`
//!
//! Tests cover:
//! - Creating a configuration in a fresh home directory
//! - Merging partial updates across runs
//! - Resetting and echoing the configuration

mod common;

use common::{stdout, TestContext};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_creates_configuration() {
    let ctx = TestContext::new().await;

    let output = ctx
        .run(&["init", "--key", "K", "--secret", "S", "--url", "https://x"])
        .await;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Creating config....."));
    assert!(out.contains("Saving config....."));

    let config = ctx.read_config();
    assert!(config.contains("cloco_client_key=K"));
    assert!(config.contains("cloco_client_secret=S"));
    assert!(config.contains("url=https://x"));
    for empty in [
        "cloco_access_token=",
        "subscription=",
        "application=",
        "environment=",
    ] {
        assert!(
            config.lines().any(|line| line.trim() == empty),
            "expected an empty `{empty}` line in:\n{config}"
        );
    }
    assert!(ctx.requests().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_keeps_unsupplied_fields() {
    let ctx = TestContext::new().await;

    ctx.run(&["init", "--key", "K", "--secret", "S", "--sub", "acme"])
        .await;
    let output = ctx.run(&["init", "--app", "billing", "--env", "prod"]).await;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Loading config....."));

    let config = ctx.read_config();
    assert!(config.contains("cloco_client_key=K"));
    assert!(config.contains("cloco_client_secret=S"));
    assert!(config.contains("subscription=acme"));
    assert!(config.contains("application=billing"));
    assert!(config.contains("environment=prod"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_empty_value_leaves_field() {
    let ctx = TestContext::new().await;

    ctx.run(&["init", "--sub", "acme"]).await;
    ctx.run(&["init", "--sub", ""]).await;

    assert!(ctx.read_config().contains("subscription=acme"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_reset() {
    let ctx = TestContext::new().await;

    ctx.run(&["init", "--key", "K", "--sub", "acme"]).await;
    let output = ctx.run(&["init", "--reset", "--key", "K2"]).await;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Creating config....."));

    let config = ctx.read_config();
    assert!(config.contains("cloco_client_key=K2"));
    assert!(!config.contains("acme"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_echo_prints_configuration() {
    let ctx = TestContext::new().await;

    let output = ctx
        .run(&["init", "--key", "K", "--env", "prod", "--echo"])
        .await;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Current configuration:"));
    assert!(out.contains("[credentials]"));
    assert!(out.contains("cloco_client_key = K"));
    assert!(out.contains("[preferences]"));
    assert!(out.contains("environment = prod"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_restricts_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new().await;
    ctx.run(&["init", "--key", "K"]).await;

    let mode = std::fs::metadata(ctx.config_file())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_init_keeps_quoted_values_readable() {
    let ctx = TestContext::new().await;

    let first = ctx.run(&["init", "--key", "\"K", "--secret", "'abc"]).await;
    assert!(first.status.success());

    let second = ctx.run(&["init", "--sub", "acme", "--echo"]).await;
    assert!(second.status.success(), "stderr: {}", common::stderr(&second));

    let out = stdout(&second);
    assert!(out.contains("cloco_client_key = \"K"));
    assert!(out.contains("cloco_client_secret = 'abc"));
    assert!(ctx.read_config().contains("cloco_client_secret='abc"));
}
