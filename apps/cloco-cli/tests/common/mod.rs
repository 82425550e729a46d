//! Shared fixtures for integration tests
//!
//! Each test gets its own mock API server and a temporary home directory;
//! the `cloco` binary runs with `HOME` pointed at it.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Basic credentials for client key `K` and secret `S`
pub const BASIC_K_S: &str = "Basic SzpT";

pub struct TestContext {
    pub server: MockServer,
    pub home: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            home: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join(".cloco").join("configuration")
    }

    pub fn write_config(&self, contents: &str) {
        let file = self.config_file();
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(file, contents).unwrap();
    }

    /// Credentials `K`/`S`, the mock server as URL and the given preferences
    pub fn write_credentials(&self, subscription: &str, application: &str, environment: &str) {
        self.write_config(&format!(
            "[credentials]\ncloco_client_key=K\ncloco_client_secret=S\ncloco_access_token=stale\n\n\
             [settings]\nurl={}\n\n\
             [preferences]\nsubscription={subscription}\napplication={application}\nenvironment={environment}\n",
            self.base_url()
        ));
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_file()).expect("configuration file should exist")
    }

    /// Token endpoint answering `{"access_token": token}` for `K`/`S`
    pub async fn mock_token(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("authorization", BASIC_K_S))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": token })),
            )
            .mount(&self.server)
            .await;
    }

    /// Run the binary and wait for it without blocking the mock server
    pub async fn run(&self, args: &[&str]) -> Output {
        let home = self.home.path().to_path_buf();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

        tokio::task::spawn_blocking(move || {
            Command::new(env!("CARGO_BIN_EXE_cloco"))
                .args(&args)
                .env("HOME", home)
                .env("NO_COLOR", "1")
                .env_remove("RUST_LOG")
                .env_remove("CLOCO_VERBOSE")
                .env_remove("CLOCO_DEBUG")
                .env_remove("CLOCO_TRACE")
                .output()
                .expect("Failed to execute command")
        })
        .await
        .expect("command task panicked")
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests other than token requests
    pub async fn resource_requests(&self) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.url.path() != "/oauth/token")
            .collect()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
