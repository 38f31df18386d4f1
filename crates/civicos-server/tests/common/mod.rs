#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use civicos_server::mail::{EmailMessage, MailError, Mailer};
use civicos_server::{db, router, AppState, Config};

pub const TEST_JWT_SECRET: &str = "test-secret-for-civicos";

/// Mailer that keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        self.sent.lock().expect("mailer lock").push(message.clone());
        Ok(())
    }
}

/// Mailer whose provider always refuses.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<(), MailError> {
        Err(MailError::Rejected {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

pub fn test_config() -> Config {
    config_for("sqlite::memory:")
}

pub fn config_for(database_url: &str) -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "DATABASE_URL" => Some(database_url.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_mailer(None).await
    }

    pub async fn with_mailer(mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self::build(test_config(), mailer).await
    }

    /// App over `database_url` with the configured (default) pool size.
    pub async fn with_database_url(database_url: &str) -> Self {
        Self::build(config_for(database_url), None).await
    }

    async fn build(config: Config, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let conn = db::connect(&config.database_url, config.db_max_connections)
            .await
            .expect("connect database");
        db::migrate(&conn).await.expect("migrate");

        Self {
            state: AppState::new(conn, config, mailer),
        }
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = router(self.state.clone())
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        (status, json)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body), None).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None, None).await
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str, constituency: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/v1/auth/signUp",
                serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "constituency": constituency,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
        body
    }

    pub async fn login(&self, email: &str, password: Option<&str>) -> (StatusCode, Value) {
        let mut body = serde_json::json!({ "email": email });
        if let Some(password) = password {
            body["password"] = Value::from(password);
        }
        self.post("/api/v1/auth/login", body).await
    }

    pub async fn add_mla(&self, body: Value) -> (StatusCode, Value) {
        self.post("/api/v1/mla/addMla", body).await
    }

    /// Sign up a citizen and return `(citizen_id, token)`.
    pub async fn citizen_session(&self, email: &str, constituency: &str) -> (String, String) {
        self.signup("Asha", email, "s3cret!", constituency).await;
        let (status, body) = self.login(email, Some("s3cret!")).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        (
            body["citizen"]["id"].as_str().expect("citizen id").to_string(),
            body["token"].as_str().expect("token").to_string(),
        )
    }
}
