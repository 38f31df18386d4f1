use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::BrevoConfig;
use crate::mail::{EmailMessage, MailError, Mailer};

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendEmailBody {
    sender: BrevoEmailAddress,
    to: Vec<BrevoEmailAddress>,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_content: Option<String>,
}

fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Brevo transactional email API client.
pub struct BrevoMailer {
    client: reqwest::Client,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
}

impl BrevoMailer {
    pub fn new(config: &BrevoConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("civicos-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
        })
    }

    fn body(&self, message: &EmailMessage) -> BrevoSendEmailBody {
        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![BrevoEmailAddress {
                email: message.to_email.clone(),
                name: message.to_name.clone(),
            }],
            subject: message.subject.clone(),
            html_content: message.html.clone(),
            text_content: message.text.clone(),
        }
    }
}

#[async_trait]
impl Mailer for BrevoMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let resp = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&self.body(message))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if is_success_status(status) {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(MailError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_brevo_field_names() {
        let mailer = BrevoMailer::new(&BrevoConfig {
            api_key: "key".into(),
            sender_email: "noreply@civicos.in".into(),
            sender_name: Some("CIVICOS".into()),
        })
        .unwrap();

        let body = mailer.body(&EmailMessage {
            to_email: "asha@example.com".into(),
            to_name: None,
            subject: "Hello".into(),
            html: Some("<p>hi</p>".into()),
            text: None,
        });
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["sender"]["email"], "noreply@civicos.in");
        assert_eq!(value["sender"]["name"], "CIVICOS");
        assert_eq!(value["to"][0]["email"], "asha@example.com");
        assert!(value["to"][0].get("name").is_none());
        assert_eq!(value["htmlContent"], "<p>hi</p>");
        assert!(value.get("textContent").is_none());
    }

    #[test]
    fn success_range() {
        assert!(is_success_status(201));
        assert!(!is_success_status(400));
    }
}
