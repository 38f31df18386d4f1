use async_trait::async_trait;
use thiserror::Error;

use entity::{citizen, issue};

use crate::util::ts_to_rfc3339;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail provider rejected message (status={status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub to_email: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// Outbound transactional email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Confirmation sent to a citizen after an issue is filed.
pub fn issue_created_email(
    citizen: &citizen::Model,
    issue: &issue::Model,
    frontend_url: &str,
) -> EmailMessage {
    let subject = format!("Issue Reported Successfully – #{}", issue.id);
    let text = format!(
        "Hi {}, your issue \"{}\" has been successfully reported. Issue ID: {}. Status: {}. We will keep you updated on the progress.",
        citizen.name, issue.title, issue.id, issue.status
    );

    let html = format!(
        concat!(
            "<div style=\"font-family: sans-serif; max-width: 600px; margin: auto;\">",
            "<h1>CIVICOS</h1>",
            "<p>Hi {name}, your civic issue has been successfully submitted.</p>",
            "<h3>{title}</h3>",
            "<p>{description}</p>",
            "<table>",
            "<tr><td>Issue ID</td><td>#{id}</td></tr>",
            "<tr><td>Status</td><td>{status}</td></tr>",
            "<tr><td>Severity</td><td>{severity}</td></tr>",
            "<tr><td>Category</td><td>{category}</td></tr>",
            "<tr><td>Location</td><td>{location}</td></tr>",
            "<tr><td>Reported On</td><td>{reported}</td></tr>",
            "</table>",
            "<p><a href=\"{dashboard}\">View on Dashboard</a></p>",
            "</div>"
        ),
        name = escape_html(&citizen.name),
        title = escape_html(&issue.title),
        description = escape_html(&issue.description),
        id = escape_html(&issue.id),
        status = escape_html(&issue.status),
        severity = escape_html(&issue.severity),
        category = escape_html(&issue.category),
        location = escape_html(&issue.location),
        reported = ts_to_rfc3339(issue.created_at),
        dashboard = escape_html(&format!("{frontend_url}/citizen/dashboard")),
    );

    EmailMessage {
        to_email: citizen.email.clone(),
        to_name: Some(citizen.name.clone()),
        subject,
        html: Some(html),
        text: Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citizen() -> citizen::Model {
        citizen::Model {
            id: "c-1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "$2b$10$hash".into(),
            constituency: "Kukatpally".into(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn issue() -> issue::Model {
        issue::Model {
            id: "i-1".into(),
            title: "Pothole <near> school".into(),
            description: "Deep pothole".into(),
            category: "Roads".into(),
            severity: "HIGH".into(),
            status: "PENDING".into(),
            location: "KPHB Colony".into(),
            latitude: None,
            longitude: None,
            media_url: None,
            citizen_id: "c-1".into(),
            mla_id: None,
            organization_id: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn issue_email_addresses_citizen() {
        let msg = issue_created_email(&citizen(), &issue(), "https://civicos.example");
        assert_eq!(msg.to_email, "asha@example.com");
        assert_eq!(msg.subject, "Issue Reported Successfully – #i-1");

        let text = msg.text.unwrap();
        assert!(text.starts_with("Hi Asha, your issue \"Pothole <near> school\""));
        assert!(text.contains("Status: PENDING"));

        let html = msg.html.unwrap();
        assert!(html.contains("Pothole &lt;near&gt; school"));
        assert!(html.contains("https://civicos.example/citizen/dashboard"));
    }
}
