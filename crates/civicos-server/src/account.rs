use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

pub use entity::account::AccountKind;
use entity::account;

const MLA_SUFFIX: &str = "@mla.com";
// `@authority.com` also registers an organization; authority accounts log in with the stored kind.
const ORGANIZATION_SUFFIXES: [&str; 2] = ["@org.com", "@authority.com"];

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decide the kind of a new account from its email domain.
///
/// Only signup classifies by suffix; afterwards the stored kind is authoritative.
pub fn classify_signup_email(email: &str) -> AccountKind {
    if email.ends_with(MLA_SUFFIX) {
        AccountKind::Mla
    } else if ORGANIZATION_SUFFIXES
        .iter()
        .any(|suffix| email.ends_with(suffix))
    {
        AccountKind::Organization
    } else {
        AccountKind::Citizen
    }
}

/// `userType` label in signup responses.
pub fn user_type_label(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Citizen => "Citizen",
        AccountKind::Mla => "MLA",
        AccountKind::Organization => "Organization",
    }
}

pub async fn find_account<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<account::Model>, DbErr> {
    account::Entity::find_by_id(email.to_string()).one(conn).await
}

pub async fn register_account<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    kind: AccountKind,
    subject_id: &str,
    now: i64,
) -> Result<(), DbErr> {
    account::ActiveModel {
        email: Set(email.to_string()),
        kind: Set(kind),
        subject_id: Set(subject_id.to_string()),
        created_at: Set(now),
    }
    .insert(conn)
    .await?;
    Ok(())
}
