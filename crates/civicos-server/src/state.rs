use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::mail::Mailer;

/// Shared handler state: the connection pool, settings and the optional mailer.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            mailer,
        }
    }

    pub fn jwt_secret(&self) -> &[u8] {
        self.config.jwt_secret.as_bytes()
    }
}
