pub mod account;
pub mod app;
pub mod brevo;
pub mod config;
pub mod crypto;
pub mod db;
pub mod env;
pub mod error;
pub mod handlers;
pub mod http;
pub mod jwt;
pub mod mail;
pub mod state;
pub mod util;

pub use app::router;
pub use config::Config;
pub use state::AppState;
