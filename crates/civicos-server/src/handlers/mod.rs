pub mod accounts;
pub mod auth;
pub mod citizen;
pub mod identity;
pub mod issues;
pub mod mla;
