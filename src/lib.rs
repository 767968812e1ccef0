pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
pub mod validation;

use crate::config::Config;
use crate::db::DbPool;
use crate::llm::CompletionClient;
use crate::middleware::auth::{AuthConfig, AuthService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub llm: CompletionClient,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let auth_service = AuthService::new(AuthConfig::from_config(&config));
        let llm = CompletionClient::from_config(&config);
        Self {
            db,
            config: Arc::new(config),
            auth_service,
            llm,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().init();
        }
        _ => {
            tracing_subscriber::fmt().init();
        }
    }
}
