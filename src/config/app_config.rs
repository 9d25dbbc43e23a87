use std::time::Duration;

use crate::{
    redis_enterprise::{
        domain::model::queries::get_redis_enterprise_database_query::DEFAULT_READ_TIMEOUT,
        infrastructure::management::repositories::arm::reqwest_redis_enterprise_database_keys_repository_impl::{
            DEFAULT_API_VERSION, DEFAULT_MANAGEMENT_ENDPOINT,
        },
    },
    shared::domain::model::value_objects::duration_literal::DurationLiteral,
};

#[derive(Clone)]
pub struct AppConfig {
    pub subscription_id: String,
    pub access_token: String,
    pub management_endpoint: String,
    pub api_version: String,
    pub read_timeout: Duration,
    pub log_filter: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("subscription_id", &self.subscription_id)
            .field("access_token", &"[REDACTED]")
            .field("management_endpoint", &self.management_endpoint)
            .field("api_version", &self.api_version)
            .field("read_timeout", &self.read_timeout)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            subscription_id: std::env::var("AZURE_SUBSCRIPTION_ID").unwrap_or_default(),
            access_token: std::env::var("AZURE_ACCESS_TOKEN").unwrap_or_default(),
            management_endpoint: std::env::var("AZURE_MANAGEMENT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_MANAGEMENT_ENDPOINT.to_string()),
            api_version: std::env::var("REDIS_ENTERPRISE_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            read_timeout: std::env::var("DATA_SOURCE_READ_TIMEOUT")
                .ok()
                .and_then(|raw| DurationLiteral::parse(&raw).ok())
                .map(|literal| literal.value())
                .unwrap_or(DEFAULT_READ_TIMEOUT),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
