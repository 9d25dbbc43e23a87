use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::app_config::AppConfig,
    redis_enterprise::{
        application::query_services::redis_enterprise_database_query_service_impl::RedisEnterpriseDatabaseQueryServiceImpl,
        domain::model::value_objects::subscription_id::SubscriptionId,
        infrastructure::management::repositories::arm::reqwest_redis_enterprise_database_keys_repository_impl::ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl,
        interfaces::provider::controllers::redis_enterprise_database_data_source_controller::{
            RedisEnterpriseDatabaseDataSource, RedisEnterpriseDatabaseDataSourceControllerState,
            data_source,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_redis_enterprise_database_data_source(
    config: &AppConfig,
) -> Result<RedisEnterpriseDatabaseDataSource, String> {
    let subscription_id =
        SubscriptionId::new(config.subscription_id.clone()).map_err(|e| e.to_string())?;

    let http_client = Client::builder().build().map_err(|e| e.to_string())?;

    let keys_repository = Arc::new(ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl::new(
        http_client,
        &config.management_endpoint,
        subscription_id.clone(),
        config.api_version.clone(),
        config.access_token.clone(),
    )?);

    let query_service = Arc::new(RedisEnterpriseDatabaseQueryServiceImpl::new(
        keys_repository,
        subscription_id,
    ));

    Ok(data_source(RedisEnterpriseDatabaseDataSourceControllerState {
        query_service,
        default_read_timeout: config.read_timeout,
    }))
}
