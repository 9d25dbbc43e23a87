use std::{sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;
use tracing::debug;
use validator::Validate;

use crate::{
    redis_enterprise::{
        domain::{
            model::{
                entities::redis_enterprise_database::RedisEnterpriseDatabase,
                enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
                queries::get_redis_enterprise_database_query::GetRedisEnterpriseDatabaseQuery,
            },
            services::redis_enterprise_database_query_service::RedisEnterpriseDatabaseQueryService,
        },
        infrastructure::management::repositories::redis_enterprise_database_keys_repository::RemoteOperationError,
        interfaces::provider::resources::{
            error_response_resource::ErrorResponseResource,
            redis_enterprise_database_data_source_request_resource::RedisEnterpriseDatabaseDataSourceRequestResource,
            redis_enterprise_database_data_source_resource::RedisEnterpriseDatabaseDataSourceResource,
        },
    },
    shared::interfaces::provider::schema::data_source_schema::{
        AttributeSchema, DataSourceSchema, ResourceTimeouts,
    },
};

pub const DATA_SOURCE_TYPE_NAME: &str = "azurerm_redis_enterprise_database";

#[derive(Clone)]
pub struct RedisEnterpriseDatabaseDataSourceControllerState {
    pub query_service: Arc<dyn RedisEnterpriseDatabaseQueryService>,
    pub default_read_timeout: Duration,
}

/// Schema plus bound read handler, as registered with a host.
#[derive(Clone)]
pub struct RedisEnterpriseDatabaseDataSource {
    state: RedisEnterpriseDatabaseDataSourceControllerState,
    schema: DataSourceSchema,
}

impl RedisEnterpriseDatabaseDataSource {
    pub fn schema(&self) -> &DataSourceSchema {
        &self.schema
    }

    pub async fn read(
        &self,
        request: RedisEnterpriseDatabaseDataSourceRequestResource,
        cancellation: CancellationToken,
    ) -> Result<RedisEnterpriseDatabaseDataSourceResource, ErrorResponseResource> {
        read_redis_enterprise_database(&self.state, request, cancellation).await
    }
}

pub fn data_source(
    state: RedisEnterpriseDatabaseDataSourceControllerState,
) -> RedisEnterpriseDatabaseDataSource {
    RedisEnterpriseDatabaseDataSource {
        schema: redis_enterprise_database_data_source_schema(state.default_read_timeout),
        state,
    }
}

pub fn redis_enterprise_database_data_source_schema(read_timeout: Duration) -> DataSourceSchema {
    DataSourceSchema {
        type_name: DATA_SOURCE_TYPE_NAME,
        attributes: vec![
            AttributeSchema::required_string("name"),
            AttributeSchema::required_string("resource_group_name"),
            AttributeSchema::required_string("cluster_id"),
            AttributeSchema::computed_sensitive_string("primary_access_key"),
            AttributeSchema::computed_sensitive_string("secondary_access_key"),
        ],
        timeouts: ResourceTimeouts { read: read_timeout },
    }
}

pub async fn read_redis_enterprise_database(
    state: &RedisEnterpriseDatabaseDataSourceControllerState,
    request: RedisEnterpriseDatabaseDataSourceRequestResource,
    cancellation: CancellationToken,
) -> Result<RedisEnterpriseDatabaseDataSourceResource, ErrorResponseResource> {
    if let Err(validation_error) = request.validate() {
        debug!(error = %validation_error, "rejected data source input");
        return Err(ErrorResponseResource {
            kind: "validation".to_string(),
            message: validation_error.to_string(),
        });
    }

    let read_timeout = match &request.timeouts {
        Some(timeouts) => timeouts
            .read_or(state.default_read_timeout)
            .map_err(|error| ErrorResponseResource {
                kind: "validation".to_string(),
                message: error.to_string(),
            })?,
        None => state.default_read_timeout,
    };

    let query = GetRedisEnterpriseDatabaseQuery::new(
        request.name,
        request.resource_group_name,
        request.cluster_id,
        read_timeout,
    )
    .map_err(map_domain_error)?;

    let database = state
        .query_service
        .handle_get(query, cancellation)
        .await
        .map_err(map_domain_error)?;

    Ok(to_resource(&database))
}

fn to_resource(database: &RedisEnterpriseDatabase) -> RedisEnterpriseDatabaseDataSourceResource {
    RedisEnterpriseDatabaseDataSourceResource {
        id: database.id().to_string(),
        name: database.name().to_string(),
        resource_group_name: database.resource_group_name().to_string(),
        cluster_id: database.cluster_id().to_string(),
        primary_access_key: database.access_keys().primary_key().to_string(),
        secondary_access_key: database.access_keys().secondary_key().to_string(),
    }
}

fn map_domain_error(error: RedisEnterpriseDomainError) -> ErrorResponseResource {
    let kind = match &error {
        RedisEnterpriseDomainError::InvalidInput(_) => "validation",
        RedisEnterpriseDomainError::InvalidClusterId(_)
        | RedisEnterpriseDomainError::InvalidDatabaseId(_) => "parse",
        RedisEnterpriseDomainError::ListKeysFailed {
            source: RemoteOperationError::NotFound(_),
            ..
        } => "not_found",
        RedisEnterpriseDomainError::ListKeysFailed { .. } => "remote",
        RedisEnterpriseDomainError::ReadTimedOut { .. } => "timeout",
        RedisEnterpriseDomainError::ReadCancelled { .. } => "cancelled",
    };

    ErrorResponseResource {
        kind: kind.to_string(),
        message: error.to_string(),
    }
}
