use std::{sync::Arc, time::Duration};

use redis_enterprise_data_source::redis_enterprise::{
    application::query_services::redis_enterprise_database_query_service_impl::RedisEnterpriseDatabaseQueryServiceImpl,
    domain::model::value_objects::subscription_id::SubscriptionId,
    interfaces::provider::controllers::redis_enterprise_database_data_source_controller::{
        RedisEnterpriseDatabaseDataSource, RedisEnterpriseDatabaseDataSourceControllerState,
        data_source,
    },
};

use super::{
    fakes::{FakeKeysBehavior, FakeKeysRepository},
    fixtures::SUBSCRIPTION_ID,
};

pub struct QueryTestHarness {
    pub keys_repository: Arc<FakeKeysRepository>,
    pub service: RedisEnterpriseDatabaseQueryServiceImpl,
}

pub struct ControllerTestHarness {
    pub keys_repository: Arc<FakeKeysRepository>,
    pub data_source: RedisEnterpriseDatabaseDataSource,
}

pub fn create_query_harness(behavior: FakeKeysBehavior) -> QueryTestHarness {
    let keys_repository = Arc::new(FakeKeysRepository::new(behavior));

    let service = RedisEnterpriseDatabaseQueryServiceImpl::new(
        keys_repository.clone(),
        SubscriptionId::new(SUBSCRIPTION_ID.to_string()).expect("valid subscription id"),
    );

    QueryTestHarness {
        keys_repository,
        service,
    }
}

pub fn create_controller_harness(
    behavior: FakeKeysBehavior,
    default_read_timeout: Duration,
) -> ControllerTestHarness {
    let harness = create_query_harness(behavior);

    let data_source = data_source(RedisEnterpriseDatabaseDataSourceControllerState {
        query_service: Arc::new(harness.service),
        default_read_timeout,
    });

    ControllerTestHarness {
        keys_repository: harness.keys_repository,
        data_source,
    }
}
