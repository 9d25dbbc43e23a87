use std::time::Duration;

use redis_enterprise_data_source::redis_enterprise::{
    domain::{
        model::{
            enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
            queries::get_redis_enterprise_database_query::GetRedisEnterpriseDatabaseQuery,
        },
        services::redis_enterprise_database_query_service::RedisEnterpriseDatabaseQueryService,
    },
    infrastructure::management::repositories::redis_enterprise_database_keys_repository::RemoteOperationError,
};
use tokio_util::sync::CancellationToken;

use crate::support::{
    CLUSTER_ID, FakeKeysBehavior, create_query_harness, get_query, get_query_with_timeout,
};

#[tokio::test]
async fn handle_get_returns_keys_and_composite_id() {
    let harness = create_query_harness(FakeKeysBehavior::keys("AAA", "BBB"));

    let database = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await
        .expect("read should succeed");

    assert_eq!(
        database.id().to_string(),
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Cache/redisEnterprise/cluster1/databases/db1"
    );
    assert_eq!(database.access_keys().primary_key(), "AAA");
    assert_eq!(database.access_keys().secondary_key(), "BBB");
    assert_eq!(database.cluster_id().to_string(), CLUSTER_ID);
    assert_eq!(
        harness.keys_repository.calls(),
        vec![(
            "rg1".to_string(),
            "cluster1".to_string(),
            "db1".to_string()
        )]
    );
}

#[tokio::test]
async fn handle_get_echoes_caller_supplied_name_and_resource_group() {
    let harness = create_query_harness(FakeKeysBehavior::keys("AAA", "BBB"));
    let query = GetRedisEnterpriseDatabaseQuery::new(
        "Default".to_string(),
        "RG-Mixed.Case".to_string(),
        CLUSTER_ID.to_string(),
        Duration::from_secs(30),
    )
    .expect("valid query");

    let database = harness
        .service
        .handle_get(query, CancellationToken::new())
        .await
        .expect("read should succeed");

    assert_eq!(database.name(), "Default");
    assert_eq!(database.resource_group_name(), "RG-Mixed.Case");
    assert_eq!(database.id().resource_group(), "RG-Mixed.Case");
}

#[tokio::test]
async fn handle_get_uses_resource_group_input_rather_than_cluster_resource_group() {
    let harness = create_query_harness(FakeKeysBehavior::keys("AAA", "BBB"));
    let query = GetRedisEnterpriseDatabaseQuery::new(
        "db1".to_string(),
        "other-rg".to_string(),
        CLUSTER_ID.to_string(),
        Duration::from_secs(30),
    )
    .expect("valid query");

    let database = harness
        .service
        .handle_get(query, CancellationToken::new())
        .await
        .expect("read should succeed");

    assert_eq!(database.id().resource_group(), "other-rg");
    assert_eq!(database.cluster_id().resource_group(), "rg1");
    assert_eq!(harness.keys_repository.calls()[0].0, "other-rg");
}

#[tokio::test]
async fn handle_get_is_idempotent_for_identical_inputs() {
    let harness = create_query_harness(FakeKeysBehavior::keys("AAA", "BBB"));

    let first = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await
        .expect("first read should succeed");
    let second = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await
        .expect("second read should succeed");

    assert_eq!(first.id(), second.id());
    assert_eq!(first.access_keys(), second.access_keys());
    assert_eq!(harness.keys_repository.call_count(), 2);
}

#[tokio::test]
async fn handle_get_derives_distinct_ids_for_distinct_names() {
    let harness = create_query_harness(FakeKeysBehavior::keys("AAA", "BBB"));

    let first = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await
        .expect("first read should succeed");
    let second = harness
        .service
        .handle_get(get_query("db2"), CancellationToken::new())
        .await
        .expect("second read should succeed");

    assert_ne!(first.id().to_string(), second.id().to_string());
}

#[tokio::test]
async fn handle_get_wraps_remote_not_found_with_identifying_context() {
    let harness = create_query_harness(FakeKeysBehavior::NotFound);

    let error = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await
        .expect_err("read should fail");

    assert!(matches!(
        error,
        RedisEnterpriseDomainError::ListKeysFailed {
            source: RemoteOperationError::NotFound(_),
            ..
        }
    ));
    let message = error.to_string();
    assert!(message.contains("db1"));
    assert!(message.contains("rg1"));
    assert!(message.contains("cluster1"));
    assert!(message.contains("database was not found"));
}

#[tokio::test]
async fn handle_get_surfaces_throttling_without_retrying() {
    let harness = create_query_harness(FakeKeysBehavior::Throttled);

    let result = harness
        .service
        .handle_get(get_query("db1"), CancellationToken::new())
        .await;

    assert!(matches!(
        result,
        Err(RedisEnterpriseDomainError::ListKeysFailed {
            source: RemoteOperationError::Throttled,
            ..
        })
    ));
    assert_eq!(harness.keys_repository.call_count(), 1);
}

#[tokio::test]
async fn handle_get_times_out_instead_of_hanging() {
    let harness = create_query_harness(FakeKeysBehavior::Hang(Duration::from_secs(30)));

    let result = harness
        .service
        .handle_get(
            get_query_with_timeout("db1", Duration::from_millis(50)),
            CancellationToken::new(),
        )
        .await;

    let error = result.expect_err("read should time out");
    assert!(matches!(
        error,
        RedisEnterpriseDomainError::ReadTimedOut { timeout, .. } if timeout == Duration::from_millis(50)
    ));
    assert!(error.to_string().contains("cluster1"));
}

#[tokio::test]
async fn handle_get_aborts_when_cancelled() {
    let harness = create_query_harness(FakeKeysBehavior::Hang(Duration::from_secs(30)));
    let cancellation = CancellationToken::new();
    cancellation.cancel();

    let result = harness
        .service
        .handle_get(get_query("db1"), cancellation)
        .await;

    assert!(matches!(
        result,
        Err(RedisEnterpriseDomainError::ReadCancelled { ref database_name, .. }) if database_name == "db1"
    ));
}

#[test]
fn query_rejects_cluster_id_without_cluster_segment() {
    let result = GetRedisEnterpriseDatabaseQuery::new(
        "db1".to_string(),
        "rg1".to_string(),
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Cache".to_string(),
        Duration::from_secs(30),
    );

    assert!(matches!(
        result,
        Err(RedisEnterpriseDomainError::InvalidClusterId(_))
    ));
}

#[test]
fn query_rejects_blank_name() {
    let result = GetRedisEnterpriseDatabaseQuery::new(
        "  ".to_string(),
        "rg1".to_string(),
        CLUSTER_ID.to_string(),
        Duration::from_secs(30),
    );

    assert!(matches!(
        result,
        Err(RedisEnterpriseDomainError::InvalidInput(message)) if message == "name is required"
    ));
}
