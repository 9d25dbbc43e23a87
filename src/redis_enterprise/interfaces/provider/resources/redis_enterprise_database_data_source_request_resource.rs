use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    redis_enterprise::domain::model::value_objects::redis_enterprise_cluster_id::RedisEnterpriseClusterId,
    shared::interfaces::provider::resources::timeouts_resource::TimeoutsResource,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RedisEnterpriseDatabaseDataSourceRequestResource {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1, max = 90), regex(path = "*RESOURCE_GROUP_NAME_REGEX"))]
    pub resource_group_name: String,

    #[validate(length(min = 1), custom(function = "validate_redis_enterprise_cluster_id"))]
    pub cluster_id: String,

    #[serde(default)]
    #[validate(nested)]
    pub timeouts: Option<TimeoutsResource>,
}

lazy_static::lazy_static! {
    pub static ref RESOURCE_GROUP_NAME_REGEX: regex::Regex = regex::Regex::new(r"^[-a-zA-Z0-9_.()]*[-a-zA-Z0-9_()]$").expect("valid regex");
}

fn validate_redis_enterprise_cluster_id(value: &str) -> Result<(), ValidationError> {
    RedisEnterpriseClusterId::parse(value).map(|_| ()).map_err(|error| {
        let mut validation_error = ValidationError::new("redis_enterprise_cluster_id");
        validation_error.message = Some(error.to_string().into());
        validation_error
    })
}
