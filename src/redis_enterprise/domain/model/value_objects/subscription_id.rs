use std::fmt;

use crate::redis_enterprise::domain::model::enums::redis_enterprise_domain_error::RedisEnterpriseDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(value: String) -> Result<Self, RedisEnterpriseDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(RedisEnterpriseDomainError::InvalidInput(
                "subscription id must be a non-empty path segment".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
