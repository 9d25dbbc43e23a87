use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum AzureResourceIdError {
    #[error("cannot parse Azure ID {0:?}: expected an absolute path starting with '/'")]
    NotAbsolutePath(String),

    #[error("the number of path segments is not divisible by 2 in {0:?}")]
    OddSegmentCount(String),

    #[error("key/value cannot be empty strings in {0:?}")]
    EmptySegment(String),

    #[error("no subscription ID found in {0:?}")]
    MissingSubscription(String),

    #[error("ID was missing the `{0}` element")]
    MissingSegment(String),

    #[error("ID contained more segments than required: {0:?}")]
    UnexpectedSegments(String),
}

/// Loosely parsed Azure Resource Manager id.
///
/// Holds the subscription, resource group and provider namespace, plus the
/// remaining `key/value` pairs in path order. Typed ids pop the segments they
/// expect and then call [`AzureResourceId::validate_no_remaining_segments`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AzureResourceId {
    subscription_id: String,
    resource_group: String,
    provider: String,
    segments: Vec<(String, String)>,
}

impl AzureResourceId {
    pub fn parse(input: &str) -> Result<Self, AzureResourceIdError> {
        let path = input.trim();
        if !path.starts_with('/') {
            return Err(AzureResourceIdError::NotAbsolutePath(input.to_string()));
        }

        let path = path.trim_matches('/');
        let components: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        if components.len() % 2 != 0 {
            return Err(AzureResourceIdError::OddSegmentCount(input.to_string()));
        }

        let mut subscription_id = None;
        let mut resource_group = String::new();
        let mut provider = String::new();
        let mut segments = Vec::new();

        for pair in components.chunks(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(AzureResourceIdError::EmptySegment(input.to_string()));
            }

            match key {
                "subscriptions" => subscription_id = Some(value.to_string()),
                "resourceGroups" | "resourcegroups" => resource_group = value.to_string(),
                "providers" => provider = value.to_string(),
                _ => segments.push((key.to_string(), value.to_string())),
            }
        }

        let subscription_id = subscription_id
            .ok_or_else(|| AzureResourceIdError::MissingSubscription(input.to_string()))?;

        Ok(Self {
            subscription_id,
            resource_group,
            provider,
            segments,
        })
    }

    /// Removes the first segment named `key` and returns its value.
    pub fn pop_segment(&mut self, key: &str) -> Result<String, AzureResourceIdError> {
        let position = self
            .segments
            .iter()
            .position(|(segment_key, _)| segment_key == key)
            .ok_or_else(|| AzureResourceIdError::MissingSegment(key.to_string()))?;

        Ok(self.segments.remove(position).1)
    }

    pub fn validate_no_remaining_segments(&self, input: &str) -> Result<(), AzureResourceIdError> {
        if self.segments.is_empty() {
            Ok(())
        } else {
            Err(AzureResourceIdError::UnexpectedSegments(input.to_string()))
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}
