use std::fmt;

/// Primary/secondary access key pair returned by the management API.
///
/// `Debug` never prints the key material.
#[derive(Clone, Eq, PartialEq)]
pub struct DatabaseAccessKeys {
    primary_key: String,
    secondary_key: String,
}

impl DatabaseAccessKeys {
    pub fn new(primary_key: impl Into<String>, secondary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            secondary_key: secondary_key.into(),
        }
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn secondary_key(&self) -> &str {
        &self.secondary_key
    }
}

impl fmt::Debug for DatabaseAccessKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseAccessKeys")
            .field("primary_key", &"[REDACTED]")
            .field("secondary_key", &"[REDACTED]")
            .finish()
    }
}
