use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::shared::domain::model::value_objects::duration_literal::{
    DurationLiteral, DurationLiteralError,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct TimeoutsResource {
    #[validate(custom(function = "validate_duration_literal"))]
    pub read: Option<String>,
}

impl TimeoutsResource {
    pub fn read_or(&self, default: Duration) -> Result<Duration, DurationLiteralError> {
        match self.read.as_deref() {
            Some(raw) => DurationLiteral::parse(raw).map(|literal| literal.value()),
            None => Ok(default),
        }
    }
}

fn validate_duration_literal(value: &str) -> Result<(), ValidationError> {
    DurationLiteral::parse(value).map(|_| ()).map_err(|error| {
        let mut validation_error = ValidationError::new("duration");
        validation_error.message = Some(error.to_string().into());
        validation_error
    })
}
