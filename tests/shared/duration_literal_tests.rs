use std::time::Duration;

use redis_enterprise_data_source::shared::{
    domain::model::value_objects::duration_literal::{DurationLiteral, DurationLiteralError},
    interfaces::provider::resources::timeouts_resource::TimeoutsResource,
};
use validator::Validate;

#[test]
fn parse_accepts_each_unit() {
    assert_eq!(
        DurationLiteral::parse("30s").map(|d| d.value()),
        Ok(Duration::from_secs(30))
    );
    assert_eq!(
        DurationLiteral::parse("5m").map(|d| d.value()),
        Ok(Duration::from_secs(300))
    );
    assert_eq!(
        DurationLiteral::parse(" 2H ").map(|d| d.value()),
        Ok(Duration::from_secs(7_200))
    );
    assert_eq!(
        DurationLiteral::parse("1d").map(|d| d.value()),
        Ok(Duration::from_secs(86_400))
    );
}

#[test]
fn parse_rejects_zero_empty_and_unknown_units() {
    assert_eq!(DurationLiteral::parse(""), Err(DurationLiteralError::Empty));
    assert_eq!(
        DurationLiteral::parse("0m"),
        Err(DurationLiteralError::Zero("0m".to_string()))
    );
    assert!(matches!(
        DurationLiteral::parse("5 minutes"),
        Err(DurationLiteralError::InvalidFormat(_))
    ));
    assert!(matches!(
        DurationLiteral::parse("99999999999999999999d"),
        Err(DurationLiteralError::Overflow(_))
    ));
}

#[test]
fn display_uses_largest_whole_unit() {
    assert_eq!(
        DurationLiteral::from_duration(Duration::from_secs(300)).to_string(),
        "5m"
    );
    assert_eq!(
        DurationLiteral::from_duration(Duration::from_secs(90)).to_string(),
        "90s"
    );
    assert_eq!(
        DurationLiteral::from_duration(Duration::from_secs(7_200)).to_string(),
        "2h"
    );
}

#[test]
fn timeouts_resource_falls_back_to_default() {
    let timeouts = TimeoutsResource::default();

    assert_eq!(
        timeouts.read_or(Duration::from_secs(300)),
        Ok(Duration::from_secs(300))
    );
    assert!(timeouts.validate().is_ok());
}

#[test]
fn timeouts_resource_validation_rejects_bad_literal() {
    let timeouts = TimeoutsResource {
        read: Some("soon".to_string()),
    };

    assert!(timeouts.validate().is_err());
    assert!(timeouts.read_or(Duration::from_secs(300)).is_err());
}
