use human_attributes::{ErrorKind, HumanizeError, Registry, TypeRegistry, UnknownErrorKind};
use serde_json::json;
use strum::IntoEnumIterator;

#[test]
fn test_fixed_messages() {
    assert_eq!(
        HumanizeError::NotImplemented.to_string(),
        "formatter not implemented"
    );
    assert_eq!(
        HumanizeError::InvalidHumanizeConfig.to_string(),
        "humanize options needs to be a Hash"
    );
    assert_eq!(
        HumanizeError::NotEnumerizeAttribute.to_string(),
        "needs to be an Enumerize::Value object"
    );
    assert_eq!(
        HumanizeError::MissingFormatterOption.to_string(),
        "custom type needs formatter option with a proc"
    );
    assert_eq!(
        HumanizeError::RequiredAttributeType.to_string(),
        "type is required"
    );
    assert_eq!(
        HumanizeError::InvalidAttributeOptions.to_string(),
        "options needs to be a Hash"
    );
}

#[test]
fn test_invalid_type_lists_types_in_order() {
    assert_eq!(
        HumanizeError::InvalidType.to_string(),
        "type needs to be one of: currency, number, size, percentage, phone, delimiter, precision, date"
    );
}

#[test]
fn test_kind_round_trips_through_error() {
    for kind in ErrorKind::iter() {
        assert_eq!(HumanizeError::from(kind).kind(), kind);
    }
    assert_eq!(ErrorKind::iter().count(), 7);
}

#[test]
fn test_resolve_every_kind_by_name() {
    let names = [
        "NotImplemented",
        "InvalidHumanizeConfig",
        "NotEnumerizeAttribute",
        "MissingFormatterOption",
        "InvalidType",
        "RequiredAttributeType",
        "InvalidAttributeOptions",
    ];
    for name in names {
        let err: HumanizeError = name.parse().unwrap();
        assert_eq!(err.kind().name(), name);
        assert_eq!(err.kind().to_string(), name);
    }
}

#[test]
fn test_unknown_name_fails() {
    let err = "Bogus".parse::<HumanizeError>().unwrap_err();
    assert_eq!(
        err,
        UnknownErrorKind {
            name: "Bogus".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown humanize error kind 'Bogus'");

    assert_eq!(
        ErrorKind::from_name("Bogus").unwrap_err().name,
        "Bogus"
    );

    // names are case sensitive
    assert!("invalidtype".parse::<ErrorKind>().is_err());
    assert!("".parse::<ErrorKind>().is_err());
}

#[test]
fn test_raise_error() {
    let result: Result<(), _> = Registry.raise_error(ErrorKind::RequiredAttributeType);
    assert_eq!(result, Err(HumanizeError::RequiredAttributeType));
}

#[test]
fn test_error_named() {
    let err = Registry.error_named("InvalidType").unwrap();
    assert!(matches!(err, HumanizeError::InvalidType));

    let msg = err.to_string();
    for name in [
        "currency",
        "number",
        "size",
        "percentage",
        "phone",
        "delimiter",
        "precision",
        "date",
    ] {
        assert!(msg.contains(name), "missing {} in {}", name, msg);
    }

    assert!(Registry.error_named("NoSuchError").is_err());
}

#[test]
fn test_error_is_std_error() {
    fn boxed(err: HumanizeError) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(err)
    }
    assert_eq!(
        boxed(HumanizeError::NotImplemented).to_string(),
        "formatter not implemented"
    );
}

#[test]
fn test_kind_serializes_as_variant_name() {
    assert_eq!(
        serde_json::to_value(ErrorKind::MissingFormatterOption).unwrap(),
        json!("MissingFormatterOption")
    );
    for kind in ErrorKind::iter() {
        let name = serde_json::to_value(kind).unwrap();
        assert_eq!(ErrorKind::from_name(name.as_str().unwrap()), Ok(kind));
    }
}
