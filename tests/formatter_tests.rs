use human_attributes::{
    AttributeOptions, AttributeType, AttributeValue, EnumerizedValue, Formatters, HumanizeConfig,
    HumanizeError, HumanizeKind,
};
use serde_json::json;

fn currency_formatters() -> Formatters {
    let mut formatters = Formatters::new();
    formatters.register_type(AttributeType::Currency, |value, options| {
        let n = value.as_number().ok_or(HumanizeError::NotImplemented)?;
        let unit = options.get("unit").and_then(|u| u.as_str()).unwrap_or("$");
        Ok(format!("{}{:.2}", unit, n))
    });
    formatters
}

#[test]
fn test_dispatch_to_type_formatter() {
    let formatters = currency_formatters();
    let opts = AttributeOptions::from_value(&json!({ "currency": { "unit": "R$" } })).unwrap();

    let result = formatters.humanize(&opts, &AttributeValue::from(12.5)).unwrap();
    assert_eq!(result, "R$12.50");
}

#[test]
fn test_unregistered_type_is_not_implemented() {
    let formatters = currency_formatters();
    let opts = AttributeOptions::new(HumanizeKind::Typed(AttributeType::Phone));

    assert_eq!(
        formatters.humanize(&opts, &AttributeValue::from("5551234")),
        Err(HumanizeError::NotImplemented)
    );
}

#[test]
fn test_custom_formatter() {
    let mut formatters = Formatters::new();
    formatters.register_custom("shout", |value, _| {
        Ok(value.as_text().unwrap_or_default().to_uppercase())
    });
    assert!(formatters.has_custom("shout"));

    let opts = AttributeOptions::from_value(&json!({ "custom": { "formatter": "shout" } })).unwrap();
    assert_eq!(
        formatters.humanize(&opts, &AttributeValue::from("hi")).unwrap(),
        "HI"
    );
}

#[test]
fn test_unregistered_custom_formatter() {
    let formatters = Formatters::new();
    let opts = AttributeOptions::from_value(&json!({ "custom": { "formatter": "shout" } })).unwrap();

    assert_eq!(
        formatters.humanize(&opts, &AttributeValue::from("hi")),
        Err(HumanizeError::MissingFormatterOption)
    );
}

#[test]
fn test_enumerize() {
    let formatters = Formatters::new();
    let opts = AttributeOptions::new(HumanizeKind::Enumerize);

    let value = AttributeValue::from(EnumerizedValue::new("pending", "Pending review"));
    assert_eq!(formatters.humanize(&opts, &value).unwrap(), "Pending review");

    assert_eq!(
        formatters.humanize(&opts, &AttributeValue::from("pending")),
        Err(HumanizeError::NotEnumerizeAttribute)
    );
}

#[test]
fn test_humanize_attribute() {
    let formatters = currency_formatters();
    let config = HumanizeConfig::from_value(&json!({
        "amount": { "currency": true },
        "state": { "enumerize": true }
    }))
    .unwrap();

    assert_eq!(
        formatters
            .humanize_attribute(&config, "amount", &AttributeValue::from(3i32))
            .unwrap(),
        "$3.00"
    );
    assert_eq!(
        formatters.humanize_attribute(&config, "missing", &AttributeValue::Empty),
        Err(HumanizeError::RequiredAttributeType)
    );
}

#[test]
fn test_registered_types_in_order() {
    let mut formatters = currency_formatters();
    formatters.register_type(AttributeType::Date, |_, _| Ok(String::new()));
    formatters.register_type(AttributeType::Number, |_, _| Ok(String::new()));

    assert_eq!(
        formatters.types(),
        vec![AttributeType::Currency, AttributeType::Number, AttributeType::Date]
    );
    assert!(format!("{:?}", formatters).contains("Currency"));
}
