//! Attribute values handed to formatters.

use crate::error::HumanizeError;

/// A value of an enumerized attribute: the stored key plus its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerizedValue<'a> {
    pub value: &'a str,
    pub text: &'a str,
}

impl<'a> EnumerizedValue<'a> {
    pub fn new(value: &'a str, text: &'a str) -> Self {
        EnumerizedValue { value, text }
    }
}

/// The current value of a model attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue<'a> {
    /// A numeric value
    Number(f64),
    /// A text value
    Text(&'a str),
    /// A boolean value
    Bool(bool),
    /// An unset attribute
    Empty,
    /// A value of an enumerized attribute
    Enumerized(EnumerizedValue<'a>),
    /// A chrono Date (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
    /// A chrono DateTime (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
}

impl<'a> From<f64> for AttributeValue<'a> {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl<'a> From<i64> for AttributeValue<'a> {
    fn from(n: i64) -> Self {
        AttributeValue::Number(n as f64)
    }
}

impl<'a> From<i32> for AttributeValue<'a> {
    fn from(n: i32) -> Self {
        AttributeValue::Number(n as f64)
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(s: &'a str) -> Self {
        AttributeValue::Text(s)
    }
}

impl<'a> From<bool> for AttributeValue<'a> {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl<'a> From<()> for AttributeValue<'a> {
    fn from(_: ()) -> Self {
        AttributeValue::Empty
    }
}

impl<'a> From<EnumerizedValue<'a>> for AttributeValue<'a> {
    fn from(v: EnumerizedValue<'a>) -> Self {
        AttributeValue::Enumerized(v)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDate> for AttributeValue<'a> {
    fn from(d: chrono::NaiveDate) -> Self {
        AttributeValue::Date(d)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDateTime> for AttributeValue<'a> {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        AttributeValue::DateTime(dt)
    }
}

impl<'a> AttributeValue<'a> {
    /// Returns the value as a number if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as text if it is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the enumerized value, failing for any other variant.
    pub fn as_enumerized(&self) -> Result<&EnumerizedValue<'a>, HumanizeError> {
        match self {
            AttributeValue::Enumerized(v) => Ok(v),
            _ => Err(HumanizeError::NotEnumerizeAttribute),
        }
    }

    /// Returns true if this value is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, AttributeValue::Empty)
    }

    /// Returns a type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Number(_) => "number",
            AttributeValue::Text(_) => "text",
            AttributeValue::Bool(_) => "boolean",
            AttributeValue::Empty => "empty",
            AttributeValue::Enumerized(_) => "enumerized",
            #[cfg(feature = "chrono")]
            AttributeValue::Date(_) => "date",
            #[cfg(feature = "chrono")]
            AttributeValue::DateTime(_) => "datetime",
        }
    }
}
