//! human-attributes - attribute type registry and error catalog for model attribute humanizers
//!
//! This crate declares which attribute types (currency, number, percentage,
//! date, ...) a humanizer recognizes, validates `humanize` declarations, and
//! defines the errors raised when those declarations are misused.

pub mod error;
pub mod formatter;
pub mod options;
pub mod types;
pub mod value;

pub use error::{ErrorKind, HumanizeError, UnknownErrorKind};
pub use formatter::{FormatterFn, Formatters};
pub use options::{AttributeOptions, HumanizeConfig, HumanizeKind};
pub use types::{AttributeType, Registry, TypeRegistry, NUMBER_TYPES, TYPES};
pub use value::{AttributeValue, EnumerizedValue};
