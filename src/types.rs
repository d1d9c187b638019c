//! Recognized attribute types and their classification.

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::error::{ErrorKind, HumanizeError, UnknownErrorKind};

/// How an attribute's value should be humanized.
///
/// Parses from and prints as its snake_case tag, e.g. `"currency"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttributeType {
    Currency,
    Number,
    Size,
    Percentage,
    Phone,
    Delimiter,
    Precision,
    Date,
}

/// Numeric-family types, in declaration order.
pub const NUMBER_TYPES: [AttributeType; 7] = [
    AttributeType::Currency,
    AttributeType::Number,
    AttributeType::Size,
    AttributeType::Percentage,
    AttributeType::Phone,
    AttributeType::Delimiter,
    AttributeType::Precision,
];

/// Every recognized type: the numeric family followed by `date`.
pub const TYPES: [AttributeType; 8] = {
    let mut all = [AttributeType::Date; 8];
    let mut i = 0;
    while i < NUMBER_TYPES.len() {
        all[i] = NUMBER_TYPES[i];
        i += 1;
    }
    all
};

impl AttributeType {
    /// All recognized types in enumeration order.
    pub fn all() -> &'static [AttributeType] {
        &TYPES
    }

    /// The numeric-family types in enumeration order.
    pub fn numeric() -> &'static [AttributeType] {
        &NUMBER_TYPES
    }

    /// Resolve a declaration tag, failing with `InvalidType` for anything
    /// outside the recognized set.
    pub fn from_tag(tag: &str) -> Result<Self, HumanizeError> {
        tag.parse().map_err(|_| HumanizeError::InvalidType)
    }

    /// The tag used for this type in declarations.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Returns true for every type except `date`.
    pub fn is_numeric(&self) -> bool {
        !self.is_date()
    }

    pub fn is_date(&self) -> bool {
        matches!(self, AttributeType::Date)
    }

    /// Comma-joined list of every recognized type name.
    pub fn joined_names() -> String {
        TYPES
            .iter()
            .map(AttributeType::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Classification queries and error helpers shared by attribute humanizers.
///
/// Every method has a default implementation, so a host only needs an empty
/// `impl TypeRegistry for Host {}` or can hold a [`Registry`] instead.
/// The predicates are total: tags outside the recognized set yield `false`.
pub trait TypeRegistry {
    fn is_numeric_type(&self, tag: &str) -> bool {
        AttributeType::from_tag(tag)
            .map(|t| t.is_numeric())
            .unwrap_or(false)
    }

    fn is_known_type(&self, tag: &str) -> bool {
        tag.parse::<AttributeType>().is_ok()
    }

    fn is_date_type(&self, tag: &str) -> bool {
        tag == AttributeType::Date.name()
    }

    /// Builds the error for `kind` and returns it as the failure of `T`.
    fn raise_error<T>(&self, kind: ErrorKind) -> Result<T, HumanizeError> {
        tracing::debug!(kind = kind.name(), "raising humanize error");
        Err(HumanizeError::from(kind))
    }

    /// Resolves an error kind by its variant name and builds a fresh error.
    ///
    /// Names outside the catalog fail with [`UnknownErrorKind`].
    fn error_named(&self, name: &str) -> Result<HumanizeError, UnknownErrorKind> {
        let kind = ErrorKind::from_name(name)?;
        tracing::debug!(kind = kind.name(), "resolved humanize error by name");
        Ok(HumanizeError::from(kind))
    }
}

/// Stateless [`TypeRegistry`] for hosts that compose rather than implement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registry;

impl TypeRegistry for Registry {}
