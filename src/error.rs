//! Error types for attribute declarations and humanizing.

use std::str::FromStr;

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::types::AttributeType;

/// Misuse of the humanize configuration contract.
///
/// Every variant carries a fixed message; callers discriminate by variant
/// (or by [`HumanizeError::kind`]), never by message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HumanizeError {
    #[error("formatter not implemented")]
    NotImplemented,

    #[error("humanize options needs to be a Hash")]
    InvalidHumanizeConfig,

    #[error("needs to be an Enumerize::Value object")]
    NotEnumerizeAttribute,

    #[error("custom type needs formatter option with a proc")]
    MissingFormatterOption,

    #[error("type needs to be one of: {}", AttributeType::joined_names())]
    InvalidType,

    #[error("type is required")]
    RequiredAttributeType,

    #[error("options needs to be a Hash")]
    InvalidAttributeOptions,
}

impl HumanizeError {
    /// The discriminator of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HumanizeError::NotImplemented => ErrorKind::NotImplemented,
            HumanizeError::InvalidHumanizeConfig => ErrorKind::InvalidHumanizeConfig,
            HumanizeError::NotEnumerizeAttribute => ErrorKind::NotEnumerizeAttribute,
            HumanizeError::MissingFormatterOption => ErrorKind::MissingFormatterOption,
            HumanizeError::InvalidType => ErrorKind::InvalidType,
            HumanizeError::RequiredAttributeType => ErrorKind::RequiredAttributeType,
            HumanizeError::InvalidAttributeOptions => ErrorKind::InvalidAttributeOptions,
        }
    }
}

/// Names of the error conditions in [`HumanizeError`].
///
/// Parses from and prints as the variant name, e.g. `"InvalidType"`.
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
pub enum ErrorKind {
    NotImplemented,
    InvalidHumanizeConfig,
    NotEnumerizeAttribute,
    MissingFormatterOption,
    InvalidType,
    RequiredAttributeType,
    InvalidAttributeOptions,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Resolve a variant name, keeping the rejected name in the error.
    pub fn from_name(name: &str) -> Result<Self, UnknownErrorKind> {
        name.parse::<ErrorKind>().map_err(|_| UnknownErrorKind {
            name: name.to_string(),
        })
    }
}

impl From<ErrorKind> for HumanizeError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotImplemented => HumanizeError::NotImplemented,
            ErrorKind::InvalidHumanizeConfig => HumanizeError::InvalidHumanizeConfig,
            ErrorKind::NotEnumerizeAttribute => HumanizeError::NotEnumerizeAttribute,
            ErrorKind::MissingFormatterOption => HumanizeError::MissingFormatterOption,
            ErrorKind::InvalidType => HumanizeError::InvalidType,
            ErrorKind::RequiredAttributeType => HumanizeError::RequiredAttributeType,
            ErrorKind::InvalidAttributeOptions => HumanizeError::InvalidAttributeOptions,
        }
    }
}

/// A name that does not resolve to any [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown humanize error kind '{name}'")]
pub struct UnknownErrorKind {
    pub name: String,
}

impl FromStr for HumanizeError {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::from_name(s).map(HumanizeError::from)
    }
}
