//! Formatter registry and per-attribute dispatch.
//!
//! The crate does not render values itself. Hosts register a formatter per
//! attribute type or per custom name, and [`Formatters::humanize`] routes each
//! declared attribute to the right one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::HumanizeError;
use crate::options::{AttributeOptions, HumanizeConfig, HumanizeKind};
use crate::types::AttributeType;
use crate::value::AttributeValue;

/// A formatter callable. Receives the value and the declaration's options.
pub type FormatterFn =
    Arc<dyn Fn(&AttributeValue<'_>, &Map<String, Value>) -> Result<String, HumanizeError> + Send + Sync>;

/// Formatters keyed by attribute type and by custom name.
#[derive(Clone, Default)]
pub struct Formatters {
    by_type: HashMap<AttributeType, FormatterFn>,
    custom: HashMap<String, FormatterFn>,
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<_> = self.custom.keys().collect();
        custom.sort();
        f.debug_struct("Formatters")
            .field("types", &self.types())
            .field("custom", &custom)
            .finish()
    }
}

impl Formatters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the formatter for a built-in attribute type, replacing any previous one.
    pub fn register_type<F>(&mut self, attribute_type: AttributeType, formatter: F) -> &mut Self
    where
        F: Fn(&AttributeValue<'_>, &Map<String, Value>) -> Result<String, HumanizeError>
            + Send
            + Sync
            + 'static,
    {
        self.by_type.insert(attribute_type, Arc::new(formatter));
        self
    }

    /// Register a formatter referenced by `custom: { formatter: name }` declarations.
    pub fn register_custom<F>(&mut self, name: impl Into<String>, formatter: F) -> &mut Self
    where
        F: Fn(&AttributeValue<'_>, &Map<String, Value>) -> Result<String, HumanizeError>
            + Send
            + Sync
            + 'static,
    {
        self.custom.insert(name.into(), Arc::new(formatter));
        self
    }

    /// Types with a registered formatter, in enumeration order.
    pub fn types(&self) -> Vec<AttributeType> {
        AttributeType::all()
            .iter()
            .copied()
            .filter(|t| self.by_type.contains_key(t))
            .collect()
    }

    pub fn has_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// Humanize `value` according to one attribute's declaration.
    ///
    /// # Errors
    /// * `NotImplemented` - no formatter is registered for the declared type
    /// * `MissingFormatterOption` - the declared custom formatter is not registered
    /// * `NotEnumerizeAttribute` - an enumerize declaration received a plain value
    /// * anything the formatter itself returns
    pub fn humanize(
        &self,
        options: &AttributeOptions,
        value: &AttributeValue<'_>,
    ) -> Result<String, HumanizeError> {
        tracing::trace!(
            kind = options.kind.key(),
            value = value.type_name(),
            "dispatching formatter"
        );
        match &options.kind {
            HumanizeKind::Typed(t) => {
                let formatter = self
                    .by_type
                    .get(t)
                    .ok_or(HumanizeError::NotImplemented)?;
                formatter(value, &options.options)
            }
            HumanizeKind::Custom { formatter } => {
                let formatter = self
                    .custom
                    .get(formatter)
                    .ok_or(HumanizeError::MissingFormatterOption)?;
                formatter(value, &options.options)
            }
            HumanizeKind::Enumerize => Ok(value.as_enumerized()?.text.to_string()),
        }
    }

    /// Humanize the value of a named attribute declared in `config`.
    ///
    /// Undeclared attributes fail with `RequiredAttributeType`.
    pub fn humanize_attribute(
        &self,
        config: &HumanizeConfig,
        attribute: &str,
        value: &AttributeValue<'_>,
    ) -> Result<String, HumanizeError> {
        let options = config
            .get(attribute)
            .ok_or(HumanizeError::RequiredAttributeType)?;
        self.humanize(options, value)
    }
}
