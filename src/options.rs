//! Humanize declarations and their validation.
//!
//! A declaration mirrors the host call `humanize :amount, currency: { suffix: "to_money" }`
//! as JSON: an object with exactly one kind key (a type name, `custom` or
//! `enumerize`) whose value is `true` or an object of options. Declarations
//! serialize back into the same shape.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::HumanizeError;
use crate::types::AttributeType;

const CUSTOM_KEY: &str = "custom";
const ENUMERIZE_KEY: &str = "enumerize";
const SUFFIX_OPTION: &str = "suffix";
const FORMATTER_OPTION: &str = "formatter";

/// What a declared attribute is humanized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanizeKind {
    /// One of the recognized attribute types
    Typed(AttributeType),
    /// A caller-registered formatter, looked up by name
    Custom { formatter: String },
    /// The display text of an enumerized value
    Enumerize,
}

impl HumanizeKind {
    /// The declaration key for this kind.
    pub fn key(&self) -> &str {
        match self {
            HumanizeKind::Typed(t) => t.name(),
            HumanizeKind::Custom { .. } => CUSTOM_KEY,
            HumanizeKind::Enumerize => ENUMERIZE_KEY,
        }
    }

    fn default_suffix(&self) -> String {
        match self {
            HumanizeKind::Enumerize => "to_text".to_string(),
            _ => format!("to_{}", self.key()),
        }
    }
}

/// A validated declaration for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeOptions {
    pub kind: HumanizeKind,
    /// Overrides the generated method suffix.
    pub suffix: Option<String>,
    /// Remaining options, passed through to the formatter.
    pub options: Map<String, Value>,
}

impl AttributeOptions {
    pub fn new(kind: HumanizeKind) -> Self {
        AttributeOptions {
            kind,
            suffix: None,
            options: Map::new(),
        }
    }

    /// Validate a single declaration.
    ///
    /// # Errors
    /// * `InvalidHumanizeConfig` - `config` is not an object
    /// * `InvalidType` - a key is not a recognized kind, or more than one kind is given
    /// * `RequiredAttributeType` - no kind key is present
    /// * `InvalidAttributeOptions` - the kind's value is not `true` or an object,
    ///   or `suffix` is not a string
    /// * `MissingFormatterOption` - `custom` without a string `formatter` option
    pub fn from_value(config: &Value) -> Result<Self, HumanizeError> {
        Self::parse(config).inspect_err(|err| {
            tracing::debug!(kind = err.kind().name(), "rejected humanize declaration");
        })
    }

    fn parse(config: &Value) -> Result<Self, HumanizeError> {
        let map = config
            .as_object()
            .ok_or(HumanizeError::InvalidHumanizeConfig)?;

        let mut declared = None;
        for (key, value) in map {
            if !is_kind_key(key) {
                return Err(HumanizeError::InvalidType);
            }
            if declared.replace((key.as_str(), value)).is_some() {
                return Err(HumanizeError::InvalidType);
            }
        }
        let (key, value) = declared.ok_or(HumanizeError::RequiredAttributeType)?;

        let mut options = match value {
            Value::Bool(true) => Map::new(),
            Value::Object(options) => options.clone(),
            _ => return Err(HumanizeError::InvalidAttributeOptions),
        };

        let suffix = match options.remove(SUFFIX_OPTION) {
            None => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(HumanizeError::InvalidAttributeOptions),
        };

        let kind = match key {
            CUSTOM_KEY => match options.remove(FORMATTER_OPTION) {
                Some(Value::String(formatter)) if !formatter.is_empty() => {
                    HumanizeKind::Custom { formatter }
                }
                _ => return Err(HumanizeError::MissingFormatterOption),
            },
            ENUMERIZE_KEY => HumanizeKind::Enumerize,
            _ => HumanizeKind::Typed(AttributeType::from_tag(key)?),
        };

        Ok(AttributeOptions {
            kind,
            suffix,
            options,
        })
    }

    /// Name of the method generated for `attribute`, e.g. `amount_to_currency`.
    pub fn method_name(&self, attribute: &str) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}_{}", attribute, suffix),
            None => format!("{}_{}", attribute, self.kind.default_suffix()),
        }
    }

    pub fn attribute_type(&self) -> Option<AttributeType> {
        match self.kind {
            HumanizeKind::Typed(t) => Some(t),
            _ => None,
        }
    }
}

impl Serialize for AttributeOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut options = self.options.clone();
        if let HumanizeKind::Custom { formatter } = &self.kind {
            options.insert(FORMATTER_OPTION.to_string(), Value::String(formatter.clone()));
        }
        if let Some(suffix) = &self.suffix {
            options.insert(SUFFIX_OPTION.to_string(), Value::String(suffix.clone()));
        }
        let value = if options.is_empty() {
            Value::Bool(true)
        } else {
            Value::Object(options)
        };

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.key(), &value)?;
        map.end()
    }
}

fn is_kind_key(key: &str) -> bool {
    key == CUSTOM_KEY || key == ENUMERIZE_KEY || key.parse::<AttributeType>().is_ok()
}

/// Declarations for every humanized attribute of a model, in attribute-name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HumanizeConfig {
    attributes: Vec<(String, AttributeOptions)>,
}

impl HumanizeConfig {
    /// Validate a mapping of attribute name to declaration.
    ///
    /// Fails with `InvalidHumanizeConfig` when `config` is not an object, and
    /// with the first declaration's error otherwise.
    pub fn from_value(config: &Value) -> Result<Self, HumanizeError> {
        let map = config
            .as_object()
            .ok_or(HumanizeError::InvalidHumanizeConfig)?;

        let mut attributes = Vec::with_capacity(map.len());
        for (name, declaration) in map {
            let options = AttributeOptions::from_value(declaration)?;
            attributes.push((name.clone(), options));
        }
        Ok(HumanizeConfig { attributes })
    }

    /// Add or replace the declaration for `attribute`.
    pub fn declare(&mut self, attribute: impl Into<String>, options: AttributeOptions) {
        let attribute = attribute.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == attribute) {
            Some(entry) => entry.1 = options,
            None => self.attributes.push((attribute, options)),
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&AttributeOptions> {
        self.attributes
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, options)| options)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeOptions)> {
        self.attributes
            .iter()
            .map(|(name, options)| (name.as_str(), options))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Serialize for HumanizeConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (name, options) in &self.attributes {
            map.serialize_entry(name, options)?;
        }
        map.end()
    }
}
