//! Mapping configuration.
//!
//! The engine is lenient by default: a value of the wrong shape is skipped and
//! the field keeps whatever it held before the bind. Both policies can be
//! tightened per serializer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do when a JSON value does not match the declared field type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Leave the field unset and keep decoding sibling fields.
    #[default]
    Skip,

    /// Abort the whole decode/encode call with a `TypeMismatch` error.
    Fail,
}

/// What to do with a collection element that is not a JSON object when the
/// collection is declared as an array or dictionary of mappable types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPolicy {
    /// Drop the malformed element and keep the others, in source order.
    #[default]
    SkipElement,

    /// Treat the whole collection field as a type mismatch.
    ///
    /// The field then follows [`MismatchPolicy`]: left unset under `Skip`,
    /// or an error under `Fail`.
    FailCollection,
}

/// Configuration for a mapping pass.
///
/// # Example
///
/// ```rust
/// use jsonsz_core::{ElementPolicy, MappingConfig, MismatchPolicy};
///
/// let config = MappingConfig::new()
///     .with_mismatch_policy(MismatchPolicy::Fail)
///     .with_element_policy(ElementPolicy::FailCollection);
/// assert!(config.is_strict());
///
/// let loaded = MappingConfig::from_toml_str(
///     r#"
///     on_type_mismatch = "fail"
///     on_malformed_element = "fail_collection"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(loaded, config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Policy for values whose runtime shape differs from the field type.
    pub on_type_mismatch: MismatchPolicy,

    /// Policy for non-object elements inside collections of mappable types.
    pub on_malformed_element: ElementPolicy,
}

impl MappingConfig {
    /// Create a lenient configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that fails on every mismatch.
    pub fn strict() -> Self {
        Self {
            on_type_mismatch: MismatchPolicy::Fail,
            on_malformed_element: ElementPolicy::FailCollection,
        }
    }

    /// Load a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.on_type_mismatch = policy;
        self
    }

    pub fn with_element_policy(mut self, policy: ElementPolicy) -> Self {
        self.on_malformed_element = policy;
        self
    }

    /// Whether type mismatches abort the call.
    pub fn is_strict(&self) -> bool {
        self.on_type_mismatch == MismatchPolicy::Fail
    }
}
