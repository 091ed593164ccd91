//! Generator configuration.
//!
//! `GeneratorConfig::default()` reproduces the canonical behaviour: the `[AutoClosed]` annotation in all its
//! spellings, LF line endings and four-space indentation.

use autoclosed_core::lang::generated;

use crate::backend::RenderOptions;

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub attributes: AttributeConfig,
    pub render: RenderOptions,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, attributes: AttributeConfig) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Which attribute names opt a type in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeConfig {
    names: Vec<String>,
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            names: generated::annotation_spellings(),
        }
    }
}

impl AttributeConfig {
    /// Accept exactly the given names (as written at use sites, without `global::`).
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Return `true` if an attribute written as `name` opts a type in.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.strip_prefix("global::").unwrap_or(name);
        self.names.iter().any(|n| n == name)
    }
}
