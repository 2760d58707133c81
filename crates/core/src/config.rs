//! Codec configuration.
//!
//! Loaded from TOML, or built in code. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! # Example
//!
//! ```toml
//! emit_context = true
//! collapse_singletons = true
//!
//! [aliases]
//! "https://www.w3.org/ns/activitystreams" = "as"
//! "http://joinmastodon.org/ns#" = "toot"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::error::CodecError;

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Default namespace → prefix bindings. A document's own `@context`
    /// takes precedence over these.
    pub aliases: BTreeMap<String, String>,
    /// Write an `@context` key when producing a document.
    pub emit_context: bool,
    /// Write a one-element repeatable property as a bare value rather than
    /// a one-element array.
    pub collapse_singletons: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            aliases: BTreeMap::new(),
            emit_context: true,
            collapse_singletons: true,
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

impl CodecConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CodecError> {
        Ok(toml::from_str(content)?)
    }

    /// Builder form for registering a default prefix.
    pub fn with_alias(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.aliases.insert(namespace.into(), prefix.into());
        self
    }

    pub fn alias_table(&self) -> AliasTable {
        self.aliases
            .iter()
            .map(|(namespace, prefix)| (namespace.as_str(), prefix.as_str()))
            .collect()
    }
}
