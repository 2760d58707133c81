//! Per-property kind registry and deserialization dispatch.
//!
//! A property's candidate kinds live in [`PropertyDef::kinds`]; a kind's
//! position in that slice is its priority. Dispatch tries the candidates in
//! that order and commits the first one that parses, then falls back to a
//! reference identifier, then to the raw value itself.

use serde_json::Value;
use tracing::{debug, trace};

use crate::alias::AliasTable;
use crate::cell::Slot;
use crate::error::CodecError;
use crate::iri::Iri;
use crate::kind::{Kind, KindValue};
use crate::schema::{PropertyDef, Vocabulary};

/// What a parse needs besides the raw value: where to look up nested types
/// and which prefixes the document uses.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub vocabulary: &'a Vocabulary,
    pub aliases: &'a AliasTable,
}

impl<'a> ParseContext<'a> {
    pub fn new(vocabulary: &'a Vocabulary, aliases: &'a AliasTable) -> Self {
        ParseContext {
            vocabulary,
            aliases,
        }
    }

    /// Prefix in effect for `def` in this document.
    pub fn alias_for(&self, def: &PropertyDef) -> &'a str {
        if def.keyword {
            ""
        } else {
            self.aliases.alias(def.namespace)
        }
    }
}

/// Ordering key for a committed kind.
///
/// Nothing committed (or only an opaque unknown value) sorts below every
/// real kind; a reference identifier that is not one of the property's own
/// kinds sorts above all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindIndex {
    None,
    Kind(usize),
    Iri,
}

/// Which wire key a raw value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
    /// The property's own key; language maps are not candidates.
    Plain,
    /// The `<name>Map` key; only language maps are candidates.
    LanguageMap,
}

/// First candidate of `def` that accepts `value`.
pub fn candidate_for(def: &PropertyDef, value: &KindValue) -> Option<usize> {
    def.kinds.iter().position(|kind| kind.accepts(value))
}

/// Deserializes one raw value into a slot for `def`.
pub(crate) fn dispatch(
    def: &PropertyDef,
    raw: &Value,
    channel: Channel,
    ctx: &ParseContext<'_>,
) -> Result<Slot, CodecError> {
    for (priority, kind) in def.kinds.iter().enumerate() {
        let eligible = match channel {
            Channel::Plain => *kind != Kind::LangString,
            Channel::LanguageMap => *kind == Kind::LangString,
        };
        if !eligible {
            continue;
        }
        if let Some(value) = kind.parse(raw, ctx)? {
            trace!(property = def.name, kind = kind.name(), priority, "committed kind");
            return Ok(Slot::Value {
                kind: priority,
                value,
            });
        }
    }

    if channel == Channel::Plain {
        if let Some(iri) = raw.as_str().and_then(Iri::parse) {
            trace!(property = def.name, iri = iri.as_str(), "committed reference identifier");
            return Ok(Slot::Iri(iri));
        }
    }

    debug!(property = def.name, "no candidate kind matched, keeping raw value");
    Ok(Slot::Unknown(raw.clone()))
}
