//! Single-valued property storage.

use std::collections::BTreeMap;

use serde_json::Value;
use time::OffsetDateTime;

use crate::alias::AliasTable;
use crate::config::CodecConfig;
use crate::entity::Entity;
use crate::error::CodecError;
use crate::iri::Iri;
use crate::kind::{Kind, KindValue};
use crate::registry::{candidate_for, dispatch, Channel, KindIndex, ParseContext};
use crate::schema::PropertyDef;

/// What a cell currently holds. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slot {
    Empty,
    /// A value of the candidate kind at position `kind`.
    Value { kind: usize, value: KindValue },
    /// A reference identifier for a property without an `xsd:anyURI` kind.
    Iri(Iri),
    /// A raw value no candidate could read.
    Unknown(Value),
}

/// One value of a property: the whole value of a functional property, or
/// one element of a [`PropertyList`](crate::list::PropertyList).
///
/// At most one kind is committed at any time. Every setter clears whatever
/// was there before.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCell {
    def: &'static PropertyDef,
    alias: String,
    slot: Slot,
    index: Option<usize>,
}

impl PropertyCell {
    pub fn new(def: &'static PropertyDef) -> Self {
        PropertyCell {
            def,
            alias: String::new(),
            slot: Slot::Empty,
            index: None,
        }
    }

    pub(crate) fn from_slot(def: &'static PropertyDef, alias: &str, slot: Slot) -> Self {
        PropertyCell {
            def,
            alias: alias.to_string(),
            slot,
            index: None,
        }
    }

    pub(crate) fn deserialize(
        def: &'static PropertyDef,
        raw: &Value,
        channel: Channel,
        ctx: &ParseContext<'_>,
    ) -> Result<Self, CodecError> {
        let slot = dispatch(def, raw, channel, ctx)?;
        Ok(PropertyCell::from_slot(def, ctx.alias_for(def), slot))
    }

    pub fn def(&self) -> &'static PropertyDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Position within the owning list; `None` for a functional property
    /// or a cell removed from its list.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Commits `value` under the first candidate kind that accepts it.
    pub fn set(&mut self, value: impl Into<KindValue>) -> Result<(), CodecError> {
        let value = value.into();
        let kind = candidate_for(self.def, &value).ok_or_else(|| CodecError::UnsupportedKind {
            property: self.def.name.to_string(),
            kind: value.type_name().to_string(),
        })?;
        self.slot = Slot::Value { kind, value };
        Ok(())
    }

    /// Commits a reference identifier. On a property with an `xsd:anyURI`
    /// kind this commits that kind.
    pub fn set_iri(&mut self, iri: Iri) {
        self.slot = match self.def.priority(&Kind::AnyUri) {
            Some(kind) => Slot::Value {
                kind,
                value: KindValue::Uri(iri),
            },
            None => Slot::Iri(iri),
        };
    }

    /// Stores an opaque raw value; no kind is committed afterwards.
    pub fn set_unknown(&mut self, raw: Value) {
        self.slot = Slot::Unknown(raw);
    }

    pub fn clear(&mut self) {
        self.slot = Slot::Empty;
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// True if any kind, including a reference identifier, is committed.
    pub fn is_any(&self) -> bool {
        matches!(self.slot, Slot::Value { .. } | Slot::Iri(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.slot, Slot::Unknown(_))
    }

    pub fn is_kind(&self, kind: &Kind) -> bool {
        match self.slot {
            Slot::Value { kind: committed, .. } => self.def.priority(kind) == Some(committed),
            _ => false,
        }
    }

    pub fn is_iri(&self) -> bool {
        self.iri().is_some()
    }

    pub fn kind_index(&self) -> KindIndex {
        match self.slot {
            Slot::Value { kind, .. } => KindIndex::Kind(kind),
            Slot::Iri(_) => KindIndex::Iri,
            Slot::Empty | Slot::Unknown(_) => KindIndex::None,
        }
    }

    /// The committed kind, if it is one of the property's candidates.
    pub fn kind(&self) -> Option<&'static Kind> {
        match self.slot {
            Slot::Value { kind, .. } => self.def.kinds.get(kind),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&KindValue> {
        match &self.slot {
            Slot::Value { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut KindValue> {
        match &mut self.slot {
            Slot::Value { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The reference identifier, whether held as the fallback kind or as
    /// an `xsd:anyURI` value.
    pub fn iri(&self) -> Option<&Iri> {
        match &self.slot {
            Slot::Iri(iri) => Some(iri),
            Slot::Value {
                value: KindValue::Uri(iri),
                ..
            } => Some(iri),
            _ => None,
        }
    }

    pub fn unknown(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self.value()? {
            KindValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_lang_string(&self) -> Option<&BTreeMap<String, String>> {
        match self.value()? {
            KindValue::LangString(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_uri(&self) -> Option<&Iri> {
        match self.value()? {
            KindValue::Uri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value()? {
            KindValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_non_negative_integer(&self) -> Option<u64> {
        match self.value()? {
            KindValue::NonNegativeInteger(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.value()? {
            KindValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<OffsetDateTime> {
        match self.value()? {
            KindValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        self.value().and_then(KindValue::as_entity)
    }

    pub fn as_entity_mut(&mut self) -> Option<&mut Entity> {
        match self.value_mut()? {
            KindValue::Entity(entity) => Some(&mut **entity),
            _ => None,
        }
    }

    pub(crate) fn is_lang_string(&self) -> bool {
        matches!(
            self.slot,
            Slot::Value {
                value: KindValue::LangString(_),
                ..
            }
        )
    }

    // ── Output ──────────────────────────────────────────────────────

    /// Raw form of the committed value, the stored unknown value, or `None`
    /// for an empty cell.
    pub fn serialize(&self) -> Result<Option<Value>, CodecError> {
        self.serialize_with(&CodecConfig::default())
    }

    pub fn serialize_with(&self, config: &CodecConfig) -> Result<Option<Value>, CodecError> {
        match &self.slot {
            Slot::Empty => Ok(None),
            Slot::Value { value, .. } => value.serialize(self.def.name, config).map(Some),
            Slot::Iri(iri) => Ok(Some(Value::String(iri.as_str().to_string()))),
            Slot::Unknown(raw) => Ok(Some(raw.clone())),
        }
    }

    /// Namespaces and prefixes this cell needs in a document context.
    pub fn context(&self) -> AliasTable {
        let mut table = AliasTable::new();
        if !self.def.keyword {
            table.insert(self.def.namespace, self.alias.clone());
        }
        if let Some(entity) = self.as_entity() {
            table.merge(&entity.context());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CODE, HOMEPAGE, OWNER, TEST_NS, THING};
    use serde_json::json;

    fn all_kinds(cell: &PropertyCell) -> Vec<bool> {
        cell.def().kinds.iter().map(|k| cell.is_kind(k)).collect()
    }

    #[test]
    fn test_set_is_mutually_exclusive() {
        let mut cell = PropertyCell::new(&CODE);
        cell.set(4u64).unwrap();
        assert_eq!(all_kinds(&cell), vec![true, false, false]);
        cell.set(4.25).unwrap();
        assert_eq!(all_kinds(&cell), vec![false, true, false]);
        assert_eq!(cell.as_non_negative_integer(), None);
        assert_eq!(cell.as_float(), Some(4.25));
        cell.set("four").unwrap();
        assert_eq!(all_kinds(&cell), vec![false, false, true]);
        assert_eq!(cell.as_text(), Some("four"));
    }

    #[test]
    fn test_unsupported_kind_is_rejected() {
        let mut cell = PropertyCell::new(&CODE);
        cell.set(1u64).unwrap();
        let err = cell.set(true).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedKind { .. }));
        // The previous value survives a rejected set.
        assert_eq!(cell.as_non_negative_integer(), Some(1));
    }

    #[test]
    fn test_set_iri_commits_any_uri_kind() {
        let mut cell = PropertyCell::new(&HOMEPAGE);
        cell.set_iri(Iri::parse("https://example.org/").unwrap());
        assert!(cell.is_kind(&Kind::AnyUri));
        assert!(cell.is_iri());
        assert_eq!(cell.kind_index(), KindIndex::Kind(0));
        assert_eq!(cell.as_uri().map(Iri::as_str), Some("https://example.org/"));
    }

    #[test]
    fn test_set_iri_without_uri_kind_uses_identifier_slot() {
        let mut cell = PropertyCell::new(&OWNER);
        cell.set_iri(Iri::parse("https://example.org/people/1").unwrap());
        assert!(cell.is_iri());
        assert!(cell.is_any());
        assert_eq!(cell.kind_index(), KindIndex::Iri);
        assert!(cell.def().kinds.iter().all(|k| !cell.is_kind(k)));
        assert!(cell.value().is_none());
    }

    #[test]
    fn test_unknown_and_clear() {
        let mut cell = PropertyCell::new(&OWNER);
        cell.set_unknown(json!([1, 2]));
        assert!(cell.is_unknown());
        assert!(!cell.is_any());
        assert_eq!(cell.kind_index(), KindIndex::None);
        assert_eq!(cell.serialize().unwrap(), Some(json!([1, 2])));
        cell.clear();
        assert!(cell.is_empty());
        assert_eq!(cell.serialize().unwrap(), None);
    }

    #[test]
    fn test_serialize_delegates_to_kind() {
        let mut cell = PropertyCell::new(&OWNER);
        let mut thing = Entity::new(&THING);
        thing.set("count", 2u64).unwrap();
        cell.set(thing).unwrap();
        assert_eq!(
            cell.serialize().unwrap(),
            Some(json!({"type": "Thing", "count": 2}))
        );
    }

    #[test]
    fn test_context_includes_nested_entities() {
        let mut cell = PropertyCell::new(&OWNER);
        cell.set_alias("t");
        cell.set(Entity::new(&THING)).unwrap();
        let context = cell.context();
        assert_eq!(context.get(TEST_NS), Some("t"));
    }
}
