//! Typed entities: one slot per declared property plus an extension bag.
//!
//! [`Entity::deserialize`] checks the `type` tag, reads every declared
//! property in declaration order and keeps every other key verbatim.
//! [`Entity::serialize_with`] writes the tag first, then the declared
//! properties, then whichever extension keys are still free.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::alias::{qualify, AliasTable};
use crate::cell::PropertyCell;
use crate::config::CodecConfig;
use crate::error::{json_type_name, CodecError};
use crate::iri::Iri;
use crate::kind::KindValue;
use crate::list::PropertyList;
use crate::property::{known_keys, Property};
use crate::registry::ParseContext;
use crate::schema::{PropertyDef, TypeDef};

/// JSON-LD keyword carrying an entity's type names.
pub const TYPE_KEY: &str = "type";

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    def: &'static TypeDef,
    alias: String,
    /// Parallel to `def.properties`.
    properties: Vec<Option<Property>>,
    extensions: Map<String, Value>,
}

impl Entity {
    /// An entity of type `def` with only its `type` property filled in.
    pub fn new(def: &'static TypeDef) -> Self {
        let mut entity = Entity {
            def,
            alias: String::new(),
            properties: def.properties.iter().map(|_| None).collect(),
            extensions: Map::new(),
        };
        if let Some(pos) = def.position(TYPE_KEY) {
            let type_def = def.properties[pos];
            let mut cell = PropertyCell::new(type_def);
            if cell.set(KindValue::Text(def.name.to_string())).is_ok() {
                entity.properties[pos] = Some(if type_def.functional {
                    Property::Functional(cell)
                } else {
                    Property::Repeatable(PropertyList::from_cells(type_def, "", vec![cell]))
                });
            }
        }
        entity
    }

    pub fn type_def(&self) -> &'static TypeDef {
        self.def
    }

    pub fn type_name(&self) -> &'static str {
        self.def.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Sets the prefix for the entity's own namespace, including every
    /// non-keyword property in that namespace and the bare names held by
    /// `type`.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
        for property in self.properties.iter_mut().flatten() {
            let def = property.def();
            if def.keyword {
                if def.name == TYPE_KEY {
                    property.set_type_name_alias(&self.alias);
                }
            } else if def.namespace == self.def.namespace {
                property.set_alias(self.alias.clone());
            }
        }
    }

    /// Default prefix for a new value of `def`.
    fn alias_for(&self, def: &PropertyDef) -> &str {
        if !def.keyword && def.namespace == self.def.namespace {
            &self.alias
        } else {
            ""
        }
    }

    // ── Deserialization ─────────────────────────────────────────────

    /// Reads an entity of type `def` from a raw map.
    ///
    /// Fails on a missing, malformed or mismatched `type` tag, and on the
    /// first property that fails for a reason other than kind selection.
    pub fn deserialize(
        def: &'static TypeDef,
        map: &Map<String, Value>,
        ctx: &ParseContext<'_>,
    ) -> Result<Self, CodecError> {
        check_type(def, map, ctx.aliases)?;

        let mut properties = Vec::with_capacity(def.properties.len());
        let mut known: BTreeSet<String> = BTreeSet::new();
        known.insert(TYPE_KEY.to_string());
        for &property_def in def.properties {
            known.extend(known_keys(property_def, ctx.alias_for(property_def)));
            properties.push(Property::deserialize(property_def, map, ctx)?);
        }

        let extensions: Map<String, Value> = map
            .iter()
            .filter(|(key, _)| !known.contains(key.as_str()))
            .map(|(key, raw)| (key.clone(), raw.clone()))
            .collect();
        if !extensions.is_empty() {
            debug!(
                type_name = def.name,
                count = extensions.len(),
                "captured extension keys"
            );
        }

        Ok(Entity {
            def,
            alias: ctx.aliases.alias(def.namespace).to_string(),
            properties,
            extensions,
        })
    }

    // ── Serialization ───────────────────────────────────────────────

    pub fn serialize(&self) -> Result<Map<String, Value>, CodecError> {
        self.serialize_with(&CodecConfig::default())
    }

    pub fn serialize_with(&self, config: &CodecConfig) -> Result<Map<String, Value>, CodecError> {
        let mut out = Map::new();
        out.insert(
            TYPE_KEY.to_string(),
            Value::String(qualify(&self.alias, self.def.name)),
        );
        for property in self.properties.iter().flatten() {
            property.write(&mut out, config)?;
        }
        for (key, raw) in &self.extensions {
            if out.contains_key(key) {
                trace!(type_name = self.def.name, key = key.as_str(), "dropped colliding extension key");
                continue;
            }
            out.insert(key.clone(), raw.clone());
        }
        Ok(out)
    }

    // ── Property access ─────────────────────────────────────────────

    fn position(&self, name: &str) -> Result<usize, CodecError> {
        self.def
            .position(name)
            .ok_or_else(|| CodecError::UnknownProperty {
                type_name: self.def.name.to_string(),
                property: name.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        let pos = self.def.position(name)?;
        self.properties[pos].as_ref()
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        let pos = self.def.position(name)?;
        self.properties[pos].as_mut()
    }

    /// The value of a set functional property.
    pub fn cell(&self, name: &str) -> Option<&PropertyCell> {
        self.get(name).and_then(Property::as_cell)
    }

    /// The values of a set repeatable property.
    pub fn list(&self, name: &str) -> Option<&PropertyList> {
        self.get(name).and_then(Property::as_list)
    }

    /// Every set property, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().flatten()
    }

    /// The slot for `name`, created empty if unset, after checking that
    /// the property has the requested shape.
    fn slot(&mut self, name: &str, functional: bool) -> Result<&mut Property, CodecError> {
        let pos = self.position(name)?;
        let def = self.def.properties[pos];
        if def.functional != functional {
            return Err(CodecError::PropertyShape {
                property: name.to_string(),
                actual: def.shape(),
                requested: if functional { "functional" } else { "repeatable" },
            });
        }
        let alias = self.alias_for(def).to_string();
        Ok(self.properties[pos].get_or_insert_with(|| {
            let mut property = Property::empty(def);
            property.set_alias(alias);
            property
        }))
    }

    /// Sets a functional property, replacing its value.
    pub fn set(&mut self, name: &str, value: impl Into<KindValue>) -> Result<(), CodecError> {
        match self.slot(name, true)? {
            Property::Functional(cell) => cell.set(value),
            Property::Repeatable(_) => Ok(()),
        }
    }

    pub fn set_iri(&mut self, name: &str, iri: Iri) -> Result<(), CodecError> {
        if let Property::Functional(cell) = self.slot(name, true)? {
            cell.set_iri(iri);
        }
        Ok(())
    }

    /// Appends to a repeatable property.
    pub fn append(&mut self, name: &str, value: impl Into<KindValue>) -> Result<(), CodecError> {
        match self.slot(name, false)? {
            Property::Repeatable(list) => list.append(value),
            Property::Functional(_) => Ok(()),
        }
    }

    pub fn append_iri(&mut self, name: &str, iri: Iri) -> Result<(), CodecError> {
        if let Property::Repeatable(list) = self.slot(name, false)? {
            list.append_iri(iri);
        }
        Ok(())
    }

    /// Installs a whole property value, returning the previous one.
    pub fn insert_property(&mut self, property: Property) -> Result<Option<Property>, CodecError> {
        let def = property.def();
        let pos = self.position(def.name)?;
        if self.def.properties[pos] != def {
            return Err(CodecError::UnknownProperty {
                type_name: self.def.name.to_string(),
                property: def.name.to_string(),
            });
        }
        Ok(self.properties[pos].replace(property))
    }

    /// Unsets a property and returns its value.
    pub fn take(&mut self, name: &str) -> Option<Property> {
        let pos = self.def.position(name)?;
        self.properties[pos].take()
    }

    // ── Extensions ──────────────────────────────────────────────────

    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Direct access to the extension bag. Keys that collide with a known
    /// property are kept but never serialized.
    pub fn extensions_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extensions
    }

    /// Adds an extension entry, refusing keys the type already owns.
    pub fn insert_extension(
        &mut self,
        key: impl Into<String>,
        raw: Value,
    ) -> Result<Option<Value>, CodecError> {
        let key = key.into();
        let owned = key == TYPE_KEY
            || self
                .def
                .properties
                .iter()
                .any(|def| known_keys(def, self.alias_for(def)).contains(&key));
        if owned {
            return Err(CodecError::KnownPropertyKey {
                type_name: self.def.name.to_string(),
                key,
            });
        }
        Ok(self.extensions.insert(key, raw))
    }

    // ── Context and hierarchy ───────────────────────────────────────

    /// Namespace → prefix entries needed to write this entity, including
    /// those of nested entities.
    pub fn context(&self) -> AliasTable {
        let mut table = AliasTable::new().with(self.def.namespace, self.alias.clone());
        for property in self.properties() {
            table.merge(&property.context());
        }
        table
    }

    /// Whether this entity's type descends from `other`.
    pub fn is_extending(&self, other: &str) -> bool {
        self.def.extends(other)
    }

    /// Whether this entity's type table lists `other` as disjoint. Use
    /// [`Vocabulary::disjoint`](crate::schema::Vocabulary::disjoint) for
    /// the symmetric answer.
    pub fn is_disjoint_with(&self, other: &str) -> bool {
        self.def.is_disjoint_with(other)
    }
}

/// Verifies the bare `type` key names `def`.
fn check_type(def: &TypeDef, map: &Map<String, Value>, aliases: &AliasTable) -> Result<(), CodecError> {
    let raw = map.get(TYPE_KEY).ok_or_else(|| CodecError::MissingType {
        expected: def.name.to_string(),
    })?;
    let found = type_names(raw).map_err(|found| CodecError::MalformedType {
        expected: def.name.to_string(),
        found,
    })?;
    if found
        .iter()
        .any(|name| aliases.strip(def.namespace, name) == def.name)
    {
        Ok(())
    } else {
        Err(CodecError::TypeMismatch {
            expected: def.name.to_string(),
            found,
        })
    }
}

/// The type names a `type` value carries, or the JSON type of the
/// offending value.
pub(crate) fn type_names(raw: &Value) -> Result<Vec<String>, &'static str> {
    match raw {
        Value::String(name) => Ok(vec![name.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or(json_type_name(item)))
            .collect(),
        other => Err(json_type_name(other)),
    }
}
