//! A declared property's value on an entity, in either shape.

use serde_json::{Map, Value};
use tracing::debug;

use crate::alias::{qualify, strip_alias, AliasTable};
use crate::cell::PropertyCell;
use crate::config::CodecConfig;
use crate::entity::TYPE_KEY;
use crate::error::CodecError;
use crate::list::PropertyList;
use crate::registry::{Channel, ParseContext};
use crate::schema::PropertyDef;

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Functional(PropertyCell),
    Repeatable(PropertyList),
}

impl Property {
    /// An unset property of the shape `def` declares.
    pub fn empty(def: &'static PropertyDef) -> Self {
        if def.functional {
            Property::Functional(PropertyCell::new(def))
        } else {
            Property::Repeatable(PropertyList::new(def))
        }
    }

    pub fn def(&self) -> &'static PropertyDef {
        match self {
            Property::Functional(cell) => cell.def(),
            Property::Repeatable(list) => list.def(),
        }
    }

    pub fn as_cell(&self) -> Option<&PropertyCell> {
        match self {
            Property::Functional(cell) => Some(cell),
            Property::Repeatable(_) => None,
        }
    }

    pub fn as_cell_mut(&mut self) -> Option<&mut PropertyCell> {
        match self {
            Property::Functional(cell) => Some(cell),
            Property::Repeatable(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&PropertyList> {
        match self {
            Property::Repeatable(list) => Some(list),
            Property::Functional(_) => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut PropertyList> {
        match self {
            Property::Repeatable(list) => Some(list),
            Property::Functional(_) => None,
        }
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        match self {
            Property::Functional(cell) => cell.set_alias(alias),
            Property::Repeatable(list) => list.set_alias(alias),
        }
    }

    pub fn context(&self) -> AliasTable {
        match self {
            Property::Functional(cell) => cell.context(),
            Property::Repeatable(list) => list.context(),
        }
    }

    /// Sets `alias` on every cell holding a bare type name. The `type` key
    /// itself stays unprefixed.
    pub(crate) fn set_type_name_alias(&mut self, alias: &str) {
        let retag = |cell: &mut PropertyCell| {
            if cell.as_text().is_some() {
                cell.set_alias(alias);
            }
        };
        match self {
            Property::Functional(cell) => retag(cell),
            Property::Repeatable(list) => list.iter_mut().for_each(retag),
        }
    }

    /// Reads `def` out of an entity's raw map. `Ok(None)` when neither the
    /// property's key nor its language-map key is present.
    pub(crate) fn deserialize(
        def: &'static PropertyDef,
        map: &Map<String, Value>,
        ctx: &ParseContext<'_>,
    ) -> Result<Option<Property>, CodecError> {
        let alias = ctx.alias_for(def);
        let plain = lookup(map, alias, def.name);
        let language_map = def
            .language_map
            .and_then(|map_name| lookup(map, alias, map_name));

        if def.functional {
            let cell = match (plain, language_map) {
                (Some(raw), dropped) => {
                    if dropped.is_some() {
                        debug!(
                            property = def.name,
                            "functional value present, ignoring its language map"
                        );
                    }
                    read_plain(def, raw, ctx)?
                }
                (None, Some(raw)) => PropertyCell::deserialize(def, raw, Channel::LanguageMap, ctx)?,
                (None, None) => return Ok(None),
            };
            return Ok(Some(Property::Functional(cell)));
        }

        if plain.is_none() && language_map.is_none() {
            return Ok(None);
        }
        let mut cells = Vec::new();
        match plain {
            Some(Value::Array(items)) => {
                for item in items {
                    cells.push(read_plain(def, item, ctx)?);
                }
            }
            Some(raw) => cells.push(read_plain(def, raw, ctx)?),
            None => {}
        }
        if let Some(raw) = language_map {
            cells.push(PropertyCell::deserialize(def, raw, Channel::LanguageMap, ctx)?);
        }
        let mut list = PropertyList::from_cells(def, alias, cells);
        if matches!(plain, Some(Value::Array(items)) if items.is_empty()) {
            list.mark_explicit_empty();
        }
        Ok(Some(Property::Repeatable(list)))
    }

    /// Writes this property's wire keys into `out`, replacing whatever was
    /// there under the same keys.
    pub(crate) fn write(
        &self,
        out: &mut Map<String, Value>,
        config: &CodecConfig,
    ) -> Result<(), CodecError> {
        match self {
            Property::Functional(cell) => {
                let Some(raw) = cell.serialize_with(config)? else {
                    return Ok(());
                };
                out.insert(wire_key_for(cell), qualify_type_name(cell, raw));
            }
            Property::Repeatable(list) => {
                let def = list.def();
                let mut plain = Vec::new();
                let mut language_map = Map::new();
                for cell in list {
                    let Some(raw) = cell.serialize_with(config)? else {
                        continue;
                    };
                    let raw = qualify_type_name(cell, raw);
                    match (cell.is_lang_string() && def.language_map.is_some(), raw) {
                        (true, Value::Object(entries)) => {
                            for (tag, text) in entries {
                                language_map.entry(tag).or_insert(text);
                            }
                        }
                        (_, raw) => plain.push(raw),
                    }
                }

                let has_map = !language_map.is_empty();
                if let (true, Some(map_name)) = (has_map, def.language_map) {
                    out.insert(qualify(list.alias(), map_name), Value::Object(language_map));
                }
                let key = qualify(list.alias(), def.name);
                match plain.len() {
                    0 if has_map && !list.is_explicit_empty() => {}
                    1 if config.collapse_singletons => {
                        if let Some(only) = plain.pop() {
                            out.insert(key, only);
                        }
                    }
                    _ => {
                        out.insert(key, Value::Array(plain));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The value under `name`, trying the prefixed key before the bare one.
fn lookup<'m>(map: &'m Map<String, Value>, alias: &str, name: &str) -> Option<&'m Value> {
    if !alias.is_empty() {
        if let Some(raw) = map.get(&qualify(alias, name)) {
            return Some(raw);
        }
    }
    map.get(name)
}

/// Reads one plain value. A `type` value that is a prefixed vocabulary type
/// name is stored bare, with the prefix kept as the cell's alias.
fn read_plain(
    def: &'static PropertyDef,
    raw: &Value,
    ctx: &ParseContext<'_>,
) -> Result<PropertyCell, CodecError> {
    if def.keyword && def.name == TYPE_KEY {
        if let Some(name) = raw.as_str() {
            let prefix = ctx.aliases.alias(ctx.vocabulary.namespace);
            let bare = strip_alias(prefix, name);
            if bare != name && ctx.vocabulary.type_named(bare).is_some() {
                let bare = Value::String(bare.to_string());
                let mut cell = PropertyCell::deserialize(def, &bare, Channel::Plain, ctx)?;
                cell.set_alias(prefix);
                return Ok(cell);
            }
        }
    }
    PropertyCell::deserialize(def, raw, Channel::Plain, ctx)
}

/// Re-prefixes a bare type name carried by a keyword cell.
fn qualify_type_name(cell: &PropertyCell, raw: Value) -> Value {
    let def = cell.def();
    match (def.keyword && def.name == TYPE_KEY, cell.as_text()) {
        (true, Some(name)) if !cell.alias().is_empty() => Value::String(qualify(cell.alias(), name)),
        _ => raw,
    }
}

fn wire_key_for(cell: &PropertyCell) -> String {
    let def = cell.def();
    let alias = if def.keyword { "" } else { cell.alias() };
    match def.language_map {
        Some(map_name) if cell.is_lang_string() => qualify(alias, map_name),
        _ => qualify(alias, def.name),
    }
}

/// Every wire key that belongs to `def` under `alias`.
pub(crate) fn known_keys(def: &PropertyDef, alias: &str) -> Vec<String> {
    let mut keys = Vec::with_capacity(4);
    for name in std::iter::once(def.name).chain(def.language_map) {
        keys.push(name.to_string());
        if !alias.is_empty() {
            keys.push(qualify(alias, name));
        }
    }
    keys
}
