//! Whole documents: an entity plus its JSON-LD `@context`.

use serde_json::Value;
use tracing::debug;

use crate::alias::AliasTable;
use crate::config::CodecConfig;
use crate::entity::{type_names, Entity, TYPE_KEY};
use crate::error::{json_type_name, CodecError};
use crate::registry::ParseContext;
use crate::schema::Vocabulary;

pub const CONTEXT_KEY: &str = "@context";

pub fn from_document(vocabulary: &Vocabulary, document: &Value) -> Result<Entity, CodecError> {
    from_document_with(vocabulary, document, &CodecConfig::default())
}

/// Reads a document whose concrete type is not known in advance.
///
/// Prefixes come from the document's `@context` first and from
/// `config.aliases` for namespaces the context does not bind. The entity's
/// type is the first `type` value that names a vocabulary type.
pub fn from_document_with(
    vocabulary: &Vocabulary,
    document: &Value,
    config: &CodecConfig,
) -> Result<Entity, CodecError> {
    let Value::Object(map) = document else {
        return Err(CodecError::MalformedDocument(format!(
            "expected an object at the document root, found {}",
            json_type_name(document)
        )));
    };

    let mut aliases = map
        .get(CONTEXT_KEY)
        .map(AliasTable::from_context)
        .unwrap_or_default();
    aliases.merge(&config.alias_table());

    let raw_type = map.get(TYPE_KEY).ok_or_else(|| CodecError::MissingType {
        expected: vocabulary.name.to_string(),
    })?;
    let found = type_names(raw_type).map_err(|found| CodecError::MalformedType {
        expected: vocabulary.name.to_string(),
        found,
    })?;
    let def = found
        .iter()
        .find_map(|name| vocabulary.type_named(aliases.strip(vocabulary.namespace, name)))
        .ok_or_else(|| CodecError::UnresolvedType {
            found: found.clone(),
        })?;
    debug!(vocabulary = vocabulary.name, type_name = def.name, "resolved document type");

    let mut body = map.clone();
    body.remove(CONTEXT_KEY);
    let ctx = ParseContext::new(vocabulary, &aliases);
    Entity::deserialize(def, &body, &ctx)
}

pub fn to_document(entity: &Entity) -> Result<Value, CodecError> {
    to_document_with(entity, &CodecConfig::default())
}

/// Writes `entity` as a document, with an `@context` built from the
/// namespaces it uses when `config.emit_context` is set.
pub fn to_document_with(entity: &Entity, config: &CodecConfig) -> Result<Value, CodecError> {
    let mut out = entity.serialize_with(config)?;
    if config.emit_context {
        if let Some(context) = entity.context().to_context() {
            out.insert(CONTEXT_KEY.to_string(), context);
        }
    }
    Ok(Value::Object(out))
}
