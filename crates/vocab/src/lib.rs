//! folio-vocab: static vocabulary tables for folio-core.
//!
//! [`deserialize()`] and [`serialize()`] read and write ActivityStreams
//! documents with the default [`CodecConfig`].

pub mod activitystreams;

pub use activitystreams::{ACTIVITYSTREAMS, AS_NS, TOOT_NS};

use folio_core::{CodecConfig, CodecError, Entity};
use serde_json::Value;

/// Reads an ActivityStreams document of any known type.
pub fn deserialize(document: &Value) -> Result<Entity, CodecError> {
    folio_core::from_document(&ACTIVITYSTREAMS, document)
}

pub fn deserialize_with(document: &Value, config: &CodecConfig) -> Result<Entity, CodecError> {
    folio_core::from_document_with(&ACTIVITYSTREAMS, document, config)
}

/// Writes `entity` as a document, including its `@context`.
pub fn serialize(entity: &Entity) -> Result<Value, CodecError> {
    folio_core::to_document(entity)
}

pub fn serialize_with(entity: &Entity, config: &CodecConfig) -> Result<Value, CodecError> {
    folio_core::to_document_with(entity, config)
}
