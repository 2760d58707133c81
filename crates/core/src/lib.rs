#![allow(clippy::result_large_err)]
//! folio-core: schema-bound codec for linked-data vocabulary documents.
//!
//! Turns loosely-typed JSON-LD documents into typed entities and back. A
//! vocabulary is described by static tables ([`Vocabulary`], [`TypeDef`],
//! [`PropertyDef`]); the codec walks those tables and never hard-codes a
//! type or property name.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Entity`] -- a typed entity with its extension bag
//! - [`Property`], [`PropertyCell`], [`PropertyList`] -- property values
//! - [`Kind`], [`KindValue`] -- candidate kinds and parsed values
//! - [`AliasTable`] -- namespace prefixes
//! - [`CanonicalOrd`], [`Canonical`] -- the codec's own total order
//! - [`CodecConfig`] -- codec options, loadable from TOML
//! - [`CodecError`] -- codec error type
//!
//! [`from_document()`] and [`to_document()`] handle whole documents,
//! including type resolution and the `@context` key.

pub mod alias;
pub mod cell;
pub mod compare;
pub mod config;
pub mod document;
pub mod entity;
pub mod error;
pub mod iri;
pub mod kind;
pub mod list;
pub mod property;
pub mod registry;
pub mod schema;

#[cfg(test)]
mod testing;

// ── Convenience re-exports: key types ────────────────────────────────

pub use alias::AliasTable;
pub use cell::PropertyCell;
pub use compare::{Canonical, CanonicalOrd};
pub use config::CodecConfig;
pub use entity::Entity;
pub use error::CodecError;
pub use iri::Iri;
pub use kind::{Kind, KindValue};
pub use list::{Cursor, PropertyList};
pub use property::Property;
pub use registry::{KindIndex, ParseContext};
pub use schema::{PropertyDef, TypeDef, Vocabulary};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use document::{from_document, from_document_with, to_document, to_document_with};
