//! Value kinds and their primitive parsers and serializers.
//!
//! A [`Kind`] names one admissible value type for a property; a
//! [`KindValue`] is a parsed value of some kind. The primitive parsers follow
//! one contract: they return `None` for raw input that is not of their kind
//! and never fail on it, so the registry can try candidates in order.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::CodecConfig;
use crate::entity::Entity;
use crate::error::CodecError;
use crate::iri::Iri;
use crate::registry::ParseContext;

/// One candidate value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `xsd:string`
    String,
    /// `rdf:langString`, a language tag → text map.
    LangString,
    /// `xsd:anyURI`
    AnyUri,
    /// `xsd:boolean`
    Boolean,
    /// `xsd:nonNegativeInteger`
    NonNegativeInteger,
    /// `xsd:float`
    Float,
    /// `xsd:dateTime`, RFC 3339.
    DateTime,
    /// A nested entity whose `type` must name exactly this vocabulary type.
    Entity(&'static str),
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "xsd:string",
            Kind::LangString => "rdf:langString",
            Kind::AnyUri => "xsd:anyURI",
            Kind::Boolean => "xsd:boolean",
            Kind::NonNegativeInteger => "xsd:nonNegativeInteger",
            Kind::Float => "xsd:float",
            Kind::DateTime => "xsd:dateTime",
            Kind::Entity(name) => *name,
        }
    }

    /// Whether `value` is a value of this kind.
    pub fn accepts(&self, value: &KindValue) -> bool {
        match (self, value) {
            (Kind::String, KindValue::Text(_))
            | (Kind::LangString, KindValue::LangString(_))
            | (Kind::AnyUri, KindValue::Uri(_))
            | (Kind::Boolean, KindValue::Boolean(_))
            | (Kind::NonNegativeInteger, KindValue::NonNegativeInteger(_))
            | (Kind::Float, KindValue::Float(_))
            | (Kind::DateTime, KindValue::DateTime(_)) => true,
            (Kind::Entity(name), KindValue::Entity(entity)) => entity.type_name() == *name,
            _ => false,
        }
    }

    /// Tries to read `raw` as this kind.
    ///
    /// `Ok(None)` means "not this kind". An error is only returned for a
    /// failure unrelated to kind selection, such as a nested candidate that
    /// names a type missing from the vocabulary.
    pub(crate) fn parse(
        &self,
        raw: &Value,
        ctx: &ParseContext<'_>,
    ) -> Result<Option<KindValue>, CodecError> {
        let parsed = match self {
            Kind::String => parse_string(raw).map(KindValue::Text),
            Kind::LangString => parse_lang_string(raw).map(KindValue::LangString),
            Kind::AnyUri => parse_any_uri(raw).map(KindValue::Uri),
            Kind::Boolean => parse_boolean(raw).map(KindValue::Boolean),
            Kind::NonNegativeInteger => {
                parse_non_negative_integer(raw).map(KindValue::NonNegativeInteger)
            }
            Kind::Float => parse_float(raw).map(KindValue::Float),
            Kind::DateTime => parse_date_time(raw).map(KindValue::DateTime),
            Kind::Entity(name) => {
                return parse_entity(name, raw, ctx);
            }
        };
        Ok(parsed)
    }
}

/// A parsed value of one kind.
#[derive(Debug, Clone, PartialEq)]
pub enum KindValue {
    Text(String),
    LangString(BTreeMap<String, String>),
    Uri(Iri),
    Boolean(bool),
    NonNegativeInteger(u64),
    Float(f64),
    DateTime(OffsetDateTime),
    Entity(Box<Entity>),
}

impl KindValue {
    /// Human-readable kind name for error messages.
    pub fn type_name(&self) -> &str {
        match self {
            KindValue::Text(_) => "xsd:string",
            KindValue::LangString(_) => "rdf:langString",
            KindValue::Uri(_) => "xsd:anyURI",
            KindValue::Boolean(_) => "xsd:boolean",
            KindValue::NonNegativeInteger(_) => "xsd:nonNegativeInteger",
            KindValue::Float(_) => "xsd:float",
            KindValue::DateTime(_) => "xsd:dateTime",
            KindValue::Entity(entity) => entity.type_name(),
        }
    }

    /// Converts back to the raw wire form.
    pub fn serialize(&self, property: &str, config: &CodecConfig) -> Result<Value, CodecError> {
        match self {
            KindValue::Text(s) => Ok(Value::String(s.clone())),
            KindValue::LangString(map) => Ok(serialize_lang_string(map)),
            KindValue::Uri(iri) => Ok(Value::String(iri.as_str().to_string())),
            KindValue::Boolean(b) => Ok(Value::Bool(*b)),
            KindValue::NonNegativeInteger(n) => Ok(Value::from(*n)),
            KindValue::Float(f) => float_number(*f)
                .map(Value::Number)
                .ok_or_else(|| CodecError::MalformedValue {
                    property: property.to_string(),
                    kind: "xsd:float",
                    message: format!("{} has no JSON representation", f),
                }),
            KindValue::DateTime(dt) => {
                dt.format(&Rfc3339)
                    .map(Value::String)
                    .map_err(|e| CodecError::MalformedValue {
                        property: property.to_string(),
                        kind: "xsd:dateTime",
                        message: e.to_string(),
                    })
            }
            KindValue::Entity(entity) => entity.serialize_with(config).map(Value::Object),
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            KindValue::Entity(entity) => Some(&**entity),
            _ => None,
        }
    }
}

impl From<&str> for KindValue {
    fn from(s: &str) -> Self {
        KindValue::Text(s.to_string())
    }
}

impl From<String> for KindValue {
    fn from(s: String) -> Self {
        KindValue::Text(s)
    }
}

impl From<Iri> for KindValue {
    fn from(iri: Iri) -> Self {
        KindValue::Uri(iri)
    }
}

impl From<bool> for KindValue {
    fn from(b: bool) -> Self {
        KindValue::Boolean(b)
    }
}

impl From<u64> for KindValue {
    fn from(n: u64) -> Self {
        KindValue::NonNegativeInteger(n)
    }
}

impl From<f64> for KindValue {
    fn from(f: f64) -> Self {
        KindValue::Float(f)
    }
}

impl From<OffsetDateTime> for KindValue {
    fn from(dt: OffsetDateTime) -> Self {
        KindValue::DateTime(dt)
    }
}

impl From<Entity> for KindValue {
    fn from(entity: Entity) -> Self {
        KindValue::Entity(Box::new(entity))
    }
}

impl From<BTreeMap<String, String>> for KindValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        KindValue::LangString(map)
    }
}

// ── Primitive parsers ───────────────────────────────────────────────

pub fn parse_string(raw: &Value) -> Option<String> {
    raw.as_str().map(|s| s.to_string())
}

/// Every value of the object must be a string.
pub fn parse_lang_string(raw: &Value) -> Option<BTreeMap<String, String>> {
    raw.as_object()?
        .iter()
        .map(|(tag, text)| text.as_str().map(|t| (tag.clone(), t.to_string())))
        .collect()
}

pub fn parse_any_uri(raw: &Value) -> Option<Iri> {
    raw.as_str().and_then(Iri::parse)
}

pub fn parse_boolean(raw: &Value) -> Option<bool> {
    raw.as_bool()
}

pub fn parse_non_negative_integer(raw: &Value) -> Option<u64> {
    raw.as_u64()
}

pub fn parse_float(raw: &Value) -> Option<f64> {
    raw.as_f64()
}

pub fn parse_date_time(raw: &Value) -> Option<OffsetDateTime> {
    raw.as_str()
        .and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
}

fn parse_entity(
    name: &str,
    raw: &Value,
    ctx: &ParseContext<'_>,
) -> Result<Option<KindValue>, CodecError> {
    let Some(map) = raw.as_object() else {
        return Ok(None);
    };
    let def = ctx
        .vocabulary
        .type_named(name)
        .ok_or_else(|| CodecError::UnknownType {
            vocabulary: ctx.vocabulary.name.to_string(),
            name: name.to_string(),
        })?;
    match Entity::deserialize(def, map, ctx) {
        Ok(entity) => Ok(Some(KindValue::Entity(Box::new(entity)))),
        Err(e) if e.is_type_rejection() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Integral floats inside the `i64` range are written without a fraction,
/// so `1` reads back as `1` rather than `1.0`.
fn float_number(f: f64) -> Option<serde_json::Number> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        return Some(serde_json::Number::from(f as i64));
    }
    serde_json::Number::from_f64(f)
}

fn serialize_lang_string(map: &BTreeMap<String, String>) -> Value {
    let object: Map<String, Value> = map
        .iter()
        .map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
        .collect();
    Value::Object(object)
}
