/// All errors that can be returned by the codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw map carries no `type` key at all.
    #[error("no \"type\" property in map (expected {expected})")]
    MissingType { expected: String },

    /// A `type` key is present but none of its values names the expected type.
    #[error("\"type\" property is not of {expected:?} type: found {found:?}")]
    TypeMismatch {
        expected: String,
        found: Vec<String>,
    },

    /// The `type` value is neither a string nor an array of strings.
    #[error("\"type\" property is unrecognized JSON {found} (expected {expected})")]
    MalformedType {
        expected: String,
        found: &'static str,
    },

    /// A kind parser or serializer rejected a value of its own kind.
    #[error("malformed {kind} value for property '{property}': {message}")]
    MalformedValue {
        property: String,
        kind: &'static str,
        message: String,
    },

    /// Positional access outside a property list's bounds.
    #[error("index {index} out of range for property list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The entity's type does not declare the named property.
    #[error("type {type_name} has no property '{property}'")]
    UnknownProperty { type_name: String, property: String },

    /// A value was set whose kind is not among the property's candidates.
    #[error("property '{property}' does not accept {kind} values")]
    UnsupportedKind { property: String, kind: String },

    /// A functional property was used as a list, or the reverse.
    #[error("property '{property}' is {actual}, not {requested}")]
    PropertyShape {
        property: String,
        actual: &'static str,
        requested: &'static str,
    },

    /// An extension entry would shadow a key the schema already owns.
    #[error("'{key}' is a known property key of type {type_name}")]
    KnownPropertyKey { type_name: String, key: String },

    /// A candidate kind refers to a type the vocabulary does not define.
    #[error("vocabulary {vocabulary} has no type named {name}")]
    UnknownType { vocabulary: String, name: String },

    /// None of a document's `type` values names a vocabulary type.
    #[error("no vocabulary type matches document type {found:?}")]
    UnresolvedType { found: Vec<String> },

    /// The document root is not a key/value map.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The codec configuration could not be parsed.
    #[error("invalid codec config: {0}")]
    Config(#[from] toml::de::Error),
}

impl CodecError {
    /// True for the errors a nested-entity candidate raises when the raw
    /// value simply carries a different (or no) type tag.
    pub fn is_type_rejection(&self) -> bool {
        matches!(
            self,
            CodecError::MissingType { .. }
                | CodecError::TypeMismatch { .. }
                | CodecError::MalformedType { .. }
        )
    }
}

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
