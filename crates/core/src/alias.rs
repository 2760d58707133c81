//! Namespace alias resolution.
//!
//! A document may bind a vocabulary namespace to a short prefix through its
//! JSON-LD `@context`. Keys and type names belonging to that namespace are
//! then written as `prefix:name`. [`AliasTable`] maps namespaces to prefixes
//! and converts between canonical names and wire keys.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde_json::Value;

/// Namespace → prefix table. An empty prefix means "unprefixed".
///
/// Entries are write-once: the first prefix registered for a namespace is
/// kept by every later [`insert`](AliasTable::insert) and
/// [`merge`](AliasTable::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    prefixes: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](AliasTable::insert).
    pub fn with(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.insert(namespace, prefix);
        self
    }

    /// Registers `prefix` for `namespace`. Returns `false` and leaves the
    /// table untouched when the namespace already has an entry.
    pub fn insert(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> bool {
        match self.prefixes.entry(namespace.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(prefix.into());
                true
            }
        }
    }

    /// The registered entry for `namespace`, if any (possibly empty).
    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.prefixes.get(namespace).map(String::as_str)
    }

    /// The prefix used for `namespace`, or `""` when none is registered.
    pub fn alias(&self, namespace: &str) -> &str {
        self.get(namespace).unwrap_or("")
    }

    /// Wire key for `name` in `namespace`.
    pub fn wire_key(&self, namespace: &str, name: &str) -> String {
        qualify(self.alias(namespace), name)
    }

    /// Canonical name for a wire key in `namespace`.
    pub fn strip<'k>(&self, namespace: &str, key: &'k str) -> &'k str {
        strip_alias(self.alias(namespace), key)
    }

    /// Copies every entry of `other` whose namespace is not yet present.
    pub fn merge(&mut self, other: &AliasTable) {
        for (namespace, prefix) in &other.prefixes {
            self.insert(namespace.clone(), prefix.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(ns, prefix)| (ns.as_str(), prefix.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Reads the alias table declared by a JSON-LD `@context` value.
    ///
    /// A string declares a namespace with no prefix; an object declares
    /// `prefix: namespace` pairs (`@`-keywords and non-string term
    /// definitions are skipped); an array merges its elements in order.
    pub fn from_context(context: &Value) -> Self {
        let mut table = AliasTable::new();
        table.absorb_context(context);
        table
    }

    fn absorb_context(&mut self, context: &Value) {
        match context {
            Value::String(namespace) => {
                self.insert(namespace.clone(), "");
            }
            Value::Object(map) => {
                for (prefix, namespace) in map {
                    if prefix.starts_with('@') {
                        continue;
                    }
                    if let Some(namespace) = namespace.as_str() {
                        self.insert(namespace, prefix.clone());
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.absorb_context(item);
                }
            }
            _ => {}
        }
    }

    /// Renders the table as a JSON-LD `@context` value, or `None` if empty.
    pub fn to_context(&self) -> Option<Value> {
        let mut entries: Vec<Value> = self
            .prefixes
            .iter()
            .filter(|(_, prefix)| prefix.is_empty())
            .map(|(namespace, _)| Value::String(namespace.clone()))
            .collect();
        let aliased: serde_json::Map<String, Value> = self
            .prefixes
            .iter()
            .filter(|(_, prefix)| !prefix.is_empty())
            .map(|(namespace, prefix)| (prefix.clone(), Value::String(namespace.clone())))
            .collect();
        if !aliased.is_empty() {
            entries.push(Value::Object(aliased));
        }
        match entries.len() {
            0 => None,
            1 => entries.pop(),
            _ => Some(Value::Array(entries)),
        }
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = AliasTable::new();
        for (namespace, prefix) in iter {
            table.insert(namespace, prefix);
        }
        table
    }
}

/// `alias:name`, or bare `name` when `alias` is empty.
pub fn qualify(alias: &str, name: &str) -> String {
    if alias.is_empty() {
        name.to_string()
    } else {
        format!("{}:{}", alias, name)
    }
}

/// Removes a leading `alias:` from `key`; returns `key` unchanged otherwise.
pub fn strip_alias<'k>(alias: &str, key: &'k str) -> &'k str {
    if alias.is_empty() {
        return key;
    }
    key.strip_prefix(alias)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(key)
}
