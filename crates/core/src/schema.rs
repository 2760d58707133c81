//! Static schema tables.
//!
//! A vocabulary is plain data: every [`PropertyDef`], [`TypeDef`] and
//! [`Vocabulary`] is `const`-constructible so a vocabulary crate can declare
//! its whole table as `static` items. The codec never hard-codes a type or
//! property name; it only walks these tables.

use crate::kind::Kind;

/// Declaration of one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    /// Canonical (unprefixed) name, e.g. `attributedTo`.
    pub name: &'static str,
    /// Namespace the property belongs to; selects its alias.
    pub namespace: &'static str,
    /// Functional properties hold at most one value.
    pub functional: bool,
    /// Candidate kinds in dispatch priority order.
    pub kinds: &'static [Kind],
    /// Name of the language-map variant (`nameMap` for `name`), if any.
    pub language_map: Option<&'static str>,
    /// JSON-LD keyword aliases (`id`, `type`) are never prefixed.
    pub keyword: bool,
}

impl PropertyDef {
    pub const fn functional(
        name: &'static str,
        namespace: &'static str,
        kinds: &'static [Kind],
    ) -> Self {
        PropertyDef {
            name,
            namespace,
            functional: true,
            kinds,
            language_map: None,
            keyword: false,
        }
    }

    pub const fn repeatable(
        name: &'static str,
        namespace: &'static str,
        kinds: &'static [Kind],
    ) -> Self {
        PropertyDef {
            name,
            namespace,
            functional: false,
            kinds,
            language_map: None,
            keyword: false,
        }
    }

    /// Adds a `<map_name>` language-map variant.
    pub const fn with_language_map(self, map_name: &'static str) -> Self {
        PropertyDef {
            language_map: Some(map_name),
            ..self
        }
    }

    pub const fn as_keyword(self) -> Self {
        PropertyDef {
            keyword: true,
            ..self
        }
    }

    /// Priority of `kind`, i.e. its position among the candidates.
    pub fn priority(&self, kind: &Kind) -> Option<usize> {
        self.kinds.iter().position(|k| k == kind)
    }

    pub(crate) fn shape(&self) -> &'static str {
        if self.functional {
            "functional"
        } else {
            "repeatable"
        }
    }
}

/// Declaration of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDef {
    pub name: &'static str,
    pub namespace: &'static str,
    /// Declared properties, in declaration order.
    pub properties: &'static [&'static PropertyDef],
    /// Every ancestor type name.
    pub extends: &'static [&'static str],
    /// Every descendant type name.
    pub extended_by: &'static [&'static str],
    /// Type names this type can never be combined with.
    pub disjoint_with: &'static [&'static str],
}

impl TypeDef {
    /// Whether this type is a descendant of `other`.
    pub fn extends(&self, other: &str) -> bool {
        self.extends.contains(&other)
    }

    /// Whether `other` is a descendant of this type.
    pub fn is_extended_by(&self, other: &str) -> bool {
        self.extended_by.contains(&other)
    }

    /// Whether this type's own table lists `other` as disjoint.
    pub fn is_disjoint_with(&self, other: &str) -> bool {
        self.disjoint_with.contains(&other)
    }

    pub fn property(&self, name: &str) -> Option<&'static PropertyDef> {
        self.properties.iter().copied().find(|p| p.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }
}

/// A named collection of types.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub name: &'static str,
    /// The vocabulary's primary namespace.
    pub namespace: &'static str,
    pub types: &'static [&'static TypeDef],
}

impl Vocabulary {
    pub fn type_named(&self, name: &str) -> Option<&'static TypeDef> {
        self.types.iter().copied().find(|t| t.name == name)
    }

    /// Whether `child` extends `ancestor`. Unknown names never extend.
    pub fn extends(&self, child: &str, ancestor: &str) -> bool {
        self.type_named(child)
            .map(|t| t.extends(ancestor))
            .unwrap_or(false)
    }

    /// Symmetric disjointness: true if either type's table lists the other.
    pub fn disjoint(&self, a: &str, b: &str) -> bool {
        let listed = |x: &str, y: &str| {
            self.type_named(x)
                .map(|t| t.is_disjoint_with(y))
                .unwrap_or(false)
        };
        listed(a, b) || listed(b, a)
    }
}
