//! Canonical ordering.
//!
//! Wire documents have no natural order for property values, so the codec
//! defines its own: arbitrary, but total and stable across runs. Values of
//! different kinds order by their kind's priority; values of the same kind
//! by that kind's own comparison. [`Canonical`] adapts any implementor to
//! the std `Ord` machinery.

use std::cmp::Ordering;

use crate::cell::PropertyCell;
use crate::entity::Entity;
use crate::kind::KindValue;
use crate::list::PropertyList;
use crate::property::Property;
use crate::registry::KindIndex;

pub trait CanonicalOrd {
    fn canonical_cmp(&self, other: &Self) -> Ordering;

    fn canonical_lt(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Less
    }
}

impl CanonicalOrd for KindValue {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KindValue::Text(a), KindValue::Text(b)) => a.cmp(b),
            (KindValue::LangString(a), KindValue::LangString(b)) => a.cmp(b),
            (KindValue::Uri(a), KindValue::Uri(b)) => a.as_str().cmp(b.as_str()),
            (KindValue::Boolean(a), KindValue::Boolean(b)) => a.cmp(b),
            (KindValue::NonNegativeInteger(a), KindValue::NonNegativeInteger(b)) => a.cmp(b),
            (KindValue::Float(a), KindValue::Float(b)) => a.total_cmp(b),
            (KindValue::DateTime(a), KindValue::DateTime(b)) => a.cmp(b),
            (KindValue::Entity(a), KindValue::Entity(b)) => a.canonical_cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

/// Variant order for values that share no kind.
fn rank(value: &KindValue) -> u8 {
    match value {
        KindValue::Text(_) => 0,
        KindValue::LangString(_) => 1,
        KindValue::Uri(_) => 2,
        KindValue::Boolean(_) => 3,
        KindValue::NonNegativeInteger(_) => 4,
        KindValue::Float(_) => 5,
        KindValue::DateTime(_) => 6,
        KindValue::Entity(_) => 7,
    }
}

impl CanonicalOrd for PropertyCell {
    /// Empty and unknown cells are equal to each other and sort first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.kind_index(), other.kind_index());
        if a != b {
            return a.cmp(&b);
        }
        match a {
            KindIndex::None => Ordering::Equal,
            KindIndex::Kind(_) => match (self.value(), other.value()) {
                (Some(x), Some(y)) => x.canonical_cmp(y),
                _ => Ordering::Equal,
            },
            KindIndex::Iri => {
                let x = self.iri().map(|iri| iri.as_str());
                let y = other.iri().map(|iri| iri.as_str());
                x.cmp(&y)
            }
        }
    }
}

impl CanonicalOrd for PropertyList {
    /// Element by element; a strict prefix sorts first.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.canonical_cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl CanonicalOrd for Property {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Property::Functional(a), Property::Functional(b)) => a.canonical_cmp(b),
            (Property::Repeatable(a), Property::Repeatable(b)) => a.canonical_cmp(b),
            (Property::Functional(_), Property::Repeatable(_)) => Ordering::Less,
            (Property::Repeatable(_), Property::Functional(_)) => Ordering::Greater,
        }
    }
}

impl CanonicalOrd for Entity {
    /// Type name, then each declared property in declaration order (unset
    /// before set), then the number of extension entries.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        let by_type = self.type_name().cmp(other.type_name());
        if by_type != Ordering::Equal {
            return by_type;
        }
        for def in self.type_def().properties {
            let ordering = match (self.get(def.name), other.get(def.name)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.canonical_cmp(b),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        self.extensions().len().cmp(&other.extensions().len())
    }
}

/// Wraps a [`CanonicalOrd`] value so it can be sorted, deduplicated or
/// kept in a `BTreeSet`.
#[derive(Debug, Clone)]
pub struct Canonical<T>(pub T);

impl<T> Canonical<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: CanonicalOrd> PartialEq for Canonical<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.canonical_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: CanonicalOrd> Eq for Canonical<T> {}

impl<T: CanonicalOrd> PartialOrd for Canonical<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: CanonicalOrd> Ord for Canonical<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.canonical_cmp(&other.0)
    }
}

/// Stable sort into canonical order.
pub fn sort_canonical<T: CanonicalOrd>(items: &mut [T]) {
    items.sort_by(|a, b| a.canonical_cmp(b));
}

/// Sorts, then drops canonically equal neighbours, keeping the first.
pub fn dedup_canonical<T: CanonicalOrd>(mut items: Vec<T>) -> Vec<T> {
    sort_canonical(&mut items);
    items.dedup_by(|later, earlier| later.canonical_cmp(earlier) == Ordering::Equal);
    items
}
