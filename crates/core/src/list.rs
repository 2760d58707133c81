//! Ordered storage for repeatable properties.
//!
//! A [`PropertyList`] owns its cells; each cell records its own position so
//! it can report where it sits after the list has been edited. Traversal goes
//! through [`Cursor`], a borrowed handle that resolves its neighbours through
//! the list's current positions rather than holding a reference to them.

use serde_json::Value;

use crate::alias::AliasTable;
use crate::cell::PropertyCell;
use crate::compare::CanonicalOrd;
use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::iri::Iri;
use crate::kind::KindValue;
use crate::registry::KindIndex;
use crate::schema::PropertyDef;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyList {
    def: &'static PropertyDef,
    alias: String,
    cells: Vec<PropertyCell>,
    /// The plain key was read as `[]`; kept so it is written back next to
    /// a language map.
    explicit_empty: bool,
}

impl PropertyList {
    pub fn new(def: &'static PropertyDef) -> Self {
        PropertyList {
            def,
            alias: String::new(),
            cells: Vec::new(),
            explicit_empty: false,
        }
    }

    pub(crate) fn from_cells(def: &'static PropertyDef, alias: &str, cells: Vec<PropertyCell>) -> Self {
        let mut list = PropertyList {
            def,
            alias: alias.to_string(),
            cells,
            explicit_empty: false,
        };
        list.reindex(0);
        list
    }

    pub fn def(&self) -> &'static PropertyDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Sets the prefix on the list and every cell in it.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
        for cell in &mut self.cells {
            cell.set_alias(self.alias.clone());
        }
    }

    fn new_cell(&self) -> PropertyCell {
        let mut cell = PropertyCell::new(self.def);
        cell.set_alias(self.alias.clone());
        cell
    }

    /// Renumbers every cell from `from` onwards.
    fn reindex(&mut self, from: usize) {
        for (i, cell) in self.cells.iter_mut().enumerate().skip(from) {
            cell.set_index(Some(i));
        }
    }

    fn check(&self, index: usize) -> Result<(), CodecError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(CodecError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
        }
    }

    // ── Insertion ───────────────────────────────────────────────────

    pub fn append(&mut self, value: impl Into<KindValue>) -> Result<(), CodecError> {
        let mut cell = self.new_cell();
        cell.set(value)?;
        self.push_cell(cell);
        Ok(())
    }

    pub fn append_iri(&mut self, iri: Iri) {
        let mut cell = self.new_cell();
        cell.set_iri(iri);
        self.push_cell(cell);
    }

    pub fn prepend(&mut self, value: impl Into<KindValue>) -> Result<(), CodecError> {
        let mut cell = self.new_cell();
        cell.set(value)?;
        self.insert_cell(0, cell);
        Ok(())
    }

    pub fn prepend_iri(&mut self, iri: Iri) {
        let mut cell = self.new_cell();
        cell.set_iri(iri);
        self.insert_cell(0, cell);
    }

    pub(crate) fn push_cell(&mut self, mut cell: PropertyCell) {
        cell.set_index(Some(self.cells.len()));
        self.cells.push(cell);
    }

    fn insert_cell(&mut self, at: usize, cell: PropertyCell) {
        self.cells.insert(at, cell);
        self.reindex(at);
    }

    // ── Positional access ───────────────────────────────────────────

    pub fn at(&self, index: usize) -> Result<&PropertyCell, CodecError> {
        self.check(index)?;
        Ok(&self.cells[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut PropertyCell, CodecError> {
        self.check(index)?;
        Ok(&mut self.cells[index])
    }

    /// Overwrites the value at `index`; every other position is unchanged.
    pub fn set(&mut self, index: usize, value: impl Into<KindValue>) -> Result<(), CodecError> {
        self.at_mut(index)?.set(value)
    }

    pub fn set_iri(&mut self, index: usize, iri: Iri) -> Result<(), CodecError> {
        self.at_mut(index)?.set_iri(iri);
        Ok(())
    }

    /// Removes and returns the cell at `index`. Later cells move down by one;
    /// the returned cell no longer has a position.
    pub fn remove(&mut self, index: usize) -> Result<PropertyCell, CodecError> {
        self.check(index)?;
        let mut cell = self.cells.remove(index);
        cell.set_index(None);
        self.reindex(index);
        Ok(cell)
    }

    pub fn kind_index(&self, index: usize) -> Result<KindIndex, CodecError> {
        self.at(index).map(PropertyCell::kind_index)
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), CodecError> {
        self.check(i)?;
        self.check(j)?;
        self.cells.swap(i, j);
        self.cells[i].set_index(Some(i));
        self.cells[j].set_index(Some(j));
        Ok(())
    }

    /// Whether the cell at `i` sorts before the cell at `j`.
    pub fn less(&self, i: usize, j: usize) -> Result<bool, CodecError> {
        Ok(self.at(i)?.canonical_lt(self.at(j)?))
    }

    /// Stable sort into canonical order.
    pub fn sort_canonical(&mut self) {
        self.cells.sort_by(|a, b| a.canonical_cmp(b));
        self.reindex(0);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyCell> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, PropertyCell> {
        self.cells.iter_mut()
    }

    pub(crate) fn mark_explicit_empty(&mut self) {
        self.explicit_empty = true;
    }

    pub(crate) fn is_explicit_empty(&self) -> bool {
        self.explicit_empty
    }

    // ── Cursors ─────────────────────────────────────────────────────

    pub fn begin(&self) -> Option<Cursor<'_>> {
        self.cursor(0)
    }

    pub fn end(&self) -> Option<Cursor<'_>> {
        self.cells.len().checked_sub(1).and_then(|i| self.cursor(i))
    }

    pub fn cursor(&self, index: usize) -> Option<Cursor<'_>> {
        (index < self.cells.len()).then_some(Cursor { list: self, index })
    }

    // ── Output ──────────────────────────────────────────────────────

    /// Raw form of every non-empty cell, in order, as a JSON array.
    pub fn serialize_with(&self, config: &CodecConfig) -> Result<Value, CodecError> {
        let mut items = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            if let Some(raw) = cell.serialize_with(config)? {
                items.push(raw);
            }
        }
        Ok(Value::Array(items))
    }

    pub fn context(&self) -> AliasTable {
        let mut table = AliasTable::new();
        if !self.def.keyword {
            table.insert(self.def.namespace, self.alias.clone());
        }
        for cell in &self.cells {
            table.merge(&cell.context());
        }
        table
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a PropertyCell;
    type IntoIter = std::slice::Iter<'a, PropertyCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A position in a [`PropertyList`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    list: &'a PropertyList,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn get(&self) -> &'a PropertyCell {
        &self.list.cells[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&self) -> Option<Cursor<'a>> {
        self.list.cursor(self.index + 1)
    }

    pub fn previous(&self) -> Option<Cursor<'a>> {
        self.index.checked_sub(1).and_then(|i| self.list.cursor(i))
    }
}
