//! Document cache - identifier to workbook handle mapping

use std::collections::BTreeMap;

use umya_spreadsheet::Spreadsheet;

use crate::error::{Error, Result};

/// Cache of open workbook handles keyed by a string identifier
///
/// Holds at most one handle per identifier and a "current" pointer that
/// always names a cached entry or nothing. Operations that omit an explicit
/// identifier target the current entry.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: BTreeMap<String, Spreadsheet>,
    current_id: Option<String>,
}

impl DocumentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the cache holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Check if an identifier is registered
    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// The identifier of the current document, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Registered identifiers in iteration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Register a workbook under `id` and make it current
    pub fn insert(&mut self, id: &str, workbook: Spreadsheet) -> Result<()> {
        if self.documents.contains_key(id) {
            return Err(Error::DuplicateDocumentId(id.to_string()));
        }
        self.documents.insert(id.to_string(), workbook);
        self.current_id = Some(id.to_string());
        Ok(())
    }

    /// Make `id` current, returning the previous current identifier
    pub fn switch(&mut self, id: &str) -> Result<Option<String>> {
        if !self.documents.contains_key(id) {
            return Err(Error::UnknownDocumentId(id.to_string()));
        }
        Ok(self.current_id.replace(id.to_string()))
    }

    /// The current workbook handle
    pub fn current(&self) -> Result<&Spreadsheet> {
        self.current_id
            .as_ref()
            .and_then(|id| self.documents.get(id))
            .ok_or(Error::NoOpenDocuments)
    }

    /// The current workbook handle, mutably
    pub fn current_mut(&mut self) -> Result<&mut Spreadsheet> {
        match &self.current_id {
            Some(id) => self.documents.get_mut(id).ok_or(Error::NoOpenDocuments),
            None => Err(Error::NoOpenDocuments),
        }
    }

    /// Remove the current entry, promoting a remaining one if any
    ///
    /// The promoted entry is the first key in the map's lexicographic
    /// iteration order. Returns the new current identifier. No-op when
    /// nothing is current.
    pub fn remove_current(&mut self) -> Option<String> {
        if let Some(id) = self.current_id.take() {
            self.documents.remove(&id);
        }
        self.current_id = self.documents.keys().next().cloned();
        self.current_id.clone()
    }

    /// Drop every entry and clear the current pointer
    pub fn clear(&mut self) {
        self.documents.clear();
        self.current_id = None;
    }

    /// Re-key the current entry from its identifier to `new_id`
    ///
    /// The handle itself is unchanged; an existing entry at `new_id` is
    /// displaced. The current pointer follows the entry.
    pub fn rekey_current(&mut self, new_id: &str) -> Result<()> {
        let old_id = self.current_id.clone().ok_or(Error::NoOpenDocuments)?;
        if old_id == new_id {
            return Ok(());
        }
        let workbook = self
            .documents
            .remove(&old_id)
            .ok_or(Error::NoOpenDocuments)?;
        self.documents.insert(new_id.to_string(), workbook);
        self.current_id = Some(new_id.to_string());
        Ok(())
    }
}
