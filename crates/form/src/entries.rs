//! The editable list of movie titles behind the form.
//!
//! Operations here are the raw data operations. They do not know about
//! which rows the user is *offered* a remove button for; that decision
//! lives in [`crate::view`].

use thiserror::Error;

/// Rows a fresh form starts with.
pub const INITIAL_ENTRY_COUNT: usize = 2;

/// Errors from editing the entry list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Index does not name an existing row
    #[error("Entry {index} is out of bounds (form has {len} entries)")]
    OutOfBounds { index: usize, len: usize },
}

/// Ordered, mutable list of title entries (one per input row).
///
/// Blank entries are kept; they only disappear when the list is
/// [`filtered`](EntryList::filtered) for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<String>,
}

impl EntryList {
    /// A fresh list with two empty rows.
    pub fn new() -> Self {
        Self {
            entries: vec![String::new(); INITIAL_ENTRY_COUNT],
        }
    }

    /// Build a list from existing titles (one row per title, kept verbatim).
    pub fn from_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            entries: titles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Replace the entry at `index`.
    pub fn update(&mut self, index: usize, value: impl Into<String>) -> Result<(), EntryError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(EntryError::OutOfBounds { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// Append an empty row. There is no upper bound.
    pub fn add(&mut self) {
        self.entries.push(String::new());
    }

    /// Remove the row at `index`, returning its value.
    ///
    /// Any index is accepted here, including 0, and removing the last row
    /// leaves an empty list.
    pub fn remove(&mut self, index: usize) -> Result<String, EntryError> {
        if index >= self.entries.len() {
            return Err(EntryError::OutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Trimmed, non-blank entries in their original order.
    ///
    /// This is exactly what gets sent to the recommendation service.
    pub fn filtered(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}
