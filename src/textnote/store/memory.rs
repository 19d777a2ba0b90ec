use super::NoteStore;
use crate::error::{Result, TextnoteError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory note storage for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, name: &str, text: &str) -> Self {
        self.notes.insert(name.to_string(), text.to_string());
        self
    }
}

impl NoteStore for InMemoryStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.notes.get(name).cloned())
    }

    fn write(&mut self, name: &str, text: &str) -> Result<()> {
        self.notes.insert(name.to_string(), text.to_string());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.notes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TextnoteError::NoteNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.notes.keys().cloned().collect())
    }

    fn path(&self, name: &str) -> PathBuf {
        PathBuf::from("memory").join(name)
    }
}
