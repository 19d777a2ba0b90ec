use super::NoteStore;
use crate::error::{Result, TextnoteError};
use std::fs;
use std::path::PathBuf;

/// Notes stored as files in one directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, name: &str, text: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file first so a crash never leaves half a note.
        let path = self.path(name);
        let tmp = self.root.join(format!(".{}.tmp", name));
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &path)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.path(name);
        if !path.exists() {
            return Err(TextnoteError::NoteNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        log::info!("deleted {}", path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
