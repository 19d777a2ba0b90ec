//! # Storage Layer
//!
//! Notes live as plain text files in a single directory. The [`NoteStore`] trait hides
//! how those files are kept so command logic can be tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per note
//! - [`memory::InMemoryStore`]: map-backed storage for tests
//!
//! ## Naming
//!
//! ```text
//! notes/
//! ├── 2026-10-17.txt        # daily note, file.time_format + ext
//! ├── archive-Sep2026.txt   # monthly archive, archive.file_prefix + month_time_format + ext
//! └── config.json
//! ```
//!
//! Stores deal in file names only; they never interpret note contents.

use crate::config::Opts;
use crate::error::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Read a note, or `None` if it does not exist
    fn read(&self, name: &str) -> Result<Option<String>>;

    /// Create or replace a note
    fn write(&mut self, name: &str, text: &str) -> Result<()>;

    /// Delete a note permanently
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Names of every note file, sorted
    fn list(&self) -> Result<Vec<String>>;

    /// Location of a note (virtual for non-file stores)
    fn path(&self, name: &str) -> PathBuf;
}

pub fn note_file_name(opts: &Opts, date: NaiveDate) -> String {
    format!("{}{}", date.format(&opts.file.time_format), opts.file_ext())
}

pub fn archive_file_name(opts: &Opts, date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        opts.archive.file_prefix,
        date.format(&opts.archive.month_time_format),
        opts.file_ext()
    )
}

/// Recovers the date of a daily note from its file name. Anything else, including
/// archives, yields `None`.
pub fn note_date(opts: &Opts, name: &str) -> Option<NaiveDate> {
    let stem = name.strip_suffix(&opts.file_ext())?;
    NaiveDate::parse_from_str(stem, &opts.file.time_format).ok()
}

pub fn is_archive_file(opts: &Opts, name: &str) -> bool {
    name.starts_with(&opts.archive.file_prefix) && name.ends_with(&opts.file_ext())
}
