//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! operation, whatever the UI. It dispatches to `commands/*.rs`, validates the
//! configuration once up front and returns [`CmdResult`] values. It never prints
//! and never reads the clock: "today" is always passed in.
//!
//! `TextnoteApi<S: NoteStore>` is generic over storage, so the same facade runs
//! against [`FileStore`](crate::store::fs::FileStore) in the binary and
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) in tests.

use crate::commands;
use crate::config::Opts;
use crate::document::Document;
use crate::error::{Result, TextnoteError};
use crate::store::{note_file_name, NoteStore};
use chrono::NaiveDate;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub struct TextnoteApi<S: NoteStore> {
    store: S,
    opts: Opts,
}

impl<S: NoteStore> TextnoteApi<S> {
    /// Fails if `opts` is invalid, before any note is touched.
    pub fn new(store: S, opts: Opts) -> Result<Self> {
        opts.validate()?;
        Ok(Self { store, opts })
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    pub fn open_note(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.store, &self.opts, date, None)
    }

    pub fn copy_into_note(
        &mut self,
        date: NaiveDate,
        request: &CopyRequest,
    ) -> Result<commands::CmdResult> {
        commands::open::run(&mut self.store, &self.opts, date, Some(request))
    }

    pub fn archive(
        &mut self,
        today: NaiveDate,
        options: ArchiveOptions,
    ) -> Result<commands::CmdResult> {
        commands::archive::run(&mut self.store, &self.opts, today, options)
    }

    pub fn list_notes(&self, archives: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.opts, archives)
    }

    pub fn config(&self, view: ConfigView) -> Result<commands::CmdResult> {
        commands::config::run(&self.store, &self.opts, view)
    }

    /// Parsed note for `date`, if it exists.
    pub fn document(&self, date: NaiveDate) -> Result<Option<Document>> {
        let name = note_file_name(&self.opts, date);
        commands::helpers::read_document(&self.store, &self.opts, &name)
    }
}

/// Parses a `YYYY-MM-DD` date given by the user.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        TextnoteError::Api(format!(
            "Invalid date [{}], expected YYYY-MM-DD",
            input
        ))
    })
}

pub use commands::archive::ArchiveOptions;
pub use commands::config::ConfigView;
pub use commands::open::CopyRequest;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
