use crate::commands::{CmdMessage, CmdResult};
use crate::config::Opts;
use crate::document::Document;
use crate::error::{Result, TextnoteError};
use crate::store::{note_file_name, NoteStore};
use chrono::NaiveDate;

use super::helpers::{read_document, write_document};

/// Carry section contents over from another day's note.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub from: NaiveDate,
    /// Sections to copy; empty means every configured section
    pub sections: Vec<String>,
    /// Clear the copied sections in the source note
    pub delete: bool,
}

/// Makes sure the note for `date` exists, optionally copying contents into it first.
pub fn run<S: NoteStore>(
    store: &mut S,
    opts: &Opts,
    date: NaiveDate,
    copy: Option<&CopyRequest>,
) -> Result<CmdResult> {
    let name = note_file_name(opts, date);
    let mut result = CmdResult::default();

    let (mut doc, created) = match read_document(store, opts, &name)? {
        Some(doc) => (doc, false),
        None => (Document::template(opts, date), true),
    };

    let mut changed = created;
    let mut cleared_source = None;
    if let Some(request) = copy {
        let (source_name, source) = copy_sections(store, opts, &mut doc, date, request)?;
        changed = true;
        result.add_message(CmdMessage::success(format!(
            "Copied sections from {} into {}",
            source_name, name
        )));
        if request.delete {
            cleared_source = Some((source_name, source));
        }
    }

    if changed {
        write_document(store, opts, &name, &doc)?;
        result.affected_notes.push(name.clone());
    }
    // The source is only cleared once its entries are safely in the target.
    if let Some((source_name, source)) = cleared_source {
        write_document(store, opts, &source_name, &source)?;
        result.affected_notes.push(source_name);
    }
    if created {
        result.add_message(CmdMessage::success(format!("Created {}", name)));
    }

    Ok(result.with_note_paths(vec![store.path(&name)]))
}

/// Appends the requested sections of the source note to `target` and returns the source,
/// with those sections cleared when `request.delete` is set. Nothing is written here.
fn copy_sections<S: NoteStore>(
    store: &S,
    opts: &Opts,
    target: &mut Document,
    date: NaiveDate,
    request: &CopyRequest,
) -> Result<(String, Document)> {
    if request.from == date {
        return Err(TextnoteError::Api(
            "Cannot copy a note onto itself".to_string(),
        ));
    }

    let source_name = note_file_name(opts, request.from);
    let mut source = read_document(store, opts, &source_name)?
        .ok_or_else(|| TextnoteError::NoteNotFound(source_name.clone()))?;

    let names = if request.sections.is_empty() {
        &opts.section.names
    } else {
        &request.sections
    };

    // Resolve every section up front so a bad name leaves both notes untouched.
    for name in names {
        if source.section(name).is_none() || target.section(name).is_none() {
            return Err(TextnoteError::SectionNotFound(name.clone()));
        }
    }

    for name in names {
        let Some(from) = source.section_mut(name) else {
            continue;
        };
        let entries = from.contents.clone();
        if request.delete {
            from.delete_contents();
        }
        if let Some(to) = target.section_mut(name) {
            to.push_entries(entries);
        }
    }

    log::info!(
        "copied [{}] from {} (delete: {})",
        names.join(", "),
        source_name,
        request.delete
    );
    Ok((source_name, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::section::ContentEntry;
    use crate::store::memory::InMemoryStore;
    use std::io;
    use std::path::PathBuf;

    /// Rejects writes to one file name.
    struct ReadOnlyNote {
        inner: InMemoryStore,
        name: String,
    }

    impl NoteStore for ReadOnlyNote {
        fn read(&self, name: &str) -> Result<Option<String>> {
            self.inner.read(name)
        }

        fn write(&mut self, name: &str, text: &str) -> Result<()> {
            if name == self.name {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
            }
            self.inner.write(name, text)
        }

        fn delete(&mut self, name: &str) -> Result<()> {
            self.inner.delete(name)
        }

        fn list(&self) -> Result<Vec<String>> {
            self.inner.list()
        }

        fn path(&self, name: &str) -> PathBuf {
            self.inner.path(name)
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn read(store: &InMemoryStore, opts: &Opts, date: NaiveDate) -> Document {
        let text = store.read(&note_file_name(opts, date)).unwrap().unwrap();
        parse_document(&text, opts).unwrap()
    }

    fn seeded_store(opts: &Opts) -> InMemoryStore {
        let mut doc = Document::template(opts, day(16));
        doc.section_mut("TODO")
            .unwrap()
            .push_entries([ContentEntry::new("", "buy milk\n")]);
        doc.section_mut("NOTES")
            .unwrap()
            .push_entries([ContentEntry::new("", "call mom\n")]);
        InMemoryStore::new().with_note(&note_file_name(opts, day(16)), &doc.render(opts))
    }

    #[test]
    fn creates_missing_note_from_template() {
        let opts = Opts::default();
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &opts, day(17), None).unwrap();
        assert_eq!(result.affected_notes, ["2026-10-17.txt"]);
        assert_eq!(result.note_paths.len(), 1);
        assert_eq!(read(&store, &opts, day(17)), Document::template(&opts, day(17)));
    }

    #[test]
    fn existing_note_is_left_alone() {
        let opts = Opts::default();
        let mut store = InMemoryStore::new().with_note("2026-10-17.txt", "hand edited\n");

        let result = run(&mut store, &opts, day(17), None).unwrap();
        assert!(result.affected_notes.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(
            store.read("2026-10-17.txt").unwrap().as_deref(),
            Some("hand edited\n")
        );
    }

    #[test]
    fn empty_note_is_recreated() {
        let opts = Opts::default();
        let mut store = InMemoryStore::new().with_note("2026-10-17.txt", "");
        run(&mut store, &opts, day(17), None).unwrap();
        assert_eq!(read(&store, &opts, day(17)).names(), ["TODO", "DONE", "NOTES"]);
    }

    #[test]
    fn copies_requested_sections() {
        let opts = Opts::default();
        let mut store = seeded_store(&opts);
        let request = CopyRequest {
            from: day(16),
            sections: vec!["TODO".to_string()],
            delete: false,
        };

        run(&mut store, &opts, day(17), Some(&request)).unwrap();

        let today = read(&store, &opts, day(17));
        assert_eq!(
            today.section("TODO").unwrap().contents,
            vec![ContentEntry::new("", "buy milk\n")]
        );
        assert!(today.section("NOTES").unwrap().is_empty());
        assert!(!read(&store, &opts, day(16)).section("TODO").unwrap().is_empty());
    }

    #[test]
    fn copy_with_delete_clears_source() {
        let opts = Opts::default();
        let mut store = seeded_store(&opts);
        let request = CopyRequest {
            from: day(16),
            sections: Vec::new(),
            delete: true,
        };

        let result = run(&mut store, &opts, day(17), Some(&request)).unwrap();
        assert_eq!(result.affected_notes, ["2026-10-17.txt", "2026-10-16.txt"]);

        let today = read(&store, &opts, day(17));
        assert!(!today.section("TODO").unwrap().is_empty());
        assert!(!today.section("NOTES").unwrap().is_empty());
        assert!(read(&store, &opts, day(16)).is_empty());
    }

    #[test]
    fn copy_appends_after_existing_contents() {
        let opts = Opts::default();
        let mut store = seeded_store(&opts);
        let mut today = Document::template(&opts, day(17));
        today
            .section_mut("TODO")
            .unwrap()
            .push_entries([ContentEntry::new("", "already here\n")]);
        store
            .write(&note_file_name(&opts, day(17)), &today.render(&opts))
            .unwrap();

        let request = CopyRequest {
            from: day(16),
            sections: vec!["TODO".to_string()],
            delete: false,
        };
        run(&mut store, &opts, day(17), Some(&request)).unwrap();

        let todo = read(&store, &opts, day(17)).section("TODO").unwrap().render_contents();
        assert_eq!(todo, "already here\nbuy milk\n");
    }

    #[test]
    fn copy_from_missing_note() {
        let opts = Opts::default();
        let mut store = InMemoryStore::new();
        let request = CopyRequest {
            from: day(1),
            sections: Vec::new(),
            delete: false,
        };
        let err = run(&mut store, &opts, day(17), Some(&request)).unwrap_err();
        assert!(matches!(err, TextnoteError::NoteNotFound(_)));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn copy_unknown_section_changes_nothing() {
        let opts = Opts::default();
        let mut store = seeded_store(&opts);
        let request = CopyRequest {
            from: day(16),
            sections: vec!["TODO".to_string(), "WORK".to_string()],
            delete: true,
        };
        let err = run(&mut store, &opts, day(17), Some(&request)).unwrap_err();
        assert!(matches!(err, TextnoteError::SectionNotFound(ref s) if s == "WORK"));
        assert!(!read(&store, &opts, day(16)).is_empty());
        assert_eq!(store.list().unwrap(), ["2026-10-16.txt"]);
    }

    #[test]
    fn copy_onto_itself_is_rejected() {
        let opts = Opts::default();
        let mut store = seeded_store(&opts);
        let request = CopyRequest {
            from: day(16),
            sections: Vec::new(),
            delete: true,
        };
        assert!(matches!(
            run(&mut store, &opts, day(16), Some(&request)),
            Err(TextnoteError::Api(_))
        ));
    }

    #[test]
    fn failed_target_write_keeps_source_contents() {
        let opts = Opts::default();
        let mut store = ReadOnlyNote {
            inner: seeded_store(&opts),
            name: note_file_name(&opts, day(17)),
        };
        let request = CopyRequest {
            from: day(16),
            sections: vec!["TODO".to_string()],
            delete: true,
        };

        let err = run(&mut store, &opts, day(17), Some(&request)).unwrap_err();
        assert!(matches!(err, TextnoteError::Io(_)));

        assert!(store.read("2026-10-17.txt").unwrap().is_none());
        assert_eq!(
            read(&store.inner, &opts, day(16)).section("TODO").unwrap().contents,
            vec![ContentEntry::new("", "buy milk\n")]
        );
    }
}
