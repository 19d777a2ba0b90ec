use crate::config::Opts;
use crate::document::Document;
use crate::error::{Result, TextnoteError};
use crate::parser::parse_document;
use crate::store::NoteStore;

/// Reads and parses a note. Missing and zero-length files both yield `None`.
pub fn read_document<S: NoteStore>(store: &S, opts: &Opts, name: &str) -> Result<Option<Document>> {
    let Some(text) = store.read(name)? else {
        return Ok(None);
    };
    match parse_document(&text, opts) {
        Ok(doc) => Ok(Some(doc)),
        Err(TextnoteError::EmptyInput) => {
            log::warn!("{} is empty, treating it as missing", name);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn write_document<S: NoteStore>(
    store: &mut S,
    opts: &Opts,
    name: &str,
    doc: &Document,
) -> Result<()> {
    store.write(name, &doc.render(opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn missing_and_empty_notes_read_as_none() {
        let store = InMemoryStore::new().with_note("empty.txt", "");
        let opts = Opts::default();
        assert!(read_document(&store, &opts, "missing.txt").unwrap().is_none());
        assert!(read_document(&store, &opts, "empty.txt").unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let mut store = InMemoryStore::new();
        let opts = Opts::default();
        let doc = Document::template(&opts, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        write_document(&mut store, &opts, "n.txt", &doc).unwrap();
        assert_eq!(read_document(&store, &opts, "n.txt").unwrap(), Some(doc));
    }
}
