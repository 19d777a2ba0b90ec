use crate::commands::{CmdMessage, CmdResult};
use crate::config::Opts;
use crate::document::Document;
use crate::error::Result;
use crate::section::{ContentEntry, Section};
use crate::store::{archive_file_name, note_date, NoteStore};
use chrono::NaiveDate;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use super::helpers::{read_document, write_document};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveOptions {
    /// Archive every note before today regardless of age
    pub now: bool,
    /// Leave archived notes in place
    pub keep: bool,
}

/// An archive file being assembled, plus the sections that received entries.
struct PendingArchive {
    doc: Document,
    touched: BTreeSet<String>,
}

/// Moves old daily notes into monthly archive files.
///
/// Each non-empty section of an archived note becomes one dated entry in the same-named
/// section of its month's archive. An entry already carrying that date is replaced, so
/// archiving the same note twice does not duplicate it.
pub fn run<S: NoteStore>(
    store: &mut S,
    opts: &Opts,
    today: NaiveDate,
    options: ArchiveOptions,
) -> Result<CmdResult> {
    let mut notes: Vec<(NaiveDate, String)> = store
        .list()?
        .into_iter()
        .filter_map(|name| note_date(opts, &name).map(|date| (date, name)))
        .filter(|(date, _)| is_due(opts, today, *date, options.now))
        .collect();
    notes.sort();

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("Nothing to archive."));
        return Ok(result);
    }

    let mut archives: BTreeMap<String, PendingArchive> = BTreeMap::new();
    for (date, name) in &notes {
        let Some(doc) = read_document(store, opts, name)? else {
            result.add_message(CmdMessage::warning(format!(
                "{} is empty, nothing to archive",
                name
            )));
            continue;
        };
        if doc.is_empty() {
            log::debug!("{} has no content", name);
            continue;
        }

        let archive_name = archive_file_name(opts, *date);
        let pending = match archives.entry(archive_name.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let doc = read_document(store, opts, &archive_name)?
                    .unwrap_or_else(|| Document::archive_template(opts, *date));
                e.insert(PendingArchive {
                    doc,
                    touched: BTreeSet::new(),
                })
            }
        };

        archive_note(opts, &doc, *date, pending);
        result.add_message(CmdMessage::info(format!(
            "Archived {} into {}",
            name, archive_name
        )));
    }

    for (archive_name, mut pending) in archives {
        for name in &pending.touched {
            if let Some(section) = pending.doc.section_mut(name) {
                section.sort_contents();
            }
        }
        write_document(store, opts, &archive_name, &pending.doc)?;
        result.affected_notes.push(archive_name);
    }

    if !options.keep {
        for (_, name) in &notes {
            store.delete(name)?;
            result.affected_notes.push(name.clone());
        }
        result.add_message(CmdMessage::success(format!(
            "Removed {} archived notes",
            notes.len()
        )));
    }

    Ok(result)
}

fn is_due(opts: &Opts, today: NaiveDate, date: NaiveDate, now: bool) -> bool {
    if now {
        return date < today;
    }
    (today - date).num_days() >= i64::from(opts.archive.after_days)
}

/// The header marking entries archived from the note of `date`.
pub fn entry_header(opts: &Opts, date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        opts.archive.section_content_prefix,
        date.format(&opts.archive.section_content_time_format),
        opts.archive.section_content_suffix
    )
}

fn archive_note(opts: &Opts, note: &Document, date: NaiveDate, pending: &mut PendingArchive) {
    let header = entry_header(opts, date);
    for section in note.sections() {
        if section.is_empty() {
            continue;
        }

        if pending.doc.section(&section.name).is_none() {
            pending
                .doc
                .push_section(Section::new(section.name.as_str(), Vec::new()));
        }
        if let Some(target) = pending.doc.section_mut(&section.name) {
            target.contents.retain(|entry| entry.header != header);
            target.push_entries([ContentEntry::new(
                header.as_str(),
                section.render_contents(),
            )]);
            pending.touched.insert(section.name.clone());
        }
    }
}
