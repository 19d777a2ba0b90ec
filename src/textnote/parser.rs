//! # Parser
//!
//! Turns note text into [`Section`]s and [`Document`]s. The format is line oriented and
//! driven entirely by configured delimiter strings:
//!
//! ```text
//! [Sat] 17 Oct 2026          <- document header (anything before the first section)
//!
//! ___TODO___                 <- section line: {section prefix}{name}{section suffix}
//! free-form body text
//! [2026-10-03]               <- entry header: {entry prefix}{anything}{entry suffix}
//! archived text
//! ```
//!
//! Entry headers are recognized by shape only. The text between the delimiters is
//! conventionally a date, but it is never parsed, so a body line that happens to have
//! the header shape starts a new entry.

use crate::config::Opts;
use crate::document::Document;
use crate::error::{Result, TextnoteError};
use crate::section::{ContentEntry, Section};

/// A literal `prefix...suffix` line shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPattern {
    prefix: String,
    suffix: String,
}

impl HeaderPattern {
    /// Fails when the pair cannot describe a single-line marker: with both delimiters
    /// empty every line would match, and a delimiter containing a newline matches none.
    ///
    /// Matching is a literal prefix/suffix test, so nothing here can fail to compile.
    /// Rejecting the empty pair is a policy choice: an all-matching pattern would turn
    /// every body line into a header.
    pub fn new(prefix: &str, suffix: &str) -> Result<Self> {
        let matches_everything = prefix.is_empty() && suffix.is_empty();
        if matches_everything || prefix.contains('\n') || suffix.contains('\n') {
            return Err(TextnoteError::InvalidDelimiterPattern {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            });
        }
        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        line.len() >= self.prefix.len() + self.suffix.len()
            && line.starts_with(&self.prefix)
            && line.ends_with(&self.suffix)
    }
}

/// Removes one exact `prefix` and one exact `suffix`, if present.
pub fn strip_prefix_suffix<'a>(line: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let line = line.strip_suffix(suffix).unwrap_or(line);
    line.strip_prefix(prefix).unwrap_or(line)
}

/// Parses one section: the first line names it, the rest becomes its entries.
///
/// If every entry turns out empty the section is returned without any entries.
pub fn parse_section(text: &str, opts: &Opts) -> Result<Section> {
    if text.is_empty() {
        return Err(TextnoteError::EmptyInput);
    }
    let pattern = HeaderPattern::new(
        &opts.archive.section_content_prefix,
        &opts.archive.section_content_suffix,
    )?;

    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or_default();
    let name = strip_prefix_suffix(first, &opts.section.prefix, &opts.section.suffix);

    let contents = parse_section_contents(lines, &pattern);
    if contents.iter().any(|entry| !entry.is_empty()) {
        Ok(Section::new(name, contents))
    } else {
        if !contents.is_empty() {
            log::debug!(
                "section [{}]: dropping {} empty entries",
                name,
                contents.len()
            );
        }
        Ok(Section::new(name, Vec::new()))
    }
}

fn parse_section_contents<'a, I>(lines: I, pattern: &HeaderPattern) -> Vec<ContentEntry>
where
    I: Iterator<Item = &'a str>,
{
    let mut contents = Vec::new();
    let mut header = "";
    let mut body: Vec<&str> = Vec::new();

    for line in lines {
        if pattern.matches(line) {
            if !header.is_empty() || !body.is_empty() {
                // The newline ending the last body line belongs to the body.
                contents.push(flush_entry(header, &body, true));
            }
            header = line;
            body.clear();
            continue;
        }
        body.push(line);
    }

    if !header.is_empty() || !body.is_empty() {
        contents.push(flush_entry(header, &body, false));
    }
    contents
}

fn flush_entry(header: &str, body: &[&str], terminated: bool) -> ContentEntry {
    let mut text = body.join("\n");
    if terminated && !body.is_empty() {
        text.push('\n');
    }
    ContentEntry::new(header, text)
}

/// Parses a whole note.
///
/// Every line shaped like a section line starts a new section. Lines before the first
/// section form the document header. Trailing blank lines of the header and of every
/// section are separators and are not kept.
pub fn parse_document(text: &str, opts: &Opts) -> Result<Document> {
    if text.is_empty() {
        return Err(TextnoteError::EmptyInput);
    }
    let pattern = HeaderPattern::new(&opts.section.prefix, &opts.section.suffix)?;

    let mut header_lines: Vec<&str> = Vec::new();
    let mut chunks: Vec<Vec<&str>> = Vec::new();
    for line in text.split('\n') {
        if pattern.matches(line) {
            chunks.push(vec![line]);
        } else if let Some(chunk) = chunks.last_mut() {
            chunk.push(line);
        } else {
            header_lines.push(line);
        }
    }

    let header = header_lines.join("\n").trim_end_matches('\n').to_string();

    let mut sections = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let joined = chunk.join("\n");
        let mut raw = joined.trim_end_matches('\n').to_string();
        if raw.contains('\n') {
            raw.push('\n');
        }
        sections.push(parse_section(&raw, opts)?);
    }

    log::debug!(
        "parsed document with {} sections: {:?}",
        sections.len(),
        sections.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    );
    Ok(Document::new(header, sections))
}
