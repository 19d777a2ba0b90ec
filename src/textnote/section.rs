//! # Sections and Content Entries
//!
//! A note is a sequence of named [`Section`]s. Each section holds an ordered list of
//! [`ContentEntry`] values: free-form body text (empty `header`) or a dated snippet whose
//! `header` is the marker line that introduced it.
//!
//! Sections are plain owned values. Mutation happens in place through
//! [`Section::delete_contents`] and [`Section::sort_contents`]; whole-section removal is a
//! [`Document`](crate::document::Document) operation.

/// One header line (possibly empty) and the body text that follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEntry {
    pub header: String,
    pub text: String,
}

impl ContentEntry {
    pub fn new(header: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            text: text.into(),
        }
    }

    /// Renders the entry as `header\ntext`, or just `text` when there is no header.
    ///
    /// The result is not guaranteed to end in a newline; [`Section::render_contents`]
    /// takes care of that.
    pub fn render(&self) -> String {
        if self.header.is_empty() {
            self.text.clone()
        } else {
            format!("{}\n{}", self.header, self.text)
        }
    }

    /// True when `text` holds nothing but newlines. The header is not considered.
    pub fn is_empty(&self) -> bool {
        self.text.chars().all(|c| c == '\n')
    }
}

/// A named, ordered collection of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub contents: Vec<ContentEntry>,
}

impl Section {
    pub fn new(name: impl Into<String>, contents: Vec<ContentEntry>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    pub fn push_entries<I: IntoIterator<Item = ContentEntry>>(&mut self, entries: I) {
        self.contents.extend(entries);
    }

    pub fn delete_contents(&mut self) {
        self.contents.clear();
    }

    /// Orders entries by header. The sort is stable: entries sharing a header, including
    /// all unheadered body text, keep their relative order.
    pub fn sort_contents(&mut self) {
        self.contents.sort_by(|a, b| a.header.cmp(&b.header));
    }

    pub fn is_empty(&self) -> bool {
        self.contents.iter().all(ContentEntry::is_empty)
    }

    pub fn render_name(&self, prefix: &str, suffix: &str) -> String {
        format!("{}{}{}\n", prefix, self.name, suffix)
    }

    /// Concatenates every rendered entry, terminating each one with a newline if it
    /// does not already end with one.
    pub fn render_contents(&self) -> String {
        let mut out = String::new();
        for entry in &self.contents {
            let rendered = entry.render();
            out.push_str(&rendered);
            if !rendered.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}
