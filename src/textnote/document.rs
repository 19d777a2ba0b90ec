use crate::config::Opts;
use crate::section::Section;
use chrono::NaiveDate;

/// One note file: an optional header line and its ordered sections.
///
/// Section order is the order in the text and is never re-derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub header: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(header: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            header: header.into(),
            sections,
        }
    }

    /// A fresh daily note: the dated header and one empty section per configured name.
    pub fn template(opts: &Opts, date: NaiveDate) -> Self {
        let header = format!(
            "{}{}{}",
            opts.header.prefix,
            date.format(&opts.header.time_format),
            opts.header.suffix
        );
        Self::with_names(header, &opts.section.names)
    }

    /// A fresh monthly archive for the month containing `date`.
    pub fn archive_template(opts: &Opts, date: NaiveDate) -> Self {
        let header = format!(
            "{}{}{}",
            opts.archive.header_prefix,
            date.format(&opts.archive.month_time_format),
            opts.archive.header_suffix
        );
        Self::with_names(header, &opts.section.names)
    }

    fn with_names(header: String, names: &[String]) -> Self {
        let sections = names
            .iter()
            .map(|name| Section::new(name.as_str(), Vec::new()))
            .collect();
        Self::new(header, sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let pos = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(pos))
    }

    /// True when no section holds any content.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Renders the note back to text.
    ///
    /// The header and every section are followed by their configured number of blank
    /// lines, which [`parse_document`](crate::parser::parse_document) drops again.
    pub fn render(&self, opts: &Opts) -> String {
        let mut out = String::new();
        if !self.header.is_empty() {
            out.push_str(&self.header);
            out.push('\n');
            out.push_str(&"\n".repeat(opts.header.trailing_newlines));
        }
        for section in &self.sections {
            out.push_str(&section.render_name(&opts.section.prefix, &opts.section.suffix));
            out.push_str(&section.render_contents());
            out.push_str(&"\n".repeat(opts.section.trailing_newlines));
        }
        out
    }
}
