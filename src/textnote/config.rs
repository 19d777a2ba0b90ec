use crate::error::{Result, TextnoteError};
use crate::parser::HeaderPattern;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for textnote, stored in `<notes dir>/config.json`.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Opts {
    pub header: HeaderOpts,
    pub section: SectionOpts,
    pub file: FileOpts,
    pub archive: ArchiveOpts,
}

/// The date line at the top of every note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderOpts {
    pub prefix: String,
    pub suffix: String,
    pub trailing_newlines: usize,
    pub time_format: String,
}

impl Default for HeaderOpts {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            trailing_newlines: 1,
            time_format: "[%a] %d %b %Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SectionOpts {
    pub prefix: String,
    pub suffix: String,
    pub trailing_newlines: usize,
    /// Sections of a new note, in order
    pub names: Vec<String>,
}

impl Default for SectionOpts {
    fn default() -> Self {
        Self {
            prefix: "___".to_string(),
            suffix: "___".to_string(),
            trailing_newlines: 1,
            names: vec!["TODO".to_string(), "DONE".to_string(), "NOTES".to_string()],
        }
    }
}

/// Naming of daily note files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileOpts {
    /// Extension without the leading dot
    pub ext: String,
    pub time_format: String,
}

impl Default for FileOpts {
    fn default() -> Self {
        Self {
            ext: "txt".to_string(),
            time_format: "%Y-%m-%d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArchiveOpts {
    /// Notes at least this many days old are archived
    pub after_days: u32,
    pub file_prefix: String,
    pub header_prefix: String,
    pub header_suffix: String,
    /// Delimiters of the dated entry headers inside archive sections
    pub section_content_prefix: String,
    pub section_content_suffix: String,
    pub section_content_time_format: String,
    pub month_time_format: String,
}

impl Default for ArchiveOpts {
    fn default() -> Self {
        Self {
            after_days: 14,
            file_prefix: "archive-".to_string(),
            header_prefix: "ARCHIVE ".to_string(),
            header_suffix: String::new(),
            section_content_prefix: "[".to_string(),
            section_content_suffix: "]".to_string(),
            section_content_time_format: "%Y-%m-%d".to_string(),
            month_time_format: "%b%Y".to_string(),
        }
    }
}

impl Opts {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let opts: Opts = serde_json::from_str(&content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Checks everything that would otherwise fail half-way through a command.
    pub fn validate(&self) -> Result<()> {
        HeaderPattern::new(&self.section.prefix, &self.section.suffix)?;
        HeaderPattern::new(
            &self.archive.section_content_prefix,
            &self.archive.section_content_suffix,
        )?;

        for format in [
            &self.header.time_format,
            &self.file.time_format,
            &self.archive.section_content_time_format,
            &self.archive.month_time_format,
        ] {
            validate_time_format(format)?;
        }

        if self.section.names.is_empty() {
            return Err(TextnoteError::InvalidConfig(
                "at least one section name is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &self.section.names {
            if name.is_empty() || name.contains('\n') {
                return Err(TextnoteError::InvalidConfig(format!(
                    "invalid section name [{}]",
                    name
                )));
            }
            if !seen.insert(name) {
                return Err(TextnoteError::InvalidConfig(format!(
                    "duplicate section name [{}]",
                    name
                )));
            }
        }

        if self.file.ext.is_empty() {
            return Err(TextnoteError::InvalidConfig(
                "file extension cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The file extension with its leading dot.
    pub fn file_ext(&self) -> String {
        if self.file.ext.starts_with('.') {
            self.file.ext.clone()
        } else {
            format!(".{}", self.file.ext)
        }
    }
}

fn validate_time_format(format: &str) -> Result<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TextnoteError::InvalidConfig(format!(
            "invalid time format [{}]",
            format
        )));
    }
    Ok(())
}
