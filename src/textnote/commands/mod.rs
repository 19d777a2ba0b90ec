use crate::config::Opts;
use std::path::PathBuf;

pub mod archive;
pub mod config;
pub mod helpers;
pub mod list;
pub mod open;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Note files written or removed by the command
    pub affected_notes: Vec<String>,
    pub listed_notes: Vec<String>,
    pub note_paths: Vec<PathBuf>,
    pub config: Option<Opts>,
    pub config_path: Option<PathBuf>,
    /// Raw contents of the config file, as written by the user
    pub config_file: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<String>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    pub fn with_config(mut self, config: Opts) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_config_file(mut self, text: String) -> Self {
        self.config_file = Some(text);
        self
    }
}
