use crate::commands::CmdResult;
use crate::config::{Opts, CONFIG_FILENAME};
use crate::error::{Result, TextnoteError};
use crate::store::NoteStore;

/// What `config` shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigView {
    /// Location of the config file
    Path,
    /// The config file as written; an error when there is none
    #[default]
    File,
    /// The configuration in effect, defaults included
    Active,
}

pub fn run<S: NoteStore>(store: &S, opts: &Opts, view: ConfigView) -> Result<CmdResult> {
    let result = CmdResult::default();
    match view {
        ConfigView::Path => Ok(result.with_config_path(store.path(CONFIG_FILENAME))),
        ConfigView::File => {
            let text = store.read(CONFIG_FILENAME)?.ok_or_else(|| {
                TextnoteError::ConfigNotFound(store.path(CONFIG_FILENAME).display().to_string())
            })?;
            Ok(result.with_config_file(text))
        }
        ConfigView::Active => {
            opts.validate()?;
            Ok(result.with_config(opts.clone()))
        }
    }
}
