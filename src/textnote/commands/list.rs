use crate::commands::{CmdMessage, CmdResult};
use crate::config::Opts;
use crate::error::Result;
use crate::store::{is_archive_file, note_date, NoteStore};

/// Lists daily notes oldest first, or the archive files when `archives` is set.
pub fn run<S: NoteStore>(store: &S, opts: &Opts, archives: bool) -> Result<CmdResult> {
    let names = store.list()?;

    let listed: Vec<String> = if archives {
        names
            .into_iter()
            .filter(|name| is_archive_file(opts, name))
            .collect()
    } else {
        let mut dated: Vec<_> = names
            .into_iter()
            .filter_map(|name| note_date(opts, &name).map(|date| (date, name)))
            .collect();
        dated.sort();
        dated.into_iter().map(|(_, name)| name).collect()
    };

    let paths = listed.iter().map(|name| store.path(name)).collect();
    let mut result = CmdResult::default().with_note_paths(paths);
    if listed.is_empty() {
        result.add_message(CmdMessage::info(if archives {
            "No archives found."
        } else {
            "No notes found."
        }));
    }
    Ok(result.with_listed_notes(listed))
}
