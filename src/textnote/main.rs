use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use textnote::api::{
    parse_date, ArchiveOptions, CmdMessage, CmdResult, ConfigView, CopyRequest, MessageLevel,
    TextnoteApi,
};
use textnote::config::Opts;
use textnote::error::{Result, TextnoteError};
use textnote::logging::init_logging;
use textnote::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

const DIR_ENV: &str = "TEXTNOTE_DIR";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = match init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let dir = notes_dir(&cli)?;
    let opts = Opts::load(&dir)?;
    let mut api = TextnoteApi::new(FileStore::new(dir), opts)?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Open {
            date,
            copy,
            sections,
            delete,
        }) => handle_open(&mut api, today, date, copy, sections, delete),
        Some(Commands::Archive { now, keep }) => {
            let result = api.archive(today, ArchiveOptions { now, keep })?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::List { archives }) => handle_list(&api, archives),
        Some(Commands::Config { path, active, .. }) => {
            let view = if path {
                ConfigView::Path
            } else if active {
                ConfigView::Active
            } else {
                ConfigView::File
            };
            handle_config(&api, view)
        }
        None => handle_open(&mut api, today, None, None, Vec::new(), false),
    }
}

fn notes_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var(DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("com", "textnote", "textnote")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            TextnoteError::Api(format!(
                "Could not determine a notes directory, set ${} or pass --dir",
                DIR_ENV
            ))
        })
}

fn handle_open(
    api: &mut TextnoteApi<FileStore>,
    today: NaiveDate,
    date: Option<String>,
    copy: Option<String>,
    sections: Vec<String>,
    delete: bool,
) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => today,
    };

    let result = match copy {
        Some(from) => {
            let request = CopyRequest {
                from: parse_date(&from)?,
                sections,
                delete,
            };
            api.copy_into_note(date, &request)?
        }
        None => api.open_note(date)?,
    };

    print_messages(&result.messages);
    print_paths(&result);
    Ok(())
}

fn handle_list(api: &TextnoteApi<FileStore>, archives: bool) -> Result<()> {
    let result = api.list_notes(archives)?;
    for name in &result.listed_notes {
        println!("{}", name);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &TextnoteApi<FileStore>, view: ConfigView) -> Result<()> {
    let result = api.config(view)?;
    if let Some(path) = &result.config_path {
        println!("{}", path.display());
    }
    if let Some(text) = &result.config_file {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }
    if let Some(config) = &result.config {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_paths(result: &CmdResult) {
    for path in &result.note_paths {
        println!("{}", path.display());
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}
