use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textnote", version)]
#[command(about = "Daily plain-text notes with monthly archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes directory (defaults to $TEXTNOTE_DIR, then the platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create today's note if needed and print its path
    #[command(alias = "o")]
    Open {
        /// Date of the note (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Copy section contents from the note of this date (YYYY-MM-DD)
        #[arg(short, long)]
        copy: Option<String>,

        /// Sections to copy (repeatable), defaults to all configured sections
        #[arg(short, long = "section", requires = "copy")]
        sections: Vec<String>,

        /// Clear copied sections in the source note
        #[arg(long, requires = "copy")]
        delete: bool,
    },

    /// Move old notes into monthly archives
    Archive {
        /// Archive every note before today regardless of age
        #[arg(long)]
        now: bool,

        /// Keep notes after archiving them
        #[arg(long)]
        keep: bool,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// List archive files instead
        #[arg(short, long)]
        archives: bool,
    },

    /// Show the configuration file (default), its path, or the active configuration
    Config {
        /// Print the path of the configuration file
        #[arg(short, long, conflicts_with_all = ["active", "file"])]
        path: bool,

        /// Print the configuration in effect, defaults included
        #[arg(short, long, conflicts_with = "file")]
        active: bool,

        /// Print the contents of the configuration file
        #[arg(short, long)]
        file: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_with_copy() {
        let cli = Cli::try_parse_from([
            "textnote", "open", "--copy", "2026-10-16", "-s", "TODO", "-s", "NOTES", "--delete",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Open {
                copy,
                sections,
                delete,
                date,
            }) => {
                assert_eq!(copy.as_deref(), Some("2026-10-16"));
                assert_eq!(sections, ["TODO", "NOTES"]);
                assert!(delete);
                assert!(date.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn section_requires_copy() {
        assert!(Cli::try_parse_from(["textnote", "open", "-s", "TODO"]).is_err());
    }

    #[test]
    fn global_flags() {
        let cli = Cli::try_parse_from(["textnote", "ls", "--dir", "/tmp/notes", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/notes")));
        assert!(matches!(cli.command, Some(Commands::List { archives: false })));
    }

    #[test]
    fn config_views_are_exclusive() {
        let cli = Cli::try_parse_from(["textnote", "config", "--active"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: false,
                active: true,
                file: false
            })
        ));
        assert!(Cli::try_parse_from(["textnote", "config", "-p", "-a"]).is_err());
    }
}
