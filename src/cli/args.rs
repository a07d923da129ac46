// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the notes storage file (optional)
    #[arg(short, long, value_name = "STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, newest first
    List {
        /// Case-insensitive filter on title and content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    New {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// Change the title and/or content of a note
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Write note content line by line from stdin, auto-saving as you go
    Compose {
        /// Existing note to append to; a new note is created otherwise
        #[arg(value_name = "NOTE_ID")]
        note_id: Option<String>,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// Toggle the favorite flag of a note
    Favorite {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Delete a note after confirmation
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show a simulated AI summary of a note
    Summarize {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Open a note as an HTML page in the browser
    View {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Include the simulated summary
        #[arg(long)]
        summary: bool,

        /// Print the HTML instead of opening the browser
        #[arg(long)]
        stdout: bool,
    },

    /// Show or set the theme preference (system, light, dark)
    Theme {
        #[arg(value_name = "THEME")]
        theme: Option<String>,
    },
}
