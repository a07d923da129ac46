// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context as _, Result};
use application::{Confirmation, EditorSession, NoteDeleter, NoteStore, PreferenceRepository};
use domain::summary::summarize;
use domain::{Theme, View};
use infrastructure::renderer::ContentRenderer;
use infrastructure::{
    AssumeYes, Config, LocalStorage, PromptConfirmation, StorageNoteRepository, StoragePreferences,
};
use ports::{HtmlPresenter, TextPresenter};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

/// Resolved configuration and storage location for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub storage: LocalStorage,
}

impl Context {
    pub fn new(config: Config, storage_path: PathBuf) -> Self {
        Self {
            config,
            storage: LocalStorage::new(storage_path),
        }
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::discover(args.config.as_deref())?;
        let storage_path = match &args.storage {
            Some(path) => {
                debug!(?path, "Using provided storage path");
                path.clone()
            }
            None => config.storage_path()?,
        };
        Ok(Self::new(config, storage_path))
    }

    fn open_store(&self) -> Result<NoteStore<StorageNoteRepository>> {
        let repository = StorageNoteRepository::new(self.storage.clone());
        NoteStore::open(repository)
            .with_context(|| format!("Failed to open notes at {}", self.storage.path().display()))
    }

    fn preferences(&self) -> StoragePreferences {
        StoragePreferences::new(self.storage.clone())
    }
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notepad with arguments");
    let context = Context::from_args(&args)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&context, args.command, &mut stdin.lock(), &mut stdout.lock())
}

/// Run one command against the configured storage.
/// `input` feeds `compose` and confirmation prompts; everything user-facing goes to `out`.
pub fn execute<I: BufRead, W: Write>(
    context: &Context,
    command: Command,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List {
            search,
            favorites,
            json,
        } => {
            let store = context.open_store()?;
            let view = if favorites { View::Favorites } else { View::All };
            let notes = store.list(view, search.as_deref().unwrap_or(""));
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
            } else {
                write!(out, "{}", TextPresenter::new().render_list(&notes))?;
            }
        }

        Command::Show { note_id, json } => {
            let store = context.open_store()?;
            let note = store.get(&note_id)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(note)?)?;
            } else {
                write!(out, "{}", TextPresenter::new().render_detail(note))?;
            }
        }

        Command::New { title, content } => {
            let mut store = context.open_store()?;
            match store.create(&title, &content)? {
                Some(note) => writeln!(out, "Created note {}", note.id)?,
                None => writeln!(out, "Nothing to save: title and content are empty")?,
            }
        }

        Command::Edit {
            note_id,
            title,
            content,
        } => {
            if title.is_none() && content.is_none() {
                bail!("Nothing to change: pass --title and/or --content");
            }
            let mut store = context.open_store()?;
            let current = store.get(&note_id)?;
            let title = title.unwrap_or_else(|| current.title.clone());
            let content = content.unwrap_or_else(|| current.content.clone());

            if store.update(&note_id, &title, &content)? {
                writeln!(out, "Updated note {}", note_id)?;
            } else {
                writeln!(out, "No changes")?;
            }
        }

        Command::Compose { note_id, title } => {
            let mut store = context.open_store()?;
            let delay = context.config.autosave_delay();
            let mut session = match &note_id {
                Some(id) => EditorSession::open(&store, id, delay)?,
                None => EditorSession::new_note(delay),
            };
            if let Some(title) = title {
                session.set_title(&title, Instant::now());
            }

            for line in input.lines() {
                let line = line.context("Failed to read input")?;
                if session.poll(&mut store, Instant::now())? {
                    debug!(note_id = ?session.note_id(), "Auto-saved");
                }
                session.append_line(&line, Instant::now());
            }

            match session.leave(&mut store)? {
                Some(id) => writeln!(out, "Saved note {}", id)?,
                None => writeln!(out, "Nothing to save: title and content are empty")?,
            }
        }

        Command::Favorite { note_id } => {
            let mut store = context.open_store()?;
            if store.toggle_favorite(&note_id)? {
                writeln!(out, "Added {} to favorites", note_id)?;
            } else {
                writeln!(out, "Removed {} from favorites", note_id)?;
            }
        }

        Command::Delete { note_id, yes } => {
            let mut store = context.open_store()?;
            let removed = if yes {
                delete_with(AssumeYes, &mut store, &note_id)?
            } else {
                delete_with(PromptConfirmation::new(input), &mut store, &note_id)?
            };
            if removed {
                writeln!(out, "Deleted note {}", note_id)?;
            } else {
                writeln!(out, "Kept note {}", note_id)?;
            }
        }

        Command::Summarize { note_id } => {
            let store = context.open_store()?;
            let note = store.get(&note_id)?;
            let summary = summarize(&note.content)?;

            writeln!(out, "Summarizing...")?;
            out.flush()?;
            std::thread::sleep(context.config.summary_delay());
            writeln!(out, "{}", summary)?;
        }

        Command::View {
            note_id,
            summary,
            stdout,
        } => {
            let store = context.open_store()?;
            let note = store.get(&note_id)?;
            let theme = context.preferences().load_theme()?;
            let summary = if summary {
                Some(summarize(&note.content)?)
            } else {
                None
            };

            let html = HtmlPresenter::with_theme(theme).render(note, summary.as_ref());
            if stdout {
                writeln!(out, "{}", html)?;
            } else {
                info!(note_id = %note.id, "Opening note in browser");
                let mut renderer = ContentRenderer::new();
                let path = renderer.create_temp_file(&html)?;
                renderer.open_in_browser(&path)?;
            }
        }

        Command::Theme { theme } => {
            let mut preferences = context.preferences();
            match theme {
                None => writeln!(out, "{}", preferences.load_theme()?)?,
                Some(value) => {
                    let theme: Theme = value.parse()?;
                    preferences.save_theme(theme)?;
                    writeln!(out, "Theme set to {}", theme)?;
                }
            }
        }
    }
    Ok(())
}

fn delete_with<C: Confirmation>(
    confirmation: C,
    store: &mut NoteStore<StorageNoteRepository>,
    note_id: &str,
) -> Result<bool> {
    let deleter = NoteDeleter::new(confirmation);
    Ok(deleter.delete_note(store, note_id)?.is_some())
}
