use anyhow::Result;
use notepad::application::NoteStore;
use notepad::cli::args::Command;
use notepad::infrastructure::config::{Config, EditorConfig, SummaryConfig};
use notepad::infrastructure::{LocalStorage, StorageNoteRepository};
use notepad::Context;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture owning a temporary storage file
#[allow(dead_code)]
pub struct TestStorage {
    _temp_dir: TempDir,
    pub storage_path: PathBuf,
}

#[allow(dead_code)]
impl TestStorage {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let storage_path = temp_dir.path().join("storage.json");
        Ok(Self {
            _temp_dir: temp_dir,
            storage_path,
        })
    }

    pub fn local_storage(&self) -> LocalStorage {
        LocalStorage::new(&self.storage_path)
    }

    /// Open a fresh store on this file, as a new process would
    pub fn open_store(&self) -> Result<NoteStore<StorageNoteRepository>> {
        Ok(NoteStore::open(StorageNoteRepository::new(self.local_storage()))?)
    }

    /// Context with no artificial delays
    pub fn context(&self) -> Context {
        let config = Config {
            editor: EditorConfig {
                autosave_delay_ms: 0,
            },
            summary: SummaryConfig { delay_ms: 0 },
            ..Default::default()
        };
        Context::new(config, self.storage_path.clone())
    }

    /// Run a command with `input` on stdin and return what it printed
    pub fn run(&self, command: Command, input: &str) -> Result<String> {
        let mut input = input.as_bytes();
        let mut out = Vec::new();
        notepad::execute(&self.context(), command, &mut input, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Id printed in "Created note <id>" / "Saved note <id>" lines
#[allow(dead_code)]
pub fn printed_id(output: &str) -> String {
    output
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}
