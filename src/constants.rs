// src/constants.rs
//
// Application-wide constants.

/// Storage key holding the JSON-serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Storage key holding the theme preference (`system`, `light` or `dark`).
pub const THEME_KEY: &str = "theme";

/// Directory name below the platform data/config directories.
pub const APP_DIR: &str = "notepad";

pub const STORAGE_FILE: &str = "storage.json";

pub const CONFIG_FILE: &str = "notepad.toml";

/// Quiet period after the last edit before a composing note is saved.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1000;

/// Pause before a simulated summary is shown.
pub const DEFAULT_SUMMARY_DELAY_MS: u64 = 1500;

/// Width of the content preview column in `list`.
pub const PREVIEW_WIDTH: usize = 48;

/// Delay in milliseconds after opening the browser before returning.
///
/// The browser reads the temporary HTML file asynchronously; returning
/// immediately would delete the file before it has been loaded.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
