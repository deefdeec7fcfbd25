//! Persistent user settings: keyboard shortcuts, theme and auto-save.
//!
//! Stored as a JSON document. A missing or unreadable document is never
//! fatal; the built-in defaults are used instead.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name used when no platform config directory is available.
pub const FALLBACK_FILE: &str = "image_slicer_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid shortcut '{0}'")]
    InvalidShortcut(String),
}

/// A command that can be bound to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddImages,
    SliceImages,
    ClearSlices,
    ToggleCutMode,
    NextImage,
    PreviousImage,
    ClearAllImages,
    SaveImages,
    UndoVertical,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::AddImages,
        Action::SliceImages,
        Action::ClearSlices,
        Action::ToggleCutMode,
        Action::NextImage,
        Action::PreviousImage,
        Action::ClearAllImages,
        Action::SaveImages,
        Action::UndoVertical,
    ];

    /// Human-readable name for menus and the shortcut editor.
    pub fn label(self) -> &'static str {
        match self {
            Action::AddImages => "Add images",
            Action::SliceImages => "Slice images",
            Action::ClearSlices => "Clear cuts",
            Action::ToggleCutMode => "Toggle cut mode",
            Action::NextImage => "Next image",
            Action::PreviousImage => "Previous image",
            Action::ClearAllImages => "Remove all images",
            Action::SaveImages => "Save images",
            Action::UndoVertical => "Undo vertical crop",
        }
    }

    fn default_shortcut(self) -> &'static str {
        match self {
            Action::AddImages => "Ctrl+O",
            Action::SliceImages => "Ctrl+S",
            Action::ClearSlices => "Ctrl+C",
            Action::ToggleCutMode => "Ctrl+M",
            Action::NextImage => "ArrowRight",
            Action::PreviousImage => "ArrowLeft",
            Action::ClearAllImages => "Ctrl+Delete",
            Action::SaveImages => "Ctrl+Shift+S",
            Action::UndoVertical => "Ctrl+Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[serde(alias = "lightly")]
    Light,
    #[default]
    #[serde(alias = "darkly")]
    Dark,
}

/// A parsed key combination such as `Ctrl+Shift+S`.
///
/// Modifiers are case-insensitive (`Control` is accepted for `Ctrl`). The
/// older `<Control-Shift-s>` form is read as well. Single-character keys
/// are uppercased and the bare arrow names are expanded (`Right` becomes
/// `ArrowRight`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: String,
}

impl Shortcut {
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let invalid = || SettingsError::InvalidShortcut(text.to_string());
        let trimmed = text.trim();

        let parts: Vec<&str> = match trimmed.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            Some(inner) => inner.split('-').collect(),
            None => trimmed.split('+').collect(),
        };
        let (key, modifiers) = parts.split_last().ok_or_else(invalid)?;

        let mut shortcut = Shortcut {
            ctrl: false,
            shift: false,
            alt: false,
            key: normalize_key(key.trim()).ok_or_else(invalid)?,
        };
        for modifier in modifiers {
            match modifier.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => shortcut.ctrl = true,
                "shift" => shortcut.shift = true,
                "alt" => shortcut.alt = true,
                _ => return Err(invalid()),
            }
        }
        Ok(shortcut)
    }
}

fn normalize_key(key: &str) -> Option<String> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (None, _) => None,
        (Some(c), None) => Some(c.to_ascii_uppercase().to_string()),
        _ => Some(match key {
            "Left" | "Right" | "Up" | "Down" => format!("Arrow{}", key),
            other => other.to_string(),
        }),
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// The persisted settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hotkeys: BTreeMap<Action, String>,
    pub theme: Theme,
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkeys: Action::ALL
                .iter()
                .map(|a| (*a, a.default_shortcut().to_string()))
                .collect(),
            theme: Theme::Dark,
            auto_save: true,
        }
    }
}

impl Settings {
    /// Default document location for this platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("lility").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_FILE))
    }

    /// Load settings, falling back to the defaults when the document is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings document. Actions missing from it keep
    /// their default shortcut.
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings = serde_json::from_str(&text)?;
        for action in Action::ALL {
            settings
                .hotkeys
                .entry(action)
                .or_insert_with(|| action.default_shortcut().to_string());
        }
        Ok(settings)
    }

    /// Write the whole document, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(io_err)
    }

    /// The parsed shortcut bound to `action`.
    pub fn shortcut(&self, action: Action) -> Result<Shortcut, SettingsError> {
        let text = self
            .hotkeys
            .get(&action)
            .map(String::as_str)
            .unwrap_or(action.default_shortcut());
        Shortcut::parse(text)
    }

    /// Bind `action` to a new shortcut after checking that it parses.
    pub fn set_shortcut(&mut self, action: Action, text: &str) -> Result<(), SettingsError> {
        let shortcut = Shortcut::parse(text)?;
        self.hotkeys.insert(action, shortcut.to_string());
        Ok(())
    }
}
