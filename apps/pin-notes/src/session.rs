//! Note session: the active note, the pinned note and the save target.

use crate::error::{NoteError, NoteResult};
use crate::theme::ThemeState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which panels are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Only the active note.
    #[default]
    SinglePane,
    /// Active and pinned notes side by side.
    SplitPane,
}

/// Owns all note state. UI widgets read from it after each operation.
#[derive(Debug)]
pub struct NoteSession {
    active: String,
    pinned: Option<String>,
    counter: u32,
    notes_dir: PathBuf,
    theme: ThemeState,
}

impl NoteSession {
    /// New session writing `note_<N>.txt` files into `notes_dir`.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            active: String::new(),
            pinned: None,
            counter: 1,
            notes_dir: notes_dir.into(),
            theme: ThemeState::default(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn pinned(&self) -> Option<&str> {
        self.pinned.as_deref()
    }

    pub fn has_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    /// Delete is enabled iff a note is pinned.
    pub fn can_delete(&self) -> bool {
        self.has_pinned()
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// File name the active note is saved under.
    pub fn save_target(&self) -> String {
        format!("note_{}.txt", self.counter)
    }

    pub fn save_path(&self) -> PathBuf {
        self.notes_dir.join(self.save_target())
    }

    pub fn layout(&self) -> Layout {
        if self.has_pinned() {
            Layout::SplitPane
        } else {
            Layout::SinglePane
        }
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn edit_active(&mut self, text: impl Into<String>) {
        self.active = text.into();
    }

    pub fn clear_active(&mut self) {
        self.active.clear();
    }

    /// Write the trimmed active note to the save target, overwriting it.
    pub fn save_active(&self) -> NoteResult<PathBuf> {
        let content = self.active.trim();
        if content.is_empty() {
            warn!("rejected save of empty note");
            return Err(NoteError::EmptyNote { action: "save" });
        }

        let path = self.save_path();
        fs::write(&path, content).map_err(|e| NoteError::io(&path, e))?;
        info!(path = %path.display(), bytes = content.len(), "saved active note");
        Ok(path)
    }

    /// Replace the active note with the contents of `path`.
    ///
    /// The active note is left untouched if the file cannot be read or is
    /// not valid UTF-8.
    pub fn load_active(&mut self, path: &Path) -> NoteResult<()> {
        let content = fs::read_to_string(path).map_err(|e| NoteError::io(path, e))?;
        info!(path = %path.display(), bytes = content.len(), "loaded note");
        self.active = content;
        Ok(())
    }

    /// Move the active note into the pinned slot.
    pub fn pin_active(&mut self) -> NoteResult<()> {
        if self.active.trim().is_empty() {
            warn!("rejected pin of empty note");
            return Err(NoteError::EmptyNote { action: "pin" });
        }
        if self.has_pinned() {
            warn!("rejected pin while a note is already pinned");
            return Err(NoteError::AlreadyPinned);
        }

        self.pinned = Some(std::mem::take(&mut self.active));
        info!("pinned active note");
        Ok(())
    }

    /// Drop the pinned note and advance the save target to the next slot.
    pub fn delete_pinned(&mut self) -> NoteResult<()> {
        if self.pinned.take().is_none() {
            warn!("rejected delete with nothing pinned");
            return Err(NoteError::NothingPinned);
        }

        self.counter += 1;
        info!(save_target = %self.save_target(), "deleted pinned note");
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> ThemeState {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "toggled theme");
        self.theme
    }
}
