//! File selection dialog for opening notes.

use std::fs;
use std::path::{Path, PathBuf};

/// One row in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl PickerEntry {
    fn parent(path: &Path) -> Option<Self> {
        let parent = path.parent()?;
        Some(Self {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            is_dir: true,
        })
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            "▸ "
        } else {
            "  "
        }
    }
}

/// What a key press in the picker resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Still browsing.
    Pending,
    /// A file was chosen.
    Chosen(PathBuf),
    /// The dialog was dismissed without a choice.
    Cancelled,
}

/// Directory browser filtered to one file extension.
#[derive(Debug)]
pub struct FilePicker {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
    pub extension: String,
    pub show_hidden: bool,
    /// Why the current directory could not be listed, if it could not.
    pub error: Option<String>,
}

impl FilePicker {
    pub fn new(start_dir: impl Into<PathBuf>, extension: impl Into<String>, show_hidden: bool) -> Self {
        let start_dir = start_dir.into();
        // Absolute so that `..` can walk above the start directory.
        let dir = fs::canonicalize(&start_dir).unwrap_or(start_dir);
        let mut picker = Self {
            dir,
            entries: Vec::new(),
            selected: 0,
            extension: extension.into(),
            show_hidden,
            error: None,
        };
        picker.refresh();
        picker
    }

    /// Re-read the current directory.
    pub fn refresh(&mut self) {
        self.entries.clear();

        if let Some(parent) = PickerEntry::parent(&self.dir) {
            self.entries.push(parent);
        }

        let mut listed = Vec::new();
        self.error = None;
        match fs::read_dir(&self.dir) {
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list directory");
                self.error = Some(format!("Cannot read directory: {}", e.kind()));
            }
            Ok(read_dir) => {
                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();
                    if !self.show_hidden && name.starts_with('.') {
                        continue;
                    }
                    let is_dir = path.is_dir();
                    if !is_dir && !self.matches_extension(&path) {
                        continue;
                    }
                    listed.push(PickerEntry { name, path, is_dir });
                }
            }
        }

        listed.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        self.entries.extend(listed);

        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    pub fn current(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Enter the selected directory, or choose the selected file.
    pub fn enter(&mut self) -> PickerOutcome {
        let Some(entry) = self.current().cloned() else {
            return PickerOutcome::Pending;
        };

        if entry.is_dir {
            let came_from = self.dir.clone();
            self.dir = entry.path;
            self.selected = 0;
            self.refresh();
            if entry.name == ".." {
                if let Some(i) = self.entries.iter().position(|e| e.path == came_from) {
                    self.selected = i;
                }
            }
            PickerOutcome::Pending
        } else {
            PickerOutcome::Chosen(entry.path)
        }
    }

    /// Files (not directories) currently listed.
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir).count()
    }
}
