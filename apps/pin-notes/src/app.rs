//! Application state and key dispatch.

use crate::config::Config;
use crate::editor::Editor;
use crate::error::NoteError;
use crate::notification::Notification;
use crate::picker::{FilePicker, PickerOutcome};
use crate::session::NoteSession;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where non-shortcut keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Buttons,
}

/// The buttons of the action bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Save,
    Open,
    Pin,
    Delete,
    Theme,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Save,
        Button::Open,
        Button::Pin,
        Button::Delete,
        Button::Theme,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            Self::Save => "^S",
            Self::Open => "^O",
            Self::Pin => "^P",
            Self::Delete => "^D",
            Self::Theme => "^T",
        }
    }
}

/// Lines moved per PageUp/PageDown in the pinned panel.
const PINNED_PAGE: usize = 10;

pub struct App {
    pub session: NoteSession,
    pub editor: Editor,
    pub config: Config,
    pub focus: Focus,
    pub selected_button: Button,
    /// First visible line of the pinned panel.
    pub pinned_scroll: usize,
    pub picker: Option<FilePicker>,
    pub notification: Option<Notification>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            session: NoteSession::new(config.notes_dir.clone()),
            editor: Editor::new(),
            config,
            focus: Focus::Editor,
            selected_button: Button::Save,
            pinned_scroll: 0,
            picker: None,
            notification: None,
        }
    }

    /// Build the app, loading `file` into the active note when given.
    ///
    /// A file that cannot be read leaves an empty note and an error modal.
    pub fn startup(config: Config, file: Option<PathBuf>) -> Self {
        let mut app = Self::new(config);
        if let Some(path) = file {
            app.load_path(&path);
        }
        app
    }

    /// Label shown on a button; the theme button names the current theme.
    pub fn button_label(&self, button: Button) -> &'static str {
        match button {
            Button::Save => "Save",
            Button::Open => "Open Notes",
            Button::Pin => "Pin Note",
            Button::Delete => "Delete",
            Button::Theme => self.session.theme().label(),
        }
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Delete => self.session.can_delete(),
            _ => true,
        }
    }

    /// Handle one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notification = None;
            }
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            return true;
        }

        if self.picker.is_some() {
            self.handle_picker_key(key);
            return false;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('s') => self.activate(Button::Save),
                KeyCode::Char('o') => self.activate(Button::Open),
                KeyCode::Char('p') => self.activate(Button::Pin),
                KeyCode::Char('d') => self.activate(Button::Delete),
                KeyCode::Char('t') => self.activate(Button::Theme),
                KeyCode::Char('l') => self.clear_note(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::PageDown => {
                self.scroll_pinned(PINNED_PAGE as isize);
                return false;
            }
            KeyCode::PageUp => {
                self.scroll_pinned(-(PINNED_PAGE as isize));
                return false;
            }
            _ => {}
        }

        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Editor => Focus::Buttons,
                Focus::Buttons => Focus::Editor,
            };
            return false;
        }

        match self.focus {
            Focus::Buttons => self.handle_button_key(key),
            Focus::Editor => self.handle_editor_key(key),
        }
        false
    }

    /// Scroll the pinned panel, stopping at its last line.
    fn scroll_pinned(&mut self, delta: isize) {
        let lines = self.session.pinned().map_or(0, |p| p.lines().count());
        let max = lines.saturating_sub(1);
        self.pinned_scroll = self.pinned_scroll.saturating_add_signed(delta).min(max);
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selected_button = self.selected_button.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.selected_button = self.selected_button.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.selected_button),
            KeyCode::Esc => self.focus = Focus::Editor,
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => return,
        }
        self.session.edit_active(self.editor.text());
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        let outcome = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                picker.move_up();
                PickerOutcome::Pending
            }
            KeyCode::Down | KeyCode::Char('j') => {
                picker.move_down();
                PickerOutcome::Pending
            }
            KeyCode::Enter => picker.enter(),
            KeyCode::Esc => PickerOutcome::Cancelled,
            _ => PickerOutcome::Pending,
        };

        match outcome {
            PickerOutcome::Pending => {}
            PickerOutcome::Cancelled => {
                debug!("open cancelled");
                self.picker = None;
            }
            PickerOutcome::Chosen(path) => {
                self.picker = None;
                self.load_path(&path);
            }
        }
    }

    /// Run the action behind a button. Disabled buttons do nothing.
    pub fn activate(&mut self, button: Button) {
        if !self.is_enabled(button) {
            debug!(?button, "ignored disabled button");
            return;
        }
        match button {
            Button::Save => self.save_note(),
            Button::Open => self.open_picker(),
            Button::Pin => self.pin_note(),
            Button::Delete => self.delete_pinned_note(),
            Button::Theme => {
                self.session.toggle_theme();
            }
        }
    }

    fn save_note(&mut self) {
        self.notification = Some(match self.session.save_active() {
            Ok(_) => Notification::success(format!(
                "Note saved successfully as {}!",
                self.session.save_target()
            )),
            Err(e) => failure(e, "Failed to save note"),
        });
    }

    fn open_picker(&mut self) {
        let picker = &self.config.picker;
        self.picker = Some(FilePicker::new(
            picker.start_dir.clone(),
            picker.extension.clone(),
            picker.show_hidden,
        ));
    }

    /// Load a file into the active note and report the outcome.
    pub fn load_path(&mut self, path: &Path) {
        self.notification = Some(match self.session.load_active(path) {
            Ok(()) => {
                self.editor.set_text(self.session.active());
                Notification::success(format!(
                    "Note loaded successfully from {}!",
                    path.display()
                ))
            }
            Err(e) => failure(e, "Failed to load note"),
        });
    }

    fn pin_note(&mut self) {
        self.notification = Some(match self.session.pin_active() {
            Ok(()) => {
                self.editor.set_text(self.session.active());
                self.pinned_scroll = 0;
                Notification::success("Note pinned successfully!")
            }
            Err(e) => failure(e, "Failed to pin note"),
        });
    }

    fn delete_pinned_note(&mut self) {
        self.notification = Some(match self.session.delete_pinned() {
            Ok(()) => {
                self.pinned_scroll = 0;
                Notification::success("Pinned note deleted successfully!")
            }
            Err(e) => failure(e, "Failed to delete pinned note"),
        });
    }

    fn clear_note(&mut self) {
        self.session.clear_active();
        self.editor.set_text(self.session.active());
    }
}

/// Rejected actions warn; I/O failures are errors.
fn failure(e: NoteError, context: &str) -> Notification {
    if e.is_rejection() {
        Notification::warning(e.to_string())
    } else {
        tracing::error!(error = %e, "{context}");
        Notification::error(format!("{context}: {e}"))
    }
}
