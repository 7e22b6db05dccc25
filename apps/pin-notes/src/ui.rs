//! UI rendering for pin-notes.

use crate::app::{App, Button, Focus};
use crate::notification::Notification;
use crate::picker::FilePicker;
use crate::session::Layout as PaneLayout;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Modern Note Taking App";

pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = app.session.theme().palette();
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(TITLE)
        .style(palette.title())
        .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    draw_panes(f, app, &palette, chunks[1]);
    draw_buttons(f, app, &palette, chunks[2]);
    draw_status_bar(f, app, &palette, chunks[3]);

    if let Some(picker) = &app.picker {
        draw_picker(f, picker, &palette);
    }
    if let Some(notification) = &app.notification {
        draw_notification(f, notification, &palette);
    }
}

fn draw_panes(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    match app.session.layout() {
        PaneLayout::SinglePane => draw_active(f, app, palette, area),
        PaneLayout::SplitPane => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            draw_active(f, app, palette, chunks[0]);
            draw_pinned(f, app, palette, chunks[1]);
        }
    }
}

fn panel_block<'a>(title: &'a str, palette: &Palette, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        palette.base()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), palette.title()))
        .title_alignment(Alignment::Center)
        .border_style(border_style)
        .style(palette.text_area())
}

fn draw_active(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let editing = app.focus == Focus::Editor && app.picker.is_none() && app.notification.is_none();
    let block = panel_block("Active Note", palette, editing);

    if app.editor.is_empty() && !editing {
        let placeholder = Paragraph::new("Empty note. Tab back to the editor to type.")
            .style(palette.text_area().add_modifier(Modifier::DIM))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let inner = block.inner(area);
    let (top, left) = app
        .editor
        .scroll_into_view(inner.height as usize, inner.width as usize);
    let (row, col) = app.editor.cursor();

    let text: Vec<Line> = app
        .editor
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if editing && i == row {
                cursor_line(line, col, palette)
            } else {
                Line::from(line.as_str())
            }
        })
        .collect();

    // No wrapping: the viewport follows the cursor in both directions.
    let paragraph = Paragraph::new(text)
        .block(block)
        .scroll((top as u16, left as u16));
    f.render_widget(paragraph, area);
}

fn cursor_line<'a>(line: &'a str, col: usize, palette: &Palette) -> Line<'a> {
    let cursor_style = Style::default().bg(palette.fg).fg(palette.text_bg);
    let split = line.char_indices().nth(col).map(|(i, _)| i);

    match split {
        Some(at) => {
            let next = line[at..]
                .chars()
                .next()
                .map_or(line.len(), |c| at + c.len_utf8());
            Line::from(vec![
                Span::raw(&line[..at]),
                Span::styled(&line[at..next], cursor_style),
                Span::raw(&line[next..]),
            ])
        }
        None => Line::from(vec![Span::raw(line), Span::styled(" ", cursor_style)]),
    }
}

fn draw_pinned(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = panel_block("Pinned Notes", palette, false);
    let paragraph = Paragraph::new(app.session.pinned().unwrap_or_default())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.pinned_scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn draw_buttons(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.base())
        .style(Style::default().bg(palette.button_bar_bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let theme_width = app.button_label(Button::Theme).len() as u16 + 8;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(theme_width)])
        .split(inner);

    let mut left = Vec::new();
    for button in [Button::Save, Button::Open, Button::Pin, Button::Delete] {
        left.push(button_span(app, palette, button));
        left.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(left)), chunks[0]);

    let right = Paragraph::new(Line::from(button_span(app, palette, Button::Theme)))
        .alignment(Alignment::Right);
    f.render_widget(right, chunks[1]);
}

fn button_span<'a>(app: &App, palette: &Palette, button: Button) -> Span<'a> {
    let colors = match button {
        Button::Save => palette.save,
        Button::Open => palette.open,
        Button::Pin => palette.pin,
        Button::Delete => palette.delete,
        Button::Theme => palette.theme,
    };

    let mut style = colors.style();
    if !app.is_enabled(button) {
        style = Style::default()
            .bg(palette.button_bar_bg)
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);
    }
    if app.focus == Focus::Buttons && app.selected_button == button {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }

    Span::styled(
        format!(" {} {} ", app.button_label(button), button.shortcut()),
        style,
    )
}

fn draw_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let status = format!(
        " note {} -> {} | Tab buttons | PgUp/PgDn pinned | ^L clear | ^Q quit ",
        app.session.counter(),
        app.session.save_path().display()
    );
    f.render_widget(
        Paragraph::new(status).style(palette.base().add_modifier(Modifier::DIM)),
        area,
    );
}

fn draw_picker(f: &mut Frame, picker: &FilePicker, palette: &Palette) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| ListItem::new(format!("{}{}", entry.icon(), entry.name)))
        .collect();

    let title = format!(" Open Note - {} ", picker.dir.display());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(picker_footer(picker))
                .style(palette.text_area()),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(picker.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn picker_footer(picker: &FilePicker) -> Line<'static> {
    match &picker.error {
        Some(error) => Line::from(Span::styled(
            format!(" {error} | Esc cancel "),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(format!(
            " {} .{} files | Enter open | Esc cancel ",
            picker.file_count(),
            picker.extension
        ))
        .alignment(Alignment::Right),
    }
}

fn draw_notification(f: &mut Frame, notification: &Notification, palette: &Palette) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let level = notification.level;
    let text = vec![
        Line::from(""),
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} {} ", level.icon(), notification.title()))
                .border_style(Style::default().fg(level.color()))
                .style(palette.text_area()),
        );
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.notes_dir = dir.path().to_path_buf();
        config.picker.start_dir = dir.path().to_path_buf();
        (dir, App::new(config))
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_single_pane() {
        let (_dir, mut app) = app();
        let screen = render(&mut app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Active Note"));
        assert!(!screen.contains("Pinned Notes"));
        assert!(screen.contains("Open Notes"));
        assert!(screen.contains("Dark Theme"));
        assert!(screen.contains("note_1.txt"));
    }

    #[test]
    fn test_split_pane_after_pin() {
        let (_dir, mut app) = app();
        app.session.edit_active("remember this");
        app.activate(Button::Pin);
        app.notification = None;
        let screen = render(&mut app);
        assert!(screen.contains("Pinned Notes"));
        assert!(screen.contains("remember this"));
    }

    #[test]
    fn test_notification_overlay() {
        let (_dir, mut app) = app();
        app.activate(Button::Save);
        let screen = render(&mut app);
        assert!(screen.contains("Warning"));
        assert!(screen.contains("Cannot save empty note!"));
    }

    #[test]
    fn test_picker_overlay() {
        let (dir, mut app) = app();
        std::fs::write(dir.path().join("todo.txt"), "x").unwrap();
        app.activate(Button::Open);
        let screen = render(&mut app);
        assert!(screen.contains("Open Note"));
        assert!(screen.contains("todo.txt"));
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_active_panel_follows_typing() {
        let (_dir, mut app) = app();
        for i in 0..40 {
            if i > 0 {
                app.handle_key(key(KeyCode::Enter));
            }
            for c in format!("line{i:02}").chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
        }
        let screen = render(&mut app);
        assert!(screen.contains("line39"));
        assert!(!screen.contains("line00"));

        for _ in 0..39 {
            app.handle_key(key(KeyCode::Up));
        }
        let screen = render(&mut app);
        assert!(screen.contains("line00"));
        assert!(!screen.contains("line39"));
    }

    #[test]
    fn test_long_loaded_note_scrolls_with_cursor() {
        let (dir, mut app) = app();
        let text: Vec<String> = (0..60).map(|i| format!("row{i:02}")).collect();
        let path = dir.path().join("long.txt");
        std::fs::write(&path, text.join("\n")).unwrap();
        app.load_path(&path);
        app.notification = None;

        let screen = render(&mut app);
        assert!(screen.contains("row00"));
        assert!(!screen.contains("row59"));

        for _ in 0..59 {
            app.handle_key(key(KeyCode::Down));
        }
        let screen = render(&mut app);
        assert!(screen.contains("row59"));
    }

    #[test]
    fn test_pinned_panel_scrolls() {
        let (_dir, mut app) = app();
        let text: Vec<String> = (0..60).map(|i| format!("pin{i:02}")).collect();
        app.session.edit_active(text.join("\n"));
        app.activate(Button::Pin);
        app.notification = None;
        assert!(!render(&mut app).contains("pin59"));

        for _ in 0..5 {
            app.handle_key(key(KeyCode::PageDown));
        }
        let screen = render(&mut app);
        assert!(screen.contains("pin59"));
        assert!(!screen.contains("pin00"));
    }

    #[test]
    fn test_picker_shows_read_error() {
        let (dir, mut app) = app();
        app.config.picker.start_dir = dir.path().join("gone");
        app.activate(Button::Open);
        let screen = render(&mut app);
        assert!(screen.contains("Cannot read"));
    }

    #[test]
    fn test_cursor_line_splits_on_chars() {
        let palette = crate::theme::ThemeState::Dark.palette();
        let line = cursor_line("añb", 1, &palette);
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["a", "ñ", "b"]);

        let line = cursor_line("ab", 2, &palette);
        assert_eq!(line.spans.len(), 2);
    }
}
