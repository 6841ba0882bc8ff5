//! Terminal event loop
//!
//! Owns the terminal: raw mode, the alternate screen, and painting the
//! frames the view produces. All editing semantics live in the service;
//! this file only translates key presses and draws.

use crate::keys::{self, Input};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{cursor, QueueableCommand};
use services_editor::{Editor, EditorAction, EditorEvent, EditorView, Frame, FsEditorIo};
use std::io::{self, Write};
use std::path::PathBuf;
use syntax::{Rgb, Theme};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Open,
    SaveAs,
}

struct Prompt {
    kind: PromptKind,
    input: String,
}

impl Prompt {
    fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::Open => "Open file: ",
            PromptKind::SaveAs => "Save as: ",
        }
    }
}

/// Restores the terminal even when the loop unwinds.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        io::stdout().queue(EnterAlternateScreen)?.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().queue(LeaveAlternateScreen).and_then(|s| s.flush());
        let _ = terminal::disable_raw_mode();
    }
}

pub struct App {
    editor: Editor,
    theme: Theme,
    scroll_top: usize,
    prompt: Option<Prompt>,
    message: String,
}

impl App {
    pub fn new(path: Option<PathBuf>) -> io::Result<Self> {
        let editor = Editor::new(Box::new(FsEditorIo::new()));
        let mut app = Self {
            editor,
            theme: Theme::dark(),
            scroll_top: 0,
            prompt: None,
            message: String::new(),
        };

        if let Some(path) = path {
            app.dispatch(EditorEvent::Open(path));
        }
        Ok(app)
    }

    pub fn run(&mut self) -> io::Result<()> {
        let _guard = TerminalGuard::acquire()?;

        loop {
            self.draw()?;

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    /// Returns true when the loop should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return false;
        }

        match keys::map_key(key) {
            Input::Event(event) => {
                let action = self.dispatch(event);
                matches!(action, Some(EditorAction::Quit))
            }
            Input::PromptOpen => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::Open,
                    input: String::new(),
                });
                false
            }
            Input::PromptSaveAs => {
                self.open_save_as_prompt();
                false
            }
            Input::Ignored => false,
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
            }
            KeyCode::Backspace => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.input.push(ch);
                }
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    if prompt.input.is_empty() {
                        return;
                    }
                    let path = PathBuf::from(prompt.input);
                    let event = match prompt.kind {
                        PromptKind::Open => EditorEvent::Open(path),
                        PromptKind::SaveAs => EditorEvent::SaveAs(path),
                    };
                    self.dispatch(event);
                }
            }
            _ => {}
        }
    }

    fn open_save_as_prompt(&mut self) {
        let input = self
            .editor
            .state()
            .document()
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.prompt = Some(Prompt {
            kind: PromptKind::SaveAs,
            input,
        });
    }

    /// Forward one event to the service and react to its action.
    fn dispatch(&mut self, event: EditorEvent) -> Option<EditorAction> {
        match self.editor.process(event) {
            Ok(EditorAction::PromptSaveAs) => {
                self.open_save_as_prompt();
                Some(EditorAction::PromptSaveAs)
            }
            Ok(EditorAction::Saved(path)) => {
                self.message = format!("Saved {}", path.display());
                Some(EditorAction::Saved(path))
            }
            Ok(EditorAction::Loaded(path)) => {
                self.scroll_top = 0;
                self.message = format!("Opened {}", path.display());
                Some(EditorAction::Loaded(path))
            }
            Ok(action) => {
                self.message.clear();
                Some(action)
            }
            Err(e) => {
                warn!(error = %e, "editor operation failed");
                self.message = e.to_string();
                None
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let text_rows = height.saturating_sub(2).max(1) as usize;
        let view = EditorView::new(text_rows);

        self.scroll_top = view.scroll_to_cursor(self.editor.state().cursor(), self.scroll_top);
        let status = self.editor.status();
        let frame = view.render(self.editor.state(), &self.theme, &status, self.scroll_top);

        let mut out = io::stdout();
        out.queue(cursor::Hide)?;
        out.queue(SetTitle(title_of(&frame)))?;

        for row in 0..text_rows {
            out.queue(cursor::MoveTo(0, row as u16))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            if let Some(line) = frame.lines.get(row) {
                for segment in &line.segments {
                    match segment.color {
                        Some(color) => out.queue(SetForegroundColor(to_term_color(color)))?,
                        None => out.queue(ResetColor)?,
                    };
                    out.queue(crossterm::style::Print(&segment.text))?;
                }
                out.queue(ResetColor)?;
            }
        }

        // Status bar, then the prompt or message line.
        out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        out.queue(SetForegroundColor(Color::DarkGrey))?;
        out.queue(crossterm::style::Print(truncated(&frame.status, width)))?;
        out.queue(ResetColor)?;

        out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        let bottom = match &self.prompt {
            Some(prompt) => format!("{}{}", prompt.label(), prompt.input),
            None => self.message.clone(),
        };
        out.queue(crossterm::style::Print(truncated(&bottom, width)))?;

        self.place_cursor(&mut out, &frame, width, height)?;
        out.queue(cursor::Show)?;
        out.flush()
    }

    fn place_cursor(
        &self,
        out: &mut io::Stdout,
        frame: &Frame,
        width: u16,
        height: u16,
    ) -> io::Result<()> {
        if let Some(prompt) = &self.prompt {
            let col = (prompt.label().chars().count() + prompt.input.chars().count()) as u16;
            out.queue(cursor::MoveTo(
                col.min(width.saturating_sub(1)),
                height.saturating_sub(1),
            ))?;
            return Ok(());
        }

        let cursor_pos = frame.cursor;
        let screen_row = cursor_pos.row.saturating_sub(frame.scroll_top);
        let line = self
            .editor
            .state()
            .document()
            .buffer()
            .line(cursor_pos.row)
            .unwrap_or("");
        let col_bytes = cursor_pos.col.min(line.len());
        let screen_col = line[..col_bytes].chars().count();

        out.queue(cursor::MoveTo(
            (screen_col as u16).min(width.saturating_sub(1)),
            (screen_row as u16).min(height.saturating_sub(3)),
        ))?;
        Ok(())
    }
}

fn title_of(frame: &Frame) -> String {
    if frame.dirty {
        format!("{} *", frame.title)
    } else {
        frame.title.clone()
    }
}

fn to_term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn truncated(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}
