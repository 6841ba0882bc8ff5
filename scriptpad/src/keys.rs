//! Key binding table

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use services_editor::EditorEvent;

/// What a key press means to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Forward to the editor service
    Event(EditorEvent),
    /// Ask for a path to open
    PromptOpen,
    /// Ask for a path to save to
    PromptSaveAs,
    Ignored,
}

pub fn map_key(key: KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('o') => Input::PromptOpen,
            KeyCode::Char('s') => Input::Event(EditorEvent::Save),
            KeyCode::Char('e') => Input::PromptSaveAs,
            KeyCode::Char('q') => Input::Event(EditorEvent::Quit),
            _ => Input::Ignored,
        };
    }

    match key.code {
        KeyCode::Char(ch) => Input::Event(EditorEvent::Insert(ch)),
        KeyCode::Enter => Input::Event(EditorEvent::Newline),
        KeyCode::Backspace => Input::Event(EditorEvent::Backspace),
        KeyCode::Delete => Input::Event(EditorEvent::Delete),
        KeyCode::Left => Input::Event(EditorEvent::CursorLeft),
        KeyCode::Right => Input::Event(EditorEvent::CursorRight),
        KeyCode::Up => Input::Event(EditorEvent::CursorUp),
        KeyCode::Down => Input::Event(EditorEvent::CursorDown),
        _ => Input::Ignored,
    }
}
