//! End-to-end editor session tests
//!
//! Drive the editor through full event sequences the way the shell would,
//! with in-memory I/O (or a temp directory where the filesystem matters).

use editor_core::Position;
use services_editor::{
    Editor, EditorAction, EditorError, EditorEvent, EditorView, FsEditorIo, IoError,
    MemoryEditorIo, StatusConfig, StatusLine,
};
use std::path::PathBuf;
use syntax::{LanguageId, Theme, TokenKind};

fn editor(io: MemoryEditorIo) -> Editor {
    Editor::new(Box::new(io))
}

fn type_text(ed: &mut Editor, text: &str) {
    for ch in text.chars() {
        let event = if ch == '\n' {
            EditorEvent::Newline
        } else {
            EditorEvent::Insert(ch)
        };
        ed.process(event).unwrap();
    }
}

#[test]
fn test_open_python_script_highlights_keywords() {
    let io = MemoryEditorIo::new().with_file(
        "/home/user/script.py",
        "import os\n\ndef main():\n    return os.getcwd()\n",
    );
    let mut ed = editor(io);

    let action = ed
        .process(EditorEvent::Open(PathBuf::from("/home/user/script.py")))
        .unwrap();
    assert_eq!(
        action,
        EditorAction::Loaded(PathBuf::from("/home/user/script.py"))
    );
    assert_eq!(ed.state().language(), LanguageId::Python);
    assert_eq!(ed.state().title(), "ScriptPad - /home/user/script.py");

    let content = ed.state().document().content();
    let keyword_texts: Vec<&str> = ed
        .state()
        .spans()
        .iter()
        .filter(|s| s.kind == TokenKind::Keyword)
        .map(|s| &content[s.start..s.end])
        .collect();
    assert!(keyword_texts.contains(&"import"));
    assert!(keyword_texts.contains(&"def"));
    assert!(keyword_texts.contains(&"return"));
}

#[test]
fn test_unknown_extension_stays_plain() {
    let io = MemoryEditorIo::new().with_file("/notes.idk", "def looks_like_python(): pass");
    let mut ed = editor(io);

    ed.process(EditorEvent::Open(PathBuf::from("/notes.idk")))
        .unwrap();
    assert_eq!(ed.state().language(), LanguageId::Plain);
    assert!(ed
        .state()
        .spans()
        .iter()
        .all(|s| s.kind == TokenKind::Plain));
}

#[test]
fn test_untitled_save_prompts_exactly_once() {
    let mut ed = editor(MemoryEditorIo::new());
    type_text(&mut ed, "first draft");

    assert_eq!(ed.process(EditorEvent::Save).unwrap(), EditorAction::PromptSaveAs);
    // Still untitled until the shell supplies a path.
    assert_eq!(ed.process(EditorEvent::Save).unwrap(), EditorAction::PromptSaveAs);

    let path = PathBuf::from("/draft.txt");
    ed.process(EditorEvent::SaveAs(path.clone())).unwrap();

    type_text(&mut ed, " edited");
    assert_eq!(
        ed.process(EditorEvent::Save).unwrap(),
        EditorAction::Saved(path)
    );
}

#[test]
fn test_load_error_leaves_session_untouched() {
    let mut ed = editor(MemoryEditorIo::new());
    type_text(&mut ed, "unsaved work");
    ed.process(EditorEvent::CursorLeft).unwrap();
    let cursor_before = ed.state().cursor();

    let err = ed
        .process(EditorEvent::Open(PathBuf::from("/gone.py")))
        .unwrap_err();
    assert!(matches!(err, EditorError::Io(IoError::NotFound(_))));

    assert_eq!(ed.state().document().content(), "unsaved work");
    assert_eq!(ed.state().cursor(), cursor_before);
    assert!(ed.state().document().is_untitled());
}

#[test]
fn test_save_error_keeps_document_dirty() {
    let mut ed = editor(MemoryEditorIo::new().failing_saves());
    type_text(&mut ed, "content");

    let err = ed
        .process(EditorEvent::SaveAs(PathBuf::from("/ro/doc.txt")))
        .unwrap_err();
    assert!(matches!(err, EditorError::Io(IoError::PermissionDenied(_))));
    assert!(ed.state().document().is_dirty());
    assert!(ed.state().document().is_untitled());
}

#[test]
fn test_filesystem_round_trip_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.bat");
    let original = "@echo off\r\nrem comment\r\nset X=1\r\n";
    std::fs::write(&path, original).unwrap();

    let mut ed = Editor::new(Box::new(FsEditorIo::new()));
    ed.process(EditorEvent::Open(path.clone())).unwrap();
    assert_eq!(ed.state().language(), LanguageId::Batch);

    ed.process(EditorEvent::Save).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), original.as_bytes());
}

#[test]
fn test_status_line_tracks_cursor_and_size() {
    let io = MemoryEditorIo::new().with_file("/abc.txt", "abc");
    let mut ed = editor(io);
    ed.process(EditorEvent::Open(PathBuf::from("/abc.txt")))
        .unwrap();

    let status = ed.status();
    assert_eq!(
        status.to_string(),
        "Ln 1, Col 1   |   3 chars   |   100%   |   Unix (LF)   |   UTF-8"
    );

    ed.process(EditorEvent::CursorRight).unwrap();
    ed.process(EditorEvent::CursorRight).unwrap();
    assert_eq!(ed.status().column, 3);
}

#[test]
fn test_save_as_bat_switches_to_batch_highlighting() {
    let mut ed = editor(MemoryEditorIo::new());
    type_text(&mut ed, "echo hello");
    assert_eq!(ed.state().language(), LanguageId::Plain);

    ed.process(EditorEvent::SaveAs(PathBuf::from("/run.bat")))
        .unwrap();
    assert_eq!(ed.state().language(), LanguageId::Batch);
    assert!(ed
        .state()
        .spans()
        .iter()
        .any(|s| s.kind == TokenKind::Keyword));
}

#[test]
fn test_identical_sessions_produce_identical_snapshots() {
    let script = "x = 1\nprint(x)\n";
    let run = || {
        let io = MemoryEditorIo::new().with_file("/t.py", script);
        let mut ed = editor(io);
        ed.process(EditorEvent::Open(PathBuf::from("/t.py"))).unwrap();
        ed.process(EditorEvent::CursorDown).unwrap();
        type_text(&mut ed, "# note\n");
        ed.state().snapshot()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_rendered_frame_matches_document() {
    let io = MemoryEditorIo::new().with_file("/page.html", "<p class=\"a\">hi</p>");
    let mut ed = editor(io);
    ed.process(EditorEvent::Open(PathBuf::from("/page.html")))
        .unwrap();

    let view = EditorView::new(10);
    let status = StatusLine::derive(
        ed.state().document(),
        ed.state().cursor(),
        &StatusConfig::default(),
    );
    let frame = view.render(ed.state(), &Theme::dark(), &status, 0);

    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.lines[0].text(), "<p class=\"a\">hi</p>");
    assert_eq!(frame.title, "ScriptPad - /page.html");

    let theme = Theme::dark();
    let tag = frame.lines[0]
        .segments
        .iter()
        .find(|s| s.text == "p")
        .unwrap();
    assert_eq!(tag.color, theme.color(TokenKind::Keyword));
}

#[test]
fn test_editing_reflows_highlighting() {
    let mut ed = editor(MemoryEditorIo::new());
    ed.process(EditorEvent::SaveAs(PathBuf::from("/s.py"))).unwrap();

    type_text(&mut ed, "de");
    assert!(ed
        .state()
        .spans()
        .iter()
        .all(|s| s.kind != TokenKind::Keyword));

    type_text(&mut ed, "f");
    assert!(ed
        .state()
        .spans()
        .iter()
        .any(|s| s.kind == TokenKind::Keyword));

    ed.process(EditorEvent::Backspace).unwrap();
    assert!(ed
        .state()
        .spans()
        .iter()
        .all(|s| s.kind != TokenKind::Keyword));
}
