use super::*;
use crate::paths::PathResolver;
use completion::{CompletionEngine, CompletionState, FsPathLister};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fs;
use std::path::{MAIN_SEPARATOR, Path};
use std::sync::Arc;

fn session_at(dir: &Path, typed: &str) -> PromptSession {
    let engine = CompletionEngine::new(Arc::new(FsPathLister::new()), PathResolver::with_home(None));
    let initial = format!("{}{}{}", dir.display(), MAIN_SEPARATOR, typed);
    PromptSession::new(&initial, engine)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn with_subdirs(names: &[&str]) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    for name in names {
        fs::create_dir(tmp.path().join(name)).unwrap();
    }
    tmp
}

fn expected(dir: &Path, name: &str) -> String {
    format!("{}{sep}{}{sep}", dir.display(), name, sep = MAIN_SEPARATOR)
}

#[test]
fn test_tab_cycles_through_matching_directories() {
    let tmp = with_subdirs(&["bar", "baz", "qux"]);
    let mut session = session_at(tmp.path(), "ba");

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "bar"));

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "baz"));

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "bar"));
}

#[test]
fn test_completion_rewrite_does_not_leave_completion_mode() {
    let tmp = with_subdirs(&["bar"]);
    let mut session = session_at(tmp.path(), "b");

    session.handle_key(key(KeyCode::Tab));
    assert!(session.completion_state().is_completing());
    assert_eq!(session.completion_state().previous(), Some("bar"));
}

#[test]
fn test_typing_after_completion_descends() {
    let tmp = with_subdirs(&["bar", "baz"]);
    fs::create_dir(tmp.path().join("bar").join("inner")).unwrap();
    let mut session = session_at(tmp.path(), "ba");

    session.handle_key(key(KeyCode::Tab));
    session.handle_key(key(KeyCode::Char('i')));
    assert_eq!(session.completion_state(), &CompletionState::NotCompleting);

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(
        session.buffer().as_str(),
        format!("{}inner{}", expected(tmp.path(), "bar"), MAIN_SEPARATOR)
    );
}

#[test]
fn test_tab_without_match_keeps_typed_text() {
    let tmp = with_subdirs(&["bar"]);
    let mut session = session_at(tmp.path(), "zz");
    let before = session.buffer().as_str().to_string();

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), before);
    assert_eq!(session.completion_state().previous(), None);
}

#[test]
fn test_files_are_not_completed() {
    let tmp = with_subdirs(&["notes-dir"]);
    fs::write(tmp.path().join("notes.txt"), b"").unwrap();
    let mut session = session_at(tmp.path(), "not");

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "notes-dir"));

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "notes-dir"));
}

#[test]
fn test_cursor_moves_do_not_touch_completion_state() {
    let tmp = with_subdirs(&["bar", "baz"]);
    let mut session = session_at(tmp.path(), "ba");

    session.handle_key(key(KeyCode::Tab));
    session.handle_key(key(KeyCode::Left));
    session.handle_key(key(KeyCode::Home));
    assert!(session.completion_state().is_completing());

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "baz"));
}

#[test]
fn test_enter_submits_raw_buffer() {
    let mut session = session_at(Path::new("/tmp"), "new.txt");
    assert_eq!(
        session.handle_key(key(KeyCode::Enter)),
        SessionEvent::Submit(format!("/tmp{MAIN_SEPARATOR}new.txt"))
    );
}

#[test]
fn test_cancel_keys() {
    let mut session = session_at(Path::new("/tmp"), "");
    assert_eq!(session.handle_key(key(KeyCode::Esc)), SessionEvent::Cancel);
    assert_eq!(session.handle_key(ctrl('c')), SessionEvent::Cancel);

    // Ctrl-D only cancels on an empty buffer
    assert_eq!(session.handle_key(ctrl('d')), SessionEvent::Continue);
    session.handle_key(ctrl('u'));
    assert_eq!(session.handle_key(ctrl('d')), SessionEvent::Cancel);
}

#[test]
fn test_key_release_is_ignored() {
    let mut session = session_at(Path::new("/tmp"), "");
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;

    session.handle_key(release);
    assert_eq!(session.buffer().as_str(), format!("/tmp{MAIN_SEPARATOR}"));
}

#[test]
fn test_ctrl_w_then_tab_completes_parent() {
    let tmp = with_subdirs(&["alpha"]);
    let mut session = session_at(tmp.path(), "alpha/deep");

    session.handle_key(ctrl('w'));
    session.handle_key(ctrl('w'));
    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "alpha"));
}

#[test]
fn test_host_edit_goes_through_engine() {
    let tmp = with_subdirs(&["bar"]);
    let mut session = session_at(tmp.path(), "");

    session.edit(&format!("{}{}b\t", tmp.path().display(), MAIN_SEPARATOR));
    assert_eq!(session.buffer().as_str(), expected(tmp.path(), "bar"));
}
