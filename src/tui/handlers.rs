use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Pure key-to-intent mapping per mode. Execution happens in `App`; this
/// layer only decides what a key means so the bindings stay testable
/// without a terminal.
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Esc => NormalModeAction::HandleEscape,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveCursorDown,
            KeyCode::Enter => NormalModeAction::ToggleComplete,
            KeyCode::Char('e') => NormalModeAction::BeginEdit,
            KeyCode::Char('a') => NormalModeAction::EnterInputMode,
            KeyCode::Char('/') => NormalModeAction::EnterSearchMode,
            KeyCode::Char(' ') => NormalModeAction::ToggleSelection,
            KeyCode::Char('d') => NormalModeAction::DeleteSelected,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    /// Shared by the draft field and the edit modal; both are full text
    /// fields with a movable cursor.
    pub fn handle_text_field_key(key_event: KeyEvent) -> TextFieldAction {
        match key_event.code {
            KeyCode::Esc => TextFieldAction::Cancel,
            KeyCode::Enter => TextFieldAction::Confirm,
            KeyCode::Backspace => TextFieldAction::Backspace,
            KeyCode::Delete => TextFieldAction::Delete,
            KeyCode::Left => TextFieldAction::MoveCursorLeft,
            KeyCode::Right => TextFieldAction::MoveCursorRight,
            KeyCode::Home => TextFieldAction::MoveCursorHome,
            KeyCode::End => TextFieldAction::MoveCursorEnd,
            KeyCode::Char(c) => TextFieldAction::InsertChar(c),
            _ => TextFieldAction::None,
        }
    }

    pub fn handle_search_mode_key(key_event: KeyEvent) -> SearchModeAction {
        match key_event.code {
            KeyCode::Esc => SearchModeAction::CancelSearch,
            KeyCode::Enter => SearchModeAction::ConfirmSearch,
            KeyCode::Backspace => SearchModeAction::Backspace,
            KeyCode::Char(c) => SearchModeAction::InsertChar(c),
            _ => SearchModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    HandleEscape,
    MoveCursorUp,
    MoveCursorDown,
    ToggleComplete,
    BeginEdit,
    EnterInputMode,
    EnterSearchMode,
    ToggleSelection,
    DeleteSelected,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum TextFieldAction {
    None,
    Cancel,
    Confirm,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum SearchModeAction {
    None,
    CancelSearch,
    ConfirmSearch,
    Backspace,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

pub trait KeyEventHandler {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}
