use crate::tasks::models::TaskId;
use crate::tasks::store::TaskListStore;
use crate::tui::handlers::{
    HelpModeAction, KeyEventHandler, KeyHandler, NormalModeAction, SearchModeAction,
    TextFieldAction,
};
use crate::tui::input::TextCursor;
use anyhow::Result;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input,
    Search,
    Edit,
    Help,
}

/// Presentation shell around the store: resolves the list cursor to a
/// task id before issuing any intent, and keeps per-field text cursors.
/// Everything authoritative lives in `store`; everything here is view
/// state.
pub struct App {
    pub store: TaskListStore,
    pub mode: Mode,
    pub cursor: usize,
    pub draft_cursor: TextCursor,
    pub edit_cursor: TextCursor,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskListStore) -> Self {
        Self {
            store,
            mode: Mode::Normal,
            cursor: 0,
            draft_cursor: TextCursor::new(),
            edit_cursor: TextCursor::new(),
            should_quit: false,
        }
    }

    /// The cursor addresses positions in the *visible* (filtered) list,
    /// never the full one, so an intent can only ever target a task the
    /// user can see.
    pub fn task_under_cursor(&self) -> Option<TaskId> {
        self.store
            .visible_tasks()
            .nth(self.cursor)
            .map(|(_, task)| task.id)
    }

    /// Keeps the cursor inside the visible list after deletions or
    /// filter changes shrink it.
    fn clamp_cursor(&mut self) {
        let count = self.store.visible_count();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    fn handle_normal_action(&mut self, action: NormalModeAction) {
        match action {
            NormalModeAction::Quit => {
                self.should_quit = true;
            }
            NormalModeAction::HandleEscape => {
                // First Esc drops the pending selection, a second one
                // clears the filter.
                if self.store.selected_count() > 0 {
                    self.store.clear_selection();
                } else if !self.store.search_term().is_empty() {
                    self.store.set_search_term("");
                    self.clamp_cursor();
                }
            }
            NormalModeAction::MoveCursorUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            NormalModeAction::MoveCursorDown => {
                if self.cursor + 1 < self.store.visible_count() {
                    self.cursor += 1;
                }
            }
            NormalModeAction::ToggleComplete => {
                if let Some(id) = self.task_under_cursor() {
                    self.store.toggle_complete(id);
                }
            }
            NormalModeAction::BeginEdit => {
                if let Some(id) = self.task_under_cursor() {
                    if self.store.begin_edit(id) {
                        let text = self.store.edit_draft().map(|d| d.text.as_str()).unwrap_or("");
                        self.edit_cursor = TextCursor::at_end(text);
                        self.mode = Mode::Edit;
                    }
                }
            }
            NormalModeAction::EnterInputMode => {
                self.draft_cursor = TextCursor::at_end(&self.store.draft);
                self.mode = Mode::Input;
            }
            NormalModeAction::EnterSearchMode => {
                self.mode = Mode::Search;
            }
            NormalModeAction::ToggleSelection => {
                if let Some(id) = self.task_under_cursor() {
                    self.store.toggle_selection(id);
                }
            }
            NormalModeAction::DeleteSelected => {
                self.store.delete_selected();
                self.clamp_cursor();
            }
            NormalModeAction::ToggleHelpMode => {
                self.mode = Mode::Help;
            }
            NormalModeAction::None => {}
        }
    }

    fn handle_input_action(&mut self, action: TextFieldAction) {
        match action {
            TextFieldAction::Cancel => {
                // The draft survives; only focus leaves the field.
                self.mode = Mode::Normal;
            }
            TextFieldAction::Confirm => {
                self.store.add_task();
                self.draft_cursor.clamp(&self.store.draft);
                self.clamp_cursor();
            }
            TextFieldAction::Backspace => {
                self.draft_cursor.backspace(&mut self.store.draft);
            }
            TextFieldAction::Delete => {
                self.draft_cursor.delete(&mut self.store.draft);
            }
            TextFieldAction::MoveCursorLeft => {
                self.draft_cursor.move_left(&self.store.draft);
            }
            TextFieldAction::MoveCursorRight => {
                self.draft_cursor.move_right(&self.store.draft);
            }
            TextFieldAction::MoveCursorHome => {
                self.draft_cursor.move_home();
            }
            TextFieldAction::MoveCursorEnd => {
                self.draft_cursor.move_end(&self.store.draft);
            }
            TextFieldAction::InsertChar(c) => {
                self.draft_cursor.insert_char(&mut self.store.draft, c);
            }
            TextFieldAction::None => {}
        }
    }

    fn handle_edit_action(&mut self, action: TextFieldAction) {
        match action {
            TextFieldAction::Cancel => {
                self.store.cancel_edit();
                self.mode = Mode::Normal;
            }
            TextFieldAction::Confirm => {
                self.store.commit_edit();
                self.mode = Mode::Normal;
                self.clamp_cursor();
            }
            TextFieldAction::Backspace => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.backspace(buffer);
                }
            }
            TextFieldAction::Delete => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.delete(buffer);
                }
            }
            TextFieldAction::MoveCursorLeft => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.move_left(buffer);
                }
            }
            TextFieldAction::MoveCursorRight => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.move_right(buffer);
                }
            }
            TextFieldAction::MoveCursorHome => {
                self.edit_cursor.move_home();
            }
            TextFieldAction::MoveCursorEnd => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.move_end(buffer);
                }
            }
            TextFieldAction::InsertChar(c) => {
                if let Some(buffer) = self.store.edit_draft_mut() {
                    self.edit_cursor.insert_char(buffer, c);
                }
            }
            TextFieldAction::None => {}
        }
    }

    fn handle_search_action(&mut self, action: SearchModeAction) {
        match action {
            SearchModeAction::CancelSearch => {
                self.store.set_search_term("");
                self.clamp_cursor();
                self.mode = Mode::Normal;
            }
            SearchModeAction::ConfirmSearch => {
                self.mode = Mode::Normal;
            }
            SearchModeAction::Backspace => {
                let mut term = self.store.search_term().to_string();
                term.pop();
                self.store.set_search_term(term);
                self.clamp_cursor();
            }
            SearchModeAction::InsertChar(c) => {
                let mut term = self.store.search_term().to_string();
                term.push(c);
                self.store.set_search_term(term);
                self.clamp_cursor();
            }
            SearchModeAction::None => {}
        }
    }

    fn handle_help_action(&mut self, action: HelpModeAction) {
        if action == HelpModeAction::ExitHelpMode {
            self.mode = Mode::Normal;
        }
    }
}

impl KeyEventHandler for App {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Normal => {
                let action = KeyHandler::handle_normal_mode_key(key_event);
                self.handle_normal_action(action);
            }
            Mode::Input => {
                let action = KeyHandler::handle_text_field_key(key_event);
                self.handle_input_action(action);
            }
            Mode::Edit => {
                let action = KeyHandler::handle_text_field_key(key_event);
                self.handle_edit_action(action);
            }
            Mode::Search => {
                let action = KeyHandler::handle_search_mode_key(key_event);
                self.handle_search_action(action);
            }
            Mode::Help => {
                let action = KeyHandler::handle_help_mode_key(key_event);
                self.handle_help_action(action);
            }
        }
        Ok(())
    }
}
