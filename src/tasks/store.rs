use crate::tasks::models::{Task, TaskId};
use std::collections::HashSet;

/// The task being edited and its scratch text, live only while the edit
/// surface is open.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: TaskId,
    pub text: String,
}

/// Owns the authoritative task list plus every piece of transient entry
/// state around it: the text-entry draft, the edit-in-progress draft, the
/// multi-select set, and the active search term.
///
/// All mutation goes through `&mut self` intent methods, handled one at a
/// time to completion, so no caller can ever act on a stale snapshot of
/// the list. Operations that take a `TaskId` validate it against the
/// current list and reject stale or unknown ids without mutating
/// anything, returning `false`.
#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    next_id: u64,
    pub draft: String,
    edit: Option<EditDraft>,
    selected: HashSet<TaskId>,
    search_term: String,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list from configured startup tasks. Whitespace-only
    /// entries are skipped, same as interactive entry.
    pub fn with_tasks<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for text in texts {
            store.draft = text.into();
            store.add_task();
        }
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a task from the current draft if it contains anything
    /// beyond whitespace. The draft is cleared afterward in every case,
    /// including the whitespace-only no-op.
    pub fn add_task(&mut self) -> bool {
        let added = if self.draft.trim().is_empty() {
            false
        } else {
            let id = self.alloc_id();
            let text = self.draft.clone();
            self.tasks.push(Task::new(id, text));
            true
        };
        self.draft.clear();
        added
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        match self.get(id) {
            Some(task) => {
                self.edit = Some(EditDraft {
                    id,
                    text: task.text.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Applies the edit draft to its task. The draft id is re-validated
    /// against the current list: the task may have been deleted since
    /// `begin_edit`, in which case the commit is rejected and nothing is
    /// mutated. The edit surface closes either way.
    pub fn commit_edit(&mut self) -> bool {
        match self.edit.take() {
            Some(draft) => match self.get_mut(draft.id) {
                Some(task) => {
                    task.text = draft.text;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit.as_ref()
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut String> {
        self.edit.as_mut().map(|draft| &mut draft.text)
    }

    pub fn toggle_selection(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
        true
    }

    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Removes every selected task, preserving the relative order of the
    /// remainder. The selection is cleared unconditionally afterward,
    /// whether or not anything was deleted.
    pub fn delete_selected(&mut self) {
        let selected = std::mem::take(&mut self.selected);
        self.tasks.retain(|task| !selected.contains(&task.id));
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Lazy view of the tasks whose text case-insensitively contains the
    /// search term, in list order, paired with each task's position in
    /// the full list. An empty term matches everything. Restartable: call
    /// again for a fresh pass.
    pub fn visible_tasks(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        let needle = self.search_term.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| task.text.to_lowercase().contains(&needle))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_tasks().count()
    }

    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskListStore {
        TaskListStore::with_tasks(texts.iter().copied())
    }

    fn texts(store: &TaskListStore) -> Vec<&str> {
        store.tasks().iter().map(|task| task.text.as_str()).collect()
    }

    #[test]
    fn test_add_task() {
        let mut store = TaskListStore::new();
        store.draft = "Wash car".to_string();

        assert!(store.add_task());
        assert_eq!(texts(&store), vec!["Wash car"]);
        assert!(!store.tasks()[0].completed);
        assert!(store.draft.is_empty());
    }

    #[test]
    fn test_add_task_whitespace_only_is_noop_but_clears_draft() {
        let mut store = TaskListStore::new();
        store.draft = "   \t".to_string();

        assert!(!store.add_task());
        assert!(store.tasks().is_empty());
        assert!(store.draft.is_empty());
    }

    #[test]
    fn test_add_task_allocates_fresh_ids() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![TaskId(0), TaskId(1), TaskId(2)]);
    }

    #[test]
    fn test_with_tasks_skips_blank_entries() {
        let store = store_with(&["a", "  ", "b"]);
        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_complete_is_self_inverse() {
        let mut store = store_with(&["Wash car"]);
        let id = store.tasks()[0].id;

        assert!(store.toggle_complete(id));
        assert!(store.tasks()[0].completed);

        assert!(store.toggle_complete(id));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_complete_unknown_id_rejected() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_complete(TaskId(99)));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_selection_is_self_inverse() {
        let mut store = store_with(&["a", "b"]);
        let id = store.tasks()[1].id;

        assert!(store.toggle_selection(id));
        assert!(store.is_selected(id));

        assert!(store.toggle_selection(id));
        assert!(!store.is_selected(id));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_toggle_selection_unknown_id_rejected() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_selection(TaskId(42)));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_delete_selected_preserves_order_and_clears_selection() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        let b = store.tasks()[1].id;
        let d = store.tasks()[3].id;

        store.toggle_selection(b);
        store.toggle_selection(d);
        store.delete_selected();

        assert_eq!(texts(&store), vec!["A", "C"]);
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_delete_selected_with_empty_selection_is_noop() {
        let mut store = store_with(&["A", "B"]);
        store.delete_selected();
        assert_eq!(texts(&store), vec!["A", "B"]);
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_stale_selection_never_aliases_another_task() {
        let mut store = store_with(&["A", "B"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;

        // Delete A while it is selected, then add a new task. The new
        // task occupies A's old position but gets a fresh id, so a
        // second bulk delete only removes what is actually selected.
        store.toggle_selection(a);
        store.delete_selected();
        store.draft = "C".to_string();
        store.add_task();

        store.toggle_selection(b);
        store.delete_selected();

        assert_eq!(texts(&store), vec!["C"]);
    }

    #[test]
    fn test_visible_tasks_empty_term_returns_all_in_order() {
        let store = store_with(&["A", "B", "C"]);
        let visible: Vec<(usize, &str)> = store
            .visible_tasks()
            .map(|(i, task)| (i, task.text.as_str()))
            .collect();
        assert_eq!(visible, vec![(0, "A"), (1, "B"), (2, "C")]);
    }

    #[test]
    fn test_visible_tasks_filters_case_insensitively() {
        let mut store = store_with(&["Buy milk", "Take out trash"]);
        store.set_search_term("ta");

        let visible: Vec<(usize, &str)> = store
            .visible_tasks()
            .map(|(i, task)| (i, task.text.as_str()))
            .collect();
        assert_eq!(visible, vec![(1, "Take out trash")]);
    }

    #[test]
    fn test_visible_tasks_is_restartable() {
        let mut store = store_with(&["Buy milk", "Take out trash"]);
        store.set_search_term("milk");

        assert_eq!(store.visible_tasks().count(), 1);
        assert_eq!(store.visible_tasks().count(), 1);
    }

    #[test]
    fn test_set_search_term_leaves_list_and_selection_alone() {
        let mut store = store_with(&["A", "B"]);
        let a = store.tasks()[0].id;
        store.toggle_selection(a);

        store.set_search_term("zzz");

        assert_eq!(texts(&store), vec!["A", "B"]);
        assert!(store.is_selected(a));
        assert_eq!(store.visible_count(), 0);
    }

    #[test]
    fn test_commit_edit_replaces_text_and_closes_surface() {
        let mut store = store_with(&["A", "B"]);
        let b = store.tasks()[1].id;

        assert!(store.begin_edit(b));
        assert!(store.is_editing());
        assert_eq!(store.edit_draft().unwrap().text, "B");

        *store.edit_draft_mut().unwrap() = "B2".to_string();
        assert!(store.commit_edit());

        assert_eq!(texts(&store), vec!["A", "B2"]);
        assert!(!store.is_editing());
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut store = store_with(&["A", "B"]);
        let b = store.tasks()[1].id;

        store.begin_edit(b);
        *store.edit_draft_mut().unwrap() = "B2".to_string();
        store.cancel_edit();

        assert_eq!(texts(&store), vec!["A", "B"]);
        assert!(!store.is_editing());
    }

    #[test]
    fn test_begin_edit_unknown_id_rejected() {
        let mut store = store_with(&["A"]);
        assert!(!store.begin_edit(TaskId(7)));
        assert!(!store.is_editing());
    }

    #[test]
    fn test_commit_edit_after_task_deleted_is_rejected() {
        let mut store = store_with(&["A", "B"]);
        let b = store.tasks()[1].id;

        store.begin_edit(b);
        *store.edit_draft_mut().unwrap() = "B2".to_string();

        store.toggle_selection(b);
        store.delete_selected();

        assert!(!store.commit_edit());
        assert_eq!(texts(&store), vec!["A"]);
        assert!(!store.is_editing());
    }

    #[test]
    fn test_commit_edit_without_begin_is_rejected() {
        let mut store = store_with(&["A"]);
        assert!(!store.commit_edit());
        assert_eq!(texts(&store), vec!["A"]);
    }

    #[test]
    fn test_full_scenario() {
        let mut store = TaskListStore::new();

        store.draft = "Wash car".to_string();
        store.add_task();
        assert_eq!(texts(&store), vec!["Wash car"]);

        let id = store.tasks()[0].id;
        store.toggle_complete(id);
        assert!(store.tasks()[0].completed);

        store.toggle_selection(id);
        assert_eq!(store.selected_count(), 1);

        store.delete_selected();
        assert!(store.tasks().is_empty());
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut store = store_with(&["a", "b", "c"]);
        let b = store.tasks()[1].id;
        store.toggle_complete(b);

        assert_eq!(store.total_tasks(), 3);
        assert_eq!(store.completed_tasks(), 1);
    }
}
