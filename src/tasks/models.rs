/// Stable identity for a task, allocated by the store from a
/// monotonically increasing counter. Never reused, so a held id can go
/// stale (task deleted) but can never silently point at a different task
/// the way a list index would after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
