#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Clears the task if `id` is the active one.
    ///
    /// Returns false for results of tasks that were superseded or cleared;
    /// callers drop those results.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub signup: TaskState,
    pub usage: TaskState,
}

impl Tasks {
    pub fn is_any_running(&self) -> bool {
        self.login.is_running() || self.signup.is_running() || self.usage.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        assert_eq!(seq.next_id(), TaskId(0));
        assert_eq!(seq.next_id(), TaskId(1));
    }

    #[test]
    fn test_finish_only_matches_active_task() {
        let mut state = TaskState::default();
        state.start(TaskId(3));

        assert!(!state.finish_if_active(TaskId(2)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(3)));
        assert!(!state.is_running());
        assert!(!state.finish_if_active(TaskId(3)));
    }

    #[test]
    fn test_tasks_any_running() {
        let mut tasks = Tasks::default();
        assert!(!tasks.is_any_running());

        tasks.usage.start(TaskId(0));
        assert!(tasks.is_any_running());
        assert!(!tasks.login.is_running());

        tasks.usage.clear();
        tasks.signup.start(TaskId(1));
        assert!(tasks.is_any_running());
        assert!(tasks.signup.finish_if_active(TaskId(1)));
        assert!(!tasks.is_any_running());
    }
}
