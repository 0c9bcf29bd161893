//! Todo Resource
//!
//! Todos get one extra intent: flipping the completion flag without the form.

use serde::Serialize;

use super::ResourceClient;
use crate::config;
use crate::models::Todo;

/// Body of the toggle request: only the flag travels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionPatch {
    pub completed: bool,
}

impl CompletionPatch {
    /// Patch that flips `todo`'s current state
    pub fn toggled(todo: &Todo) -> Self {
        Self {
            completed: !todo.completed,
        }
    }

    pub fn apply(&self, todo: &mut Todo) {
        todo.completed = self.completed;
    }
}

pub fn todo_client() -> ResourceClient<Todo> {
    ResourceClient::new(config::TODOS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_body_carries_only_flag() {
        let todo = Todo { todo: "a".into(), ..Todo::default() };
        let body = serde_json::to_value(CompletionPatch::toggled(&todo)).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let original = Todo { todo: "a".into(), completed: false, user_id: 3 };
        let mut todo = original.clone();

        CompletionPatch::toggled(&todo).apply(&mut todo);
        assert!(todo.completed);
        assert_eq!(todo.todo, "a");

        CompletionPatch::toggled(&todo).apply(&mut todo);
        assert_eq!(todo, original);
    }
}
