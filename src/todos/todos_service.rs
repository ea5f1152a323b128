use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::todos::todos_model::{NewTodo, Todo, TodoKind};
use crate::todos::todos_traits::{TodoRepositoryTrait, TodoServiceTrait};

pub struct TodoService {
    todo_repo: Arc<dyn TodoRepositoryTrait>,
}

impl TodoService {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryTrait>) -> Self {
        TodoService { todo_repo }
    }
}

#[async_trait]
impl TodoServiceTrait for TodoService {
    fn get_todos(&self, user_id: &str, kind: TodoKind) -> Result<Vec<Todo>> {
        self.todo_repo.load_todos(user_id, kind)
    }

    async fn add_todo(&self, user_id: &str, new_todo: NewTodo) -> Result<Todo> {
        let label = new_todo.label.trim();
        if label.is_empty() {
            return Err(ValidationError::MissingField("label".to_string()).into());
        }

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            label: label.to_string(),
            kind: new_todo.kind.as_str().to_string(),
            completed: false,
            created_at: chrono::Utc::now().naive_utc(),
        };

        debug!("Adding {} todo for user {}", todo.kind, user_id);
        self.todo_repo.insert_todo(todo)
    }

    async fn toggle_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo> {
        let todo = self.todo_repo.get_todo(user_id, todo_id)?;
        self.todo_repo
            .set_completed(user_id, todo_id, !todo.completed)
    }

    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<usize> {
        self.todo_repo.delete_todo(user_id, todo_id)
    }

    async fn clear_completed(&self, user_id: &str, kind: TodoKind) -> Result<usize> {
        debug!("Clearing completed {} todos for user {}", kind.as_str(), user_id);
        self.todo_repo.delete_completed(user_id, kind)
    }
}
