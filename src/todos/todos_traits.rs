use async_trait::async_trait;

use crate::errors::Result;
use crate::todos::todos_model::{NewTodo, Todo, TodoKind};

/// Trait for todo repository operations
pub trait TodoRepositoryTrait: Send + Sync {
    fn load_todos(&self, user_id: &str, kind: TodoKind) -> Result<Vec<Todo>>;
    fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo>;
    fn insert_todo(&self, todo: Todo) -> Result<Todo>;
    fn set_completed(&self, user_id: &str, todo_id: &str, completed: bool) -> Result<Todo>;
    fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<usize>;
    fn delete_completed(&self, user_id: &str, kind: TodoKind) -> Result<usize>;
}

/// Trait for todo service operations
#[async_trait]
pub trait TodoServiceTrait: Send + Sync {
    fn get_todos(&self, user_id: &str, kind: TodoKind) -> Result<Vec<Todo>>;
    async fn add_todo(&self, user_id: &str, new_todo: NewTodo) -> Result<Todo>;
    async fn toggle_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo>;
    async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<usize>;
    async fn clear_completed(&self, user_id: &str, kind: TodoKind) -> Result<usize>;
}
