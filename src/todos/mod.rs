pub mod todos_model;
pub mod todos_repository;
pub mod todos_service;
pub mod todos_traits;

pub use todos_model::{NewTodo, Todo, TodoKind};
pub use todos_repository::TodoRepository;
pub use todos_service::TodoService;
pub use todos_traits::{TodoRepositoryTrait, TodoServiceTrait};
