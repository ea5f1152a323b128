use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::todos;
use crate::todos::todos_model::{Todo, TodoKind};
use crate::todos::todos_traits::TodoRepositoryTrait;

pub struct TodoRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl TodoRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        TodoRepository { pool }
    }
}

impl TodoRepositoryTrait for TodoRepository {
    fn load_todos(&self, user_id: &str, kind: TodoKind) -> Result<Vec<Todo>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(todos::table
            .filter(todos::user_id.eq(user_id))
            .filter(todos::kind.eq(kind.as_str()))
            .order(todos::created_at.desc())
            .load::<Todo>(&mut conn)?)
    }

    fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo> {
        let mut conn = get_connection(&self.pool)?;
        todos::table
            .filter(todos::id.eq(todo_id))
            .filter(todos::user_id.eq(user_id))
            .first::<Todo>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Todo '{}'", todo_id)))
    }

    fn insert_todo(&self, todo: Todo) -> Result<Todo> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(todos::table)
            .values(&todo)
            .returning(todos::all_columns)
            .get_result(&mut conn)?)
    }

    fn set_completed(&self, user_id: &str, todo_id: &str, completed: bool) -> Result<Todo> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(
            todos::table
                .filter(todos::id.eq(todo_id))
                .filter(todos::user_id.eq(user_id)),
        )
        .set(todos::completed.eq(completed))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Todo '{}'", todo_id)));
        }

        self.get_todo(user_id, todo_id)
    }

    fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            todos::table
                .filter(todos::id.eq(todo_id))
                .filter(todos::user_id.eq(user_id)),
        )
        .execute(&mut conn)?)
    }

    fn delete_completed(&self, user_id: &str, kind: TodoKind) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            todos::table
                .filter(todos::user_id.eq(user_id))
                .filter(todos::kind.eq(kind.as_str()))
                .filter(todos::completed.eq(true)),
        )
        .execute(&mut conn)?)
    }
}
