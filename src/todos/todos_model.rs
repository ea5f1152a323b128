use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Which list a todo belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodoKind {
    Today,
    Weekly,
}

impl TodoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoKind::Today => "today",
            TodoKind::Weekly => "weekly",
        }
    }
}

impl FromStr for TodoKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "today" => Ok(TodoKind::Today),
            "weekly" => Ok(TodoKind::Weekly),
            _ => Err(format!("Unknown todo kind: {}", s)),
        }
    }
}

#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub label: String,
    pub kind: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub label: String,
    pub kind: TodoKind,
}
