use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::journal::journal_model::{JournalEntry, NewJournalEntry};
use crate::journal::journal_traits::JournalRepositoryTrait;
use crate::schema::journal_entries;

pub struct JournalRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl JournalRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        JournalRepository { pool }
    }
}

impl JournalRepositoryTrait for JournalRepository {
    fn load_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(journal_entries::table
            .filter(journal_entries::user_id.eq(user_id))
            .order(journal_entries::entry_date.desc())
            .load::<JournalEntry>(&mut conn)?)
    }

    fn load_entries_since(&self, user_id: &str, since: NaiveDateTime) -> Result<Vec<JournalEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(journal_entries::table
            .filter(journal_entries::user_id.eq(user_id))
            .filter(journal_entries::entry_date.ge(since))
            .order(journal_entries::entry_date.desc())
            .load::<JournalEntry>(&mut conn)?)
    }

    fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<JournalEntry> {
        let mut conn = get_connection(&self.pool)?;
        journal_entries::table
            .filter(journal_entries::id.eq(entry_id))
            .filter(journal_entries::user_id.eq(user_id))
            .first::<JournalEntry>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Journal entry '{}'", entry_id)))
    }

    fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(journal_entries::table)
            .values(&entry)
            .returning(journal_entries::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: &NewJournalEntry,
    ) -> Result<JournalEntry> {
        let mut conn = get_connection(&self.pool)?;
        let encoded_tags = serde_json::to_string(&update.tags)?;

        let affected = diesel::update(
            journal_entries::table
                .filter(journal_entries::id.eq(entry_id))
                .filter(journal_entries::user_id.eq(user_id)),
        )
        .set((
            journal_entries::title.eq(&update.title),
            journal_entries::content.eq(&update.content),
            journal_entries::tags.eq(encoded_tags),
            journal_entries::linked_goal_id.eq(&update.linked_goal_id),
            journal_entries::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Journal entry '{}'", entry_id)));
        }

        self.get_entry(user_id, entry_id)
    }

    fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            journal_entries::table
                .filter(journal_entries::id.eq(entry_id))
                .filter(journal_entries::user_id.eq(user_id)),
        )
        .execute(&mut conn)?)
    }
}
