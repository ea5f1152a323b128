use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::goals::Goal;
use crate::journal::journal_model::{JournalEntry, JournalFilter, NewJournalEntry};

/// Trait for journal repository operations
pub trait JournalRepositoryTrait: Send + Sync {
    fn load_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>>;
    fn load_entries_since(&self, user_id: &str, since: NaiveDateTime) -> Result<Vec<JournalEntry>>;
    fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<JournalEntry>;
    fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry>;
    fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: &NewJournalEntry,
    ) -> Result<JournalEntry>;
    fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize>;
}

/// Trait for journal service operations
#[async_trait]
pub trait JournalServiceTrait: Send + Sync {
    fn get_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>>;
    fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<JournalEntry>;
    fn filter_entries(&self, entries: &[JournalEntry], filter: &JournalFilter)
        -> Vec<JournalEntry>;
    fn linked_goal(&self, user_id: &str, entry: &JournalEntry) -> Result<Option<Goal>>;
    async fn create_entry(&self, user_id: &str, new_entry: NewJournalEntry) -> Result<JournalEntry>;
    async fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: NewJournalEntry,
    ) -> Result<JournalEntry>;
    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize>;
}
