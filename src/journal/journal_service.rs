use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::journal::journal_model::{JournalEntry, JournalFilter, NewJournalEntry};
use crate::journal::journal_traits::{JournalRepositoryTrait, JournalServiceTrait};

pub struct JournalService {
    journal_repo: Arc<dyn JournalRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl JournalService {
    pub fn new(
        journal_repo: Arc<dyn JournalRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        JournalService {
            journal_repo,
            goal_repo,
        }
    }
}

#[async_trait]
impl JournalServiceTrait for JournalService {
    fn get_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        self.journal_repo.load_entries(user_id)
    }

    fn get_entry(&self, user_id: &str, entry_id: &str) -> Result<JournalEntry> {
        self.journal_repo.get_entry(user_id, entry_id)
    }

    fn filter_entries(
        &self,
        entries: &[JournalEntry],
        filter: &JournalFilter,
    ) -> Vec<JournalEntry> {
        filter.apply(entries)
    }

    /// Resolves the goal an entry links to. A dangling id (the goal was
    /// deleted after linking) reads as no link rather than an error.
    fn linked_goal(&self, user_id: &str, entry: &JournalEntry) -> Result<Option<Goal>> {
        let Some(goal_id) = &entry.linked_goal_id else {
            return Ok(None);
        };
        match self.goal_repo.get_goal(user_id, goal_id) {
            Ok(goal) => Ok(Some(goal)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_entry(&self, user_id: &str, new_entry: NewJournalEntry) -> Result<JournalEntry> {
        if new_entry.title.trim().is_empty() && new_entry.content.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "an entry needs a title or some content".to_string(),
            )
            .into());
        }

        let now = chrono::Utc::now().naive_utc();
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new_entry.title,
            content: new_entry.content,
            tags: serde_json::to_string(&new_entry.tags)?,
            linked_goal_id: new_entry.linked_goal_id,
            entry_date: now,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating journal entry for user {}", user_id);
        self.journal_repo.insert_entry(entry)
    }

    async fn update_entry(
        &self,
        user_id: &str,
        entry_id: &str,
        update: NewJournalEntry,
    ) -> Result<JournalEntry> {
        if update.title.trim().is_empty() && update.content.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "an entry needs a title or some content".to_string(),
            )
            .into());
        }
        self.journal_repo.update_entry(user_id, entry_id, &update)
    }

    async fn delete_entry(&self, user_id: &str, entry_id: &str) -> Result<usize> {
        self.journal_repo.delete_entry(user_id, entry_id)
    }
}
