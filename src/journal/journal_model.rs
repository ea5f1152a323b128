use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

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
#[diesel(table_name = crate::schema::journal_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub linked_goal_id: Option<String>,
    pub entry_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl JournalEntry {
    pub fn tag_list(&self) -> Result<Vec<String>> {
        Ok(serde_json::from_str(&self.tags)?)
    }
}

/// Input for creating or rewriting an entry's authored fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub linked_goal_id: Option<String>,
}

/// In-memory filter over already-loaded entries.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    pub search: Option<String>,
    pub tags: Vec<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl JournalFilter {
    /// Keeps entries matching the search term (title or content,
    /// case-insensitive), carrying at least one selected tag, and falling
    /// inside the date bounds. Empty criteria match everything.
    pub fn apply(&self, entries: &[JournalEntry]) -> Vec<JournalEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }

    fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !entry.title.to_lowercase().contains(&term)
                && !entry.content.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if !self.tags.is_empty() {
            let entry_tags = entry.tag_list().unwrap_or_default();
            if !entry_tags.iter().any(|tag| self.tags.contains(tag)) {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if entry.entry_date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if entry.entry_date > end {
                return false;
            }
        }

        true
    }
}
