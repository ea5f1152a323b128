use serde::{Deserialize, Serialize};

/// Snapshot of activity across journaling and goals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    pub journal_streak: i32,
    pub total_journal_entries: i32,
    pub goals_completed: i32,
    pub goals_active: i32,
    pub avg_goal_progress: i32,
}
