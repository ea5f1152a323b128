use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::errors::Result;
use crate::goals::{GoalRepositoryTrait, GoalStatus};
use crate::journal::JournalRepositoryTrait;
use crate::stats::stats_model::LifeStats;

/// How far back entries feed the streak computation.
const STREAK_LOOKBACK_DAYS: i64 = 365;

/// Consecutive days with at least one entry, counting back from today.
/// A streak that ended yesterday still counts; one entry per day is enough.
pub fn journal_streak(entry_dates: &[NaiveDate], today: NaiveDate) -> i32 {
    let days: HashSet<NaiveDate> = entry_dates.iter().copied().collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

pub struct StatsService {
    journal_repo: Arc<dyn JournalRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl StatsService {
    pub fn new(
        journal_repo: Arc<dyn JournalRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        StatsService {
            journal_repo,
            goal_repo,
        }
    }

    pub fn get_life_stats(&self, user_id: &str, today: NaiveDate) -> Result<LifeStats> {
        let entries = self.journal_repo.load_entries(user_id)?;
        let goals = self.goal_repo.load_goals(user_id)?;

        let lookback =
            (today - Duration::days(STREAK_LOOKBACK_DAYS)).and_time(chrono::NaiveTime::MIN);
        let entry_dates: Vec<NaiveDate> = self
            .journal_repo
            .load_entries_since(user_id, lookback)?
            .iter()
            .map(|entry| entry.entry_date.date())
            .collect();

        let completed = goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Completed.as_str())
            .count();
        let active_goals: Vec<_> = goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Active.as_str())
            .collect();

        // Average progress only covers goals still being worked.
        let avg_progress = if active_goals.is_empty() {
            0
        } else {
            let total: i64 = active_goals.iter().map(|goal| goal.progress as i64).sum();
            ((total as f64 / active_goals.len() as f64).round()) as i32
        };

        Ok(LifeStats {
            journal_streak: journal_streak(&entry_dates, today),
            total_journal_entries: entries.len() as i32,
            goals_completed: completed as i32,
            goals_active: active_goals.len() as i32,
            avg_goal_progress: avg_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::goals::{ActionStep, Goal};
    use crate::journal::{JournalEntry, NewJournalEntry};
    use chrono::NaiveDateTime;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_entries_means_no_streak() {
        assert_eq!(journal_streak(&[], date(2024, 3, 15)), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_back_from_today() {
        let dates = vec![date(2024, 3, 15), date(2024, 3, 14), date(2024, 3, 13)];
        assert_eq!(journal_streak(&dates, date(2024, 3, 15)), 3);
    }

    #[test]
    fn a_streak_ending_yesterday_still_counts() {
        let dates = vec![date(2024, 3, 14), date(2024, 3, 13)];
        assert_eq!(journal_streak(&dates, date(2024, 3, 15)), 2);
    }

    #[test]
    fn a_gap_breaks_the_streak() {
        let dates = vec![date(2024, 3, 15), date(2024, 3, 12), date(2024, 3, 11)];
        assert_eq!(journal_streak(&dates, date(2024, 3, 15)), 1);
    }

    #[test]
    fn duplicate_days_count_once() {
        let dates = vec![date(2024, 3, 15), date(2024, 3, 15), date(2024, 3, 14)];
        assert_eq!(journal_streak(&dates, date(2024, 3, 15)), 2);
    }

    struct FixedJournalRepository {
        entries: Vec<JournalEntry>,
    }

    impl JournalRepositoryTrait for FixedJournalRepository {
        fn load_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
            Ok(self
                .entries
                .iter()
                .filter(|entry| entry.user_id == user_id)
                .cloned()
                .collect())
        }

        fn load_entries_since(
            &self,
            user_id: &str,
            since: NaiveDateTime,
        ) -> Result<Vec<JournalEntry>> {
            Ok(self
                .entries
                .iter()
                .filter(|entry| entry.user_id == user_id && entry.entry_date >= since)
                .cloned()
                .collect())
        }

        fn get_entry(&self, _user_id: &str, entry_id: &str) -> Result<JournalEntry> {
            Err(Error::NotFound(format!("Journal entry '{}'", entry_id)))
        }

        fn insert_entry(&self, entry: JournalEntry) -> Result<JournalEntry> {
            Ok(entry)
        }

        fn update_entry(
            &self,
            _user_id: &str,
            entry_id: &str,
            _update: &NewJournalEntry,
        ) -> Result<JournalEntry> {
            Err(Error::NotFound(format!("Journal entry '{}'", entry_id)))
        }

        fn delete_entry(&self, _user_id: &str, _entry_id: &str) -> Result<usize> {
            Ok(0)
        }
    }

    struct FixedGoalRepository {
        goals: Vec<Goal>,
    }

    impl GoalRepositoryTrait for FixedGoalRepository {
        fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .iter()
                .filter(|goal| goal.user_id == user_id)
                .cloned()
                .collect())
        }

        fn load_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .iter()
                .filter(|goal| goal.user_id == user_id && goal.subsection == subsection)
                .cloned()
                .collect())
        }

        fn get_goal(&self, _user_id: &str, goal_id: &str) -> Result<Goal> {
            Err(Error::NotFound(format!("Goal '{}'", goal_id)))
        }

        fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
            Ok(goal)
        }

        fn update_steps(
            &self,
            _user_id: &str,
            goal_id: &str,
            _steps: &[ActionStep],
            _progress: i32,
            _status: GoalStatus,
        ) -> Result<Goal> {
            Err(Error::NotFound(format!("Goal '{}'", goal_id)))
        }

        fn update_status(&self, _user_id: &str, goal_id: &str, _status: GoalStatus) -> Result<Goal> {
            Err(Error::NotFound(format!("Goal '{}'", goal_id)))
        }

        fn delete_goal(&self, _user_id: &str, _goal_id: &str) -> Result<usize> {
            Ok(0)
        }
    }

    fn entry_on(day: NaiveDate) -> JournalEntry {
        let at = day.and_hms_opt(9, 0, 0).unwrap();
        JournalEntry {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".to_string(),
            title: "Entry".to_string(),
            content: "notes".to_string(),
            tags: "[]".to_string(),
            linked_goal_id: None,
            entry_date: at,
            created_at: at,
            updated_at: at,
        }
    }

    fn goal_with(progress: i32, status: GoalStatus) -> Goal {
        let now = chrono::Utc::now().naive_utc();
        Goal {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".to_string(),
            title: "Goal".to_string(),
            description: None,
            subsection: "fitness".to_string(),
            timeframe: "monthly".to_string(),
            start_date: now.date(),
            end_date: now.date(),
            action_steps: "[]".to_string(),
            progress,
            status: status.as_str().to_string(),
            parent_goal_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn life_stats_aggregate_journal_and_goals() {
        let today = date(2024, 3, 15);
        let service = StatsService::new(
            Arc::new(FixedJournalRepository {
                entries: vec![entry_on(today), entry_on(date(2024, 3, 14))],
            }),
            Arc::new(FixedGoalRepository {
                goals: vec![
                    goal_with(100, GoalStatus::Completed),
                    goal_with(50, GoalStatus::Active),
                    goal_with(25, GoalStatus::Paused),
                ],
            }),
        );

        let stats = service.get_life_stats("u1", today).unwrap();
        assert_eq!(stats.journal_streak, 2);
        assert_eq!(stats.total_journal_entries, 2);
        assert_eq!(stats.goals_completed, 1);
        assert_eq!(stats.goals_active, 1);
        // Paused and completed goals stay out of the average.
        assert_eq!(stats.avg_goal_progress, 50);
    }

    #[test]
    fn no_goals_reads_as_zero_average() {
        let service = StatsService::new(
            Arc::new(FixedJournalRepository { entries: vec![] }),
            Arc::new(FixedGoalRepository { goals: vec![] }),
        );
        let stats = service.get_life_stats("u1", date(2024, 3, 15)).unwrap();
        assert_eq!(stats.avg_goal_progress, 0);
        assert_eq!(stats.journal_streak, 0);
    }
}
