use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::winstates::winstates_model::{default_metrics, WinState, WinStateContent};
use crate::winstates::winstates_progress::overall_progress;
use crate::winstates::winstates_traits::{WinStateRepositoryTrait, WinStateServiceTrait};

pub struct WinStateService {
    repository: Arc<dyn WinStateRepositoryTrait>,
}

impl WinStateService {
    pub fn new(repository: Arc<dyn WinStateRepositoryTrait>) -> Self {
        WinStateService { repository }
    }
}

#[async_trait]
impl WinStateServiceTrait for WinStateService {
    /// Returns the saved win state, or a blank one seeded with the area's
    /// default metrics when nothing has been saved yet.
    fn get_win_state(&self, user_id: &str, subsection: &str) -> Result<WinStateContent> {
        match self.repository.get_win_state(user_id, subsection)? {
            Some(row) => Ok(WinStateContent {
                description: row.description.clone(),
                metrics: row.metric_list()?,
            }),
            None => Ok(WinStateContent {
                description: String::new(),
                metrics: default_metrics(subsection),
            }),
        }
    }

    fn get_overall_progress(&self, user_id: &str, subsection: &str) -> Result<i32> {
        let content = self.get_win_state(user_id, subsection)?;
        Ok(overall_progress(&content.metrics))
    }

    async fn save_win_state(
        &self,
        user_id: &str,
        subsection: &str,
        content: WinStateContent,
    ) -> Result<WinState> {
        if subsection.trim().is_empty() {
            return Err(ValidationError::MissingField("subsection".to_string()).into());
        }
        if content.metrics.iter().any(|m| m.name.trim().is_empty()) {
            return Err(
                ValidationError::InvalidInput("metric names must not be empty".to_string()).into(),
            );
        }

        debug!("Saving win state for user {} / {}", user_id, subsection);
        self.repository.upsert_win_state(user_id, subsection, &content)
    }

    async fn delete_win_state(&self, user_id: &str, subsection: &str) -> Result<usize> {
        self.repository.delete_win_state(user_id, subsection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::winstates::winstates_model::Metric;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockWinStateRepository {
        rows: Mutex<HashMap<(String, String), WinState>>,
    }

    impl MockWinStateRepository {
        fn new() -> Self {
            MockWinStateRepository {
                rows: Mutex::new(HashMap::new()),
            }
        }
    }

    impl WinStateRepositoryTrait for MockWinStateRepository {
        fn get_win_state(&self, user_id: &str, subsection: &str) -> Result<Option<WinState>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&(user_id.to_string(), subsection.to_string()))
                .cloned())
        }

        fn upsert_win_state(
            &self,
            user_id: &str,
            subsection: &str,
            content: &WinStateContent,
        ) -> Result<WinState> {
            let now = chrono::Utc::now().naive_utc();
            let row = WinState {
                id: "ws-1".to_string(),
                user_id: user_id.to_string(),
                subsection: subsection.to_string(),
                description: content.description.clone(),
                metrics: serde_json::to_string(&content.metrics)?,
                created_at: now,
                updated_at: now,
            };
            self.rows
                .lock()
                .unwrap()
                .insert((user_id.to_string(), subsection.to_string()), row.clone());
            Ok(row)
        }

        fn delete_win_state(&self, user_id: &str, subsection: &str) -> Result<usize> {
            let removed = self
                .rows
                .lock()
                .unwrap()
                .remove(&(user_id.to_string(), subsection.to_string()));
            Ok(usize::from(removed.is_some()))
        }
    }

    fn service() -> WinStateService {
        WinStateService::new(Arc::new(MockWinStateRepository::new()))
    }

    #[test]
    fn missing_win_state_falls_back_to_area_defaults() {
        let content = service().get_win_state("u1", "fitness").unwrap();
        assert_eq!(content.description, "");
        assert_eq!(content.metrics.len(), 3);
        assert_eq!(content.metrics[0].name, "Body Weight");
        // Defaults carry no targets, so overall progress reads 0.
        assert_eq!(service().get_overall_progress("u1", "fitness").unwrap(), 0);
    }

    #[test]
    fn unknown_areas_default_to_no_metrics() {
        let content = service().get_win_state("u1", "gardening").unwrap();
        assert!(content.metrics.is_empty());
    }

    #[tokio::test]
    async fn saved_win_state_round_trips_and_reports_progress() {
        let service = service();
        let content = WinStateContent {
            description: "Train consistently".to_string(),
            metrics: vec![Metric {
                name: "Classes Attended".to_string(),
                unit: "classes".to_string(),
                target_value: 20.0,
                current_value: 5.0,
            }],
        };

        service.save_win_state("u1", "jiu-jitsu", content).await.unwrap();

        let loaded = service.get_win_state("u1", "jiu-jitsu").unwrap();
        assert_eq!(loaded.description, "Train consistently");
        assert_eq!(service.get_overall_progress("u1", "jiu-jitsu").unwrap(), 25);
    }

    #[tokio::test]
    async fn unnamed_metrics_are_rejected() {
        let content = WinStateContent {
            description: String::new(),
            metrics: vec![Metric {
                name: "  ".to_string(),
                unit: String::new(),
                target_value: 1.0,
                current_value: 0.0,
            }],
        };
        let result = service().save_win_state("u1", "fitness", content).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
