use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{ActionStep, Goal, GoalStatus, NewGoal};
use crate::goals::goals_progress::{apply_step_update, toggle_step};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::goals::timeframe::resolve_window;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(user_id)
    }

    fn get_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals_by_subsection(user_id, subsection)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(user_id, goal_id)
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }

        // Blank steps are dropped before anything is persisted.
        let mut steps: Vec<ActionStep> = new_goal
            .action_steps
            .into_iter()
            .filter(|step| !step.description.trim().is_empty())
            .collect();

        if steps.is_empty() {
            return Err(ValidationError::InvalidInput(
                "at least one action step is required".to_string(),
            )
            .into());
        }

        for step in &mut steps {
            if step.id.trim().is_empty() {
                step.id = Uuid::new_v4().to_string();
            }
        }

        let subsection = if new_goal.subsection.trim().is_empty() {
            "general".to_string()
        } else {
            new_goal.subsection
        };

        let now = chrono::Utc::now();
        let window = resolve_window(
            new_goal.timeframe,
            now.date_naive(),
            new_goal.custom_start_date,
            new_goal.custom_end_date,
        );

        debug!(
            "Creating {} goal '{}' for user {}",
            new_goal.timeframe.as_str(),
            new_goal.title,
            user_id
        );

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new_goal.title,
            description: new_goal.description,
            subsection,
            timeframe: new_goal.timeframe.as_str().to_string(),
            start_date: window.start_date,
            end_date: window.end_date,
            action_steps: serde_json::to_string(&steps)?,
            progress: 0,
            status: GoalStatus::Active.as_str().to_string(),
            parent_goal_id: new_goal.parent_goal_id,
            created_at: now.naive_utc(),
            updated_at: now.naive_utc(),
        };

        self.goal_repo.insert_new_goal(goal)
    }

    async fn update_action_steps(
        &self,
        user_id: &str,
        goal_id: &str,
        steps: Vec<ActionStep>,
    ) -> Result<Goal> {
        // Existence check up front so a stale id surfaces as NotFound
        // before any write is attempted.
        self.goal_repo.get_goal(user_id, goal_id)?;

        let (progress, status) = apply_step_update(&steps);
        self.goal_repo
            .update_steps(user_id, goal_id, &steps, progress, status)
    }

    async fn toggle_step_completion(
        &self,
        user_id: &str,
        goal_id: &str,
        step_id: &str,
    ) -> Result<Goal> {
        let goal = self.goal_repo.get_goal(user_id, goal_id)?;
        let mut steps = goal.steps()?;

        let step = steps
            .iter_mut()
            .find(|step| step.id == step_id)
            .ok_or_else(|| Error::NotFound(format!("Action step '{}'", step_id)))?;
        toggle_step(step);

        let (progress, status) = apply_step_update(&steps);
        self.goal_repo
            .update_steps(user_id, goal_id, &steps, progress, status)
    }

    async fn pause_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(user_id, goal_id)?;
        self.goal_repo
            .update_status(user_id, goal_id, GoalStatus::Paused)
    }

    async fn resume_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let goal = self.goal_repo.get_goal(user_id, goal_id)?;
        let (_, status) = apply_step_update(&goal.steps()?);
        self.goal_repo.update_status(user_id, goal_id, status)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        debug!("Deleting goal {} for user {}", goal_id, user_id);
        self.goal_repo.delete_goal(user_id, goal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::timeframe::Timeframe;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockGoalRepository {
        goals: Mutex<HashMap<String, Goal>>,
    }

    impl MockGoalRepository {
        fn new() -> Self {
            MockGoalRepository {
                goals: Mutex::new(HashMap::new()),
            }
        }
    }

    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .values()
                .filter(|goal| goal.user_id == user_id)
                .cloned()
                .collect())
        }

        fn load_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .values()
                .filter(|goal| goal.user_id == user_id && goal.subsection == subsection)
                .cloned()
                .collect())
        }

        fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .get(goal_id)
                .filter(|goal| goal.user_id == user_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))
        }

        fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .insert(goal.id.clone(), goal.clone());
            Ok(goal)
        }

        fn update_steps(
            &self,
            user_id: &str,
            goal_id: &str,
            steps: &[ActionStep],
            progress: i32,
            status: GoalStatus,
        ) -> Result<Goal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .get_mut(goal_id)
                .filter(|goal| goal.user_id == user_id)
                .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))?;
            goal.action_steps = serde_json::to_string(steps)?;
            goal.progress = progress;
            goal.status = status.as_str().to_string();
            Ok(goal.clone())
        }

        fn update_status(&self, user_id: &str, goal_id: &str, status: GoalStatus) -> Result<Goal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .get_mut(goal_id)
                .filter(|goal| goal.user_id == user_id)
                .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))?;
            goal.status = status.as_str().to_string();
            Ok(goal.clone())
        }

        fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let existed = goals
                .get(goal_id)
                .map(|goal| goal.user_id == user_id)
                .unwrap_or(false);
            if existed {
                goals.remove(goal_id);
                Ok(1)
            } else {
                Ok(0)
            }
        }
    }

    fn step(description: &str) -> ActionStep {
        ActionStep {
            id: String::new(),
            description: description.to_string(),
            completed: false,
            target_value: None,
            current_value: 0,
        }
    }

    fn draft(title: &str, steps: Vec<ActionStep>) -> NewGoal {
        NewGoal {
            title: title.to_string(),
            description: None,
            subsection: "fitness".to_string(),
            timeframe: Timeframe::Monthly,
            custom_start_date: None,
            custom_end_date: None,
            action_steps: steps,
            parent_goal_id: None,
        }
    }

    fn service() -> GoalService<MockGoalRepository> {
        GoalService::new(Arc::new(MockGoalRepository::new()))
    }

    #[tokio::test]
    async fn create_goal_rejects_blank_titles() {
        let result = service().create_goal("u1", draft("   ", vec![step("run")])).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_goal_rejects_all_blank_steps() {
        let result = service()
            .create_goal("u1", draft("Get fit", vec![step(""), step("  ")]))
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_goal_starts_active_at_zero_and_drops_blank_steps() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run"), step(""), step("lift")]))
            .await
            .unwrap();

        assert_eq!(goal.progress, 0);
        assert_eq!(goal.goal_status(), GoalStatus::Active);
        let steps = goal.steps().unwrap();
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|step| !step.id.is_empty()));
    }

    #[tokio::test]
    async fn toggling_binary_steps_walks_progress_to_completion() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run"), step("lift")]))
            .await
            .unwrap();
        let steps = goal.steps().unwrap();

        let goal = service
            .toggle_step_completion("u1", &goal.id, &steps[0].id)
            .await
            .unwrap();
        assert_eq!(goal.progress, 50);
        assert_eq!(goal.goal_status(), GoalStatus::Active);

        let goal = service
            .toggle_step_completion("u1", &goal.id, &steps[1].id)
            .await
            .unwrap();
        assert_eq!(goal.progress, 100);
        assert_eq!(goal.goal_status(), GoalStatus::Completed);
    }

    #[tokio::test]
    async fn step_updates_overwrite_a_paused_status() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run"), step("lift")]))
            .await
            .unwrap();

        let goal = service.pause_goal("u1", &goal.id).await.unwrap();
        assert_eq!(goal.goal_status(), GoalStatus::Paused);

        let mut steps = goal.steps().unwrap();
        steps[0].completed = true;
        let goal = service
            .update_action_steps("u1", &goal.id, steps)
            .await
            .unwrap();
        assert_eq!(goal.progress, 50);
        assert_eq!(goal.goal_status(), GoalStatus::Active);
    }

    #[tokio::test]
    async fn resume_derives_status_from_current_steps() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run")]))
            .await
            .unwrap();
        let steps = goal.steps().unwrap();

        let goal = service
            .toggle_step_completion("u1", &goal.id, &steps[0].id)
            .await
            .unwrap();
        assert_eq!(goal.goal_status(), GoalStatus::Completed);

        service.pause_goal("u1", &goal.id).await.unwrap();
        let goal = service.resume_goal("u1", &goal.id).await.unwrap();
        assert_eq!(goal.goal_status(), GoalStatus::Completed);
    }

    #[tokio::test]
    async fn toggling_an_unknown_step_is_not_found() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run")]))
            .await
            .unwrap();

        let result = service.toggle_step_completion("u1", &goal.id, "nope").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn goals_are_scoped_to_their_owner() {
        let service = service();
        let goal = service
            .create_goal("u1", draft("Get fit", vec![step("run")]))
            .await
            .unwrap();

        let result = service.get_goal("someone-else", &goal.id);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
