use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{ActionStep, Goal, GoalStatus, NewGoal};

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn load_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    fn update_steps(
        &self,
        user_id: &str,
        goal_id: &str,
        steps: &[ActionStep],
        progress: i32,
        status: GoalStatus,
    ) -> Result<Goal>;
    fn update_status(&self, user_id: &str, goal_id: &str, status: GoalStatus) -> Result<Goal>;
    fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_action_steps(
        &self,
        user_id: &str,
        goal_id: &str,
        steps: Vec<ActionStep>,
    ) -> Result<Goal>;
    async fn toggle_step_completion(
        &self,
        user_id: &str,
        goal_id: &str,
        step_id: &str,
    ) -> Result<Goal>;
    async fn pause_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn resume_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}
