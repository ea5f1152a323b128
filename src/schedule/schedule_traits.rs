use async_trait::async_trait;

use crate::errors::Result;
use crate::schedule::schedule_model::{ScheduleGrid, WeeklySchedule};

/// Trait for weekly schedule repository operations
pub trait ScheduleRepositoryTrait: Send + Sync {
    fn get_schedule(&self, user_id: &str) -> Result<Option<WeeklySchedule>>;
    fn upsert_schedule(&self, user_id: &str, grid_json: &str) -> Result<WeeklySchedule>;
}

/// Trait for weekly schedule service operations
#[async_trait]
pub trait ScheduleServiceTrait: Send + Sync {
    fn get_schedule(&self, user_id: &str) -> Result<ScheduleGrid>;
    async fn save_schedule(&self, user_id: &str, grid: ScheduleGrid) -> Result<ScheduleGrid>;
    async fn set_slot(
        &self,
        user_id: &str,
        day: &str,
        slot: &str,
        activity: &str,
    ) -> Result<ScheduleGrid>;
}
