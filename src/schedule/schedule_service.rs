use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::schedule::schedule_model::{empty_grid, ScheduleGrid, TIME_SLOTS, WEEK_DAYS};
use crate::schedule::schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};

pub struct ScheduleService {
    schedule_repo: Arc<dyn ScheduleRepositoryTrait>,
}

impl ScheduleService {
    pub fn new(schedule_repo: Arc<dyn ScheduleRepositoryTrait>) -> Self {
        ScheduleService { schedule_repo }
    }

    /// Rejects unknown day/slot keys and fills in any missing cells so the
    /// stored grid is always complete.
    fn normalize_grid(grid: ScheduleGrid) -> Result<ScheduleGrid> {
        for day in grid.keys() {
            if !WEEK_DAYS.contains(&day.as_str()) {
                return Err(
                    ValidationError::InvalidInput(format!("Unknown day: {}", day)).into(),
                );
            }
        }
        for slots in grid.values() {
            for slot in slots.keys() {
                if !TIME_SLOTS.contains(&slot.as_str()) {
                    return Err(ValidationError::InvalidInput(format!(
                        "Unknown time slot: {}",
                        slot
                    ))
                    .into());
                }
            }
        }

        let mut normalized = empty_grid();
        for (day, slots) in grid {
            let cells = normalized.entry(day).or_default();
            for (slot, activity) in slots {
                cells.insert(slot, activity);
            }
        }
        Ok(normalized)
    }
}

#[async_trait]
impl ScheduleServiceTrait for ScheduleService {
    fn get_schedule(&self, user_id: &str) -> Result<ScheduleGrid> {
        match self.schedule_repo.get_schedule(user_id)? {
            Some(schedule) => schedule.grid_cells(),
            None => Ok(empty_grid()),
        }
    }

    async fn save_schedule(&self, user_id: &str, grid: ScheduleGrid) -> Result<ScheduleGrid> {
        let normalized = Self::normalize_grid(grid)?;
        let encoded = serde_json::to_string(&normalized)?;
        debug!("Saving weekly schedule for user {}", user_id);
        self.schedule_repo
            .upsert_schedule(user_id, &encoded)?
            .grid_cells()
    }

    async fn set_slot(
        &self,
        user_id: &str,
        day: &str,
        slot: &str,
        activity: &str,
    ) -> Result<ScheduleGrid> {
        if !WEEK_DAYS.contains(&day) {
            return Err(ValidationError::InvalidInput(format!("Unknown day: {}", day)).into());
        }
        if !TIME_SLOTS.contains(&slot) {
            return Err(
                ValidationError::InvalidInput(format!("Unknown time slot: {}", slot)).into(),
            );
        }

        let mut grid = self.get_schedule(user_id)?;
        grid.entry(day.to_string())
            .or_default()
            .insert(slot.to_string(), activity.to_string());
        self.save_schedule(user_id, grid).await
    }
}
