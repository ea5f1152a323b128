use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schedule::schedule_model::WeeklySchedule;
use crate::schedule::schedule_traits::ScheduleRepositoryTrait;
use crate::schema::weekly_schedules;

pub struct ScheduleRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ScheduleRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ScheduleRepository { pool }
    }
}

impl ScheduleRepositoryTrait for ScheduleRepository {
    fn get_schedule(&self, user_id: &str) -> Result<Option<WeeklySchedule>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(weekly_schedules::table
            .filter(weekly_schedules::user_id.eq(user_id))
            .first::<WeeklySchedule>(&mut conn)
            .optional()?)
    }

    fn upsert_schedule(&self, user_id: &str, grid_json: &str) -> Result<WeeklySchedule> {
        let mut conn = get_connection(&self.pool)?;
        let now = chrono::Utc::now().naive_utc();
        let schedule = WeeklySchedule {
            user_id: user_id.to_string(),
            grid: grid_json.to_string(),
            updated_at: now,
        };

        diesel::insert_into(weekly_schedules::table)
            .values(&schedule)
            .on_conflict(weekly_schedules::user_id)
            .do_update()
            .set((
                weekly_schedules::grid.eq(grid_json),
                weekly_schedules::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        weekly_schedules::table
            .filter(weekly_schedules::user_id.eq(user_id))
            .first::<WeeklySchedule>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Weekly schedule for '{}'", user_id)))
    }
}
