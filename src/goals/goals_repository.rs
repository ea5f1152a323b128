use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::goals::goals_model::{ActionStep, Goal, GoalStatus};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl GoalRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        GoalRepository { pool }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn load_goals_by_subsection(&self, user_id: &str, subsection: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::user_id.eq(user_id))
            .filter(goals::subsection.eq(subsection))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        goals::table
            .filter(goals::id.eq(goal_id))
            .filter(goals::user_id.eq(user_id))
            .first::<Goal>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))
    }

    fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        Ok(diesel::insert_into(goals::table)
            .values(&goal)
            .returning(goals::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_steps(
        &self,
        user_id: &str,
        goal_id: &str,
        steps: &[ActionStep],
        progress: i32,
        status: GoalStatus,
    ) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let encoded_steps = serde_json::to_string(steps)?;

        let affected = diesel::update(
            goals::table
                .filter(goals::id.eq(goal_id))
                .filter(goals::user_id.eq(user_id)),
        )
        .set((
            goals::action_steps.eq(encoded_steps),
            goals::progress.eq(progress),
            goals::status.eq(status.as_str()),
            goals::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Goal '{}'", goal_id)));
        }

        self.get_goal(user_id, goal_id)
    }

    fn update_status(&self, user_id: &str, goal_id: &str, status: GoalStatus) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            goals::table
                .filter(goals::id.eq(goal_id))
                .filter(goals::user_id.eq(user_id)),
        )
        .set((
            goals::status.eq(status.as_str()),
            goals::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Goal '{}'", goal_id)));
        }

        self.get_goal(user_id, goal_id)
    }

    fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            goals::table
                .filter(goals::id.eq(goal_id))
                .filter(goals::user_id.eq(user_id)),
        )
        .execute(&mut conn)?)
    }
}
