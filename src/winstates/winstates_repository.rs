use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::win_states;
use crate::winstates::winstates_model::{WinState, WinStateContent};
use crate::winstates::winstates_traits::WinStateRepositoryTrait;

pub struct WinStateRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl WinStateRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        WinStateRepository { pool }
    }
}

impl WinStateRepositoryTrait for WinStateRepository {
    fn get_win_state(&self, user_id: &str, subsection: &str) -> Result<Option<WinState>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(win_states::table
            .filter(win_states::user_id.eq(user_id))
            .filter(win_states::subsection.eq(subsection))
            .first::<WinState>(&mut conn)
            .optional()?)
    }

    fn upsert_win_state(
        &self,
        user_id: &str,
        subsection: &str,
        content: &WinStateContent,
    ) -> Result<WinState> {
        let mut conn = get_connection(&self.pool)?;
        let now = chrono::Utc::now().naive_utc();
        let encoded_metrics = serde_json::to_string(&content.metrics)?;

        let row = WinState {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            subsection: subsection.to_string(),
            description: content.description.clone(),
            metrics: encoded_metrics,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(win_states::table)
            .values(&row)
            .on_conflict((win_states::user_id, win_states::subsection))
            .do_update()
            .set((
                win_states::description.eq(&row.description),
                win_states::metrics.eq(&row.metrics),
                win_states::updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        win_states::table
            .filter(win_states::user_id.eq(user_id))
            .filter(win_states::subsection.eq(subsection))
            .first::<WinState>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Win state for '{}'", subsection)))
    }

    fn delete_win_state(&self, user_id: &str, subsection: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            win_states::table
                .filter(win_states::user_id.eq(user_id))
                .filter(win_states::subsection.eq(subsection)),
        )
        .execute(&mut conn)?)
    }
}
