use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const TIME_SLOTS: [&str; 7] = [
    "Early Morning",
    "Morning",
    "Late Morning",
    "Afternoon",
    "Late Afternoon",
    "Evening",
    "Night",
];

/// Clock range a slot covers, for display.
pub fn slot_hours(slot: &str) -> Option<&'static str> {
    match slot {
        "Early Morning" => Some("5:30-7:00"),
        "Morning" => Some("7:00-9:00"),
        "Late Morning" => Some("9:00-12:00"),
        "Afternoon" => Some("12:00-15:00"),
        "Late Afternoon" => Some("15:00-18:00"),
        "Evening" => Some("18:00-21:00"),
        "Night" => Some("21:00-23:00"),
        _ => None,
    }
}

/// Day -> slot -> activity text. BTreeMap keeps the serialized form stable.
pub type ScheduleGrid = BTreeMap<String, BTreeMap<String, String>>;

/// A grid with every day/slot cell present and blank.
pub fn empty_grid() -> ScheduleGrid {
    WEEK_DAYS
        .iter()
        .map(|day| {
            let slots = TIME_SLOTS
                .iter()
                .map(|slot| (slot.to_string(), String::new()))
                .collect();
            (day.to_string(), slots)
        })
        .collect()
}

#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::weekly_schedules)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub user_id: String,
    pub grid: String,
    pub updated_at: NaiveDateTime,
}

impl WeeklySchedule {
    pub fn grid_cells(&self) -> Result<ScheduleGrid> {
        Ok(serde_json::from_str(&self.grid)?)
    }
}
