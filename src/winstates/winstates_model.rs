use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A current/target measurement inside a win state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
}

/// Stored win state, one row per (user, life area).
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
#[diesel(table_name = crate::schema::win_states)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WinState {
    pub id: String,
    pub user_id: String,
    pub subsection: String,
    pub description: String,
    pub metrics: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl WinState {
    pub fn metric_list(&self) -> Result<Vec<Metric>> {
        Ok(serde_json::from_str(&self.metrics)?)
    }
}

/// The user-authored definition of success for a life area.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WinStateContent {
    pub description: String,
    pub metrics: Vec<Metric>,
}

fn metric(name: &str, unit: &str) -> Metric {
    Metric {
        name: name.to_string(),
        unit: unit.to_string(),
        target_value: 0.0,
        current_value: 0.0,
    }
}

/// Seed metrics shown for a life area before the user saves a win state.
pub fn default_metrics(subsection: &str) -> Vec<Metric> {
    match subsection {
        "finances" => vec![metric("Net Worth", "$"), metric("Passive Income", "$/month")],
        "fitness" => vec![
            metric("Body Weight", "lbs"),
            metric("Body Fat %", "%"),
            metric("Bench Press", "lbs"),
        ],
        "jiu-jitsu" => vec![
            metric("Belt Level", ""),
            metric("Classes Attended", "classes"),
            metric("Competitions Won", "wins"),
        ],
        "women" => vec![
            metric("Relationship Quality", "/10"),
            metric("Social Confidence", "/10"),
        ],
        "attractiveness" => vec![
            metric("Physical Fitness", "/10"),
            metric("Style & Grooming", "/10"),
            metric("Charisma", "/10"),
        ],
        "nutrition" => vec![
            metric("Daily Calories", "kcal"),
            metric("Protein Intake", "g/day"),
            metric("Healthy Meals", "/week"),
        ],
        "philosophy" => vec![
            metric("Books Read", "books"),
            metric("Meditation Practice", "days/year"),
            metric("Life Satisfaction", "/10"),
        ],
        "languages" => vec![
            metric("Languages Fluent", "languages"),
            metric("Vocabulary Size", "words"),
            metric("Practice Hours", "hrs/week"),
        ],
        _ => Vec::new(),
    }
}
