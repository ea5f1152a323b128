pub mod stats_model;
pub mod stats_service;

pub use stats_model::LifeStats;
pub use stats_service::{journal_streak, StatsService};
