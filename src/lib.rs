pub mod db;

pub mod constants;
pub mod errors;
pub mod schema;

pub mod goals;
pub mod journal;
pub mod schedule;
pub mod stats;
pub mod todos;
pub mod transactions;
pub mod winstates;

pub use errors::{Error, Result};
