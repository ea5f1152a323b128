pub mod winstates_model;
pub mod winstates_progress;
pub mod winstates_repository;
pub mod winstates_service;
pub mod winstates_traits;

pub use winstates_model::{default_metrics, Metric, WinState, WinStateContent};
pub use winstates_progress::{metric_progress, overall_progress};
pub use winstates_repository::WinStateRepository;
pub use winstates_service::WinStateService;
pub use winstates_traits::{WinStateRepositoryTrait, WinStateServiceTrait};
