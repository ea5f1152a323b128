pub mod goals_model;
pub mod goals_progress;
pub mod goals_repository;
pub mod goals_service;
pub mod goals_traits;
pub mod timeframe;

pub use goals_model::{ActionStep, Goal, GoalStatus, NewGoal};
pub use goals_progress::{apply_step_update, calculate_progress, toggle_step};
pub use goals_repository::GoalRepository;
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
pub use timeframe::{resolve_window, DateWindow, Timeframe};
