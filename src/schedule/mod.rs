pub mod schedule_model;
pub mod schedule_repository;
pub mod schedule_service;
pub mod schedule_traits;

pub use schedule_model::{
    empty_grid, slot_hours, ScheduleGrid, WeeklySchedule, TIME_SLOTS, WEEK_DAYS,
};
pub use schedule_repository::ScheduleRepository;
pub use schedule_service::ScheduleService;
pub use schedule_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
