pub mod journal_model;
pub mod journal_repository;
pub mod journal_service;
pub mod journal_traits;

pub use journal_model::{JournalEntry, JournalFilter, NewJournalEntry};
pub use journal_repository::JournalRepository;
pub use journal_service::JournalService;
pub use journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
