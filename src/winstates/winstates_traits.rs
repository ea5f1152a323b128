use async_trait::async_trait;

use crate::errors::Result;
use crate::winstates::winstates_model::{WinState, WinStateContent};

/// Trait for win state repository operations
pub trait WinStateRepositoryTrait: Send + Sync {
    fn get_win_state(&self, user_id: &str, subsection: &str) -> Result<Option<WinState>>;
    fn upsert_win_state(
        &self,
        user_id: &str,
        subsection: &str,
        content: &WinStateContent,
    ) -> Result<WinState>;
    fn delete_win_state(&self, user_id: &str, subsection: &str) -> Result<usize>;
}

/// Trait for win state service operations
#[async_trait]
pub trait WinStateServiceTrait: Send + Sync {
    fn get_win_state(&self, user_id: &str, subsection: &str) -> Result<WinStateContent>;
    fn get_overall_progress(&self, user_id: &str, subsection: &str) -> Result<i32>;
    async fn save_win_state(
        &self,
        user_id: &str,
        subsection: &str,
        content: WinStateContent,
    ) -> Result<WinState>;
    async fn delete_win_state(&self, user_id: &str, subsection: &str) -> Result<usize>;
}
