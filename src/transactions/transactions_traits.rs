use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionKind, TransactionPeriod, TransactionSummary,
};

/// Trait for transaction repository operations
pub trait TransactionRepositoryTrait: Send + Sync {
    fn load_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn load_transactions_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;
    fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
    fn delete_all_transactions(&self, user_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn filter_transactions(
        &self,
        transactions: &[Transaction],
        kind: Option<TransactionKind>,
        period: TransactionPeriod,
        today: NaiveDate,
    ) -> Vec<Transaction>;
    fn summarize(&self, transactions: &[Transaction]) -> TransactionSummary;
    async fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
    async fn clear_all_transactions(&self, user_id: &str) -> Result<usize>;
}
