use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionKind, TransactionPeriod, TransactionSummary,
};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { transaction_repo }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repo.load_transactions(user_id)
    }

    fn filter_transactions(
        &self,
        transactions: &[Transaction],
        kind: Option<TransactionKind>,
        period: TransactionPeriod,
        today: NaiveDate,
    ) -> Vec<Transaction> {
        let bounds = period.bounds(today);
        transactions
            .iter()
            .filter(|txn| match kind {
                Some(kind) => txn.kind == kind.as_str(),
                None => true,
            })
            .filter(|txn| match bounds {
                Some((start, end)) => txn.txn_date >= start && txn.txn_date <= end,
                None => true,
            })
            .cloned()
            .collect()
    }

    fn summarize(&self, transactions: &[Transaction]) -> TransactionSummary {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for txn in transactions {
            let amount = txn.amount_decimal();
            if amount >= Decimal::ZERO {
                income += amount;
            } else {
                expenses += -amount;
            }
        }
        TransactionSummary {
            income: income.round_dp(DISPLAY_DECIMAL_PRECISION),
            expenses: expenses.round_dp(DISPLAY_DECIMAL_PRECISION),
            net: (income - expenses).round_dp(DISPLAY_DECIMAL_PRECISION),
            transaction_count: transactions.len() as i32,
        }
    }

    async fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        if new_transaction.note.trim().is_empty() {
            return Err(ValidationError::MissingField("note".to_string()).into());
        }
        if new_transaction.amount.is_zero() {
            return Err(ValidationError::InvalidInput(
                "transaction amount must be non-zero".to_string(),
            )
            .into());
        }

        // Sign follows the kind regardless of how the amount was entered.
        let stored_amount = match new_transaction.kind {
            TransactionKind::Income => new_transaction.amount.abs(),
            TransactionKind::Expense => -new_transaction.amount.abs(),
        };

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            txn_date: new_transaction.txn_date,
            amount: stored_amount.to_string(),
            note: new_transaction.note.trim().to_string(),
            kind: new_transaction.kind.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };

        debug!(
            "Recording {} of {} for user {}",
            transaction.kind, transaction.amount, user_id
        );
        self.transaction_repo.insert_transaction(transaction)
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        self.transaction_repo
            .delete_transaction(user_id, transaction_id)
    }

    async fn clear_all_transactions(&self, user_id: &str) -> Result<usize> {
        debug!("Clearing all transactions for user {}", user_id);
        self.transaction_repo.delete_all_transactions(user_id)
    }
}
