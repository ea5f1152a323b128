use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::errors::{Error, Result};
use crate::schema::transactions;
use crate::transactions::transactions_model::Transaction;
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

pub struct TransactionRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        TransactionRepository { pool }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn load_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::txn_date.desc())
            .load::<Transaction>(&mut conn)?)
    }

    fn load_transactions_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::txn_date.ge(start))
            .filter(transactions::txn_date.le(end))
            .order(transactions::txn_date.desc())
            .load::<Transaction>(&mut conn)?)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .filter(transactions::id.eq(transaction_id))
            .filter(transactions::user_id.eq(user_id))
            .first::<Transaction>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Transaction '{}'", transaction_id)))
    }

    fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(transactions::table)
            .values(&transaction)
            .returning(transactions::all_columns)
            .get_result(&mut conn)?)
    }

    fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            transactions::table
                .filter(transactions::id.eq(transaction_id))
                .filter(transactions::user_id.eq(user_id)),
        )
        .execute(&mut conn)?)
    }

    fn delete_all_transactions(&self, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(transactions::table.filter(transactions::user_id.eq(user_id)))
                .execute(&mut conn)?,
        )
    }
}
