use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

/// Ledger entry; incomes are stored positive, expenses negative.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub txn_date: NaiveDate,
    pub amount: String,
    pub note: String,
    pub kind: String,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn amount_decimal(&self) -> Decimal {
        self.amount.parse().unwrap_or(Decimal::ZERO)
    }
}

/// Input for recording a transaction; the amount's sign is normalized from
/// the kind before storage.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub txn_date: NaiveDate,
    pub amount: Decimal,
    pub note: String,
    pub kind: TransactionKind,
}

/// Income/expense totals over a set of transactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub transaction_count: i32,
}

/// Date window for in-memory transaction filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionPeriod {
    All,
    ThisMonth,
    LastMonth,
    LastThreeMonths,
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl TransactionPeriod {
    /// Inclusive bounds for the period, `None` when the period does not
    /// constrain dates (all, or a custom window missing either edge).
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            TransactionPeriod::All => None,
            TransactionPeriod::ThisMonth => {
                Some((start_of_month(today), end_of_month(today)))
            }
            TransactionPeriod::LastMonth => {
                let last_month = start_of_month(today) - Duration::days(1);
                Some((start_of_month(last_month), last_month))
            }
            TransactionPeriod::LastThreeMonths => Some((
                today.checked_sub_months(Months::new(3)).unwrap_or(today),
                today,
            )),
            TransactionPeriod::Custom { start, end } => match (start, end) {
                (Some(start), Some(end)) => Some((*start, *end)),
                _ => None,
            },
        }
    }
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn end_of_month(date: NaiveDate) -> NaiveDate {
    let next = start_of_month(date)
        .checked_add_months(Months::new(1))
        .unwrap_or(date);
    next - Duration::days(1)
}
