//! Modelo de Transaction
//!
//! `amount` es siempre una magnitud no negativa en céntimos; el signo
//! del movimiento lo decide `kind` (income/expense).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de movimiento - mapea al ENUM transaction_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: DateTime<Utc>,
    pub kind: TransactionType,
    pub category: String,
    pub amount: i64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<DateTime<Utc>>,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub amount: Option<i64>,
    pub description: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }

    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(category) = &self.category {
            transaction.category = category.clone();
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(description) = &self.description {
            transaction.description = Some(description.clone());
        }
    }
}
