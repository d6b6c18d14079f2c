use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::transaction::{NewTransaction, TransactionPatch, TransactionType};
use crate::utils::validation::validate_not_blank;

// Request para crear un movimiento
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[validate(custom(function = "validate_not_blank", message = "category is required"))]
    pub category: String,

    #[validate(range(min = 0, message = "amount must be a non-negative number of cents"))]
    pub amount: i64,

    pub description: Option<String>,
}

impl From<CreateTransactionRequest> for NewTransaction {
    fn from(request: CreateTransactionRequest) -> Self {
        Self {
            date: request.date,
            kind: request.kind,
            category: request.category,
            amount: request.amount,
            description: request.description,
        }
    }
}

// Request para actualizar un movimiento
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub date: Option<DateTime<Utc>>,

    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,

    #[validate(custom(function = "validate_not_blank", message = "category must not be blank"))]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "amount must be a non-negative number of cents"))]
    pub amount: Option<i64>,

    pub description: Option<String>,
}

impl From<UpdateTransactionRequest> for TransactionPatch {
    fn from(request: UpdateTransactionRequest) -> Self {
        Self {
            date: request.date,
            kind: request.kind,
            category: request.category,
            amount: request.amount,
            description: request.description,
        }
    }
}
