use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::transaction_controller::TransactionController;
use crate::dto::transaction_dto::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::middleware::AuthenticatedUser;
use crate::models::transaction::Transaction;
use crate::state::AppState;
use crate::utils::{
    errors::AppResult,
    extract::{ResourceId, ValidatedJson},
};

pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles/:id/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/:id",
            put(update_transaction).delete(delete_transaction),
        )
}

async fn list_transactions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
) -> AppResult<Json<Vec<Transaction>>> {
    let controller = TransactionController::new(state.store.clone());
    Ok(Json(controller.list(vehicle_id, &user.user_id).await?))
}

async fn create_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let controller = TransactionController::new(state.store.clone());
    let transaction = controller.create(vehicle_id, &user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn update_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateTransactionRequest>,
) -> AppResult<Json<Transaction>> {
    let controller = TransactionController::new(state.store.clone());
    Ok(Json(controller.update(id, &user.user_id, request).await?))
}

async fn delete_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let controller = TransactionController::new(state.store.clone());
    controller.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
