use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};

use crate::controllers::record_controller::RecordController;
use crate::dto::record_dto::CreateServiceRecordRequest;
use crate::middleware::AuthenticatedUser;
use crate::models::service_record::ServiceRecord;
use crate::state::AppState;
use crate::utils::{
    errors::AppResult,
    extract::{ResourceId, ValidatedJson},
};

pub fn create_record_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/records", get(list_records).post(create_record))
        .route("/records/:id", delete(delete_record))
}

async fn list_records(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
) -> AppResult<Json<Vec<ServiceRecord>>> {
    let controller = RecordController::new(state.store.clone());
    Ok(Json(controller.list(vehicle_id, &user.user_id).await?))
}

async fn create_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
    ValidatedJson(request): ValidatedJson<CreateServiceRecordRequest>,
) -> AppResult<(StatusCode, Json<ServiceRecord>)> {
    let controller = RecordController::new(state.store.clone());
    let record = controller.create(vehicle_id, &user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn delete_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let controller = RecordController::new(state.store.clone());
    controller.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
