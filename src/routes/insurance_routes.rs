use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::insurance_controller::InsuranceController;
use crate::dto::insurance_dto::{CreateInsurancePolicyRequest, UpdateInsurancePolicyRequest};
use crate::middleware::AuthenticatedUser;
use crate::models::insurance::InsurancePolicy;
use crate::state::AppState;
use crate::utils::{
    errors::AppResult,
    extract::{ResourceId, ValidatedJson},
};

pub fn create_insurance_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/insurance", get(list_policies).post(create_policy))
        .route("/insurance/:id", put(update_policy).delete(delete_policy))
}

async fn list_policies(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
) -> AppResult<Json<Vec<InsurancePolicy>>> {
    let controller = InsuranceController::new(state.store.clone());
    Ok(Json(controller.list(vehicle_id, &user.user_id).await?))
}

async fn create_policy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
    ValidatedJson(request): ValidatedJson<CreateInsurancePolicyRequest>,
) -> AppResult<(StatusCode, Json<InsurancePolicy>)> {
    let controller = InsuranceController::new(state.store.clone());
    let policy = controller.create(vehicle_id, &user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(policy)))
}

async fn update_policy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateInsurancePolicyRequest>,
) -> AppResult<Json<InsurancePolicy>> {
    let controller = InsuranceController::new(state.store.clone());
    Ok(Json(controller.update(id, &user.user_id, request).await?))
}

async fn delete_policy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let controller = InsuranceController::new(state.store.clone());
    controller.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
