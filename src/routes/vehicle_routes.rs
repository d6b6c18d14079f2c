use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::middleware::AuthenticatedUser;
use crate::models::vehicle::{Vehicle, VehicleDetails};
use crate::state::AppState;
use crate::utils::{
    errors::AppResult,
    extract::{ResourceId, ValidatedJson},
};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicles/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.list(&user.user_id).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<VehicleDetails>> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.get_details(id, &user.user_id, Utc::now()).await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.create(&user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.update(id, &user.user_id, request).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let controller = VehicleController::new(state.store.clone());
    controller.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
