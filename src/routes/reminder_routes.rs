use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::reminder_controller::ReminderController;
use crate::dto::reminder_dto::{CreateReminderRequest, UpdateReminderRequest};
use crate::middleware::AuthenticatedUser;
use crate::models::reminder::ServiceReminder;
use crate::state::AppState;
use crate::utils::{
    errors::AppResult,
    extract::{ResourceId, ValidatedJson},
};

pub fn create_reminder_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/reminders", get(list_reminders).post(create_reminder))
        .route("/reminders/:id", put(update_reminder).delete(delete_reminder))
}

async fn list_reminders(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
) -> AppResult<Json<Vec<ServiceReminder>>> {
    let controller = ReminderController::new(state.store.clone());
    Ok(Json(controller.list(vehicle_id, &user.user_id).await?))
}

async fn create_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(vehicle_id): ResourceId,
    ValidatedJson(request): ValidatedJson<CreateReminderRequest>,
) -> AppResult<(StatusCode, Json<ServiceReminder>)> {
    let controller = ReminderController::new(state.store.clone());
    let reminder = controller.create(vehicle_id, &user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(reminder)))
}

async fn update_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
    ValidatedJson(request): ValidatedJson<UpdateReminderRequest>,
) -> AppResult<Json<ServiceReminder>> {
    let controller = ReminderController::new(state.store.clone());
    Ok(Json(controller.update(id, &user.user_id, request).await?))
}

async fn delete_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    let controller = ReminderController::new(state.store.clone());
    controller.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
