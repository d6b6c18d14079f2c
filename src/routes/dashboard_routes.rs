use axum::{extract::State, routing::get, Extension, Json, Router};
use chrono::Utc;

use crate::controllers::dashboard_controller::DashboardController;
use crate::middleware::AuthenticatedUser;
use crate::models::dashboard::DashboardStats;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(get_stats))
}

async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<DashboardStats>> {
    let controller = DashboardController::new(state.store.clone());
    Ok(Json(controller.stats(&user.user_id, Utc::now()).await?))
}
