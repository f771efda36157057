use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use axum_extra::extract::WithRejection;

use crate::models::{PersonalizedPlan, PlanRequest};
use crate::services::PlanGenerationService;

use super::error::ApiError;

#[derive(Clone)]
pub struct PlanAppState {
    pub plan_service: PlanGenerationService,
}

pub fn plan_routes() -> Router {
    let state = PlanAppState {
        plan_service: PlanGenerationService::new(),
    };

    Router::new()
        .route("/generate", post(generate_plan))
        .with_state(state)
}

/// Generate a personalized training and nutrition plan from a user profile.
///
/// Absent fields take documented defaults; a body that is not valid JSON is
/// rejected through [`ApiError`] as the generic failure response.
pub async fn generate_plan(
    State(state): State<PlanAppState>,
    WithRejection(Json(request), _): WithRejection<Json<PlanRequest>, ApiError>,
) -> Result<Json<PersonalizedPlan>, ApiError> {
    let plan = state.plan_service.generate_personalized_plan(&request);
    Ok(Json(plan))
}
