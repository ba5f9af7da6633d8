pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::planner;
use crate::recipes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recipe suggestion pipeline (TheMealDB + LLM enhancement)
        .route("/meal/suggest", post(recipes::handlers::handle_suggest))
        // Combination engine over the ingredient catalog
        .route("/meal/plan", post(planner::handlers::handle_plan))
        // Isolated enhancement check
        .route("/llm/test", get(recipes::handlers::handle_llm_test))
        .with_state(state)
}
