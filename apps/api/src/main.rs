mod classifier;
mod config;
mod errors;
mod fetchers;
mod llm_client;
mod models;
mod planner;
mod recipes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::keywords::KeywordTables;
use crate::config::Config;
use crate::fetchers::mealdb::MealDbClient;
use crate::fetchers::usda::UsdaClient;
use crate::fetchers::IngredientSource;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Allergy Recipe API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Keyword tables built once, shared everywhere
    let keywords = KeywordTables::default();

    // Upstream clients
    let ingredients: Arc<dyn IngredientSource> =
        Arc::new(UsdaClient::new(config.usda_api_key.clone(), keywords));
    let mealdb = MealDbClient::new();
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    info!("upstream clients initialized (USDA, TheMealDB, Gemini)");

    // Build app state
    let state = AppState {
        mealdb,
        llm,
        ingredients,
        keywords,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
