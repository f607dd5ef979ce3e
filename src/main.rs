use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(&config);

    let orchestrator = web::Data::new(state.orchestrator.clone());
    let conversation_service = web::Data::from(state.conversation_service.clone());
    let terms_store = web::Data::new(state.terms_store.clone());
    let llm_health = web::Data::new(state.llm_health);

    tracing::info!("Starting ArbIntel server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(orchestrator.clone())
            .app_data(conversation_service.clone())
            .app_data(terms_store.clone())
            .app_data(llm_health.clone())
            .configure(api::analysis::configure)
            .configure(api::conversation::configure)
            .configure(api::terms::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
