use axum::Router;
use axum_helpers::health_router;
use domain_bookings::{BookingService, InMemoryBookingRepository};
use domain_items::{InMemoryCommentRepository, InMemoryItemRepository, ItemService};
use domain_users::{InMemoryUserRepository, UserService};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod gates;
mod openapi;

use config::Config;
use gates::{ItemGate, UserGate};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    config::install_color_eyre();

    let config = Config::from_env()?;
    config::init_tracing(&config.environment);

    // In-memory stores shared between the domain services and the gates
    let users_repo = Arc::new(InMemoryUserRepository::new());
    let items_repo = Arc::new(InMemoryItemRepository::new());
    let comments_repo = Arc::new(InMemoryCommentRepository::new());
    let bookings_repo = Arc::new(InMemoryBookingRepository::new());

    let user_gate = Arc::new(UserGate::new(users_repo.clone()));
    let item_gate = Arc::new(ItemGate::new(items_repo.clone()));

    let user_service = UserService::new(users_repo);
    let item_service = ItemService::new(
        items_repo,
        comments_repo,
        bookings_repo.clone(),
        user_gate.clone(),
    );
    let booking_service = BookingService::new(bookings_repo, user_gate, item_gate);

    let app = Router::new()
        .nest("/users", domain_users::handlers::router(user_service))
        .nest("/items", domain_items::handlers::router(item_service))
        .nest(
            "/bookings",
            domain_bookings::handlers::router(booking_service),
        )
        .merge(health_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::build()))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("lendit API listening on {}", config.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("lendit API shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
