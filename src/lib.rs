//! # Voice Orders
//!
//! A restaurant ordering backend: customers place orders and check out carts, staff move
//! orders through their status lifecycle, and admins sign in to see revenue and manage
//! the menu.
//!
//! ## Architecture
//!
//! Each resource lives in its own actor built on [`actor_framework::ResourceActor`]. The actor
//! owns its records, hands out monotonic ids and serializes every write, so concurrent
//! requests never need application-level locks.
//!
//! ### 1. The Stores ([`order_actor`], [`admin_actor`], [`menu_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations: validation and unique keys.
//!
//! ### 2. The Interface ([`clients`])
//! Domain clients such as [`OrderClient`](clients::OrderClient) translate framework errors
//! into [`OrderError`](order_actor::OrderError) and friends.
//!
//! ### 3. The Services ([`auth`], [`stats`])
//! Login, registration and token checks; read-only revenue and order statistics.
//!
//! ### 4. The Edge ([`api`], [`config`], [`lifecycle`])
//! An `axum` router, environment configuration, and the [`RestaurantSystem`](lifecycle::RestaurantSystem)
//! that starts and stops the actors.
//!
//! ## Running
//!
//! ```bash
//! SECRET_KEY=change-me RUST_LOG=info cargo run
//! ```

use std::sync::Arc;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub mod admin_actor;
pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod stats;

use auth::{Argon2Hasher, TokenIssuer};
use config::Config;
use lifecycle::RestaurantSystem;

/// Serves the API until Ctrl-C or SIGTERM, then stops the actors.
pub async fn start_server(config: Config) -> std::io::Result<()> {
    info!("Initializing state...");
    let system = RestaurantSystem::new();
    let tokens = TokenIssuer::new(
        config.secret_key.as_bytes(),
        chrono::Duration::minutes(config.token_ttl_minutes),
    );
    let state = api::AppState::new(
        system.order_client.clone(),
        system.admin_client.clone(),
        system.menu_client.clone(),
        Arc::new(Argon2Hasher::new()),
        Arc::new(tokens),
    );

    let app = api::router(state)
        .layer(cors(&config.cors_origin))
        .layer(TraceLayer::new_for_http());

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    if let Err(e) = system.shutdown().await {
        warn!("Unclean shutdown: {e}");
    }
    Ok(())
}

fn cors(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(60 * 60));

    match HeaderValue::from_str(origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!("Invalid CORS_ORIGIN {origin:?}, cross-origin requests will be refused");
            layer
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
