//! # HTTP API
//!
//! Public order routes, login, and the `/admin` namespace. Every `/admin/*` route sits
//! behind [`middleware::require_admin`].

pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::AppState;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use handlers::*;

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/stats", get(stats))
        .route("/orders", get(list_orders))
        .route("/revenue", get(revenue))
        .route("/dashboard", get(dashboard))
        .route("/menu-items", post(add_menu_item))
        .route("/menu-items/:id", delete(delete_menu_item))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_admin));

    Router::new()
        .route("/orders", get(list_orders))
        .route("/add-order", post(add_order))
        .route("/update-order/:id", put(update_order))
        .route("/delete-order/:id", delete(delete_order))
        .route("/checkout", post(checkout))
        .route("/menu-items", get(list_menu_items))
        .route("/login", post(login))
        .route("/create-admin", post(create_admin))
        .nest("/admin", admin)
        .with_state(state)
}
