use actor_framework::ActorClient;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::HeaderMap,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{middleware::authorize, AppState};
use crate::auth::{AccessToken, Claims};
use crate::error::AppError;
use crate::menu_actor::MenuError;
use crate::model::{
    MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, OrderStatus,
};
use crate::order_actor::OrderError;
use crate::stats::{Revenue, Stats};

type ApiResult<T> = Result<Json<T>, AppError>;

/// Unwraps a JSON body, turning axum's plain-text rejection into a `detail` error.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::MalformedPayload(rejection.body_text()))
}

/// Unwraps a numeric path id. Numbers too large to be an id cannot exist, so they
/// are reported through `missing` rather than as a malformed request.
fn path_id<I: From<u32>>(
    path: Result<Path<u64>, PathRejection>,
    missing: impl FnOnce(String) -> AppError,
) -> Result<I, AppError> {
    let Path(raw) = path.map_err(|rejection| AppError::MalformedPayload(rejection.body_text()))?;
    u32::try_from(raw)
        .map(I::from)
        .map_err(|_| missing(raw.to_string()))
}

#[derive(Debug, Deserialize)]
pub struct NewOrder {
    pub item: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<Order>> {
    Ok(Json(state.orders.list().await?))
}

pub async fn add_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> ApiResult<Order> {
    let NewOrder { item, price } = body(payload)?;
    let order = state.orders.create_order(OrderCreate::new(item, price)).await?;
    info!(id = %order.id, "Order placed");
    Ok(Json(order))
}

pub async fn update_order(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<StatusChange>, JsonRejection>,
) -> ApiResult<Order> {
    let id: OrderId = path_id(path, |id| OrderError::NotFound(id).into())?;
    let StatusChange { status } = body(payload)?;
    let status: OrderStatus = status
        .parse()
        .map_err(|e: crate::model::UnknownStatus| OrderError::InvalidStatus(e.0))?;
    Ok(Json(state.orders.update_status(id, status).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Value> {
    let id: OrderId = path_id(path, |id| OrderError::NotFound(id).into())?;
    state.orders.delete(id).await?;
    Ok(Json(json!({ "message": format!("Order {id} deleted") })))
}

pub async fn checkout(
    State(state): State<AppState>,
    payload: Result<Json<Cart>, JsonRejection>,
) -> ApiResult<Value> {
    let cart = body(payload)?;
    let items = cart
        .items
        .into_iter()
        .map(|entry| OrderCreate::new(entry.name, entry.price))
        .collect();
    let count = state.orders.checkout(items).await?;
    Ok(Json(json!({ "message": "Order placed successfully", "count": count })))
}

pub async fn list_menu_items(State(state): State<AppState>) -> ApiResult<Vec<MenuItem>> {
    Ok(Json(state.menu.list().await?))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<AccessToken> {
    let Credentials { username, password } = body(payload)?;
    Ok(Json(state.auth.login(&username, &password).await?))
}

/// Open while no admin exists so the first account can be bootstrapped; afterwards
/// only an existing admin may add more.
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Value> {
    if state.admins.has_admins().await? {
        authorize(&state, &headers)?;
    }
    let Credentials { username, password } = body(payload)?;
    let admin = state.auth.register(&username, &password).await?;
    Ok(Json(json!({ "message": "Admin created", "admin": admin })))
}

pub async fn stats(State(state): State<AppState>) -> ApiResult<Stats> {
    Ok(Json(state.stats.stats().await?))
}

pub async fn revenue(State(state): State<AppState>) -> ApiResult<Revenue> {
    Ok(Json(state.stats.revenue().await?))
}

pub async fn dashboard(Extension(claims): Extension<Claims>) -> Json<Value> {
    Json(json!({ "message": format!("Welcome, {}", claims.sub) }))
}

pub async fn add_menu_item(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemCreate>, JsonRejection>,
) -> ApiResult<Value> {
    let item = state.menu.add_item(body(payload)?).await?;
    Ok(Json(json!({ "message": "Menu item added", "item": item })))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Value> {
    let id: MenuItemId = path_id(path, |id| MenuError::NotFound(id).into())?;
    state.menu.delete(id).await?;
    Ok(Json(json!({ "message": format!("Menu item {id} deleted") })))
}
