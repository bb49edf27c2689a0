//! Customer orders: one purchasable line item tracked through a status lifecycle.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](Order#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Update parameters ([`OrderUpdate`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

surrogate_id!(
    /// Type-safe identifier for Orders.
    OrderId
);

/// The closed set of states an order can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Orders still being worked on by the kitchen.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a status string outside [`OrderStatus::ALL`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A stored order. `created_at` feeds the daily statistics and is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub item: String,
    pub status: OrderStatus,
    pub price: f64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order. New orders always start out pending.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub item: String,
    pub price: f64,
}

impl OrderCreate {
    /// A missing price is recorded as zero.
    pub fn new(item: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            item: item.into(),
            price: price.unwrap_or(0.0),
        }
    }
}

/// Payload for updating an existing order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_wire_name() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "done".parse::<OrderStatus>(),
            Err(UnknownStatus("done".into()))
        );
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn only_pending_and_preparing_are_active() {
        let active: Vec<_> = OrderStatus::ALL.into_iter().filter(|s| s.is_active()).collect();
        assert_eq!(active, vec![OrderStatus::Pending, OrderStatus::Preparing]);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let order = Order {
            id: OrderId(7),
            item: "Tea".into(),
            status: OrderStatus::Pending,
            price: 2.5,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "item": "Tea", "status": "pending", "price": 2.5})
        );
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        assert_eq!(OrderCreate::new("Soup", None).price, 0.0);
    }
}
