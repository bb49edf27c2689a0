//! # Statistics Aggregator
//!
//! Read-only views derived from the Order Store. Every call takes a fresh snapshot;
//! nothing is cached, and separate calls may observe different snapshots.

use crate::clients::OrderClient;
use crate::model::{Order, OrderStatus};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::instrument;

/// Dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_orders: usize,
    pub today_orders: usize,
    pub active_orders: usize,
    pub today_revenue: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Revenue {
    pub total_revenue: f64,
    pub completed_revenue: f64,
}

/// Computes [`Stats`] over one snapshot. "Today" means orders created on `today` (UTC),
/// whatever their status.
pub fn summarize(orders: &[Order], today: NaiveDate) -> Stats {
    let todays: Vec<&Order> = orders
        .iter()
        .filter(|o| o.created_at.date_naive() == today)
        .collect();

    Stats {
        total_orders: orders.len(),
        today_orders: todays.len(),
        active_orders: count_active(orders),
        today_revenue: todays.iter().map(|o| o.price).sum(),
        total_revenue: revenue(orders, |_| true),
    }
}

fn count_active(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.status.is_active()).count()
}

fn revenue(orders: &[Order], include: impl Fn(&Order) -> bool) -> f64 {
    orders.iter().filter(|o| include(o)).map(|o| o.price).sum()
}

fn completed(order: &Order) -> bool {
    order.status == OrderStatus::Completed
}

#[derive(Clone)]
pub struct StatsService {
    orders: OrderClient,
}

impl StatsService {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    pub async fn total_orders(&self) -> Result<usize, OrderError> {
        Ok(self.orders.list().await?.len())
    }

    /// Orders that are pending or preparing.
    pub async fn active_orders(&self) -> Result<usize, OrderError> {
        Ok(count_active(&self.orders.list().await?))
    }

    pub async fn total_revenue(&self) -> Result<f64, OrderError> {
        Ok(revenue(&self.orders.list().await?, |_| true))
    }

    pub async fn completed_revenue(&self) -> Result<f64, OrderError> {
        Ok(revenue(&self.orders.list().await?, completed))
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<Stats, OrderError> {
        let orders = self.orders.list().await?;
        Ok(summarize(&orders, Utc::now().date_naive()))
    }

    /// Both revenue figures, taken from the same snapshot.
    #[instrument(skip(self))]
    pub async fn revenue(&self) -> Result<Revenue, OrderError> {
        let orders = self.orders.list().await?;
        Ok(Revenue {
            total_revenue: revenue(&orders, |_| true),
            completed_revenue: revenue(&orders, completed),
        })
    }
}
