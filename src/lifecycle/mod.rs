//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the resource actors, plus the logging setup.
//!
//! ## Graceful Shutdown
//!
//! 1. The HTTP server stops accepting connections and drops its [`AppState`](crate::api::AppState)
//! 2. [`RestaurantSystem::shutdown`] drops the remaining clients, closing each channel
//! 3. Each actor's `recv()` returns `None`, it logs its final size and exits
//! 4. The task handles are awaited
//!
//! Requests already queued in a channel are still processed before the actor exits.

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::*;
