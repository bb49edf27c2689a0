//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client translates [`FrameworkError`](actor_framework::FrameworkError) into its
//! resource's own error type, so callers can match on `NotFound` or `UsernameTaken`
//! instead of framework internals.

pub mod admin_client;
pub mod menu_client;
pub mod order_client;

pub use admin_client::*;
pub use menu_client::*;
pub use order_client::*;
