//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! Module targets are hidden; actor events carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events and requests
//! RUST_LOG=debug cargo run     # also request payloads sent to the actors
//! ```
//!
//! With `RUST_LOG=info`, placing an order and checking out looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=1 size=1
//! INFO Order placed id=1
//! INFO checkout: Created batch entity_type="Order" count=2 size=3
//! INFO checkout: Checkout stored count=2
//! ```
//!
//! Admin payloads print through redacting `Debug` impls, so password digests never show
//! up at `debug` level. Rejected tokens are logged at `warn` with the reason only.

/// Initializes the global subscriber. Call once, before anything logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
