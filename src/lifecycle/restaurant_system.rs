use tracing::{error, info};

use crate::clients::{AdminClient, MenuClient, OrderClient};

/// Runtime orchestrator for the three resource actors.
///
/// The system consists of:
/// - **Order Actor**: the Order Store
/// - **Admin Actor**: the Credential Store
/// - **Menu Actor**: the menu catalog
///
/// None of them depend on each other, so every actor runs with an empty context.
///
/// # Example
///
/// ```rust
/// use voice_orders::lifecycle::RestaurantSystem;
/// use voice_orders::model::OrderCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = RestaurantSystem::new();
///
///     let order = system
///         .order_client
///         .create_order(OrderCreate::new("Tea", Some(2.5)))
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(order.id.0, 1);
///
///     system.shutdown().await
/// }
/// ```
pub struct RestaurantSystem {
    pub order_client: OrderClient,
    pub admin_client: AdminClient,
    pub menu_client: MenuClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns every actor in its own Tokio task.
    pub fn new() -> Self {
        let (order_actor, order_client) = crate::order_actor::new();
        let (admin_actor, admin_client) = crate::admin_actor::new();
        let (menu_actor, menu_client) = crate::menu_actor::new();

        let order_handle = tokio::spawn(order_actor.run(()));
        let admin_handle = tokio::spawn(admin_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run(()));

        Self {
            order_client,
            admin_client,
            menu_client,
            handles: vec![order_handle, admin_handle, menu_handle],
        }
    }

    /// Drops the system's clients and waits for every actor to drain and stop.
    ///
    /// Actors only stop once *all* clones of their client are gone, so any
    /// [`AppState`](crate::api::AppState) must be dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.admin_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
