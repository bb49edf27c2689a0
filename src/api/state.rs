use std::sync::Arc;

use crate::auth::{AuthService, PasswordHasher, TokenIssuer};
use crate::clients::{AdminClient, MenuClient, OrderClient};
use crate::stats::StatsService;

/// Shared handler state. Every field is a cheap handle, so cloning per request is fine.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub admins: AdminClient,
    pub menu: MenuClient,
    pub auth: AuthService,
    pub stats: StatsService,
}

impl AppState {
    pub fn new(
        orders: OrderClient,
        admins: AdminClient,
        menu: MenuClient,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            auth: AuthService::new(admins.clone(), hasher, tokens),
            stats: StatsService::new(orders.clone()),
            orders,
            admins,
            menu,
        }
    }
}
