use super::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(MenuError::ValidationError("name must not be empty".into()));
        }
        let price = params.price.unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            return Err(MenuError::ValidationError(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            price,
            category: params.category,
            image: params.image,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
