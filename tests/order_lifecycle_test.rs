use actor_framework::ActorClient;
use voice_orders::lifecycle::RestaurantSystem;
use voice_orders::model::{OrderCreate, OrderId, OrderStatus};
use voice_orders::order_actor::OrderError;
use voice_orders::stats::StatsService;

#[tokio::test]
async fn test_order_lifecycle() {
    let system = RestaurantSystem::new();
    let orders = system.order_client.clone();

    let created = orders
        .create_order(OrderCreate::new("Margherita", Some(9.5)))
        .await
        .unwrap();
    assert_eq!(created.id, OrderId(1));
    assert_eq!(created.status, OrderStatus::Pending);

    let updated = orders
        .update_status(created.id, OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Preparing);
    assert_eq!(updated.item, "Margherita");
    assert_eq!(updated.price, 9.5);

    orders.delete(created.id).await.unwrap();
    assert!(orders.list().await.unwrap().is_empty());

    drop(orders);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ids_are_unique_and_prices_non_negative() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;

    let mut ids = vec![];
    for (item, price) in [("Tea", None), ("Cake", Some(4.0)), ("Soup", Some(0.0))] {
        ids.push(orders.create_order(OrderCreate::new(item, price)).await.unwrap().id);
    }
    orders.delete(ids[1]).await.unwrap();
    ids.push(orders.create_order(OrderCreate::new("Bread", Some(1.0))).await.unwrap().id);

    assert_eq!(ids, vec![OrderId(1), OrderId(2), OrderId(3), OrderId(4)]);

    let rejected = orders.create_order(OrderCreate::new("Refund", Some(-1.0))).await;
    assert!(matches!(rejected, Err(OrderError::ValidationError(_))));

    let stored = orders.list().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|o| o.price >= 0.0));

    // Stable: the same id still resolves to the same record.
    let tea = orders.get(OrderId(1)).await.unwrap().unwrap();
    assert_eq!((tea.item.as_str(), tea.price), ("Tea", 0.0));
}

#[tokio::test]
async fn test_update_missing_order_fails_without_mutating() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;
    orders.create_order(OrderCreate::new("Tea", Some(2.0))).await.unwrap();
    let before = orders.list().await.unwrap();

    let result = orders.update_status(OrderId(42), OrderStatus::Completed).await;

    assert_eq!(result, Err(OrderError::NotFound("42".into())));
    assert_eq!(orders.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_twice_yields_not_found() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;
    let a = orders.create_order(OrderCreate::new("Tea", None)).await.unwrap();
    orders.create_order(OrderCreate::new("Cake", None)).await.unwrap();

    orders.delete(a.id).await.unwrap();
    assert_eq!(orders.list().await.unwrap().len(), 1);

    assert_eq!(orders.delete(a.id).await, Err(OrderError::NotFound("1".into())));
    assert_eq!(orders.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_creates_pending_orders() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;
    let stats = StatsService::new(orders.clone());
    orders.create_order(OrderCreate::new("Water", None)).await.unwrap();
    let before = stats.total_orders().await.unwrap();

    let count = orders
        .checkout(vec![
            OrderCreate::new("Tea", Some(2.5)),
            OrderCreate::new("Cake", Some(4.0)),
        ])
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(stats.total_orders().await.unwrap(), before + 2);

    let stored = orders.list().await.unwrap();
    let new: Vec<_> = stored
        .iter()
        .skip(1)
        .map(|o| (o.item.as_str(), o.price, o.status))
        .collect();
    assert_eq!(
        new,
        vec![
            ("Tea", 2.5, OrderStatus::Pending),
            ("Cake", 4.0, OrderStatus::Pending),
        ]
    );
}

#[tokio::test]
async fn test_checkout_rolls_back_on_invalid_entry() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;

    let result = orders
        .checkout(vec![
            OrderCreate::new("Tea", Some(2.5)),
            OrderCreate::new("", Some(1.0)),
        ])
        .await;

    assert!(matches!(result, Err(OrderError::ValidationError(_))));
    assert!(orders.list().await.unwrap().is_empty());

    // The failed batch consumed no ids.
    let next = orders.create_order(OrderCreate::new("Cake", None)).await.unwrap();
    assert_eq!(next.id, OrderId(1));
}

#[tokio::test]
async fn test_revenue_tracks_current_orders() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;
    let stats = StatsService::new(orders.clone());

    assert_eq!(stats.total_revenue().await.unwrap(), 0.0);
    assert_eq!(stats.completed_revenue().await.unwrap(), 0.0);

    let tea = orders.create_order(OrderCreate::new("Tea", Some(2.5))).await.unwrap();
    let cake = orders.create_order(OrderCreate::new("Cake", Some(4.0))).await.unwrap();
    let soup = orders.create_order(OrderCreate::new("Soup", Some(6.0))).await.unwrap();
    orders.update_status(tea.id, OrderStatus::Completed).await.unwrap();
    orders.update_status(cake.id, OrderStatus::Completed).await.unwrap();
    orders.update_status(soup.id, OrderStatus::Cancelled).await.unwrap();

    assert_eq!(stats.total_revenue().await.unwrap(), 12.5);
    assert_eq!(stats.completed_revenue().await.unwrap(), 6.5);
    assert_eq!(stats.active_orders().await.unwrap(), 0);

    orders.delete(cake.id).await.unwrap();
    let revenue = stats.revenue().await.unwrap();
    assert_eq!((revenue.total_revenue, revenue.completed_revenue), (8.5, 2.5));

    let summary = stats.stats().await.unwrap();
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.today_orders, 2);
    assert_eq!(summary.today_revenue, 8.5);
}

#[tokio::test]
async fn test_concurrent_status_updates_are_serialized() {
    let system = RestaurantSystem::new();
    let orders = system.order_client.clone();
    let id = orders.create_order(OrderCreate::new("Tea", None)).await.unwrap().id;

    let mut handles = vec![];
    for status in [OrderStatus::Preparing, OrderStatus::Completed, OrderStatus::Cancelled] {
        let orders = orders.clone();
        handles.push(tokio::spawn(async move {
            orders.update_status(id, status).await
        }));
    }
    let mut applied = vec![];
    for handle in handles {
        applied.push(handle.await.unwrap().unwrap().status);
    }

    // Whatever order they ran in, the stored status is one of the written values.
    let stored = orders.get(id).await.unwrap().unwrap();
    assert!(applied.contains(&stored.status));
}
