use anyhow::Result;
use order_service::domain::ports::OrderRepository;
use order_service::{
    CatalogSeed, CreateOrder, CreateOrderRequest, InMemoryCustomers, InMemoryOrders,
    InMemoryProducts, OrderError, RequestedItem,
};
use rust_decimal_macros::dec;

async fn seeded_stores() -> (InMemoryCustomers, InMemoryProducts, InMemoryOrders) {
    let customers = InMemoryCustomers::new();
    let products = InMemoryProducts::new();
    let orders = InMemoryOrders::new();

    let seed = CatalogSeed::sample();
    for customer in seed.customers {
        customers.insert(customer).await;
    }
    for product in seed.products {
        products.insert(product).await;
    }

    (customers, products, orders)
}

fn request(customer_id: &str, items: &[(&str, u32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.to_string(),
        items: items
            .iter()
            .map(|(id, quantity)| RequestedItem {
                id: id.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}

#[tokio::test]
async fn creating_an_order_captures_prices_and_decrements_stock() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders.clone());

    let order = use_case.execute(request("c1", &[("p1", 3)])).await?;

    assert_eq!(order.customer.id, "c1");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, "p1");
    assert_eq!(order.items[0].price, dec!(10.0));
    assert_eq!(order.items[0].quantity, 3);

    // Decrement is awaited, so stock is already updated on return.
    assert_eq!(products.stock_of("p1").await, Some(2));

    // The aggregate landed in the store.
    let persisted = orders.find_by_id(order.id).await?;
    assert!(persisted.is_some());
    assert_eq!(persisted.unwrap().items.len(), 1);

    Ok(())
}

#[tokio::test]
async fn multi_item_order_keeps_request_ordering() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders);

    let order = use_case
        .execute(request("c2", &[("p2", 2), ("p1", 1)]))
        .await?;

    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].product_id, "p2");
    assert_eq!(order.items[0].price, dec!(4.5));
    assert_eq!(order.items[1].product_id, "p1");
    assert_eq!(products.stock_of("p2").await, Some(10));
    assert_eq!(products.stock_of("p1").await, Some(4));

    Ok(())
}

#[tokio::test]
async fn unknown_customer_is_rejected() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders.clone());

    let err = use_case
        .execute(request("nobody", &[("p1", 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InvalidCustomerError { ref id } if id == "nobody"));
    assert_eq!(products.stock_of("p1").await, Some(5));
    assert_eq!(orders.count().await, 0);

    Ok(())
}

#[tokio::test]
async fn over_requesting_stock_fails_and_leaves_state_untouched() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders.clone());

    let err = use_case
        .execute(request("c1", &[("p1", 10)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStockError { ref name } if name == "Keyboard"));
    assert_eq!(products.stock_of("p1").await, Some(5));
    assert_eq!(orders.count().await, 0);

    Ok(())
}

#[tokio::test]
async fn unknown_product_fails_the_whole_order() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders.clone());

    let err = use_case
        .execute(request("c1", &[("p1", 1), ("missing", 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::UnknownProductError { ref id } if id == "missing"));
    assert_eq!(products.stock_of("p1").await, Some(5));
    assert_eq!(orders.count().await, 0);

    Ok(())
}

#[tokio::test]
async fn identical_requests_are_not_deduplicated() -> Result<()> {
    let (customers, products, orders) = seeded_stores().await;
    let use_case = CreateOrder::new(customers, products.clone(), orders.clone());

    let first = use_case.execute(request("c1", &[("p2", 3)])).await?;
    let second = use_case.execute(request("c1", &[("p2", 3)])).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(orders.count().await, 2);
    assert_eq!(products.stock_of("p2").await, Some(6));

    Ok(())
}
