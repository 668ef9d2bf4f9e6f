use crate::domain::model::{Customer, Order, OrderItem, Product, RequestedItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// A customer that does not exist is `None`, not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Batch lookup. The result may be smaller than the input: unknown ids
    /// are simply absent. Duplicate ids in the input are deduplicated here.
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>>;

    /// Decrement stock by the requested quantity per item.
    async fn update_quantity(&self, items: &[RequestedItem]) -> Result<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order for `customer`, assigning its id and timestamp.
    async fn create(&self, customer: Customer, items: Vec<OrderItem>) -> Result<Order>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>>;
}
