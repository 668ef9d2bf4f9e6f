use crate::domain::model::{Customer, Order, OrderItem, Product, RequestedItem};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::utils::error::{OrderError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory customer repository backed by a shared map. Clones share the
/// same underlying store.
#[derive(Clone, Default)]
pub struct InMemoryCustomers {
    customers: Arc<Mutex<HashMap<String, Customer>>>,
}

impl InMemoryCustomers {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, customer: Customer) {
        let mut customers = self.customers.lock().await;
        customers.insert(customer.id.clone(), customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let customers = self.customers.lock().await;
        Ok(customers.get(id).cloned())
    }
}

/// In-memory product catalog. The stock guard here is storage-level only; it
/// does not serialize concurrent order flows against each other.
#[derive(Clone, Default)]
pub struct InMemoryProducts {
    products: Arc<Mutex<HashMap<String, Product>>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, product: Product) {
        let mut products = self.products.lock().await;
        products.insert(product.id.clone(), product);
    }

    /// Current stock level, for inspection in tests.
    pub async fn stock_of(&self, id: &str) -> Option<u32> {
        let products = self.products.lock().await;
        products.get(id).map(|p| p.quantity)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_all_by_id(&self, ids: &[String]) -> Result<Vec<Product>> {
        let products = self.products.lock().await;
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for id in ids {
            if seen.insert(id.as_str()) {
                if let Some(product) = products.get(id) {
                    found.push(product.clone());
                }
            }
        }
        Ok(found)
    }

    async fn update_quantity(&self, items: &[RequestedItem]) -> Result<()> {
        let mut products = self.products.lock().await;
        for item in items {
            let product =
                products
                    .get_mut(&item.id)
                    .ok_or_else(|| OrderError::StorageError {
                        message: format!("cannot update quantity of unknown product {}", item.id),
                    })?;
            product.quantity = product.quantity.checked_sub(item.quantity).ok_or_else(|| {
                OrderError::StorageError {
                    message: format!("stock of product {} would go negative", item.id),
                }
            })?;
        }
        Ok(())
    }
}

/// In-memory order store. Assigns ids and timestamps on create.
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    orders: Arc<Mutex<HashMap<Uuid, Order>>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        let orders = self.orders.lock().await;
        orders.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn create(&self, customer: Customer, items: Vec<OrderItem>) -> Result<Order> {
        let order = Order {
            id: Uuid::new_v4(),
            customer,
            items,
            created_at: Utc::now(),
        };
        let mut orders = self.orders.lock().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        let orders = self.orders.lock().await;
        Ok(orders.get(&id).cloned())
    }
}
