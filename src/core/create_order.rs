use crate::domain::model::{Order, OrderItem, RequestedItem};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::utils::error::{OrderError, Result};

#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<RequestedItem>,
}

/// The create-order use case. Validates the customer, resolves the requested
/// products against the catalog, verifies stock, persists the order and then
/// decrements inventory. All persistence goes through the injected
/// repositories; this type owns no storage of its own.
pub struct CreateOrder<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrder<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order> {
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| OrderError::InvalidCustomerError {
                id: request.customer_id.clone(),
            })?;

        tracing::debug!("Resolved customer {} ({})", customer.id, customer.name);

        let ids: Vec<String> = request.items.iter().map(|item| item.id.clone()).collect();
        let catalog = self.products.find_all_by_id(&ids).await?;

        tracing::debug!(
            "Catalog returned {} of {} requested products",
            catalog.len(),
            ids.len()
        );

        // Walk the request, not the catalog response: a requested id the
        // catalog did not return is a hard error, and line items keep the
        // caller's ordering.
        let mut items = Vec::with_capacity(request.items.len());
        for requested in &request.items {
            let product = catalog
                .iter()
                .find(|p| p.id == requested.id)
                .ok_or_else(|| OrderError::UnknownProductError {
                    id: requested.id.clone(),
                })?;

            if product.quantity < requested.quantity {
                return Err(OrderError::InsufficientStockError {
                    name: product.name.clone(),
                });
            }

            items.push(OrderItem {
                product_id: product.id.clone(),
                price: product.price,
                quantity: requested.quantity,
            });
        }

        let order = self.orders.create(customer, items).await?;
        tracing::debug!("Order {} persisted", order.id);

        // The decrement takes the original request items; the repository
        // dedups ids itself. Awaited so a failed decrement surfaces to the
        // caller instead of leaving a silently inconsistent catalog. The
        // already-persisted order is not compensated in that case.
        self.products.update_quantity(&request.items).await?;

        tracing::info!(
            "Order {} created for customer {} with {} item(s)",
            order.id,
            order.customer.id,
            order.items.len()
        );

        Ok(order)
    }
}
