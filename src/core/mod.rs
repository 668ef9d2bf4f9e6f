pub mod create_order;

pub use crate::domain::model::{Customer, Order, OrderItem, Product, RequestedItem};
pub use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
pub use crate::utils::error::Result;
