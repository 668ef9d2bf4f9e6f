pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CatalogSeed;

pub use adapters::memory::{InMemoryCustomers, InMemoryOrders, InMemoryProducts};
pub use core::create_order::{CreateOrder, CreateOrderRequest};
pub use domain::model::{Customer, Order, OrderItem, Product, RequestedItem};
pub use utils::error::{OrderError, Result};
