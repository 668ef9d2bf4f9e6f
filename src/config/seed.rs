use crate::domain::model::{Customer, Product};
use crate::utils::error::Result;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Initial catalog state for the in-memory adapters, loadable from a JSON
/// file or built in as a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

impl CatalogSeed {
    pub fn from_file(path: &str) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let seed = serde_json::from_str(&data)?;
        Ok(seed)
    }

    pub fn sample() -> Self {
        Self {
            customers: vec![
                Customer {
                    id: "c1".to_string(),
                    name: "Alice".to_string(),
                },
                Customer {
                    id: "c2".to_string(),
                    name: "Bob".to_string(),
                },
            ],
            products: vec![
                Product {
                    id: "p1".to_string(),
                    name: "Keyboard".to_string(),
                    price: dec!(10.0),
                    quantity: 5,
                },
                Product {
                    id: "p2".to_string(),
                    name: "Mouse".to_string(),
                    price: dec!(4.5),
                    quantity: 12,
                },
                Product {
                    id: "p3".to_string(),
                    name: "Monitor".to_string(),
                    price: dec!(129.9),
                    quantity: 3,
                },
            ],
        }
    }
}
