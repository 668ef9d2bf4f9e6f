use crate::domain::model::RequestedItem;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{parse_item_spec, validate_non_empty, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-service")]
#[command(about = "Create an order against an in-memory catalog")]
pub struct CliConfig {
    /// Id of the ordering customer
    #[arg(long)]
    pub customer: String,

    /// Requested item, repeatable
    #[arg(long = "item", value_name = "PRODUCT_ID:QUANTITY")]
    pub items: Vec<String>,

    /// JSON file seeding customers and products; a built-in sample is used
    /// when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn requested_items(&self) -> Result<Vec<RequestedItem>> {
        self.items
            .iter()
            .map(|spec| parse_item_spec("item", spec))
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("customer", &self.customer)?;

        if self.items.is_empty() {
            return Err(OrderError::InvalidConfigValueError {
                field: "item".to_string(),
                value: "<none>".to_string(),
                reason: "At least one --item is required".to_string(),
            });
        }

        self.requested_items()?;
        Ok(())
    }
}
