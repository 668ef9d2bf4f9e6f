use crate::domain::model::RequestedItem;
use crate::utils::error::{OrderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Parse a `PRODUCT_ID:QUANTITY` item spec as given on the command line.
/// The use case itself does not reject zero quantities; the CLI does.
pub fn parse_item_spec(field_name: &str, spec: &str) -> Result<RequestedItem> {
    let (id, qty) = spec
        .split_once(':')
        .ok_or_else(|| OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: spec.to_string(),
            reason: "Expected PRODUCT_ID:QUANTITY".to_string(),
        })?;

    validate_non_empty(field_name, id)?;

    let quantity: u32 = qty
        .parse()
        .map_err(|_| OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: spec.to_string(),
            reason: "Quantity must be a non-negative integer".to_string(),
        })?;

    if quantity == 0 {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: spec.to_string(),
            reason: "Quantity must be at least 1".to_string(),
        });
    }

    Ok(RequestedItem {
        id: id.to_string(),
        quantity,
    })
}
