use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid customer id: {id}")]
    InvalidCustomerError { id: String },

    #[error("Unknown product id: {id}")]
    UnknownProductError { id: String },

    #[error("Insufficient stock for product {name}")]
    InsufficientStockError { name: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OrderError>;

/// Coarse classification used by the CLI for exit codes: client input errors
/// are the caller's problem, storage errors are the system's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ClientInput,
    Storage,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::InvalidCustomerError { .. }
            | OrderError::UnknownProductError { .. }
            | OrderError::InsufficientStockError { .. }
            | OrderError::InvalidConfigValueError { .. } => ErrorCategory::ClientInput,
            OrderError::StorageError { .. }
            | OrderError::IoError(_)
            | OrderError::SerializationError(_) => ErrorCategory::Storage,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::InvalidCustomerError { id } => {
                format!("No customer exists with id '{}'", id)
            }
            OrderError::UnknownProductError { id } => {
                format!("Product '{}' is not in the catalog", id)
            }
            OrderError::InsufficientStockError { name } => {
                format!("Not enough stock left for '{}'", name)
            }
            OrderError::StorageError { message } => {
                format!("The order store reported a problem: {}", message)
            }
            OrderError::IoError(e) => format!("Could not read input: {}", e),
            OrderError::SerializationError(e) => {
                format!("Could not parse catalog file: {}", e)
            }
            OrderError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }
}
