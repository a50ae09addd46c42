use thiserror::Error;

use crate::{DestinationId, Locale};

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Duplicate destination id {0}")]
    DuplicateId(DestinationId),
    #[error("Destination {id} has an empty name for locale '{locale}'")]
    EmptyName { id: DestinationId, locale: Locale },
    #[error("Destination {id} has invalid {field}: {value} (must be finite and non-negative)")]
    InvalidNumber {
        id: DestinationId,
        field: &'static str,
        value: f64,
    },
    #[error("Destination {0} has a zero travel duration")]
    ZeroDuration(DestinationId),
}
