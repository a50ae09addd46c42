use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferSearchError {
    #[error("Catalog error: {0}")]
    Data(#[from] transfer_search_data::DataError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TransferSearchError>;
