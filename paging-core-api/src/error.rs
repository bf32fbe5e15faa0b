use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Data source error: {0}")]
    DataSourceError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
