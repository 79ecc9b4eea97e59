use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("execution error: {0}")]
    Execution(String),
    #[error("delivery error: {0}")]
    Delivery(String),
}

pub type AppResult<T> = Result<T, AppError>;
