use crate::{errors::GenericError, utils::error_chain_fmt};

#[allow(clippy::enum_variant_names)]
#[derive(thiserror::Error)]
pub enum CheckoutOrderError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    UnexpectedCustomError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
    #[error("{0}")]
    ClientError(String, anyhow::Error),
}

impl std::fmt::Debug for CheckoutOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<CheckoutOrderError> for GenericError {
    fn from(err: CheckoutOrderError) -> GenericError {
        match err {
            CheckoutOrderError::ValidationError(message) => GenericError::ValidationError(message),
            CheckoutOrderError::UnexpectedCustomError(message) => {
                GenericError::UnexpectedCustomError(message)
            }
            CheckoutOrderError::UnexpectedError(error) => GenericError::UnexpectedError(error),
            CheckoutOrderError::ClientError(message, error) => {
                GenericError::ClientError(message, error)
            }
        }
    }
}
