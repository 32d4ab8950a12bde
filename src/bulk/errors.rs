use thiserror::Error;
use crate::hidden::errors::HiddenError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulkError {
    #[error("No item IDs given")]
    EmptyIds,

    #[error("Unauthorized: invalid or missing passkey")]
    Unauthorized,
}

impl From<HiddenError> for BulkError {
    fn from(error: HiddenError) -> Self {
        match error {
            HiddenError::Unauthorized => BulkError::Unauthorized,
        }
    }
}
