use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HiddenError {
    #[error("Unauthorized: invalid or missing passkey")]
    Unauthorized,
}
