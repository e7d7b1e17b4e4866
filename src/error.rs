use thiserror::Error;

/// Configuration failures around constructing and reaching the app store.
/// Transitions themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("app store accessed before it was installed")]
    NotInitialized,
    #[error("app store is already installed")]
    AlreadyInitialized,
    #[error("app store must be created inside a Tokio runtime")]
    NoRuntime,
}
