//! Error taxonomy shared across the kernel and domain layers.

use thiserror::Error;

use crate::common::auth::AuthError;

/// Errors raised by a data store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matched the given id (and filter, where the call carries one).
    #[error("row not found")]
    RowNotFound,

    /// The underlying persistence layer is unreachable or failed mid-call.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Error raised by a notification delivery sink.
///
/// Delivery is fire-and-forget: the engine logs this and never surfaces it
/// to the actor that triggered the originating action.
#[derive(Error, Debug)]
#[error("delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// Errors surfaced by core operations.
///
/// `PermissionDenied` and `InvalidTransition` are always raised before any
/// mutation is attempted. `Store` failures during a multi-step operation
/// leave the already-committed steps intact.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    PermissionDenied(#[from] AuthError),

    #[error("invalid transition: cannot {action} an article in status '{from}'")]
    InvalidTransition { from: String, action: String },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Adapter for store calls that target one row: turns
    /// [`StoreError::RowNotFound`] into a typed [`CoreError::NotFound`] for
    /// `entity`, passing every other store failure through.
    pub fn from_store(entity: &'static str) -> impl Fn(StoreError) -> CoreError {
        move |err| match err {
            StoreError::RowNotFound => CoreError::NotFound(entity),
            other => CoreError::Store(other),
        }
    }
}
