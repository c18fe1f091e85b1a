use thiserror::Error;

/// Authorization errors for the giornalino editorial platform
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not the owner of this resource")]
    NotOwner,
}
