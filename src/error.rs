use std::error::Error;
use std::fmt;

use crate::api::ApiError;
use crate::catalog::ValidationErrors;
use crate::model::ProductId;
use crate::snapshot::SnapshotError;

/// Error type for `Storefront` operations.
///
/// Every variant is recoverable: the state is left as it was before the
/// failing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontError {
    /// A remote call failed. An error toast has been raised.
    Network(ApiError),
    /// Form input was rejected before any remote call.
    Validation(ValidationErrors),
    /// The local snapshot could not be read or written.
    Snapshot(SnapshotError),
    /// No product with this id in the list or cart.
    NotFound(ProductId),
    /// Nothing cached under the products key.
    NoSnapshot,
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontError::Network(e) => write!(f, "network failure: {}", e),
            StorefrontError::Validation(e) => write!(f, "{}", e),
            StorefrontError::Snapshot(e) => write!(f, "snapshot failure: {}", e),
            StorefrontError::NotFound(id) => write!(f, "product {} not found", id),
            StorefrontError::NoSnapshot => write!(f, "no cached product list"),
        }
    }
}

impl Error for StorefrontError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorefrontError::Network(e) => Some(e),
            StorefrontError::Validation(e) => Some(e),
            StorefrontError::Snapshot(e) => Some(e),
            StorefrontError::NotFound(_) | StorefrontError::NoSnapshot => None,
        }
    }
}

impl From<ApiError> for StorefrontError {
    fn from(err: ApiError) -> Self {
        StorefrontError::Network(err)
    }
}

impl From<ValidationErrors> for StorefrontError {
    fn from(err: ValidationErrors) -> Self {
        StorefrontError::Validation(err)
    }
}

impl From<SnapshotError> for StorefrontError {
    fn from(err: SnapshotError) -> Self {
        StorefrontError::Snapshot(err)
    }
}
