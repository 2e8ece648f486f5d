//! Error types for frost

use thiserror::Error;

/// Errors that can occur when resolving or applying view effects
///
/// Both variants are usage errors raised synchronously to the caller;
/// nothing here is retried or recovered internally.
#[derive(Error, Debug)]
pub enum FrostError {
    /// An explicit blur radius exceeds the platform ceiling
    #[error("blur radius cannot be greater than {limit} on this platform (was: {radius})")]
    RadiusAboveLimit { radius: f32, limit: f32 },

    /// The bound view ref is a resolved node id, not a live handle
    #[error(
        "view ref has no style capability; pass the live view handle instead of a resolved node id"
    )]
    StyleCapabilityMissing,
}

/// Result type for frost operations
pub type Result<T> = std::result::Result<T, FrostError>;
