//! Per-platform capability limits

use serde::{Deserialize, Serialize};

/// Constraints a target platform puts on the simulated blur
///
/// Supplied by the hosting environment per target platform, typically loaded
/// from its config. An explicit blur radius above `max_blur_radius` is a
/// usage error, never a silent clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformLimits {
    /// Maximum permissible explicit blur radius; `None` means unconstrained
    pub max_blur_radius: Option<f32>,
}

impl PlatformLimits {
    /// No constraints
    pub const NONE: PlatformLimits = PlatformLimits {
        max_blur_radius: None,
    };

    /// Android's renderer rejects filter radii above 25
    pub const ANDROID: PlatformLimits = PlatformLimits {
        max_blur_radius: Some(25.0),
    };
}
