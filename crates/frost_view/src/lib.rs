//! Frost View
//!
//! A frosted-glass fallback surface for targets without native backdrop
//! blur. A [`BlurSurface`] turns a declarative property set into imperative
//! style patches on an externally owned view ref, and renders a tinted
//! container around its children.
//!
//! # Example
//!
//! ```rust
//! use frost_view::prelude::*;
//!
//! struct Backdrop;
//!
//! impl StyleTarget for Backdrop {
//!     fn set_style(&mut self, patch: StylePatch) {
//!         // push the patch onto the real view
//!         let _ = patch;
//!     }
//! }
//!
//! let props = BlurProps::new()
//!     .blur_amount(10.0)
//!     .transition_duration_ms(200)
//!     .view_ref(ViewRef::live(Backdrop));
//!
//! let surface: BlurSurface<()> = BlurSurface::new(props);
//! surface.on_mount().unwrap();
//! let frame = surface.render();
//! assert!(frame.style.background.is_some());
//! surface.on_unmount().unwrap();
//! ```

pub mod platform;
pub mod props;
pub mod resolve;
pub mod surface;

// Property surface
pub use props::{BlurProps, BlurStyle, ParseBlurStyleError};

// Pure resolvers
pub use resolve::{blur_radius_for_props, overlay_color_for_props};

// Component
pub use surface::{BlurSurface, Frame, SurfaceStyle};

// Platform config
pub use platform::PlatformLimits;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::platform::PlatformLimits;
    pub use crate::props::{BlurProps, BlurStyle};
    pub use crate::resolve::{blur_radius_for_props, overlay_color_for_props};
    pub use crate::surface::{BlurSurface, Frame, SurfaceStyle};

    pub use frost_core::{
        Color, Filter, FrostError, Patch, Result, StylePatch, StyleTarget, Transition,
        TransitionProperty, ViewRef,
    };
}
