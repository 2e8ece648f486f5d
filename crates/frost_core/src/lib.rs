//! Frost Core Primitives
//!
//! This crate provides the foundational types for the Frost effect library:
//!
//! - **Color**: Linear RGBA color with named constants
//! - **Style Patches**: Partial style overrides with explicit unset semantics
//! - **Style Capability**: The single-method trait an external view must
//!   expose so styles can be pushed onto it
//! - **View Refs**: Cloneable handles to externally owned views
//!
//! # Example
//!
//! ```rust
//! use frost_core::{Filter, StylePatch, StyleTarget, ViewRef};
//!
//! struct Panel {
//!     applied: Vec<StylePatch>,
//! }
//!
//! impl StyleTarget for Panel {
//!     fn set_style(&mut self, patch: StylePatch) {
//!         self.applied.push(patch);
//!     }
//! }
//!
//! let view = ViewRef::live(Panel { applied: Vec::new() });
//! view.set_style(StylePatch::new().filter(Filter::blur(8.0))).unwrap();
//! ```

pub mod color;
pub mod error;
pub mod style;
pub mod view_ref;

pub use color::Color;
pub use error::{FrostError, Result};
pub use style::{
    Easing, Filter, Patch, StylePatch, StyleTarget, Transition, TransitionProperty,
};
pub use view_ref::{NodeId, SharedStyleTarget, ViewRef};
