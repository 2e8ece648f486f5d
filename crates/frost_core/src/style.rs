//! Style patches and the view style capability
//!
//! Provides `StylePatch` - a partial style override that can be pushed onto
//! an externally owned view. Patches follow the same all-optional schema as
//! element styles: only set keys touch the target, and a key can be set to
//! an explicit [`Patch::Unset`] to clear a previous override rather than
//! leaving a stale value behind.
//!
//! # Example
//!
//! ```rust
//! use frost_core::{Filter, StylePatch, Transition, TransitionProperty};
//!
//! // Apply a blur with a timed transition
//! let patch = StylePatch::new()
//!     .filter(Filter::blur(8.0))
//!     .transition(Transition::linear(TransitionProperty::Filter, 200));
//!
//! // Later, clear both overrides
//! let clear = StylePatch::new().clear_filter().clear_transition();
//! assert!(!clear.is_empty());
//! ```

// ============================================================================
// Filters
// ============================================================================

/// Visual filter functions an external view can apply to its content
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Gaussian blur
    Blur {
        /// Blur radius in logical pixels
        radius: f32,
    },
}

impl Filter {
    /// Create a blur filter
    pub fn blur(radius: f32) -> Self {
        Self::Blur { radius }
    }
}

// ============================================================================
// Transitions
// ============================================================================

/// Easing curve applied over a transition's duration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Style property a transition animates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionProperty {
    Filter,
    Opacity,
    Transform,
}

/// Timed transition declaration for a single style property
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Property the transition applies to
    pub property: TransitionProperty,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: Easing,
}

impl Transition {
    pub fn new(property: TransitionProperty, duration_ms: u32, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }

    /// Linear transition shorthand
    pub fn linear(property: TransitionProperty, duration_ms: u32) -> Self {
        Self::new(property, duration_ms, Easing::Linear)
    }
}

// ============================================================================
// Patches
// ============================================================================

/// A single style override: a concrete value, or an explicit clear
///
/// `Unset` is distinct from leaving the key untouched - an untouched key
/// keeps whatever the target already had, while `Unset` removes a previously
/// applied override.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Patch<T> {
    Set(T),
    Unset,
}

impl<T> Patch<T> {
    /// Get the set value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Set(v) => Some(v),
            Patch::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }
}

/// Partial style override for an external view
///
/// All keys are optional - when applying or merging patches, only set keys
/// take effect. This mirrors state-specific element styling where only the
/// properties that change are carried.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StylePatch {
    /// Content filter override
    pub filter: Option<Patch<Filter>>,
    /// Transition timing override
    pub transition: Option<Patch<Transition>>,
}

impl StylePatch {
    /// Create a new empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(Patch::Set(filter));
        self
    }

    /// Explicitly clear the content filter
    pub fn clear_filter(mut self) -> Self {
        self.filter = Some(Patch::Unset);
        self
    }

    /// Set the transition declaration
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(Patch::Set(transition));
        self
    }

    /// Explicitly clear the transition declaration
    pub fn clear_transition(mut self) -> Self {
        self.transition = Some(Patch::Unset);
        self
    }

    /// Merge another patch on top of this one
    ///
    /// Keys set in `other` (including `Unset`) override keys in `self`;
    /// untouched keys in `other` do not.
    pub fn merge(&self, other: &StylePatch) -> StylePatch {
        StylePatch {
            filter: other.filter.or(self.filter),
            transition: other.transition.or(self.transition),
        }
    }

    /// Check if any key is touched
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.transition.is_none()
    }
}

// ============================================================================
// Style capability
// ============================================================================

/// Capability an external view must expose so style patches can be pushed
/// onto it
///
/// This is the only interface the effect layer ever calls on its
/// environment. Implementors decide what "unset" means for their surface
/// (removing a CSS declaration, resetting a layer effect, etc).
pub trait StyleTarget {
    /// Apply a partial style override
    fn set_style(&mut self, patch: StylePatch);
}
