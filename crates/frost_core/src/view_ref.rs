//! View refs - handles to externally owned views
//!
//! A [`ViewRef`] is how a host hands an effect component access to a view it
//! owns. The effect layer only ever borrows the ref: it pushes style patches
//! through the [`StyleTarget`] capability while mounted and must not retain
//! the ref past unmount.
//!
//! A ref comes in two shapes. [`ViewRef::Live`] wraps a shared handle that
//! actually carries the style capability. [`ViewRef::Node`] is only a
//! resolved node identifier - the classic misuse is resolving a live handle
//! down to its node id and passing that instead, which leaves nothing to
//! apply styles to. Asking a `Node` ref for its capability fails with
//! [`FrostError::StyleCapabilityMissing`].

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::{FrostError, Result};
use crate::style::{StylePatch, StyleTarget};

/// Identifier of a node already resolved inside the host's view tree
///
/// Carries no capabilities; it only names a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Shared handle to a style-patchable view
pub type SharedStyleTarget = Arc<Mutex<dyn StyleTarget + Send>>;

/// Handle to an externally owned view
#[derive(Clone)]
pub enum ViewRef {
    /// Live handle exposing the style capability
    Live(SharedStyleTarget),
    /// Resolved node identifier - no style capability
    Node(NodeId),
}

impl ViewRef {
    /// Wrap a style target in a live ref
    pub fn live<T: StyleTarget + Send + 'static>(target: T) -> Self {
        Self::Live(Arc::new(Mutex::new(target)))
    }

    /// Create a live ref from an already shared target
    pub fn shared(target: SharedStyleTarget) -> Self {
        Self::Live(target)
    }

    /// Create a ref that only names a resolved node
    pub fn node(id: NodeId) -> Self {
        Self::Node(id)
    }

    /// Borrow the style capability
    ///
    /// Fails when this ref is only a resolved node id.
    pub fn style_target(&self) -> Result<SharedStyleTarget> {
        match self {
            ViewRef::Live(target) => Ok(target.clone()),
            ViewRef::Node(_) => Err(FrostError::StyleCapabilityMissing),
        }
    }

    /// Push a style patch onto the underlying view
    pub fn set_style(&self, patch: StylePatch) -> Result<()> {
        let target = self.style_target()?;
        target.lock().unwrap().set_style(patch);
        Ok(())
    }
}

// Manual impl: the trait object behind `Live` has no Debug bound.
impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRef::Live(_) => f.write_str("ViewRef::Live(..)"),
            ViewRef::Node(id) => f.debug_tuple("ViewRef::Node").field(id).finish(),
        }
    }
}
