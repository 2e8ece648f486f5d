//! Blur surface - the frosted-glass fallback component
//!
//! Simulates a background blur on targets without native backdrop support.
//! The host drives three lifecycle transitions:
//!
//! - **`on_mount`**: resolve the filter radius and push it (plus an optional
//!   transition declaration) onto the bound view ref
//! - **`on_props_changed`**: adopt the next props and re-apply only when the
//!   resolved radius or transition duration actually changed
//! - **`on_unmount`**: clear both style overrides from the view ref
//!
//! `render` is pure: it produces a [`Frame`] whose container style carries
//! the resolved overlay tint beneath any caller overrides, wrapping the
//! child content unchanged. Side effects are confined to the three
//! transitions and target only the externally owned view ref; the surface
//! never reads from it and never retains it past unmount.

use frost_core::{Color, Filter, Result, StylePatch, Transition, TransitionProperty};

use crate::platform::PlatformLimits;
use crate::props::BlurProps;
use crate::resolve::{blur_radius_for_props, overlay_color_for_props};

// ============================================================================
// Surface style
// ============================================================================

/// Container style for the rendered frame
///
/// All properties are optional so caller overrides can be merged on top of
/// the resolved overlay tint without clobbering unset keys.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    /// Background tint
    pub background: Option<Color>,
    /// Uniform corner radius
    pub corner_radius: Option<f32>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,
}

impl SurfaceStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background tint
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set a uniform corner radius
    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Set opacity (0.0 = transparent, 1.0 = opaque)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Merge another style on top of this one
    ///
    /// Properties set in `other` win; unset properties keep this style's
    /// values.
    pub fn merge(&self, other: &SurfaceStyle) -> SurfaceStyle {
        SurfaceStyle {
            background: other.background.or(self.background),
            corner_radius: other.corner_radius.or(self.corner_radius),
            opacity: other.opacity.or(self.opacity),
        }
    }
}

/// Pure render output: the resolved container style plus the child content
///
/// Children are borrowed from the surface and passed through untouched; the
/// surface never inspects them.
#[derive(Debug)]
pub struct Frame<'a, C> {
    /// Resolved container style (overlay tint merged beneath caller overrides)
    pub style: SurfaceStyle,
    /// Child content, unchanged
    pub children: &'a [C],
}

// ============================================================================
// Blur surface
// ============================================================================

/// Frosted-glass fallback surface
///
/// Generic over the child content type `C`, which it stores and passes
/// through without looking at it.
pub struct BlurSurface<C = ()> {
    props: BlurProps,
    radius_limit: Option<f32>,
    style_override: SurfaceStyle,
    children: Vec<C>,
}

impl<C> BlurSurface<C> {
    /// Create a surface from its props
    pub fn new(props: BlurProps) -> Self {
        Self {
            props,
            radius_limit: None,
            style_override: SurfaceStyle::new(),
            children: Vec::new(),
        }
    }

    /// Constrain the maximum explicit blur radius
    pub fn radius_limit(mut self, limit: f32) -> Self {
        self.radius_limit = Some(limit);
        self
    }

    /// Adopt a platform's limits
    pub fn platform_limits(mut self, limits: PlatformLimits) -> Self {
        self.radius_limit = limits.max_blur_radius;
        self
    }

    /// Set caller style overrides, merged over the resolved overlay tint
    pub fn style(mut self, style: SurfaceStyle) -> Self {
        self.style_override = style;
        self
    }

    /// Append a child
    pub fn child(mut self, child: C) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.children.extend(children);
        self
    }

    /// Current props
    pub fn props(&self) -> &BlurProps {
        &self.props
    }

    // ========================================================================
    // Lifecycle (host-driven)
    // ========================================================================

    /// Mount transition: push the resolved styles onto the view ref
    ///
    /// Fails with [`frost_core::FrostError::RadiusAboveLimit`] when an
    /// explicit radius exceeds the configured ceiling, and with
    /// [`frost_core::FrostError::StyleCapabilityMissing`] when the bound ref
    /// is a resolved node id. Both abort before any style mutation. Without
    /// a bound ref this is a no-op.
    pub fn on_mount(&self) -> Result<()> {
        self.apply_view_ref_style()
    }

    /// Update transition: adopt `next` and re-apply styles if needed
    ///
    /// Styles are re-applied only when the resolved radius or the transition
    /// duration differ between the current and next props. Re-applying
    /// identical values is safe; skipping them avoids redundant writes to
    /// the host view.
    pub fn on_props_changed(&mut self, next: BlurProps) -> Result<()> {
        let current = blur_radius_for_props(&self.props, self.radius_limit)?;
        let incoming = blur_radius_for_props(&next, self.radius_limit)?;
        let duration_changed =
            self.props.transition_duration_ms != next.transition_duration_ms;

        self.props = next;

        if current != incoming || duration_changed {
            self.apply_view_ref_style()
        } else {
            tracing::trace!(radius = current, "blur props unchanged, skipping style update");
            Ok(())
        }
    }

    /// Unmount transition: clear the filter and transition overrides
    ///
    /// Both keys are set to an explicit unset rather than left stale. The
    /// view ref is not used after this returns.
    pub fn on_unmount(&self) -> Result<()> {
        let view = match &self.props.view_ref {
            Some(view) => view,
            None => return Ok(()),
        };

        tracing::debug!("clearing blur styles from view ref");
        view.set_style(StylePatch::new().clear_filter().clear_transition())
    }

    /// Render the tinted container frame (pure, no side effects)
    pub fn render(&self) -> Frame<'_, C> {
        let base = SurfaceStyle::new().bg(overlay_color_for_props(&self.props));

        Frame {
            style: base.merge(&self.style_override),
            children: &self.children,
        }
    }

    fn apply_view_ref_style(&self) -> Result<()> {
        // Resolve first: a ceiling violation must abort before any mutation
        let radius = blur_radius_for_props(&self.props, self.radius_limit)?;

        let view = match &self.props.view_ref {
            Some(view) => view,
            None => return Ok(()),
        };

        let mut patch = StylePatch::new().filter(Filter::blur(radius));
        if self.props.transition_duration_ms > 0 {
            patch = patch.transition(Transition::linear(
                TransitionProperty::Filter,
                self.props.transition_duration_ms,
            ));
        }

        tracing::debug!(
            radius,
            transition_ms = self.props.transition_duration_ms,
            "applying blur styles to view ref"
        );
        view.set_style(patch)
    }
}
