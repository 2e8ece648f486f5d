//! Blur surface properties

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use frost_core::{Color, ViewRef};

/// Visual blur style
///
/// `Light`, `ExtraLight` and `Dark` carry overlay tints for the simulated
/// effect. `Regular` and `Prominent` are styles a native backdrop blur
/// understands but the simulation has no dedicated tint for; they take the
/// dark tint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurStyle {
    #[default]
    Dark,
    Light,
    #[serde(rename = "xlight")]
    ExtraLight,
    Regular,
    Prominent,
}

impl BlurStyle {
    /// Canonical config name for this style
    pub fn name(self) -> &'static str {
        match self {
            BlurStyle::Dark => "dark",
            BlurStyle::Light => "light",
            BlurStyle::ExtraLight => "xlight",
            BlurStyle::Regular => "regular",
            BlurStyle::Prominent => "prominent",
        }
    }
}

/// Error returned when parsing an unknown blur style name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown blur style: {0}")]
pub struct ParseBlurStyleError(String);

impl FromStr for BlurStyle {
    type Err = ParseBlurStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(BlurStyle::Dark),
            "light" => Ok(BlurStyle::Light),
            "xlight" => Ok(BlurStyle::ExtraLight),
            "regular" => Ok(BlurStyle::Regular),
            "prominent" => Ok(BlurStyle::Prominent),
            other => Err(ParseBlurStyleError(other.to_string())),
        }
    }
}

/// Properties for a blur surface
///
/// Supplied fresh on every render by the host. Nothing in here persists
/// beyond a single mount/update/unmount cycle.
///
/// Defaults: `blur_style = Dark`, `blur_amount = 10`, no explicit radius,
/// no overlay override, no transition, no view ref.
#[derive(Clone, Debug)]
pub struct BlurProps {
    /// Requested blur intensity; the effective filter radius derives from it
    pub blur_amount: Option<f32>,
    /// Explicit filter radius, bypassing the derivation from `blur_amount`
    pub blur_radius: Option<f32>,
    /// Visual style selecting the overlay tint
    pub blur_style: BlurStyle,
    /// Explicit overlay tint, overriding the style table
    pub overlay_color: Option<Color>,
    /// Transition duration for filter changes; 0 disables the transition
    pub transition_duration_ms: u32,
    /// Externally owned view the blur filter is pushed onto
    pub view_ref: Option<ViewRef>,
}

impl Default for BlurProps {
    fn default() -> Self {
        Self {
            blur_amount: Some(10.0),
            blur_radius: None,
            blur_style: BlurStyle::Dark,
            overlay_color: None,
            transition_duration_ms: 0,
            view_ref: None,
        }
    }
}

impl BlurProps {
    /// Create props with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blur intensity
    pub fn blur_amount(mut self, amount: f32) -> Self {
        self.blur_amount = Some(amount);
        self
    }

    /// Set an explicit filter radius
    pub fn blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = Some(radius);
        self
    }

    /// Drop both intensity and radius; the surface resolves to no blur
    pub fn no_blur(mut self) -> Self {
        self.blur_amount = None;
        self.blur_radius = None;
        self
    }

    /// Set the visual style
    pub fn blur_style(mut self, style: BlurStyle) -> Self {
        self.blur_style = style;
        self
    }

    /// Set an explicit overlay tint
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = Some(color);
        self
    }

    /// Set the transition duration in milliseconds
    pub fn transition_duration_ms(mut self, duration_ms: u32) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    /// Bind the externally owned view the filter applies to
    pub fn view_ref(mut self, view: ViewRef) -> Self {
        self.view_ref = Some(view);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = BlurProps::default();
        assert_eq!(props.blur_amount, Some(10.0));
        assert_eq!(props.blur_radius, None);
        assert_eq!(props.blur_style, BlurStyle::Dark);
        assert!(props.overlay_color.is_none());
        assert_eq!(props.transition_duration_ms, 0);
        assert!(props.view_ref.is_none());
    }

    #[test]
    fn test_style_from_str_round_trips() {
        for style in [
            BlurStyle::Dark,
            BlurStyle::Light,
            BlurStyle::ExtraLight,
            BlurStyle::Regular,
            BlurStyle::Prominent,
        ] {
            assert_eq!(style.name().parse::<BlurStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_style_from_str_rejects_unknown() {
        let err = "neon".parse::<BlurStyle>().unwrap_err();
        assert_eq!(err, ParseBlurStyleError("neon".to_string()));
    }

    #[test]
    fn test_builder_overrides() {
        let props = BlurProps::new()
            .blur_radius(12.0)
            .blur_style(BlurStyle::Light)
            .transition_duration_ms(150);

        assert_eq!(props.blur_radius, Some(12.0));
        assert_eq!(props.blur_style, BlurStyle::Light);
        assert_eq!(props.transition_duration_ms, 150);
        // The intensity default stays in place until cleared
        assert_eq!(props.blur_amount, Some(10.0));
    }
}
