//! Property resolution
//!
//! Two pure helpers that turn [`BlurProps`] into concrete style values: the
//! effective filter radius and the overlay tint. Both are deterministic and
//! side-effect free; the lifecycle code in [`crate::surface`] is their only
//! in-crate caller.

use frost_core::{Color, FrostError, Result};

use crate::props::{BlurProps, BlurStyle};

/// Ratio between the simulated filter radius and the requested blur amount
///
/// A native backdrop blur appears stronger than a plain filter blur of the
/// same number; scaling the amount down to ~80% matches it closely.
const BLUR_AMOUNT_SCALE: f32 = 0.8;

/// Resolve the effective blur radius for the given props
///
/// An explicit `blur_radius` is passed through unchanged after validation
/// against the optional platform ceiling; exceeding the ceiling is an error,
/// never a silent clamp. Without an explicit radius the value derives from
/// `blur_amount`, and without either the radius is 0.
pub fn blur_radius_for_props(props: &BlurProps, limit: Option<f32>) -> Result<f32> {
    if let Some(radius) = props.blur_radius {
        if let Some(limit) = limit {
            if radius > limit {
                return Err(FrostError::RadiusAboveLimit { radius, limit });
            }
        }
        return Ok(radius);
    }

    match props.blur_amount {
        None => Ok(0.0),
        Some(amount) => Ok((amount.max(0.0) * BLUR_AMOUNT_SCALE).round()),
    }
}

/// Resolve the overlay tint for the given props
///
/// An explicit `overlay_color` always wins. Otherwise the tint comes from a
/// fixed table keyed by blur style; styles without an entry take the dark
/// tint.
pub fn overlay_color_for_props(props: &BlurProps) -> Color {
    if let Some(color) = props.overlay_color {
        return color;
    }

    match props.blur_style {
        BlurStyle::Light => Color::rgba8(255, 255, 255, 0.2),
        BlurStyle::ExtraLight => Color::rgba8(255, 255, 255, 0.75),
        // Dark, plus any style the table does not cover
        _ => Color::rgba8(16, 12, 12, 0.64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_tint() -> Color {
        Color::rgba8(16, 12, 12, 0.64)
    }

    #[test]
    fn test_radius_derives_from_amount() {
        let props = BlurProps::new().blur_amount(10.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 8.0);
    }

    #[test]
    fn test_radius_derivation_rounds() {
        // 13 * 0.8 = 10.4 -> 10, 14 * 0.8 = 11.2 -> 11
        let props = BlurProps::new().blur_amount(13.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 10.0);
        let props = BlurProps::new().blur_amount(14.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 11.0);
    }

    #[test]
    fn test_no_amount_resolves_to_zero() {
        let props = BlurProps::new().no_blur();
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_amount_floors_at_zero() {
        let props = BlurProps::new().blur_amount(-5.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 0.0);
    }

    #[test]
    fn test_explicit_radius_passes_through() {
        let props = BlurProps::new().blur_radius(25.0);
        assert_eq!(blur_radius_for_props(&props, Some(50.0)).unwrap(), 25.0);
        // Also unchecked when no ceiling is supplied
        let props = BlurProps::new().blur_radius(120.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 120.0);
    }

    #[test]
    fn test_explicit_radius_wins_over_amount() {
        let props = BlurProps::new().blur_amount(10.0).blur_radius(3.0);
        assert_eq!(blur_radius_for_props(&props, None).unwrap(), 3.0);
    }

    #[test]
    fn test_radius_above_limit_fails() {
        let props = BlurProps::new().blur_radius(60.0);
        let err = blur_radius_for_props(&props, Some(50.0)).unwrap_err();
        match err {
            FrostError::RadiusAboveLimit { radius, limit } => {
                assert_eq!(radius, 60.0);
                assert_eq!(limit, 50.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        // The message names both values
        let props = BlurProps::new().blur_radius(60.0);
        let msg = blur_radius_for_props(&props, Some(50.0))
            .unwrap_err()
            .to_string();
        assert!(msg.contains("60"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_overlay_table() {
        let light = BlurProps::new().blur_style(BlurStyle::Light);
        assert_eq!(
            overlay_color_for_props(&light),
            Color::rgba8(255, 255, 255, 0.2)
        );

        let xlight = BlurProps::new().blur_style(BlurStyle::ExtraLight);
        assert_eq!(
            overlay_color_for_props(&xlight),
            Color::rgba8(255, 255, 255, 0.75)
        );

        let dark = BlurProps::new().blur_style(BlurStyle::Dark);
        assert_eq!(overlay_color_for_props(&dark), dark_tint());
    }

    #[test]
    fn test_uncovered_styles_fall_back_to_dark() {
        for style in [BlurStyle::Regular, BlurStyle::Prominent] {
            let props = BlurProps::new().blur_style(style);
            assert_eq!(overlay_color_for_props(&props), dark_tint());
        }
    }

    #[test]
    fn test_explicit_overlay_always_wins() {
        let tint = Color::rgba(0.0, 0.5, 1.0, 0.3);
        for style in [BlurStyle::Dark, BlurStyle::Light, BlurStyle::Prominent] {
            let props = BlurProps::new().blur_style(style).overlay_color(tint);
            assert_eq!(overlay_color_for_props(&props), tint);
        }
    }
}
