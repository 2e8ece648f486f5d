//! Frosted Panel Demo
//!
//! Drives a blur surface through its full lifecycle against a stand-in view
//! that prints every style patch it receives:
//! - Mount with a timed transition
//! - Prop updates (one redundant, one real)
//! - Unmount clearing the overrides
//!
//! Run with: cargo run -p frost_view --example frosted_panel

use frost_view::prelude::*;

struct PrintingPanel {
    name: &'static str,
}

impl StyleTarget for PrintingPanel {
    fn set_style(&mut self, patch: StylePatch) {
        println!("[{}] patch: {patch:?}", self.name);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let backdrop = ViewRef::live(PrintingPanel { name: "backdrop" });

    let props = BlurProps::new()
        .blur_amount(10.0)
        .blur_style(BlurStyle::Light)
        .transition_duration_ms(200)
        .view_ref(backdrop);

    let mut surface = BlurSurface::new(props.clone())
        .platform_limits(PlatformLimits::ANDROID)
        .style(SurfaceStyle::new().rounded(12.0))
        .child("frosted content");

    surface.on_mount()?;

    let frame = surface.render();
    println!("overlay tint: {:?}", frame.style.background);
    println!("children: {:?}", frame.children);

    // Identical resolution: no patch goes out
    surface.on_props_changed(props.clone())?;

    // Crank the blur up: the changed radius forces a re-application
    surface.on_props_changed(props.blur_amount(24.0))?;

    surface.on_unmount()?;
    Ok(())
}
