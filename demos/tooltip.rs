//! Place a tooltip for buttons in each corner of a 1280x720 screen.
//!
//! Run with: RUST_LOG=debug cargo run --example tooltip --features tracing

use flyout::{Corners, PlacementMode, PlacementRequest, Threshold, Viewport, place};
use glam::Vec2;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let viewport = Viewport::new(1280.0, 720.0);
    let threshold = Threshold::try_new(40.0).map_err(|e| miette::miette!("{e}"))?;
    let buttons = [
        ("top-left", Vec2::new(80.0, 680.0)),
        ("top-right", Vec2::new(1200.0, 680.0)),
        ("center", Vec2::new(640.0, 360.0)),
        ("bottom-left", Vec2::new(80.0, 40.0)),
        ("bottom-right", Vec2::new(1200.0, 40.0)),
    ];

    for mode in PlacementMode::ALL {
        println!("{mode}:");
        for (name, center) in buttons {
            let target = Corners::from_center_size(center, Vec2::new(120.0, 36.0));
            let request = PlacementRequest::new(target, viewport)
                .with_mode(mode)
                .with_offset(Vec2::new(4.0, 4.0))
                .with_threshold(threshold);
            let result = place(&request);
            match result.pivot() {
                Some(pivot) => println!(
                    "  {name:<12} pivot {pivot:<13} at ({:.1}, {:.1})",
                    result.screen_point().x,
                    result.screen_point().y
                ),
                None => println!("  {name:<12} not placed"),
            }
        }
    }
    Ok(())
}
