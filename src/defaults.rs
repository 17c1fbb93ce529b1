//! Default request settings and numeric tolerances

use glam::Vec2;

use crate::region::PlacementMode;
use crate::types::Threshold;

/// Band half-width around the viewport center. Zero means only a target
/// centered exactly on the screen center counts as centered.
pub const CENTER_THRESHOLD: Threshold = Threshold::pixels(0.0);
pub const OFFSET: Vec2 = Vec2::ZERO;
pub const MODE: PlacementMode = PlacementMode::Inside;

/// Per-component tolerance when matching a pivot to one of the nine canonical values.
pub const PIVOT_EPSILON: f32 = 1e-5;

/// Below this, a projected `w` or a ray/plane denominator is treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Name used for controllers built with `Controller::new`.
pub const CONTROLLER_NAME: &str = "Controller";
