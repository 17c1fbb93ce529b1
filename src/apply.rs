//! Writing a placement result onto a floating element.
//!
//! The element and its parent are plain value types mirroring the layout
//! fields a UI toolkit exposes, so a host copies them in, calls [`apply`],
//! and copies them back.

use glam::Vec2;

use crate::errors::PlacementError;
use crate::log::warn;
use crate::projection::{Camera, screen_to_plane};
use crate::provider::PlacementResult;
use crate::region::Region;
use crate::types::{Corners, Viewport};

/// Layout fields of the floating element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingElement {
    pub pivot: Vec2,
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    /// Position of the pivot relative to the anchors, in parent-local units.
    pub anchored_position: Vec2,
}

impl Default for FloatingElement {
    fn default() -> Self {
        let center = Region::MiddleCenter.pivot();
        FloatingElement {
            pivot: center,
            anchor_min: center,
            anchor_max: center,
            anchored_position: Vec2::ZERO,
        }
    }
}

/// The rectangle the floating element is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParentRect {
    /// World corners, same winding as the target's.
    pub corners: Corners,
    /// Size in the parent's own local units.
    pub size: Vec2,
    pub pivot: Vec2,
}

impl ParentRect {
    pub fn new(corners: Corners, size: Vec2) -> Self {
        ParentRect {
            corners,
            size,
            pivot: Region::MiddleCenter.pivot(),
        }
    }

    /// Convert a screen point to local coordinates measured from the rect's
    /// center.
    pub fn screen_to_local(
        &self,
        screen: Vec2,
        camera: Option<&Camera>,
        viewport: Viewport,
    ) -> Result<Vec2, PlacementError> {
        let right = self.corners.right_axis();
        let up = self.corners.up_axis();
        let normal = right.cross(up);
        if self.size.cmple(Vec2::ZERO).any() || !self.size.is_finite() {
            return Err(PlacementError::conversion("parent rectangle has no local size"));
        }
        let (Some(right_dir), Some(up_dir)) = (right.try_normalize(), up.try_normalize()) else {
            return Err(PlacementError::conversion("parent rectangle has no area"));
        };

        let center = self.corners.centroid();
        let hit = screen_to_plane(camera, screen, viewport, center, normal)
            .ok_or(PlacementError::conversion("screen point does not land on the parent rectangle's plane"))?;

        let world = hit - center;
        let units_per_world = self.size / Vec2::new(right.length(), up.length());
        Ok(Vec2::new(world.dot(right_dir), world.dot(up_dir)) * units_per_world)
    }
}

/// Position `element` inside `parent` according to `result`.
///
/// Sets the element pivot to the result's pivot, and forces the element's
/// anchors and the parent's pivot to the center. Any previous anchor setup is
/// overwritten. The screen point is converted to parent-local space first; on
/// failure neither the element nor the parent is touched, and the error is
/// logged before it is returned.
pub fn apply(
    result: &PlacementResult,
    element: &mut FloatingElement,
    parent: &mut ParentRect,
    camera: Option<&Camera>,
    viewport: Viewport,
) -> Result<(), PlacementError> {
    let (pivot, local) = locate(result, parent, camera, viewport)
        .inspect_err(|_err| {
            warn!(error = %_err, "floating element not moved");
        })?;

    let center = Region::MiddleCenter.pivot();
    element.pivot = pivot.pivot();
    element.anchor_min = center;
    element.anchor_max = center;
    parent.pivot = center;
    element.anchored_position = local;
    Ok(())
}

fn locate(
    result: &PlacementResult,
    parent: &ParentRect,
    camera: Option<&Camera>,
    viewport: Viewport,
) -> Result<(Region, Vec2), PlacementError> {
    let pivot = result
        .pivot()
        .ok_or(PlacementError::missing("placement result"))?;
    let local = parent.screen_to_local(result.screen_point(), camera, viewport)?;
    Ok((pivot, local))
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::context::Context;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn full_screen_parent() -> ParentRect {
        let corners = Corners::from_min_max(Vec2::ZERO, Vec2::new(1280.0, 720.0));
        ParentRect::new(corners, Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn overlay_apply_sets_all_fields() {
        let result = PlacementResult::new(Region::TopLeft, Vec2::new(100.0, 600.0), Context::none());
        let mut element = FloatingElement {
            pivot: Vec2::new(0.3, 0.3),
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            anchored_position: Vec2::new(5.0, 5.0),
        };
        let mut parent = full_screen_parent();
        parent.pivot = Vec2::ZERO;

        apply(&result, &mut element, &mut parent, None, viewport()).unwrap();

        assert_eq!(element.pivot, Vec2::new(0.0, 1.0));
        assert_eq!(element.anchor_min, Vec2::splat(0.5));
        assert_eq!(element.anchor_max, Vec2::splat(0.5));
        assert_eq!(parent.pivot, Vec2::splat(0.5));
        assert_eq!(element.anchored_position, Vec2::new(-540.0, 240.0));
    }

    #[test]
    fn scaled_parent_converts_units() {
        // Canvas drawn at 2x: 640x360 local units over 1280x720 pixels.
        let corners = Corners::from_min_max(Vec2::ZERO, Vec2::new(1280.0, 720.0));
        let parent = ParentRect::new(corners, Vec2::new(640.0, 360.0));
        let local = parent
            .screen_to_local(Vec2::new(740.0, 460.0), None, viewport())
            .unwrap();
        assert_eq!(local, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn camera_apply_round_trips() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh(60f32.to_radians(), 1280.0 / 720.0, 0.1, 100.0);
        let camera = Camera::from_parts(view, projection);
        let corners = Corners::from_center_size(Vec2::ZERO, Vec2::new(8.0, 4.0));
        let parent = ParentRect::new(corners, Vec2::new(800.0, 400.0));

        let world = Vec3::new(1.0, 0.5, 0.0);
        let screen = camera.world_to_screen(world, viewport()).unwrap();
        let local = parent.screen_to_local(screen, Some(&camera), viewport()).unwrap();
        assert!(local.abs_diff_eq(Vec2::new(100.0, 50.0), 0.1), "{local:?}");
    }

    #[test]
    fn degenerate_parent_leaves_element_untouched() {
        let result = PlacementResult::new(Region::BottomRight, Vec2::new(10.0, 10.0), Context::none());
        let before = FloatingElement {
            pivot: Vec2::new(0.2, 0.8),
            ..FloatingElement::default()
        };
        let mut element = before;
        let flat = Corners::new([Vec3::ZERO; 4]);
        let mut parent = ParentRect::new(flat, Vec2::new(100.0, 100.0));
        let parent_before = parent;

        let err = apply(&result, &mut element, &mut parent, None, viewport()).unwrap_err();
        assert!(matches!(err, PlacementError::ConversionFailure { .. }));
        assert_eq!(element, before);
        assert_eq!(parent, parent_before);
    }

    #[test]
    fn edge_on_parent_is_conversion_failure() {
        // Rectangle standing in the x/z plane: overlay rays run parallel to it.
        let corners = Corners::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(100.0, 0.0, 100.0),
            Vec3::new(100.0, 0.0, 0.0),
        ]);
        let parent = ParentRect::new(corners, Vec2::new(100.0, 100.0));
        assert!(parent.screen_to_local(Vec2::new(50.0, 50.0), None, viewport()).is_err());
    }

    #[test]
    fn empty_result_is_missing_input() {
        let mut element = FloatingElement::default();
        let mut parent = full_screen_parent();
        let err = apply(
            &PlacementResult::empty(Context::none()),
            &mut element,
            &mut parent,
            None,
            viewport(),
        )
        .unwrap_err();
        assert_eq!(err, PlacementError::MissingInput { what: "placement result" });
        assert_eq!(element, FloatingElement::default());
    }
}
