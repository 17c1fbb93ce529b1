//! End-to-end placement scenarios.

use flyout::{
    Camera, Corner, Corners, PlacementError, PlacementMode, PlacementRequest, Provider, Region,
    Threshold, Viewport, apply_offset, classify_region, place, resolve_anchor,
};
use glam::{Mat4, Vec2, Vec3};

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn button(center: Vec2) -> Corners {
    Corners::from_center_size(center, Vec2::new(80.0, 40.0))
}

fn threshold(px: f32) -> Threshold {
    Threshold::try_new(px).unwrap()
}

#[test]
fn centered_target_inside() {
    let target = button(VIEWPORT.center());
    let request = PlacementRequest::new(target, VIEWPORT).with_threshold(threshold(50.0));
    let result = place(&request);

    assert_eq!(result.pivot(), Some(Region::MiddleCenter));
    assert_eq!(result.pivot_coordinate(), Vec2::new(0.5, 0.5));
    assert_eq!(result.screen_point(), target.centroid().truncate());
}

#[test]
fn top_left_target_inside() {
    let center = Vec2::new(100.0, 900.0);
    assert_eq!(classify_region(center, Vec2::new(640.0, 360.0), 10.0), Region::TopLeft);

    let target = button(center);
    let (anchor, pivot) = resolve_anchor(Region::TopLeft, &target, PlacementMode::Inside);
    assert_eq!(anchor, target.centroid());
    assert_eq!(pivot.pivot(), Vec2::new(0.0, 1.0));

    let request = PlacementRequest::new(target, VIEWPORT).with_threshold(threshold(10.0));
    let result = place(&request);
    assert_eq!(result.pivot_coordinate(), Vec2::new(0.0, 1.0));
    assert_eq!(result.screen_point(), Vec2::new(100.0, 900.0));
}

#[test]
fn top_left_target_outside_horizontal() {
    let target = button(Vec2::new(100.0, 900.0));
    let request = PlacementRequest::new(target, VIEWPORT)
        .with_threshold(threshold(10.0))
        .with_mode(PlacementMode::OutsideHorizontal);
    let result = place(&request);

    // the corner on the side away from the left screen edge
    assert_eq!(result.screen_point(), target.corner(Corner::TopRight).truncate());
    assert_eq!(result.screen_point(), Vec2::new(140.0, 920.0));
    assert_eq!(result.pivot_coordinate(), Vec2::new(0.0, 1.0));
}

#[test]
fn bottom_left_offset_adds_both_components() {
    let mut point = Vec2::new(300.0, 50.0);
    apply_offset(&mut point, Region::BottomLeft, Vec2::new(10.0, 20.0));
    assert_eq!(point, Vec2::new(310.0, 70.0));

    let target = button(Vec2::new(300.0, 50.0));
    let request = PlacementRequest::new(target, VIEWPORT).with_offset(Vec2::new(10.0, 20.0));
    let result = place(&request);
    assert_eq!(result.pivot(), Some(Region::BottomLeft));
    assert_eq!(result.screen_point(), Vec2::new(310.0, 70.0));
}

#[test]
fn absent_target_never_panics() {
    let request = PlacementRequest::new(None, VIEWPORT)
        .with_mode(PlacementMode::OutsideVertical)
        .with_offset(Vec2::splat(12.0));
    let result = place(&request);
    assert!(result.is_empty());
    assert_eq!(result.screen_point(), Vec2::ZERO);
    assert_eq!(
        Provider::new().try_provide(&request).unwrap_err(),
        PlacementError::MissingInput { what: "target rectangle" }
    );
}

#[test]
fn camera_canvas_matches_overlay() {
    // Orthographic camera whose world units are screen pixels.
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::orthographic_rh(0.0, 1280.0, 0.0, 720.0, 0.1, 100.0);
    let camera = Camera::from_parts(view, projection);

    for center in [Vec2::new(100.0, 650.0), Vec2::new(1200.0, 40.0), Vec2::new(640.0, 360.0)] {
        for mode in PlacementMode::ALL {
            let request = PlacementRequest::new(button(center), VIEWPORT)
                .with_mode(mode)
                .with_offset(Vec2::new(6.0, 6.0))
                .with_threshold(threshold(20.0));
            let overlay = place(&request);
            let projected = place(&request.clone().with_camera(camera));
            assert_eq!(overlay.pivot(), projected.pivot(), "{center:?} {mode}");
            assert!(
                overlay.screen_point().abs_diff_eq(projected.screen_point(), 1e-2),
                "{center:?} {mode}: {:?} vs {:?}",
                overlay.screen_point(),
                projected.screen_point()
            );
        }
    }
}

#[test]
fn perspective_camera_flips_region_with_screen_position() {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(60f32.to_radians(), 1280.0 / 720.0, 0.1, 100.0);
    let camera = Camera::from_parts(view, projection);
    let size = Vec2::new(1.0, 0.5);

    let upper_left = Corners::from_center_size(Vec2::new(-4.0, 3.0), size);
    let lower_right = Corners::from_center_size(Vec2::new(4.0, -3.0), size);

    let result = place(&PlacementRequest::new(upper_left, VIEWPORT).with_camera(camera));
    assert_eq!(result.pivot(), Some(Region::TopLeft));
    let result = place(&PlacementRequest::new(lower_right, VIEWPORT).with_camera(camera));
    assert_eq!(result.pivot(), Some(Region::BottomRight));
}
