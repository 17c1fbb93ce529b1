//! World ↔ screen conversion.
//!
//! `None` as a camera means a screen-space overlay: world x/y already are
//! screen pixels and z is ignored. Otherwise the camera's view-projection
//! matrix maps world points to clip space, and clip space maps onto the
//! viewport with the origin at the bottom-left.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::defaults::DEGENERATE_EPSILON;
use crate::types::Viewport;

/// A camera rendering the canvas, reduced to its view-projection matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    view_projection: Mat4,
}

impl Camera {
    pub fn new(view_projection: Mat4) -> Self {
        Camera { view_projection }
    }

    pub fn from_parts(view: Mat4, projection: Mat4) -> Self {
        Camera::new(projection * view)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// Project a world point. `None` when the point lies on the camera plane.
    pub fn world_to_screen(&self, world: Vec3, viewport: Viewport) -> Option<Vec2> {
        let clip = self.view_projection * world.extend(1.0);
        let ndc = perspective_divide(clip)?;
        Some((ndc.truncate() + Vec2::ONE) * 0.5 * viewport.size())
    }

    /// The world-space line under a screen point.
    pub fn screen_ray(&self, screen: Vec2, viewport: Viewport) -> Option<Ray> {
        if viewport.is_degenerate() {
            return None;
        }
        let det = self.view_projection.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inverse = self.view_projection.inverse();
        let ndc = screen / viewport.size() * 2.0 - Vec2::ONE;
        let near = perspective_divide(inverse * Vec4::new(ndc.x, ndc.y, 0.0, 1.0))?;
        let far = perspective_divide(inverse * Vec4::new(ndc.x, ndc.y, 1.0, 1.0))?;
        Ray::new(near, far - near)
    }
}

fn perspective_divide(clip: Vec4) -> Option<Vec3> {
    if clip.w.abs() < DEGENERATE_EPSILON || !clip.is_finite() {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

/// A line through `origin` along `direction` (not normalized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `None` for a zero or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Ray> {
        if !direction.is_finite() || direction.length_squared() < DEGENERATE_EPSILON {
            return None;
        }
        Some(Ray { origin, direction })
    }

    /// Where the line crosses the plane through `point` with `normal`.
    /// `None` when the line runs parallel to the plane.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let normal = normal.try_normalize()?;
        let denom = normal.dot(self.direction.try_normalize()?);
        if denom.abs() < DEGENERATE_EPSILON {
            return None;
        }
        let t = normal.dot(point - self.origin) / normal.dot(self.direction);
        Some(self.origin + self.direction * t)
    }
}

/// Project a world point to the screen, through `camera` or as an overlay.
pub fn world_to_screen(camera: Option<&Camera>, world: Vec3, viewport: Viewport) -> Option<Vec2> {
    match camera {
        Some(camera) => camera.world_to_screen(world, viewport),
        None => Some(world.truncate()),
    }
}

/// The world-space line under a screen point, through `camera` or as an overlay.
pub fn screen_ray(camera: Option<&Camera>, screen: Vec2, viewport: Viewport) -> Option<Ray> {
    match camera {
        Some(camera) => camera.screen_ray(screen, viewport),
        None => Ray::new(screen.extend(0.0), Vec3::Z),
    }
}

/// Unproject a screen point onto the plane through `point` with `normal`.
pub fn screen_to_plane(
    camera: Option<&Camera>,
    screen: Vec2,
    viewport: Viewport,
    point: Vec3,
    normal: Vec3,
) -> Option<Vec3> {
    screen_ray(camera, screen, viewport)?.intersect_plane(point, normal)
}
