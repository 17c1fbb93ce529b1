//! Offset application in screen space.

use enum_dispatch::enum_dispatch;
use glam::Vec2;

use crate::region::{Column, Region, Row};

/// Push `point` by `offset` away from the edges `pivot` touches.
///
/// Top-row pivots move down by `offset.y`, bottom-row pivots move up;
/// left-column pivots move right by `offset.x`, right-column pivots move
/// left. The middle row and center column are left alone on their axis.
pub fn apply_offset(point: &mut Vec2, pivot: Region, offset: Vec2) {
    match pivot.row() {
        Row::Top => point.y -= offset.y,
        Row::Bottom => point.y += offset.y,
        Row::Middle => {}
    }
    match pivot.column() {
        Column::Left => point.x += offset.x,
        Column::Right => point.x -= offset.x,
        Column::Center => {}
    }
}

#[enum_dispatch]
pub trait OffsetPolicy {
    fn apply(&self, point: &mut Vec2, pivot: Region, offset: Vec2);
}

/// The default: [`apply_offset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AwayFromEdges;

impl OffsetPolicy for AwayFromEdges {
    fn apply(&self, point: &mut Vec2, pivot: Region, offset: Vec2) {
        apply_offset(point, pivot, offset);
    }
}

/// Ignores the request offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOffset;

impl OffsetPolicy for NoOffset {
    fn apply(&self, _point: &mut Vec2, _pivot: Region, _offset: Vec2) {}
}

#[enum_dispatch(OffsetPolicy)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offsetting {
    AwayFromEdges,
    NoOffset,
}

impl Default for Offsetting {
    fn default() -> Self {
        Offsetting::AwayFromEdges(AwayFromEdges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(pivot: Region, by: Vec2) -> Vec2 {
        let mut point = Vec2::new(500.0, 300.0);
        apply_offset(&mut point, pivot, by);
        point
    }

    #[test]
    fn bottom_left_adds_both() {
        assert_eq!(offset(Region::BottomLeft, Vec2::new(10.0, 20.0)), Vec2::new(510.0, 320.0));
    }

    #[test]
    fn top_right_subtracts_both() {
        assert_eq!(offset(Region::TopRight, Vec2::new(10.0, 20.0)), Vec2::new(490.0, 280.0));
    }

    #[test]
    fn middle_center_is_unchanged() {
        assert_eq!(offset(Region::MiddleCenter, Vec2::new(10.0, 20.0)), Vec2::new(500.0, 300.0));
    }

    #[test]
    fn never_moves_toward_the_pivot_edge() {
        let start = Vec2::new(500.0, 300.0);
        let by = Vec2::new(7.0, 13.0);
        for pivot in Region::ALL {
            let moved = offset(pivot, by);
            match pivot.row() {
                Row::Top => assert!(moved.y < start.y, "{pivot}"),
                Row::Bottom => assert!(moved.y > start.y, "{pivot}"),
                Row::Middle => assert_eq!(moved.y, start.y, "{pivot}"),
            }
            match pivot.column() {
                Column::Left => assert!(moved.x > start.x, "{pivot}"),
                Column::Right => assert!(moved.x < start.x, "{pivot}"),
                Column::Center => assert_eq!(moved.x, start.x, "{pivot}"),
            }
        }
    }

    #[test]
    fn no_offset_policy() {
        let mut point = Vec2::new(1.0, 2.0);
        Offsetting::from(NoOffset).apply(&mut point, Region::TopLeft, Vec2::splat(50.0));
        assert_eq!(point, Vec2::new(1.0, 2.0));
    }
}
