//! The nine screen regions, and the pivot values they double as.

use std::fmt;

use glam::Vec2;

use crate::defaults;
use crate::log::debug;

/// Vertical band of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// Horizontal band of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Row {
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    /// Band for a signed distance from the viewport center (y up).
    /// Exactly at `band` counts as middle; NaN counts as middle.
    pub fn from_offset(dy: f32, band: f32) -> Row {
        if dy > band {
            Row::Top
        } else if dy < -band {
            Row::Bottom
        } else {
            Row::Middle
        }
    }

    /// Normalized y of this row on a pivot.
    pub const fn pivot_y(self) -> f32 {
        match self {
            Row::Top => 1.0,
            Row::Middle => 0.5,
            Row::Bottom => 0.0,
        }
    }
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Left, Column::Center, Column::Right];

    /// Band for a signed distance from the viewport center.
    /// Exactly at `band` counts as center; NaN counts as center.
    pub fn from_offset(dx: f32, band: f32) -> Column {
        if dx > band {
            Column::Right
        } else if dx < -band {
            Column::Left
        } else {
            Column::Center
        }
    }

    /// Normalized x of this column on a pivot.
    pub const fn pivot_x(self) -> f32 {
        match self {
            Column::Left => 0.0,
            Column::Center => 0.5,
            Column::Right => 1.0,
        }
    }
}

/// One of nine screen zones, laid out like a 9-slice.
///
/// Regions are also used as pivots: a `TopLeft` pivot pins the floating
/// element's top-left corner to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::TopLeft,
        Region::TopCenter,
        Region::TopRight,
        Region::MiddleLeft,
        Region::MiddleCenter,
        Region::MiddleRight,
        Region::BottomLeft,
        Region::BottomCenter,
        Region::BottomRight,
    ];

    pub const fn new(row: Row, column: Column) -> Region {
        match (row, column) {
            (Row::Top, Column::Left) => Region::TopLeft,
            (Row::Top, Column::Center) => Region::TopCenter,
            (Row::Top, Column::Right) => Region::TopRight,
            (Row::Middle, Column::Left) => Region::MiddleLeft,
            (Row::Middle, Column::Center) => Region::MiddleCenter,
            (Row::Middle, Column::Right) => Region::MiddleRight,
            (Row::Bottom, Column::Left) => Region::BottomLeft,
            (Row::Bottom, Column::Center) => Region::BottomCenter,
            (Row::Bottom, Column::Right) => Region::BottomRight,
        }
    }

    pub const fn row(self) -> Row {
        match self {
            Region::TopLeft | Region::TopCenter | Region::TopRight => Row::Top,
            Region::MiddleLeft | Region::MiddleCenter | Region::MiddleRight => Row::Middle,
            Region::BottomLeft | Region::BottomCenter | Region::BottomRight => Row::Bottom,
        }
    }

    pub const fn column(self) -> Column {
        match self {
            Region::TopLeft | Region::MiddleLeft | Region::BottomLeft => Column::Left,
            Region::TopCenter | Region::MiddleCenter | Region::BottomCenter => Column::Center,
            Region::TopRight | Region::MiddleRight | Region::BottomRight => Column::Right,
        }
    }

    /// Position in [`Region::ALL`], row-major from the top-left.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Normalized pivot coordinate in [0,1]×[0,1], y up.
    pub fn pivot(self) -> Vec2 {
        Vec2::new(self.column().pivot_x(), self.row().pivot_y())
    }

    /// Inverse of [`Region::pivot`].
    ///
    /// Only the nine canonical coordinates are recognized; anything else is
    /// reported as `MiddleCenter`.
    pub fn from_pivot(pivot: Vec2) -> Region {
        match Region::ALL
            .into_iter()
            .find(|region| region.pivot().abs_diff_eq(pivot, defaults::PIVOT_EPSILON))
        {
            Some(region) => region,
            None => {
                debug!(?pivot, "pivot is not one of the nine canonical values");
                Region::MiddleCenter
            }
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::TopLeft => "top-left",
            Region::TopCenter => "top-center",
            Region::TopRight => "top-right",
            Region::MiddleLeft => "middle-left",
            Region::MiddleCenter => "middle-center",
            Region::MiddleRight => "middle-right",
            Region::BottomLeft => "bottom-left",
            Region::BottomCenter => "bottom-center",
            Region::BottomRight => "bottom-right",
        };
        f.pad(name)
    }
}

/// Whether the floating element overlaps the target or sits beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlacementMode {
    /// Pivot on the target's centroid; the element overlaps the target.
    #[default]
    Inside,
    /// Left or right of the target. Suits landscape screens.
    OutsideHorizontal,
    /// Above or below the target. Suits portrait screens.
    OutsideVertical,
}

impl PlacementMode {
    pub const ALL: [PlacementMode; 3] = [
        PlacementMode::Inside,
        PlacementMode::OutsideHorizontal,
        PlacementMode::OutsideVertical,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementMode::Inside => f.write_str("inside"),
            PlacementMode::OutsideHorizontal => f.write_str("outside-horizontal"),
            PlacementMode::OutsideVertical => f.write_str("outside-vertical"),
        }
    }
}
