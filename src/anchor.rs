//! Anchor selection: where on the target the floating element attaches, and
//! which of its own points (the pivot) goes there.
//!
//! The default table encodes one rule: the floating element unfolds away
//! from the screen edges of the target's region. A top-left target gets a
//! top-left pivot so the element grows right and down; outside placements
//! move the anchor to the far side of the target so the element clears it.

use enum_dispatch::enum_dispatch;
use glam::Vec3;

use crate::region::{PlacementMode, Region};
use crate::types::{Corner, Corners, Edge};

/// A point on the target rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Centroid,
    Corner(Corner),
    /// Midpoint of an edge.
    Edge(Edge),
}

impl Anchor {
    pub fn locate(self, corners: &Corners) -> Vec3 {
        match self {
            Anchor::Centroid => corners.centroid(),
            Anchor::Corner(corner) => corners.corner(corner),
            Anchor::Edge(edge) => corners.edge_midpoint(edge),
        }
    }
}

/// One cell of an [`AnchorTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableEntry {
    pub anchor: Anchor,
    pub pivot: Region,
}

const fn entry(anchor: Anchor, pivot: Region) -> TableEntry {
    TableEntry { anchor, pivot }
}

const fn inside(region: Region) -> TableEntry {
    entry(Anchor::Centroid, region)
}

use Anchor::{Corner as C, Edge as E};

/// Rows follow [`Region::ALL`], columns follow [`PlacementMode::ALL`]
/// (inside, outside-horizontal, outside-vertical). Screen y grows upward.
#[rustfmt::skip]
const UNFOLD: [[TableEntry; 3]; 9] = [
    // top-left: beside to the right / below, growing right and down
    [inside(Region::TopLeft),
     entry(C(Corner::TopRight), Region::TopLeft),
     entry(C(Corner::BottomLeft), Region::TopLeft)],
    // top-center
    [inside(Region::TopCenter),
     entry(C(Corner::TopRight), Region::TopLeft),
     entry(E(Edge::Bottom), Region::TopCenter)],
    // top-right
    [inside(Region::TopRight),
     entry(C(Corner::TopLeft), Region::TopRight),
     entry(C(Corner::BottomRight), Region::TopRight)],
    // middle-left
    [inside(Region::MiddleLeft),
     entry(E(Edge::Right), Region::MiddleLeft),
     entry(C(Corner::BottomLeft), Region::TopLeft)],
    // middle-center
    [inside(Region::MiddleCenter),
     entry(E(Edge::Right), Region::MiddleLeft),
     entry(E(Edge::Bottom), Region::TopCenter)],
    // middle-right
    [inside(Region::MiddleRight),
     entry(E(Edge::Left), Region::MiddleRight),
     entry(C(Corner::BottomRight), Region::TopRight)],
    // bottom-left
    [inside(Region::BottomLeft),
     entry(C(Corner::BottomRight), Region::BottomLeft),
     entry(C(Corner::TopLeft), Region::BottomLeft)],
    // bottom-center
    [inside(Region::BottomCenter),
     entry(C(Corner::BottomRight), Region::BottomLeft),
     entry(E(Edge::Top), Region::BottomCenter)],
    // bottom-right
    [inside(Region::BottomRight),
     entry(C(Corner::BottomLeft), Region::BottomRight),
     entry(C(Corner::TopRight), Region::BottomRight)],
];

/// Maps a region and placement mode to an anchor point and pivot.
#[enum_dispatch]
pub trait AnchorResolver {
    /// Returns the anchor in the same space as `corners`, and the pivot to
    /// give the floating element.
    fn resolve(&self, region: Region, corners: &Corners, mode: PlacementMode) -> (Vec3, Region);
}

/// (region, mode) → anchor/pivot lookup stored as plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorTable {
    entries: [[TableEntry; 3]; 9],
}

impl AnchorTable {
    /// The table shipped as the default.
    pub const UNFOLD: AnchorTable = AnchorTable { entries: UNFOLD };

    pub fn entry(&self, region: Region, mode: PlacementMode) -> TableEntry {
        self.entries[region.index()][mode.index()]
    }

    /// Copy of this table with one cell replaced.
    pub fn with_entry(mut self, region: Region, mode: PlacementMode, entry: TableEntry) -> Self {
        self.entries[region.index()][mode.index()] = entry;
        self
    }
}

impl Default for AnchorTable {
    fn default() -> Self {
        AnchorTable::UNFOLD
    }
}

impl AnchorResolver for AnchorTable {
    fn resolve(&self, region: Region, corners: &Corners, mode: PlacementMode) -> (Vec3, Region) {
        let TableEntry { anchor, pivot } = self.entry(region, mode);
        (anchor.locate(corners), pivot)
    }
}

/// Always the centroid with the region as pivot, whatever the mode.
/// Context menus that should cover their trigger use this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CenteredAnchoring;

impl AnchorResolver for CenteredAnchoring {
    fn resolve(&self, region: Region, corners: &Corners, _mode: PlacementMode) -> (Vec3, Region) {
        (corners.centroid(), region)
    }
}

/// Anchor strategy selected when a provider is built.
#[enum_dispatch(AnchorResolver)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchoring {
    AnchorTable,
    CenteredAnchoring,
}

impl Default for Anchoring {
    fn default() -> Self {
        Anchoring::AnchorTable(AnchorTable::UNFOLD)
    }
}

/// Resolve with the default table.
pub fn resolve_anchor(region: Region, corners: &Corners, mode: PlacementMode) -> (Vec3, Region) {
    AnchorTable::UNFOLD.resolve(region, corners, mode)
}
