//! Region classification: which of the nine screen zones holds the target.

use enum_dispatch::enum_dispatch;
use glam::Vec2;

use crate::log::debug;
use crate::region::{Column, Region, Row};
use crate::types::{Threshold, Viewport};

/// Classify a screen-space point against the viewport center.
///
/// A point is above when `center.y - viewport_center.y > threshold`, below
/// when that difference is `< -threshold`, and likewise right/left on x.
/// The comparisons are strict, so a point exactly on the band edge is
/// centered on that axis. Non-finite input falls through to the middle band.
pub fn classify_region(center: Vec2, viewport_center: Vec2, threshold: f32) -> Region {
    classify_with_band(center, viewport_center, Vec2::splat(threshold))
}

fn classify_with_band(center: Vec2, viewport_center: Vec2, band: Vec2) -> Region {
    let delta = center - viewport_center;
    let region = Region::new(
        Row::from_offset(delta.y, band.y),
        Column::from_offset(delta.x, band.x),
    );
    debug!(?center, ?viewport_center, ?band, %region, "classified target");
    region
}

/// Decides the screen region of a target from its projected center.
#[enum_dispatch]
pub trait RegionClassifier {
    fn classify(&self, center: Vec2, viewport: Viewport, threshold: Threshold) -> Region;
}

/// Fixed band of `threshold` pixels on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThresholdBand;

impl RegionClassifier for ThresholdBand {
    fn classify(&self, center: Vec2, viewport: Viewport, threshold: Threshold) -> Region {
        classify_region(center, viewport.center(), threshold.get())
    }
}

/// Band that grows with the viewport.
///
/// On each axis the band half-width is the larger of the request threshold
/// and `fraction` of that axis' half extent, so a 0.2 band covers the same
/// share of a phone screen and a 4K monitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalBand {
    pub fraction: f32,
}

impl ProportionalBand {
    pub fn new(fraction: f32) -> Self {
        ProportionalBand { fraction }
    }
}

impl RegionClassifier for ProportionalBand {
    fn classify(&self, center: Vec2, viewport: Viewport, threshold: Threshold) -> Region {
        let half_extent = viewport.center();
        let band = (half_extent * self.fraction.max(0.0)).max(Vec2::splat(threshold.get()));
        classify_with_band(center, half_extent, band)
    }
}

/// Classifier selected when a provider is built.
#[enum_dispatch(RegionClassifier)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Classifier {
    ThresholdBand,
    ProportionalBand,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::ThresholdBand(ThresholdBand)
    }
}
