//! Placement requests, results, and the provider that turns one into the other.

use glam::Vec2;

use crate::anchor::{AnchorResolver, Anchoring};
use crate::classify::{Classifier, RegionClassifier};
use crate::context::Context;
use crate::defaults;
use crate::errors::PlacementError;
use crate::log::{debug, warn};
use crate::offset::{OffsetPolicy, Offsetting};
use crate::projection::{Camera, world_to_screen};
use crate::region::{PlacementMode, Region};
use crate::types::{Corners, Threshold, Viewport};

/// Everything needed to place one floating element.
#[derive(Clone, Debug)]
pub struct PlacementRequest {
    /// World corners of the trigger. `None` yields the empty result.
    pub target: Option<Corners>,
    /// Camera rendering the trigger's canvas; `None` for a screen-space overlay.
    pub camera: Option<Camera>,
    pub viewport: Viewport,
    pub mode: PlacementMode,
    /// `x` is the horizontal push, `y` the vertical one.
    pub offset: Vec2,
    pub threshold: Threshold,
    pub context: Context,
}

impl PlacementRequest {
    pub fn new(target: impl Into<Option<Corners>>, viewport: Viewport) -> Self {
        PlacementRequest {
            target: target.into(),
            camera: None,
            viewport,
            mode: defaults::MODE,
            offset: defaults::OFFSET,
            threshold: defaults::CENTER_THRESHOLD,
            context: Context::none(),
        }
    }

    pub fn with_camera(mut self, camera: impl Into<Option<Camera>>) -> Self {
        self.camera = camera.into();
        self
    }

    pub fn with_mode(mut self, mode: PlacementMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate and set the threshold from a raw pixel value.
    pub fn try_with_threshold(self, pixels: f32) -> Result<Self, PlacementError> {
        Ok(self.with_threshold(Threshold::try_new(pixels)?))
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

/// Pivot and screen point for the floating element.
///
/// The empty result stands for "leave the element where it is": it has no
/// pivot, a zero screen point, and `is_empty()` returns true.
#[derive(Clone, Debug)]
pub struct PlacementResult {
    placement: Option<(Region, Vec2)>,
    context: Context,
}

impl PlacementResult {
    pub fn new(pivot: Region, screen_point: Vec2, context: Context) -> Self {
        PlacementResult {
            placement: Some((pivot, screen_point)),
            context,
        }
    }

    pub fn empty(context: Context) -> Self {
        PlacementResult {
            placement: None,
            context,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_none()
    }

    pub fn pivot(&self) -> Option<Region> {
        self.placement.map(|(pivot, _)| pivot)
    }

    /// Normalized pivot; zero for the empty result.
    pub fn pivot_coordinate(&self) -> Vec2 {
        self.pivot().map_or(Vec2::ZERO, Region::pivot)
    }

    /// Screen point the pivot goes to; zero for the empty result.
    pub fn screen_point(&self) -> Vec2 {
        self.placement.map_or(Vec2::ZERO, |(_, point)| point)
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

/// Computes placements. Each strategy is picked at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Provider {
    classifier: Classifier,
    anchoring: Anchoring,
    offsetting: Offsetting,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// Compute a placement, or the reason there is none.
    pub fn try_provide(&self, request: &PlacementRequest) -> Result<PlacementResult, PlacementError> {
        let corners = request.target.ok_or(PlacementError::missing("target rectangle"))?;
        let camera = request.camera.as_ref();

        let center = world_to_screen(camera, corners.centroid(), request.viewport)
            .ok_or(PlacementError::conversion("target center is on the camera plane"))?;
        let region = self.classifier.classify(center, request.viewport, request.threshold);

        let (anchor, pivot) = self.anchoring.resolve(region, &corners, request.mode);
        let mut screen_point = world_to_screen(camera, anchor, request.viewport)
            .ok_or(PlacementError::conversion("anchor is on the camera plane"))?;
        self.offsetting.apply(&mut screen_point, pivot, request.offset);

        debug!(%region, mode = %request.mode, %pivot, ?screen_point, "placement resolved");
        Ok(PlacementResult::new(pivot, screen_point, request.context.clone()))
    }

    /// Compute a placement. Failures are logged and produce the empty result.
    pub fn provide(&self, request: &PlacementRequest) -> PlacementResult {
        match self.try_provide(request) {
            Ok(result) => result,
            Err(_err) => {
                warn!(error = %_err, "no placement");
                PlacementResult::empty(request.context.clone())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProviderBuilder {
    provider: Provider,
}

impl ProviderBuilder {
    pub fn classifier(mut self, classifier: impl Into<Classifier>) -> Self {
        self.provider.classifier = classifier.into();
        self
    }

    pub fn anchoring(mut self, anchoring: impl Into<Anchoring>) -> Self {
        self.provider.anchoring = anchoring.into();
        self
    }

    pub fn offsetting(mut self, offsetting: impl Into<Offsetting>) -> Self {
        self.provider.offsetting = offsetting.into();
        self
    }

    pub fn build(self) -> Provider {
        self.provider
    }
}
