//! Screen-aware placement for tooltips, popovers and context menus.
//!
//! Given the four corners of a trigger rectangle, `flyout` decides which of
//! nine screen regions the trigger sits in and picks an anchor on the trigger
//! plus a pivot on the floating element, so the element unfolds away from the
//! nearest screen edges.
//!
//! ```
//! use flyout::{Corners, PlacementMode, PlacementRequest, Region, Viewport, place};
//! use glam::Vec2;
//!
//! let button = Corners::from_center_size(Vec2::new(100.0, 900.0), Vec2::new(120.0, 40.0));
//! let request = PlacementRequest::new(button, Viewport::new(1280.0, 1080.0))
//!     .with_mode(PlacementMode::OutsideHorizontal);
//!
//! let result = place(&request);
//! assert_eq!(result.pivot(), Some(Region::TopLeft));
//! assert_eq!(result.screen_point(), Vec2::new(160.0, 920.0));
//! ```

pub mod anchor;
pub mod apply;
pub mod classify;
pub mod context;
pub mod controller;
pub mod defaults;
pub mod dispatch;
pub mod errors;
pub mod log;
pub mod offset;
pub mod projection;
pub mod provider;
pub mod region;
pub mod types;

pub use anchor::{Anchor, AnchorResolver, AnchorTable, Anchoring, CenteredAnchoring, TableEntry, resolve_anchor};
pub use apply::{FloatingElement, ParentRect, apply};
pub use classify::{Classifier, ProportionalBand, RegionClassifier, ThresholdBand, classify_region};
pub use context::Context;
pub use controller::Controller;
pub use dispatch::{DispatchedEvent, Dispatcher, SourceId, SubscriptionId};
pub use errors::PlacementError;
pub use offset::{AwayFromEdges, NoOffset, OffsetPolicy, Offsetting, apply_offset};
pub use projection::{Camera, Ray, screen_to_plane};
pub use provider::{PlacementRequest, PlacementResult, Provider, ProviderBuilder};
pub use region::{Column, PlacementMode, Region, Row};
pub use types::{Corner, Corners, Edge, NumericError, Threshold, Viewport};

/// Place with the default strategies.
///
/// Never fails: missing input or a degenerate camera produce the empty
/// result (see [`PlacementResult::is_empty`]).
pub fn place(request: &PlacementRequest) -> PlacementResult {
    Provider::default().provide(request)
}
