//! A placement producer with its own identity.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::apply::{FloatingElement, ParentRect, apply};
use crate::defaults;
use crate::dispatch::{Dispatcher, SourceId};
use crate::errors::PlacementError;
use crate::log::warn;
use crate::projection::Camera;
use crate::provider::{PlacementRequest, PlacementResult, Provider};
use crate::types::Viewport;

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Computes placements and publishes them under its id.
///
/// Ids are `<name>_<n>` with `n` unique within the process, so listeners on a
/// shared dispatcher can tell producers apart.
#[derive(Debug, Clone)]
pub struct Controller {
    id: SourceId,
    provider: Provider,
    dispatcher: Option<Rc<Dispatcher>>,
}

impl Default for Controller {
    fn default() -> Self {
        Controller::named(defaults::CONTROLLER_NAME)
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Controller {
            id: SourceId::new(format!("{name}_{sequence}")),
            provider: Provider::default(),
            dispatcher: None,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Rc<Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn id(&self) -> &SourceId {
        &self.id
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Compute a placement and publish it.
    ///
    /// Failures are logged and yield the empty result, which is not published.
    pub fn request(&self, request: &PlacementRequest) -> PlacementResult {
        match self.provider.try_provide(request) {
            Ok(result) => {
                self.publish(&result);
                result
            }
            Err(_err) => {
                warn!(controller = %self.id, error = %_err, "no placement");
                PlacementResult::empty(request.context.clone())
            }
        }
    }

    pub fn apply(
        &self,
        result: &PlacementResult,
        element: &mut FloatingElement,
        parent: &mut ParentRect,
        camera: Option<&Camera>,
        viewport: Viewport,
    ) -> Result<(), PlacementError> {
        apply(result, element, parent, camera, viewport)
    }

    /// Compute, publish and apply in one step. The element is only modified
    /// when every step succeeds.
    pub fn request_and_apply(
        &self,
        request: &PlacementRequest,
        element: &mut FloatingElement,
        parent: &mut ParentRect,
        camera: Option<&Camera>,
    ) -> Result<PlacementResult, PlacementError> {
        let result = self
            .provider
            .try_provide(request)
            .inspect_err(|_err| {
                warn!(controller = %self.id, error = %_err, "no placement");
            })?;
        self.publish(&result);
        self.apply(&result, element, parent, camera, request.viewport)?;
        Ok(result)
    }

    fn publish(&self, result: &PlacementResult) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(&self.id, result);
        }
    }
}
