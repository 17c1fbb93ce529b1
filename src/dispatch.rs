//! Publish/subscribe channel for placement results.
//!
//! A [`Dispatcher`] is an ordinary value: create one at startup, share it
//! with `Rc`, and hand it to every [`Controller`](crate::Controller) that
//! should publish. Delivery is synchronous and in subscription order.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::log::{debug, warn};
use crate::provider::PlacementResult;

/// Identity of a result producer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(Arc<str>);

impl SourceId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        SourceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A result together with the producer that published it.
#[derive(Clone, Debug)]
pub struct DispatchedEvent {
    pub source: SourceId,
    pub result: PlacementResult,
}

/// Handle returned by [`Dispatcher::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&DispatchedEvent)>;

/// Synchronous fan-out to registered listeners.
///
/// Each dispatch delivers to the listeners registered when it starts.
/// Listeners may subscribe, unsubscribe (themselves included) and dispatch
/// again while handling an event: list changes apply from the next dispatch,
/// and a nested dispatch is delivered in full before the outer one moves on.
/// Listeners are `Fn` so a nested dispatch can call them again; keep their
/// state in a `Cell` or `RefCell`.
#[derive(Default)]
pub struct Dispatcher {
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&DispatchedEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Republish every event onto a standard channel.
    ///
    /// The sender stays subscribed after the receiver is dropped; sends to a
    /// closed channel are ignored.
    pub fn forward_to(&self, sender: Sender<DispatchedEvent>) -> SubscriptionId {
        self.subscribe(move |event| {
            if sender.send(event.clone()).is_err() {
                debug!(source = %event.source, "forwarding receiver is gone");
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver `result` to every listener. Returns how many were called.
    ///
    /// Empty results are not delivered.
    pub fn dispatch(&self, source: &SourceId, result: &PlacementResult) -> usize {
        if result.is_empty() {
            warn!(%source, "not dispatching an empty placement result");
            return 0;
        }
        // The borrow ends here, so listeners are free to touch the dispatcher.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        let event = DispatchedEvent {
            source: source.clone(),
            result: result.clone(),
        };
        for listener in &snapshot {
            listener(&event);
        }
        snapshot.len()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
