//! Per-entity named-event tables.
//!
//! An [`Events`] bag maps event names to the handlers subscribed to them.
//! Publishing runs every handler for that name in subscription order and
//! hands each one the payload as `&dyn Any`, which handlers downcast to the
//! type they expect.

use std::any::Any;
use std::collections::HashMap;

type Handler = Box<dyn FnMut(&dyn Any)>;

/// Identifies one subscription inside an [`Events`] bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A named-event publish/subscribe table scoped to one entity.
#[derive(Default)]
pub struct Events {
    next_id: u64,
    channels: HashMap<String, Vec<(SubscriptionId, Handler)>>,
}

impl Events {
    /// Create an empty event bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            channels: HashMap::new(),
        }
    }

    /// Subscribe `handler` to events published under `name`.
    pub fn subscribe<F>(&mut self, name: impl Into<String>, handler: F) -> SubscriptionId
    where
        F: FnMut(&dyn Any) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.channels
            .entry(name.into())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns `true` if it existed.
    pub fn unsubscribe(&mut self, name: &str, id: SubscriptionId) -> bool {
        let Some(handlers) = self.channels.get_mut(name) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(sub, _)| *sub != id);
        if handlers.len() == before {
            return false;
        }
        if handlers.is_empty() {
            self.channels.remove(name);
        }
        true
    }

    /// Publish `name` without a payload. Handlers receive `&()`.
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&mut self, name: &str) -> usize {
        self.publish_with(name, &())
    }

    /// Publish `name` with a payload.
    ///
    /// Returns the number of handlers invoked; zero when nobody subscribed.
    pub fn publish_with<P: Any>(&mut self, name: &str, payload: &P) -> usize {
        let Some(handlers) = self.channels.get_mut(name) else {
            return 0;
        };
        for (_, handler) in handlers.iter_mut() {
            handler(payload);
        }
        handlers.len()
    }

    /// Returns the number of handlers subscribed to `name`.
    #[must_use]
    pub fn handler_count(&self, name: &str) -> usize {
        self.channels.get(name).map_or(0, Vec::len)
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.channels.clear();
    }
}

impl std::fmt::Debug for Events {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, handlers) in &self.channels {
            map.entry(name, &handlers.len());
        }
        map.finish()
    }
}
