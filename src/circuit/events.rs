//! Synchronous per-entity event channels
//!
//! Each canvas entity owns its own [`EventDispatcher`]. Listeners subscribe to
//! a channel and are called in registration order, on the caller's stack,
//! before [`EventDispatcher::dispatch`] returns.

use egui::{Pos2, Vec2};
use log::trace;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Channel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventId {
    /// Payload: [`TerminalEvent::Moved`]
    OnMove,
    /// Payload: [`TerminalEvent::OutletMoved`]
    OnOutletMove,
}

/// Payload delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminalEvent {
    /// The anchor was translated by this delta
    Moved(Vec2),
    /// The outlet now sits at this position
    OutletMoved(Pos2),
}

/// Handle returned by [`EventDispatcher::subscribe`]
pub type ListenerId = Uuid;

pub type Listener = Box<dyn FnMut(&TerminalEvent)>;

/// Registry of channels and their ordered listeners
#[derive(Default)]
pub struct EventDispatcher {
    channels: HashMap<EventId, Vec<(ListenerId, Listener)>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a channel. Registering an existing channel keeps its listeners.
    pub fn register_channel(&mut self, id: EventId) {
        self.channels.entry(id).or_insert_with(|| {
            trace!("Registered event channel {:?}", id);
            Vec::new()
        });
    }

    pub fn has_channel(&self, id: EventId) -> bool {
        self.channels.contains_key(&id)
    }

    /// Add a listener to the end of a channel, registering the channel if needed
    pub fn subscribe<F>(&mut self, id: EventId, listener: F) -> ListenerId
    where
        F: FnMut(&TerminalEvent) + 'static,
    {
        let listener_id = Uuid::new_v4();
        self.channels
            .entry(id)
            .or_default()
            .push((listener_id, Box::new(listener)));
        listener_id
    }

    /// Remove a listener; returns false if it was not subscribed to `id`
    pub fn unsubscribe(&mut self, id: EventId, listener_id: ListenerId) -> bool {
        let Some(listeners) = self.channels.get_mut(&id) else {
            return false;
        };

        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != listener_id);
        listeners.len() != before
    }

    pub fn listener_count(&self, id: EventId) -> usize {
        self.channels.get(&id).map_or(0, Vec::len)
    }

    /// Call every listener on `id` in registration order
    pub fn dispatch(&mut self, id: EventId, event: &TerminalEvent) {
        match self.channels.get_mut(&id) {
            Some(listeners) => {
                for (_, listener) in listeners.iter_mut() {
                    listener(event);
                }
            }
            None => trace!("Dropped {:?} on unregistered channel {:?}", event, id),
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (id, listeners) in &self.channels {
            map.entry(id, &listeners.len());
        }
        map.finish()
    }
}
