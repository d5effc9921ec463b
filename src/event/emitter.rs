use std::cell::RefCell;

use super::{EventListener, EventTarget};

/// An in-process [`EventTarget`] dispatching events synchronously.
pub struct EventEmitter<Ev> {
    listeners: RefCell<Vec<(String, EventListener<Ev>)>>,
}

impl<Ev> EventEmitter<Ev> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Calls every listener registered for `event`, in registration order.
    ///
    /// Listeners registered while dispatching are not called for this event,
    /// listeners removed while dispatching are skipped. Returns how many
    /// listeners were called.
    pub fn dispatch(&self, event: &str, payload: &Ev) -> usize {
        let snapshot = self
            .listeners
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, listener)| listener.clone())
            .collect::<Vec<_>>();
        let mut called = 0;

        for listener in snapshot {
            if self.is_registered(event, &listener) {
                listener.call(payload);
                called += 1;
            }
        }

        tracing::debug!(event, called, "dispatched");

        called
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .count()
    }

    fn is_registered(&self, event: &str, listener: &EventListener<Ev>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(name, it)| name == event && it == listener)
    }
}

impl<Ev> Default for EventEmitter<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ev> EventTarget for EventEmitter<Ev> {
    type Event = Ev;

    fn add_event_listener(&self, event: &str, listener: EventListener<Ev>) {
        if !self.is_registered(event, &listener) {
            self.listeners
                .borrow_mut()
                .push((event.to_string(), listener));
        }
    }

    fn remove_event_listener(&self, event: &str, listener: &EventListener<Ev>) {
        self.listeners
            .borrow_mut()
            .retain(|(name, it)| !(name == event && it == listener));
    }
}
