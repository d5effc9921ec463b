pub mod emitter;

use std::{fmt, rc::Rc};

/// A handler registered on an [`EventTarget`].
///
/// Two listeners are equal when they are clones of the same handler, which is
/// how a target finds the registration to remove.
pub struct EventListener<Ev> {
    handler: Rc<dyn Fn(&Ev)>,
}

impl<Ev> EventListener<Ev> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Ev) + 'static,
    {
        Self {
            handler: Rc::new(handler),
        }
    }

    pub fn call(&self, event: &Ev) {
        (self.handler)(event)
    }
}

impl<Ev> Clone for EventListener<Ev> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<Ev> PartialEq for EventListener<Ev> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<Ev> Eq for EventListener<Ev> {}

impl<Ev> fmt::Debug for EventListener<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("handler", &Rc::as_ptr(&self.handler).cast::<()>())
            .finish()
    }
}

/// Anything that can register and deregister listeners for named events.
pub trait EventTarget {
    type Event;

    fn add_event_listener(&self, event: &str, listener: EventListener<Self::Event>);
    fn remove_event_listener(&self, event: &str, listener: &EventListener<Self::Event>);
}
