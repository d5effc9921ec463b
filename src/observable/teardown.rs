use std::fmt;

/// Releases whatever a subscription acquired when it started.
///
/// Returned by [`Observable::subscribe`](crate::Observable::subscribe). Calling
/// [`unsubscribe`](Teardown::unsubscribe) consumes the value, so a single
/// teardown can only ever run once. Dropping it without unsubscribing leaves
/// the producer attached.
#[derive(Default)]
pub struct Teardown {
    action: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A teardown that does nothing, used when a producer acquired nothing.
    pub fn noop() -> Self {
        Self { action: None }
    }

    pub fn is_noop(&self) -> bool {
        self.action.is_none()
    }

    pub fn unsubscribe(self) {
        if let Some(action) = self.action {
            tracing::trace!("tearing down subscription");

            action();
        }
    }
}

impl From<()> for Teardown {
    fn from(_: ()) -> Self {
        Teardown::noop()
    }
}

impl From<Option<Teardown>> for Teardown {
    fn from(value: Option<Teardown>) -> Self {
        value.unwrap_or_default()
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("is_noop", &self.is_noop())
            .finish()
    }
}
