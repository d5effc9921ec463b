use std::{cell::RefCell, rc::Rc};

use crate::{Notification, Observer};

/// Records every signal it receives, shared with the test through [`Recorder::log`].
pub(crate) struct Recorder<T, E> {
    log: Rc<RefCell<Vec<Notification<T, E>>>>,
}

impl<T, E> Recorder<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn log(&self) -> Rc<RefCell<Vec<Notification<T, E>>>> {
        Rc::clone(&self.log)
    }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
    fn next(&mut self, value: T) {
        self.log.borrow_mut().push(Notification::Next(value));
    }

    fn complete(&mut self) {
        self.log.borrow_mut().push(Notification::Complete);
    }

    fn error(&mut self, err: E) {
        self.log.borrow_mut().push(Notification::Error(err));
    }
}
