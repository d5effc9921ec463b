use std::{cell::RefCell, collections::VecDeque, fmt, rc::Rc};

use crate::Notification;

use super::contract::{Checked, ContractPolicy};

/// Receives the signals of a single subscription.
///
/// A well-behaved producer calls [`next`](Observer::next) zero or more times,
/// followed by at most one terminal signal, either [`complete`](Observer::complete)
/// or [`error`](Observer::error).
pub trait Observer<T, E> {
    fn next(&mut self, value: T);
    fn complete(&mut self);
    fn error(&mut self, err: E);
}

/// An [`Observer`] built from three closures, see [`observer`].
pub struct FnObserver<N, C, Er> {
    next: N,
    complete: C,
    error: Er,
}

/// Builds an [`Observer`] from a `next`, a `complete` and an `error` closure.
pub fn observer<T, E, N, C, Er>(next: N, complete: C, error: Er) -> FnObserver<N, C, Er>
where
    N: FnMut(T),
    C: FnMut(),
    Er: FnMut(E),
{
    FnObserver {
        next,
        complete,
        error,
    }
}

impl<T, E, N, C, Er> Observer<T, E> for FnObserver<N, C, Er>
where
    N: FnMut(T),
    C: FnMut(),
    Er: FnMut(E),
{
    fn next(&mut self, value: T) {
        (self.next)(value)
    }

    fn complete(&mut self) {
        (self.complete)()
    }

    fn error(&mut self, err: E) {
        (self.error)(err)
    }
}

/// The handle an initializer receives to push signals to its observer.
///
/// Cloning is cheap and every clone delivers to the same observer, which lets a
/// producer capture it in callbacks that fire after the initializer returned.
///
/// A signal sent from inside one of the observer's own callbacks is queued and
/// delivered, in order, once that callback returns.
pub struct Subscriber<T, E> {
    inner: Rc<Inner<T, E>>,
}

struct Inner<T, E> {
    observer: RefCell<Box<dyn Observer<T, E>>>,
    pending: RefCell<VecDeque<Notification<T, E>>>,
    policy: ContractPolicy,
}

impl<T: 'static, E: 'static> Subscriber<T, E> {
    pub(crate) fn new<O>(observer: O, policy: ContractPolicy) -> Self
    where
        O: Observer<T, E> + 'static,
    {
        let observer: Box<dyn Observer<T, E>> = match policy {
            ContractPolicy::Trust => Box::new(observer),
            ContractPolicy::Enforce => Box::new(Checked::new(observer)),
        };

        Self {
            inner: Rc::new(Inner {
                observer: RefCell::new(observer),
                pending: RefCell::new(VecDeque::new()),
                policy,
            }),
        }
    }
}

impl<T, E> Subscriber<T, E> {
    pub fn next(&self, value: T) {
        self.deliver(Notification::Next(value));
    }

    pub fn complete(&self) {
        self.deliver(Notification::Complete);
    }

    pub fn error(&self, err: E) {
        self.deliver(Notification::Error(err));
    }

    /// The policy this subscription was made with.
    pub fn policy(&self) -> ContractPolicy {
        self.inner.policy
    }

    fn deliver(&self, notification: Notification<T, E>) {
        self.inner.pending.borrow_mut().push_back(notification);

        // Already inside a callback: the outer delivery drains the queue.
        let Ok(mut observer) = self.inner.observer.try_borrow_mut() else {
            return;
        };

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(notification) = next else {
                break;
            };

            match notification {
                Notification::Next(value) => observer.next(value),
                Notification::Complete => observer.complete(),
                Notification::Error(err) => observer.error(err),
            }
        }
    }
}

impl<T, E> Clone for Subscriber<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, E> Observer<T, E> for Subscriber<T, E> {
    fn next(&mut self, value: T) {
        Subscriber::next(self, value)
    }

    fn complete(&mut self) {
        Subscriber::complete(self)
    }

    fn error(&mut self, err: E) {
        Subscriber::error(self, err)
    }
}

impl<T, E> fmt::Debug for Subscriber<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("handles", &Rc::strong_count(&self.inner))
            .field("policy", &self.inner.policy)
            .finish()
    }
}
