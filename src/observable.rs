use std::{fmt, rc::Rc};

pub mod contract;
pub mod factory;
pub mod from_event;
pub mod into_stream;
pub mod observer;
pub mod pipeline;
pub mod teardown;

use contract::ContractPolicy;
use observer::{Observer, Subscriber};
use pipeline::Pipeline;
use teardown::Teardown;

type Initializer<T, E> = dyn Fn(Subscriber<T, E>) -> Teardown;

/// A cold, unicast, push-based producer of `T` values, failing with `E`.
///
/// The initializer passed to [`Observable::new`] runs once per call to
/// [`subscribe`](Observable::subscribe) and never before; subscriptions share
/// no execution state. Cloning an `Observable` shares its initializer.
pub struct Observable<T, E> {
    initializer: Rc<Initializer<T, E>>,
}

impl<T: 'static, E: 'static> Observable<T, E> {
    /// Stores `initializer` without invoking it.
    ///
    /// The initializer may return a [`Teardown`], `()` or an `Option<Teardown>`;
    /// an absent teardown becomes [`Teardown::noop`].
    pub fn new<F, R>(initializer: F) -> Self
    where
        F: Fn(Subscriber<T, E>) -> R + 'static,
        R: Into<Teardown> + 'static,
    {
        Self {
            initializer: Rc::new(move |subscriber| initializer(subscriber).into()),
        }
    }

    pub fn subscribe<O>(&self, observer: O) -> Teardown
    where
        O: Observer<T, E> + 'static,
    {
        self.subscribe_with(observer, ContractPolicy::Trust)
    }

    pub fn subscribe_with<O>(&self, observer: O, policy: ContractPolicy) -> Teardown
    where
        O: Observer<T, E> + 'static,
    {
        tracing::trace!(?policy, "subscribing");

        (self.initializer)(Subscriber::new(observer, policy))
    }

    /// Transforms every value with `f`; terminal signals and the teardown pass
    /// through unchanged.
    ///
    /// The source is subscribed with the downstream [`ContractPolicy`], so under
    /// [`ContractPolicy::Enforce`] `f` never sees a value sent after a terminal
    /// signal.
    ///
    /// A panic in `f` is not caught and unwinds into the producer.
    pub fn map<R, F>(&self, f: F) -> Observable<R, E>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        self.forward(Rc::new(f))
    }

    /// Runs every value through all stages of `pipeline` in a single pass.
    pub fn pipe<R: 'static>(&self, pipeline: Pipeline<T, R>) -> Observable<R, E> {
        self.forward(pipeline.into_fn())
    }

    fn forward<R, F>(&self, f: Rc<F>) -> Observable<R, E>
    where
        R: 'static,
        F: Fn(T) -> R + ?Sized + 'static,
    {
        let source = self.clone();

        Observable::new(move |subscriber: Subscriber<R, E>| {
            let policy = subscriber.policy();

            source.subscribe_with(
                Forward {
                    f: Rc::clone(&f),
                    subscriber,
                },
                policy,
            )
        })
    }
}

impl<T, E> Clone for Observable<T, E> {
    fn clone(&self) -> Self {
        Self {
            initializer: Rc::clone(&self.initializer),
        }
    }
}

impl<T, E> fmt::Debug for Observable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

struct Forward<F: ?Sized, R, E> {
    f: Rc<F>,
    subscriber: Subscriber<R, E>,
}

impl<F, T, R, E> Observer<T, E> for Forward<F, R, E>
where
    F: Fn(T) -> R + ?Sized,
{
    fn next(&mut self, value: T) {
        self.subscriber.next((self.f)(value));
    }

    fn complete(&mut self) {
        self.subscriber.complete();
    }

    fn error(&mut self, err: E) {
        self.subscriber.error(err);
    }
}
