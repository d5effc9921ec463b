use super::{teardown::Teardown, Observable};

impl<T: 'static, E: 'static> Observable<T, E> {
    /// Emits every item of `values` synchronously, then completes.
    ///
    /// Each subscription iterates its own clone of `values`.
    pub fn iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Observable::new(move |subscriber| {
            for value in values.clone() {
                subscriber.next(value);
            }

            subscriber.complete();

            Teardown::noop()
        })
    }

    pub fn empty() -> Self {
        Observable::new(|subscriber| subscriber.complete())
    }

    /// Signals `err` to every subscriber without emitting a value.
    pub fn fail(err: E) -> Self
    where
        E: Clone,
    {
        Observable::new(move |subscriber| subscriber.error(err.clone()))
    }
}
