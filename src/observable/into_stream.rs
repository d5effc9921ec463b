use std::{
    cell::RefCell,
    collections::VecDeque,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, Waker},
};

use futures::{stream::FusedStream, Stream};

use super::{observer::Observer, teardown::Teardown, Observable};

impl<T: 'static, E: 'static> Observable<T, E> {
    /// Subscribes once and exposes the subscription as a [`Stream`].
    ///
    /// An `error` is yielded as `Err` and ends the stream, `complete` ends it
    /// too. Dropping the stream tears the subscription down.
    pub fn into_stream(&self) -> ObservableStream<T, E> {
        let controller = Rc::new(RefCell::new(Controller::new()));
        let teardown = self.subscribe(Handoff {
            controller: Rc::clone(&controller),
        });

        ObservableStream {
            controller,
            teardown: Some(teardown),
        }
    }
}

struct Controller<T, E> {
    buffer: VecDeque<Result<T, E>>,
    is_done: bool,
    waker: Option<Waker>,
}

impl<T, E> Controller<T, E> {
    fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
            is_done: false,
            waker: None,
        }
    }

    fn push(&mut self, value: Result<T, E>) {
        if !self.is_done {
            self.buffer.push_back(value);
        }
    }

    fn close(&mut self) {
        self.is_done = true;
    }

    fn pop(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<T, E>>> {
        match self.buffer.pop_front() {
            Some(it) => Poll::Ready(Some(it)),
            None => {
                if self.is_done {
                    Poll::Ready(None)
                } else {
                    self.waker = Some(cx.waker().clone());

                    Poll::Pending
                }
            }
        }
    }
}

/// Moves pushed signals into the [`Controller`] polled by an [`ObservableStream`].
struct Handoff<T, E> {
    controller: Rc<RefCell<Controller<T, E>>>,
}

impl<T, E> Handoff<T, E> {
    /// Applies `update`, then wakes the polling task once the controller is
    /// no longer borrowed, as the waker may poll the stream right away.
    fn update(&self, update: impl FnOnce(&mut Controller<T, E>)) {
        let waker = {
            let mut controller = self.controller.borrow_mut();

            update(&mut *controller);
            controller.waker.take()
        };

        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<T, E> Observer<T, E> for Handoff<T, E> {
    fn next(&mut self, value: T) {
        self.update(|controller| controller.push(Ok(value)));
    }

    fn complete(&mut self) {
        self.update(Controller::close);
    }

    fn error(&mut self, err: E) {
        self.update(|controller| {
            controller.push(Err(err));
            controller.close();
        });
    }
}

/// Stream for the [`into_stream`](Observable::into_stream) method.
#[must_use = "streams do nothing unless polled"]
pub struct ObservableStream<T, E> {
    controller: Rc<RefCell<Controller<T, E>>>,
    teardown: Option<Teardown>,
}

impl<T, E> Stream for ObservableStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.controller.borrow_mut().pop(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let controller = self.controller.borrow();
        let len = controller.buffer.len();

        (len, controller.is_done.then_some(len))
    }
}

impl<T, E> FusedStream for ObservableStream<T, E> {
    fn is_terminated(&self) -> bool {
        let controller = self.controller.borrow();

        controller.is_done && controller.buffer.is_empty()
    }
}

impl<T, E> Drop for ObservableStream<T, E> {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown.unsubscribe();
        }
    }
}
