use std::rc::Rc;

use crate::event::{EventListener, EventTarget};

use super::{teardown::Teardown, Observable};

impl<T: Clone + 'static, E: 'static> Observable<T, E> {
    /// Emits every `event` dispatched on `target`.
    ///
    /// Each subscription registers its own listener; its teardown removes that
    /// listener again. The observable never completes nor errors by itself.
    ///
    /// Listeners only borrow the dispatched event, so every subscriber receives
    /// a clone of it. Targets whose events are costly to copy can dispatch
    /// `Rc<Ev>`, which hands every subscriber the same event object.
    pub fn from_event<Tg>(target: Rc<Tg>, event: impl Into<String>) -> Self
    where
        Tg: EventTarget<Event = T> + ?Sized + 'static,
    {
        let event: String = event.into();
        let event: Rc<str> = Rc::from(event);

        Observable::new(move |subscriber| {
            let listener = EventListener::new(move |it: &T| subscriber.next(it.clone()));

            target.add_event_listener(&event, listener.clone());

            let target = Rc::clone(&target);
            let event = Rc::clone(&event);

            Teardown::new(move || target.remove_event_listener(&event, &listener))
        })
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        event::{emitter::EventEmitter, EventListener, EventTarget},
        testing::Recorder,
        Notification,
    };

    use super::Observable;

    #[derive(Debug, Clone, PartialEq)]
    struct Click {
        x: i32,
    }

    /// Records every registration call it receives.
    #[derive(Default)]
    struct SpyTarget {
        added: RefCell<Vec<(String, EventListener<Click>)>>,
        removed: RefCell<Vec<(String, EventListener<Click>)>>,
    }

    impl SpyTarget {
        fn fire(&self, event: &Click) {
            let listeners = {
                let added = self.added.borrow();
                let removed = self.removed.borrow();

                added
                    .iter()
                    .filter(|(_, listener)| !removed.iter().any(|(_, it)| it == listener))
                    .map(|(_, listener)| listener.clone())
                    .collect::<Vec<_>>()
            };

            for listener in listeners {
                listener.call(event);
            }
        }
    }

    impl EventTarget for SpyTarget {
        type Event = Click;

        fn add_event_listener(&self, event: &str, listener: EventListener<Click>) {
            self.added.borrow_mut().push((event.to_string(), listener));
        }

        fn remove_event_listener(&self, event: &str, listener: &EventListener<Click>) {
            self.removed
                .borrow_mut()
                .push((event.to_string(), listener.clone()));
        }
    }

    #[test]
    fn smoke() {
        let target = Rc::new(SpyTarget::default());
        let recorder = Recorder::<i32, ()>::new();
        let log = recorder.log();
        let teardown = Observable::from_event(Rc::clone(&target), "click")
            .map(|event: Click| event.x)
            .subscribe(recorder);

        target.fire(&Click { x: 1 });
        target.fire(&Click { x: 2 });

        assert_eq!(
            *log.borrow(),
            [Notification::Next(1), Notification::Next(2)]
        );

        teardown.unsubscribe();

        let added = target.added.borrow();
        let removed = target.removed.borrow();

        assert_eq!(added.len(), 1);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].0, "click");
        assert_eq!(removed[0].1, added[0].1);
    }

    #[test]
    fn subscriptions_register_independent_listeners() {
        let target = Rc::new(SpyTarget::default());
        let clicks = Observable::<Click, ()>::from_event(Rc::clone(&target), "click");
        let first = Recorder::new();
        let first_log = first.log();
        let second = Recorder::new();
        let second_log = second.log();

        let first_teardown = clicks.subscribe(first);
        let _second_teardown = clicks.subscribe(second);

        assert_eq!(target.added.borrow().len(), 2);
        assert_ne!(target.added.borrow()[0].1, target.added.borrow()[1].1);

        first_teardown.unsubscribe();
        target.fire(&Click { x: 7 });

        assert!(first_log.borrow().is_empty());
        assert_eq!(*second_log.borrow(), [Notification::Next(Click { x: 7 })]);
    }

    #[test]
    fn teardown_detaches_from_emitter() {
        let emitter = Rc::new(EventEmitter::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let teardown = Observable::<(i32, i32), ()>::from_event(Rc::clone(&emitter), "mousemove")
            .map(|(x, _)| x)
            .subscribe(crate::observer(
                {
                    let seen = Rc::clone(&seen);

                    move |x| seen.borrow_mut().push(x)
                },
                || {},
                |_| {},
            ));

        assert_eq!(emitter.listener_count("mousemove"), 1);

        emitter.dispatch("mousemove", &(3, 4));
        teardown.unsubscribe();
        emitter.dispatch("mousemove", &(5, 6));

        assert_eq!(emitter.listener_count("mousemove"), 0);
        assert_eq!(*seen.borrow(), [3]);
    }

    #[test]
    fn dispatch_from_inside_next() {
        let emitter = Rc::new(EventEmitter::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let teardown = Observable::<i32, ()>::from_event(Rc::clone(&emitter), "click").subscribe(
            crate::observer(
                {
                    let seen = Rc::clone(&seen);
                    let emitter = Rc::downgrade(&emitter);

                    move |x: i32| {
                        seen.borrow_mut().push(x);

                        if x < 100 {
                            if let Some(emitter) = emitter.upgrade() {
                                emitter.dispatch("click", &(x + 100));
                            }
                        }
                    }
                },
                || {},
                |_| {},
            ),
        );

        emitter.dispatch("click", &1);

        assert_eq!(*seen.borrow(), [1, 101]);

        teardown.unsubscribe();
    }

    #[test]
    fn rc_events_are_shared() {
        let emitter = Rc::new(EventEmitter::new());
        let received = Rc::new(RefCell::new(Vec::new()));
        let _teardown = Observable::<Rc<Click>, ()>::from_event(Rc::clone(&emitter), "click")
            .subscribe(crate::observer(
                {
                    let received = Rc::clone(&received);

                    move |event: Rc<Click>| received.borrow_mut().push(event)
                },
                || {},
                |_| {},
            ));
        let event = Rc::new(Click { x: 3 });

        emitter.dispatch("click", &event);

        assert_eq!(received.borrow().len(), 1);
        assert!(Rc::ptr_eq(&received.borrow()[0], &event));
    }
}
