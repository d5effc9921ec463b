pub mod event;
pub mod notification;
pub mod observable;

#[cfg(test)]
pub(crate) mod testing;

pub use event::{emitter::EventEmitter, EventListener, EventTarget};
pub use notification::Notification;
pub use observable::{
    contract::{Checked, ContractPolicy, ContractViolation},
    into_stream::ObservableStream,
    observer::{observer, FnObserver, Observer, Subscriber},
    pipeline::Pipeline,
    teardown::Teardown,
    Observable,
};

pub mod prelude {
    pub use crate::event::*;
    pub use crate::observable::contract::*;
    pub use crate::observable::into_stream::*;
    pub use crate::observable::observer::*;
    pub use crate::observable::pipeline::*;
    pub use crate::observable::teardown::*;
    pub use crate::pipeline;
    pub use crate::{EventEmitter, Notification, Observable};
}
