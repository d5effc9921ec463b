use thiserror::Error;

use super::observer::Observer;

/// How strictly a subscription holds its producer to the observer contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContractPolicy {
    /// Every signal reaches the observer, even after a terminal signal.
    #[default]
    Trust,
    /// Signals arriving after the first terminal signal are dropped and logged.
    Enforce,
}

/// A signal a producer sent after the subscription had already terminated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("`next` called after the subscription terminated")]
    NextAfterTerminal,
    #[error("`complete` called after the subscription terminated")]
    CompleteAfterTerminal,
    #[error("`error` called after the subscription terminated")]
    ErrorAfterTerminal,
}

/// Wraps an observer and drops every signal following a terminal one.
pub struct Checked<O> {
    observer: O,
    is_terminated: bool,
}

impl<O> Checked<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            is_terminated: false,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.is_terminated
    }

    pub fn into_inner(self) -> O {
        self.observer
    }

    fn admit(
        &mut self,
        terminal: bool,
        violation: ContractViolation,
    ) -> Result<(), ContractViolation> {
        if self.is_terminated {
            return Err(violation);
        }

        self.is_terminated = terminal;

        Ok(())
    }
}

impl<T, E, O: Observer<T, E>> Observer<T, E> for Checked<O> {
    fn next(&mut self, value: T) {
        match self.admit(false, ContractViolation::NextAfterTerminal) {
            Ok(()) => self.observer.next(value),
            Err(violation) => tracing::warn!(%violation, "dropping signal"),
        }
    }

    fn complete(&mut self) {
        match self.admit(true, ContractViolation::CompleteAfterTerminal) {
            Ok(()) => self.observer.complete(),
            Err(violation) => tracing::warn!(%violation, "dropping signal"),
        }
    }

    fn error(&mut self, err: E) {
        match self.admit(true, ContractViolation::ErrorAfterTerminal) {
            Ok(()) => self.observer.error(err),
            Err(violation) => tracing::warn!(%violation, "dropping signal"),
        }
    }
}
