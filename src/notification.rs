/// A single signal of a subscription, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T, E> {
    Next(T),
    Error(E),
    Complete,
}

impl<T, E> Notification<T, E> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Notification::Next(it) => Some(it),
            _ => None,
        }
    }
}
