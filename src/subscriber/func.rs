use std::fmt;

use super::Subscriber;
use crate::error::BoxError;
use crate::event::Event;

/// A subscriber backed by a closure.
///
/// ```
/// use observed_rust::{FnSubscriber, Message, Subscriber};
///
/// let shout = FnSubscriber::new("shout", |message: &Message| {
///     assert_eq!(message.subject(), "hi");
///     Ok(())
/// });
///
/// shout.notify(&Message::new("hi", "there")).unwrap();
/// ```
pub struct FnSubscriber<F> {
    id: String,
    f: F,
}

impl<F> FnSubscriber<F> {
    pub fn new<E>(id: impl Into<String>, f: F) -> Self
    where
        E: Event,
        F: Fn(&E) -> Result<(), BoxError> + Send + Sync,
    {
        FnSubscriber { id: id.into(), f }
    }
}

impl<E, F> Subscriber<E> for FnSubscriber<F>
where
    E: Event,
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &E) -> Result<(), BoxError> {
        (self.f)(event)
    }
}

impl<F> fmt::Debug for FnSubscriber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubscriber").field("id", &self.id).finish()
    }
}
