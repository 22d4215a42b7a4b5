//! Core publisher trait.

use std::sync::Arc;

use crate::error::PublishError;
use crate::event::Event;
use crate::subscriber::Subscriber;

/// A registry of subscribers that fans events out to them.
///
/// Subscribers are keyed by [`Subscriber::id`]. The registry holds shared
/// handles; it never constructs or drops a subscriber on its own.
pub trait Publisher<E: Event>: Send + Sync {
    /// Register a subscriber.
    ///
    /// Returns `Ok(true)` if the id was new and `Ok(false)` if a subscriber
    /// with this id was already registered and the call was ignored.
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<E>>) -> Result<bool, PublishError>;

    /// Remove the registered subscriber with the given id.
    fn unsubscribe_id(&self, id: &str) -> Result<(), PublishError>;

    /// Remove the registered subscriber whose id matches `subscriber`'s.
    ///
    /// The match is by id, so the value passed in need not be the same
    /// instance that was subscribed.
    fn unsubscribe(&self, subscriber: &dyn Subscriber<E>) -> Result<(), PublishError> {
        self.unsubscribe_id(subscriber.id())
    }

    /// Deliver `event` to every registered subscriber.
    fn broadcast(&self, event: &E) -> Result<(), PublishError>;
}
