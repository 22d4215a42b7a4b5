//! Core subscriber trait.

use crate::error::BoxError;
use crate::event::Event;

/// Something that reacts to events broadcast by a [`Publisher`](crate::Publisher).
///
/// Subscribers are identified by [`id`](Subscriber::id). The publisher uses
/// the id, and only the id, for de-duplication and removal, so two subscriber
/// values with the same id are the same subscriber as far as the registry is
/// concerned.
pub trait Subscriber<E: Event>: Send + Sync {
    /// Stable identity, fixed at construction.
    fn id(&self) -> &str;

    /// React to one event.
    ///
    /// An error is returned to the caller of `broadcast`; whether delivery
    /// continues to the remaining subscribers depends on the publisher's
    /// [`DeliveryPolicy`](crate::DeliveryPolicy).
    fn notify(&self, event: &E) -> Result<(), BoxError>;
}
