//! # observed_rust
//!
//! In-process observer pattern: subscribers keyed by a stable id, and a
//! publisher that delivers each event to every registered subscriber.
//!
//! ```text
//! caller ── subscribe(Arc<dyn Subscriber>) ──► InMemoryPublisher (ids, registration order)
//! caller ── broadcast(&event) ───────────────► notify() on each subscriber, one after another
//! ```
//!
//! Delivery is synchronous and sequential. What happens when a subscriber
//! fails, or when an id is subscribed twice, is set by [`PublisherConfig`].
mod config;
mod error;
mod event;
mod message;
mod publisher;
mod subscriber;

pub use config::{DeliveryPolicy, DuplicatePolicy, PublisherConfig};
pub use error::{BoxError, DeliveryFailure, PublishError};
pub use event::Event;
pub use message::{Message, MessagePayload};
pub use publisher::{InMemoryPublisher, Publisher};
#[cfg(feature = "emitter")]
pub use subscriber::{EmitterSubscriber, EmitterSubscriberError};
pub use subscriber::{FnSubscriber, LogSubscriber, LogSubscriberError, Subscriber};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
