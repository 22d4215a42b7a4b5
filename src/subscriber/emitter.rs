use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use serde::Serialize;
use thiserror::Error;

use super::Subscriber;
use crate::error::BoxError;
use crate::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitterSubscriberError {
    #[error("emitter subscriber lock poisoned")]
    EmitterPoisoned,
}

/// A subscriber that forwards each payload to an [`EventEmitter`] topic.
///
/// The payload is JSON-encoded before it is emitted, so emitter listeners
/// receive a `String`. The emitter runs its listeners on their own threads;
/// `notify` returns once they are dispatched, not once they finish.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use observed_rust::{EmitterSubscriber, EventEmitter, InMemoryPublisher, Message, Publisher};
///
/// # fn main() -> Result<(), observed_rust::PublishError> {
/// let mut emitter = EventEmitter::new();
/// emitter.on("mail", |json: String| println!("forwarded {}", json));
///
/// let publisher = InMemoryPublisher::<Message>::new();
/// let forwarder = EmitterSubscriber::new("forwarder", "mail", emitter);
/// publisher.subscribe(Arc::new(forwarder))?;
///
/// publisher.broadcast(&Message::new("Mailing list update", "Welcome"))?;
/// # Ok(())
/// # }
/// ```
pub struct EmitterSubscriber {
    id: String,
    topic: String,
    emitter: Mutex<EventEmitter>,
}

impl EmitterSubscriber {
    pub fn new(id: impl Into<String>, topic: impl Into<String>, emitter: EventEmitter) -> Self {
        EmitterSubscriber {
            id: id.into(),
            topic: topic.into(),
            emitter: Mutex::new(emitter),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<E> Subscriber<E> for EmitterSubscriber
where
    E: Event,
    E::Payload: Serialize,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &E) -> Result<(), BoxError> {
        let json = serde_json::to_string(event.payload())?;
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| EmitterSubscriberError::EmitterPoisoned)?;
        emitter.emit(&self.topic, json);
        Ok(())
    }
}
