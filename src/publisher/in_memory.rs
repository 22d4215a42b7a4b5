//! In-memory subscriber registry.
//!
//! Thread-safe (share it across threads via `Clone`), single process,
//! synchronous delivery.

use std::fmt;
use std::sync::{Arc, RwLock};

use super::Publisher;
use crate::config::{DeliveryPolicy, DuplicatePolicy, PublisherConfig};
use crate::error::{DeliveryFailure, PublishError};
use crate::event::Event;
use crate::subscriber::Subscriber;

/// In-memory publisher holding subscribers in registration order.
///
/// Features:
/// - Thread-safe: clones share the same registry (`Arc<RwLock<...>>`)
/// - Subscribers are unique by id
/// - `broadcast` notifies subscribers one after another, in the order they
///   were subscribed, and returns after the last `notify` returns
/// - `broadcast` works on a snapshot: subscribers added or removed from inside
///   `notify` take effect on the next broadcast
///
/// ## Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use observed_rust::{InMemoryPublisher, LogSubscriber, Message, Publisher};
///
/// let buffer = Arc::new(Mutex::new(Vec::new()));
/// let publisher = InMemoryPublisher::<Message>::new();
///
/// publisher.subscribe(Arc::new(LogSubscriber::with_buffer("Alice", buffer.clone()))).unwrap();
/// publisher.subscribe(Arc::new(LogSubscriber::with_buffer("Bob", buffer.clone()))).unwrap();
///
/// publisher.broadcast(&Message::new("Mailing list update", "Welcome!")).unwrap();
///
/// let lines = buffer.lock().unwrap();
/// assert_eq!(lines[1], "to subscriber Alice");
/// assert_eq!(lines[3], "to subscriber Bob");
/// ```
pub struct InMemoryPublisher<E: Event> {
    subscribers: Arc<RwLock<Vec<Arc<dyn Subscriber<E>>>>>,
    config: PublisherConfig,
}

impl<E: Event> InMemoryPublisher<E> {
    pub fn new() -> Self {
        Self::with_config(PublisherConfig::default())
    }

    pub fn with_config(config: PublisherConfig) -> Self {
        InMemoryPublisher {
            subscribers: Arc::new(RwLock::new(Vec::new())),
            config,
        }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> Result<usize, PublishError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, PublishError> {
        Ok(self.read("is_empty")?.is_empty())
    }

    pub fn contains(&self, id: &str) -> Result<bool, PublishError> {
        Ok(self.read("contains")?.iter().any(|s| s.id() == id))
    }

    /// Registered ids, in broadcast order.
    pub fn ids(&self) -> Result<Vec<String>, PublishError> {
        Ok(self
            .read("ids")?
            .iter()
            .map(|s| s.id().to_string())
            .collect())
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockReadGuard<'_, Vec<Arc<dyn Subscriber<E>>>>, PublishError> {
        self.subscribers
            .read()
            .map_err(|_| PublishError::LockPoisoned(operation))
    }

    fn snapshot(&self) -> Result<Vec<Arc<dyn Subscriber<E>>>, PublishError> {
        Ok(self.read("broadcast")?.iter().cloned().collect())
    }
}

impl<E: Event> Publisher<E> for InMemoryPublisher<E> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<E>>) -> Result<bool, PublishError> {
        let mut subscribers = self
            .subscribers
            .write()
            .map_err(|_| PublishError::LockPoisoned("subscribe"))?;

        if subscribers.iter().any(|s| s.id() == subscriber.id()) {
            return match self.config.duplicates {
                DuplicatePolicy::Ignore => {
                    log::debug!("subscribe {}: already registered, ignored", subscriber.id());
                    Ok(false)
                }
                DuplicatePolicy::Reject => {
                    Err(PublishError::DuplicateSubscriber(subscriber.id().to_string()))
                }
            };
        }

        log::debug!("subscribe {}", subscriber.id());
        subscribers.push(subscriber);
        Ok(true)
    }

    fn unsubscribe_id(&self, id: &str) -> Result<(), PublishError> {
        let mut subscribers = self
            .subscribers
            .write()
            .map_err(|_| PublishError::LockPoisoned("unsubscribe"))?;

        let position = subscribers
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| PublishError::SubscriberNotFound(id.to_string()))?;

        log::debug!("unsubscribe {}", id);
        subscribers.remove(position);
        Ok(())
    }

    fn broadcast(&self, event: &E) -> Result<(), PublishError> {
        let subscribers = self.snapshot()?;
        log::debug!("broadcast to {} subscriber(s)", subscribers.len());

        match self.config.delivery {
            DeliveryPolicy::FailFast => {
                for subscriber in &subscribers {
                    subscriber.notify(event).map_err(|source| {
                        log::warn!(
                            "subscriber {} failed, aborting broadcast: {}",
                            subscriber.id(),
                            source
                        );
                        PublishError::SubscriberFailed {
                            id: subscriber.id().to_string(),
                            source,
                        }
                    })?;
                }
                Ok(())
            }
            DeliveryPolicy::CollectAll => {
                let failures: Vec<DeliveryFailure> = subscribers
                    .iter()
                    .filter_map(|subscriber| {
                        let source = subscriber.notify(event).err()?;
                        log::warn!("subscriber {} failed: {}", subscriber.id(), source);
                        Some(DeliveryFailure {
                            id: subscriber.id().to_string(),
                            source,
                        })
                    })
                    .collect();

                if failures.is_empty() {
                    Ok(())
                } else {
                    Err(PublishError::Delivery(failures))
                }
            }
        }
    }
}

impl<E: Event> Clone for InMemoryPublisher<E> {
    fn clone(&self) -> Self {
        InMemoryPublisher {
            subscribers: Arc::clone(&self.subscribers),
            config: self.config,
        }
    }
}

impl<E: Event> Default for InMemoryPublisher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for InMemoryPublisher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryPublisher")
            .field("subscribers", &self.ids().unwrap_or_default())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnSubscriber, Message};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(id: &str, calls: Arc<AtomicUsize>) -> Arc<dyn Subscriber<Message>> {
        Arc::new(FnSubscriber::new(id, move |_: &Message| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }))
    }

    #[test]
    fn subscribe_and_unsubscribe_by_id() {
        let publisher = InMemoryPublisher::<Message>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        assert!(publisher.subscribe(counting("Alice", calls.clone())).unwrap());
        assert!(publisher.subscribe(counting("Bob", calls.clone())).unwrap());
        assert_eq!(publisher.ids().unwrap(), vec!["Alice", "Bob"]);

        publisher.unsubscribe_id("Alice").unwrap();
        assert!(!publisher.contains("Alice").unwrap());
        assert_eq!(publisher.len().unwrap(), 1);
    }

    #[test]
    fn unsubscribe_matches_by_id_not_instance() {
        let publisher = InMemoryPublisher::<Message>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        publisher.subscribe(counting("Alice", calls.clone())).unwrap();

        let lookalike = counting("Alice", calls);
        publisher.unsubscribe(lookalike.as_ref()).unwrap();
        assert!(publisher.is_empty().unwrap());
    }

    #[test]
    fn broadcast_with_no_subscribers() {
        let publisher = InMemoryPublisher::<Message>::new();
        assert!(publisher.broadcast(&Message::new("s", "c")).is_ok());
    }

    #[test]
    fn clones_share_subscribers() {
        let publisher = InMemoryPublisher::<Message>::new();
        let handle = publisher.clone();
        let calls = Arc::new(AtomicUsize::new(0));

        handle.subscribe(counting("Alice", calls.clone())).unwrap();
        publisher.broadcast(&Message::new("s", "c")).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(format!("{:?}", publisher.ids().unwrap()), r#"["Alice"]"#);
    }
}
