use std::error::Error as StdError;

use thiserror::Error;

/// Error type a subscriber returns from `notify`.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A single failed delivery collected by [`DeliveryPolicy::CollectAll`](crate::DeliveryPolicy).
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Id of the subscriber whose `notify` failed
    pub id: String,
    /// The error it returned
    pub source: BoxError,
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("subscriber not found: {0}")]
    SubscriberNotFound(String),

    #[error("subscriber already registered: {0}")]
    DuplicateSubscriber(String),

    #[error("subscriber {id} failed: {source}")]
    SubscriberFailed {
        id: String,
        #[source]
        source: BoxError,
    },

    #[error("{} subscriber(s) failed during broadcast", .0.len())]
    Delivery(Vec<DeliveryFailure>),

    #[error("publisher lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl PublishError {
    /// Ids of the subscribers whose delivery failed, in notification order.
    ///
    /// Empty for errors that are not delivery failures.
    pub fn failed_ids(&self) -> Vec<&str> {
        match self {
            PublishError::SubscriberFailed { id, .. } => vec![id.as_str()],
            PublishError::Delivery(failures) => failures.iter().map(|f| f.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
