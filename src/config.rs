use serde::{Deserialize, Serialize};

/// What `broadcast` does when a subscriber's `notify` fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Stop at the first failure and return it. Later subscribers are not notified.
    #[default]
    FailFast,
    /// Notify every subscriber, then report all failures together.
    CollectAll,
}

/// What `subscribe` does when the id is already registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the existing subscriber and report `Ok(false)`.
    #[default]
    Ignore,
    /// Fail with `PublishError::DuplicateSubscriber`.
    Reject,
}

/// Settings for an [`InMemoryPublisher`](crate::InMemoryPublisher).
///
/// ## Example
///
/// ```
/// use observed_rust::{DeliveryPolicy, DuplicatePolicy, PublisherConfig};
///
/// let config = PublisherConfig::default()
///     .with_delivery(DeliveryPolicy::CollectAll)
///     .with_duplicates(DuplicatePolicy::Reject);
///
/// assert_eq!(config.delivery, DeliveryPolicy::CollectAll);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    pub delivery: DeliveryPolicy,
    pub duplicates: DuplicatePolicy,
}

impl PublisherConfig {
    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Parse a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fail_fast_and_ignore_duplicates() {
        let config = PublisherConfig::default();
        assert_eq!(config.delivery, DeliveryPolicy::FailFast);
        assert_eq!(config.duplicates, DuplicatePolicy::Ignore);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = PublisherConfig::from_json(r#"{"delivery":"collect_all"}"#).unwrap();
        assert_eq!(config.delivery, DeliveryPolicy::CollectAll);
        assert_eq!(config.duplicates, DuplicatePolicy::Ignore);

        let config = PublisherConfig::from_json("{}").unwrap();
        assert_eq!(config, PublisherConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_policy() {
        assert!(PublisherConfig::from_json(r#"{"duplicates":"replace"}"#).is_err());
    }
}
