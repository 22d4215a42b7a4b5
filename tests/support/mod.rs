//! Test subscribers that record what they receive.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use observed_rust::{BoxError, Event, Message, MessagePayload, Subscriber};

/// Records every payload it is notified with.
pub struct RecordingSubscriber {
    id: String,
    received: Mutex<Vec<MessagePayload>>,
    order: Option<Arc<Mutex<Vec<String>>>>,
}

impl RecordingSubscriber {
    pub fn new(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            received: Mutex::new(Vec::new()),
            order: None,
        })
    }

    /// Also append this subscriber's id to `order` on every notify.
    pub fn with_order(id: &str, order: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            received: Mutex::new(Vec::new()),
            order: Some(order),
        })
    }

    pub fn received(&self) -> Vec<MessagePayload> {
        self.received.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl Subscriber<Message> for RecordingSubscriber {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &Message) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(event.payload().clone());
        if let Some(order) = &self.order {
            order.lock().unwrap().push(self.id.clone());
        }
        Ok(())
    }
}

/// Fails every notify and counts the attempts.
pub struct FailingSubscriber {
    id: String,
    calls: AtomicUsize,
}

impl FailingSubscriber {
    pub fn new(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Subscriber<Message> for FailingSubscriber {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, _event: &Message) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(format!("{} cannot receive mail", self.id).into())
    }
}

pub fn welcome() -> Message {
    Message::new(
        "Mailing list update",
        "Welcome to all members!\nThis is the mailing list.\nPlease try our new product, you can find it at https://example.com.\nGreetings!",
    )
}
