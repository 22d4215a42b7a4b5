use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Structured payload carried by a [`Message`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub subject: String,
    pub content: String,
}

/// A mail-style message with a subject and a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    payload: MessagePayload,
}

impl Message {
    pub fn new(subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_payload(MessagePayload {
            subject: subject.into(),
            content: content.into(),
        })
    }

    pub fn from_payload(payload: MessagePayload) -> Self {
        Message { payload }
    }

    pub fn subject(&self) -> &str {
        &self.payload.subject
    }

    pub fn content(&self) -> &str {
        &self.payload.content
    }

    /// Render the payload as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.payload)
    }
}

impl Event for Message {
    type Payload = MessagePayload;

    fn payload(&self) -> &MessagePayload {
        &self.payload
    }
}
