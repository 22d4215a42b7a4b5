use std::fmt;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::Subscriber;
use crate::error::BoxError;
use crate::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogSubscriberError {
    #[error("log subscriber buffer poisoned")]
    BufferPoisoned,
}

/// A subscriber that logs every payload it receives, or appends it to a buffer.
///
/// Without a buffer, lines go to the `log` facade at `info` level.
pub struct LogSubscriber {
    id: String,
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogSubscriber {
    pub fn new(id: impl Into<String>) -> Self {
        LogSubscriber {
            id: id.into(),
            buffer: None,
        }
    }

    pub fn with_buffer(id: impl Into<String>, buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogSubscriber {
            id: id.into(),
            buffer: Some(buffer),
        }
    }
}

impl<E> Subscriber<E> for LogSubscriber
where
    E: Event,
    E::Payload: fmt::Debug,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&self, event: &E) -> Result<(), BoxError> {
        let lines = [
            format!("update {:?}", event.payload()),
            format!("to subscriber {}", self.id),
        ];
        if let Some(buffer) = &self.buffer {
            let mut buffer = buffer
                .lock()
                .map_err(|_| LogSubscriberError::BufferPoisoned)?;
            buffer.extend(lines);
        } else {
            for line in lines {
                log::info!("{}", line);
            }
        }
        Ok(())
    }
}
