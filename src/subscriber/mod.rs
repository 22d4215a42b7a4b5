//! Subscribers - the receiving side of a broadcast.
//!
//! ```text
//! InMemoryPublisher::broadcast(&event)
//!        │   (registration order, one call each)
//!        ├──► Subscriber::notify(&event)   LogSubscriber      -> log / buffer
//!        ├──► Subscriber::notify(&event)   EmitterSubscriber  -> EventEmitter topic
//!        └──► Subscriber::notify(&event)   FnSubscriber       -> closure
//! ```

#[cfg(feature = "emitter")]
mod emitter;
mod func;
mod log;
mod subscriber;

#[cfg(feature = "emitter")]
pub use emitter::{EmitterSubscriber, EmitterSubscriberError};
pub use func::FnSubscriber;
pub use self::log::{LogSubscriber, LogSubscriberError};
pub use subscriber::Subscriber;
