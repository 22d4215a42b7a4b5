//! Wire two subscribers to a publisher and send one mailing-list message.
//!
//! Run with `RUST_LOG=debug cargo run --example mailing_list`.

use std::sync::Arc;

use observed_rust::{InMemoryPublisher, LogSubscriber, Message, PublishError, Publisher};

fn main() -> Result<(), PublishError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let publisher = InMemoryPublisher::<Message>::new();

    publisher.subscribe(Arc::new(LogSubscriber::new("Alice")))?;
    publisher.subscribe(Arc::new(LogSubscriber::new("Bob")))?;

    let message = Message::new(
        "Mailing list update",
        "Welcome to all members!\nThis is the mailing list.\nPlease try our new product, you can find it at https://example.com.\nGreetings!",
    );

    publisher.broadcast(&message)
}
