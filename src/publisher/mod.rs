//! Publishers - subscriber registries that fan events out.

mod in_memory;
mod publisher;

pub use in_memory::InMemoryPublisher;
pub use publisher::Publisher;
