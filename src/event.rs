/// An immutable value delivered to subscribers by a [`Publisher`](crate::Publisher).
///
/// The payload is exposed read-only; there are no mutation operations after
/// construction.
pub trait Event: Send + Sync {
    type Payload;

    fn payload(&self) -> &Self::Payload;
}
