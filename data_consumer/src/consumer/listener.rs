//! Listener traits
//!
//! Two separate capability sets: the application hears about the channel, the
//! session hears about bookkeeping. A close initiated by one side is reported
//! to the other side only.

use super::data_consumer::DataConsumer;
use crate::channel::DataBuffer;

/// Application-facing listener.
///
/// Called synchronously from the transport's event thread, or from the thread
/// that called [`DataConsumer::transport_closed`].
pub trait DataConsumerListener: Send + Sync {
    /// The channel reported `connecting`
    fn on_connecting(&self, consumer: &DataConsumer);

    /// The channel reported `open`
    fn on_open(&self, consumer: &DataConsumer);

    /// The channel reported `closing`
    fn on_closing(&self, consumer: &DataConsumer);

    /// The channel reported `closed`
    ///
    /// Informational only: it does not close the consumer.
    fn on_close(&self, consumer: &DataConsumer);

    /// A message arrived; ownership of the buffer passes to the listener
    fn on_message(&self, consumer: &DataConsumer, buffer: DataBuffer);

    /// The consumer was closed because its session/transport went away
    fn on_transport_close(&self, consumer: &DataConsumer);
}

/// Session-facing listener.
pub trait DataConsumerSessionListener: Send + Sync {
    /// The application closed the consumer; drop it from session bookkeeping
    fn on_close(&self, consumer: &DataConsumer);
}
