//! Data Consumer - receiving end of a WebRTC data channel
//!
//! Wraps one transport data channel and turns its raw events into listener
//! calls, with a single closing protocol that either side may trigger.
//!
//! ## Usage
//!
//! ```
//! use data_consumer::channel::{DataChannelHandle, DataChannelState, LocalDataChannel};
//! use data_consumer::consumer::{DataConsumerListener, DataConsumerOptions, SctpStreamParameters};
//! use data_consumer::session::ConsumerSession;
//! use data_consumer::{DataBuffer, DataConsumer};
//! use logging::{LogLevel, Logger};
//! use std::sync::{Arc, Weak};
//!
//! struct Printer;
//!
//! impl DataConsumerListener for Printer {
//!     fn on_connecting(&self, _: &DataConsumer) {}
//!     fn on_open(&self, c: &DataConsumer) { println!("{} open", c.id()); }
//!     fn on_closing(&self, _: &DataConsumer) {}
//!     fn on_close(&self, _: &DataConsumer) {}
//!     fn on_message(&self, _: &DataConsumer, buffer: DataBuffer) { println!("{:?}", buffer.data()); }
//!     fn on_transport_close(&self, _: &DataConsumer) {}
//! }
//!
//! let logger = Logger::in_memory(LogLevel::Info);
//! let session = ConsumerSession::new(&logger);
//! let listener = Arc::new(Printer);
//! let weak = Arc::downgrade(&listener);
//! let weak: Weak<dyn DataConsumerListener> = weak;
//! let channel = LocalDataChannel::new(3, "chat", "");
//! let handle: Arc<dyn DataChannelHandle> = channel.clone();
//!
//! let consumer = session
//!     .consume(weak, DataConsumerOptions::new("dc1", "p1", SctpStreamParameters::reliable(3)), handle)
//!     .unwrap();
//!
//! channel.set_state(DataChannelState::Open);
//! channel.deliver(DataBuffer::binary(vec![0xAA, 0xBB]));
//! consumer.close();
//! assert!(session.is_empty());
//! ```

pub mod channel;
pub mod config;
pub mod consumer;
pub mod error;
pub mod session;

pub use channel::{DataBuffer, DataChannelHandle, DataChannelObserver, DataChannelState};
pub use config::LoggingConfig;
pub use consumer::{
    AppData, DataConsumer, DataConsumerListener, DataConsumerOptions,
    DataConsumerSessionListener, SctpStreamParameters,
};
pub use error::{DataConsumerError, Result};
pub use session::ConsumerSession;
