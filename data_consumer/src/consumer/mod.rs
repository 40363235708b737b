//! Data consumer
//!
//! A [`DataConsumer`] receives messages from one remote data producer over one
//! transport data channel and owns that channel's closing protocol.

mod app_data;
mod data_consumer;
mod listener;
mod parameters;

pub use app_data::AppData;
pub use data_consumer::{DataConsumer, DataConsumerOptions};
pub use listener::{DataConsumerListener, DataConsumerSessionListener};
pub use parameters::SctpStreamParameters;
