//! Transport-side data channel abstraction
//!
//! The consumer never talks to SCTP directly. It sees a [`DataChannelHandle`],
//! registers a [`DataChannelObserver`] on it and receives [`DataBuffer`]s.
//!
//! [`LocalDataChannel`] is an in-process handle that a session (or a test)
//! drives by hand.

mod buffer;
mod handle;
mod local;
mod state;

pub use buffer::DataBuffer;
pub use handle::{DataChannelHandle, DataChannelObserver};
pub use local::LocalDataChannel;
pub use state::DataChannelState;
