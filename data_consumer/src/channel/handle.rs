//! Transport channel traits
//!
//! These traits mark the seam between the consumer and whatever actually moves
//! bytes (an SCTP association, an in-process loopback, ...).

use super::buffer::DataBuffer;
use super::state::DataChannelState;
use std::sync::Weak;

/// Handle to a live transport data channel.
///
/// The handle is shared: the transport keeps its own reference and delivers
/// events from its own thread, so implementations must be `Send + Sync`.
///
/// # Responsibilities
/// - Report the live ready state, stream id, label and protocol
/// - Accept close requests (fire-and-forget)
/// - Deliver events to at most one registered observer
pub trait DataChannelHandle: Send + Sync {
    /// SCTP stream id assigned by the transport
    fn id(&self) -> u16;

    fn label(&self) -> String;

    fn protocol(&self) -> String;

    /// Current ready state, read live
    fn state(&self) -> DataChannelState;

    /// Requests the channel to close
    ///
    /// Must not deliver observer events synchronously from within this call;
    /// state changes caused by the request arrive later through the normal
    /// event path.
    fn close(&self);

    /// Installs the observer, replacing any previous one
    ///
    /// The handle holds the observer weakly so it never keeps it alive.
    fn register_observer(&self, observer: Weak<dyn DataChannelObserver>);

    /// Removes `observer` if it is still the registered one
    ///
    /// A different observer registered since is left in place.
    fn unregister_observer(&self, observer: &Weak<dyn DataChannelObserver>);
}

/// Receives events from a [`DataChannelHandle`].
pub trait DataChannelObserver: Send + Sync {
    /// The ready state changed; query the handle for the new value
    fn on_state_change(&self);

    /// A message arrived
    fn on_message(&self, buffer: DataBuffer);

    /// The amount of buffered outgoing data changed
    fn on_buffered_amount_change(&self, sent_data_size: u64);
}
