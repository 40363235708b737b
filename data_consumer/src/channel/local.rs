//! In-process data channel
//!
//! A [`DataChannelHandle`] whose events are produced by explicit calls instead
//! of a network. Whoever owns it plays the transport: it moves the channel
//! through its states and pushes inbound messages, from any thread.

use super::buffer::DataBuffer;
use super::handle::{DataChannelHandle, DataChannelObserver};
use super::state::DataChannelState;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// In-process data channel handle
#[derive(Debug)]
pub struct LocalDataChannel {
    /// SCTP stream id
    id: u16,
    label: String,
    protocol: String,
    state: Mutex<DataChannelState>,
    observer: Mutex<Option<Weak<dyn DataChannelObserver>>>,
    /// Number of `close()` calls received
    close_requests: AtomicUsize,
    bytes_received: AtomicU64,
    messages_received: AtomicU64,
}

impl LocalDataChannel {
    /// Creates a channel in the `connecting` state
    pub fn new(id: u16, label: impl Into<String>, protocol: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id,
            label: label.into(),
            protocol: protocol.into(),
            state: Mutex::new(DataChannelState::Connecting),
            observer: Mutex::new(None),
            close_requests: AtomicUsize::new(0),
            bytes_received: AtomicU64::new(0),
            messages_received: AtomicU64::new(0),
        })
    }

    /// Moves the channel to `state` and notifies the observer
    ///
    /// No transition rules are enforced here; the transport decides.
    pub fn set_state(&self, state: DataChannelState) {
        *lock(&self.state) = state;
        if let Some(observer) = self.observer() {
            observer.on_state_change();
        }
    }

    /// Delivers an inbound message to the observer
    pub fn deliver(&self, buffer: DataBuffer) {
        self.bytes_received
            .fetch_add(buffer.len() as u64, Ordering::SeqCst);
        self.messages_received.fetch_add(1, Ordering::SeqCst);
        if let Some(observer) = self.observer() {
            observer.on_message(buffer);
        }
    }

    /// Reports a change of the outgoing buffered amount
    pub fn buffered_amount_changed(&self, sent_data_size: u64) {
        if let Some(observer) = self.observer() {
            observer.on_buffered_amount_change(sent_data_size);
        }
    }

    /// Number of close requests received so far
    pub fn close_requests(&self) -> usize {
        self.close_requests.load(Ordering::SeqCst)
    }

    pub fn bytes_received(&self) -> u64 {
        self.bytes_received.load(Ordering::SeqCst)
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received.load(Ordering::SeqCst)
    }

    /// Whether a live observer is registered
    pub fn has_observer(&self) -> bool {
        self.observer().is_some()
    }

    /// Upgrades the observer outside of the lock so callbacks may re-enter.
    fn observer(&self) -> Option<Arc<dyn DataChannelObserver>> {
        let observer = lock(&self.observer).clone();
        observer.and_then(|weak| weak.upgrade())
    }
}

impl DataChannelHandle for LocalDataChannel {
    fn id(&self) -> u16 {
        self.id
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn protocol(&self) -> String {
        self.protocol.clone()
    }

    fn state(&self) -> DataChannelState {
        *lock(&self.state)
    }

    fn close(&self) {
        self.close_requests.fetch_add(1, Ordering::SeqCst);
        let mut state = lock(&self.state);
        match *state {
            DataChannelState::Open | DataChannelState::Connecting => {
                *state = DataChannelState::Closing;
            }
            _ => {}
        }
    }

    fn register_observer(&self, observer: Weak<dyn DataChannelObserver>) {
        *lock(&self.observer) = Some(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn DataChannelObserver>) {
        let mut registered = lock(&self.observer);
        if registered
            .as_ref()
            .is_some_and(|current| Weak::ptr_eq(current, observer))
        {
            *registered = None;
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        state_changes: AtomicUsize,
        messages: Mutex<Vec<DataBuffer>>,
        buffered: AtomicU64,
    }

    impl DataChannelObserver for CountingObserver {
        fn on_state_change(&self) {
            self.state_changes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_message(&self, buffer: DataBuffer) {
            self.messages.lock().unwrap().push(buffer);
        }

        fn on_buffered_amount_change(&self, sent_data_size: u64) {
            self.buffered.store(sent_data_size, Ordering::SeqCst);
        }
    }

    fn weak_observer(observer: &Arc<CountingObserver>) -> Weak<dyn DataChannelObserver> {
        let weak = Arc::downgrade(observer);
        let weak: Weak<dyn DataChannelObserver> = weak;
        weak
    }

    fn observed_channel() -> (Arc<LocalDataChannel>, Arc<CountingObserver>) {
        let channel = LocalDataChannel::new(3, "chat", "json");
        let observer = Arc::new(CountingObserver::default());
        channel.register_observer(weak_observer(&observer));
        (channel, observer)
    }

    #[test]
    fn test_channel_creation() {
        let channel = LocalDataChannel::new(7, "file-transfer", "");

        assert_eq!(channel.id(), 7);
        assert_eq!(channel.label(), "file-transfer");
        assert_eq!(channel.protocol(), "");
        assert_eq!(channel.state(), DataChannelState::Connecting);
        assert!(!channel.has_observer());
    }

    #[test]
    fn test_set_state_notifies_observer() {
        let (channel, observer) = observed_channel();

        channel.set_state(DataChannelState::Open);

        assert_eq!(channel.state(), DataChannelState::Open);
        assert_eq!(observer.state_changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deliver_counts_and_forwards() {
        let (channel, observer) = observed_channel();

        channel.deliver(DataBuffer::binary(vec![1, 2, 3]));
        channel.deliver(DataBuffer::text("hi"));

        assert_eq!(channel.bytes_received(), 5);
        assert_eq!(channel.messages_received(), 2);
        let messages = observer.messages.lock().unwrap();
        assert_eq!(messages[0].data(), &[1, 2, 3]);
        assert_eq!(messages[1].as_text(), Some("hi"));
    }

    #[test]
    fn test_buffered_amount_forwarded() {
        let (channel, observer) = observed_channel();
        channel.buffered_amount_changed(1024);
        assert_eq!(observer.buffered.load(Ordering::SeqCst), 1024);
    }

    #[test]
    fn test_close_moves_to_closing_without_events() {
        let (channel, observer) = observed_channel();
        channel.set_state(DataChannelState::Open);

        channel.close();

        assert_eq!(channel.state(), DataChannelState::Closing);
        assert_eq!(channel.close_requests(), 1);
        assert_eq!(observer.state_changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_keeps_terminal_state() {
        let channel = LocalDataChannel::new(0, "x", "");
        channel.set_state(DataChannelState::Closed);

        channel.close();

        assert_eq!(channel.state(), DataChannelState::Closed);
        assert_eq!(channel.close_requests(), 1);
    }

    #[test]
    fn test_unregister_stops_delivery() {
        let (channel, observer) = observed_channel();

        channel.unregister_observer(&weak_observer(&observer));
        channel.set_state(DataChannelState::Open);
        channel.deliver(DataBuffer::binary(vec![9]));

        assert!(!channel.has_observer());
        assert_eq!(observer.state_changes.load(Ordering::SeqCst), 0);
        assert!(observer.messages.lock().unwrap().is_empty());
        // Still counted: the transport received it.
        assert_eq!(channel.bytes_received(), 1);
    }

    #[test]
    fn test_unregister_ignores_stale_observer() {
        let (channel, first) = observed_channel();
        let second = Arc::new(CountingObserver::default());
        channel.register_observer(weak_observer(&second));

        channel.unregister_observer(&weak_observer(&first));
        channel.set_state(DataChannelState::Open);

        assert!(channel.has_observer());
        assert_eq!(first.state_changes.load(Ordering::SeqCst), 0);
        assert_eq!(second.state_changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_observer_is_not_upgraded() {
        let (channel, observer) = observed_channel();
        drop(observer);

        assert!(!channel.has_observer());
        channel.set_state(DataChannelState::Open);
    }
}
