//! Data consumer implementation

use super::app_data::AppData;
use super::listener::{DataConsumerListener, DataConsumerSessionListener};
use super::parameters::SctpStreamParameters;
use crate::channel::{DataBuffer, DataChannelHandle, DataChannelObserver, DataChannelState};
use logging::Logger;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

const LOG_COMPONENT: &str = "DataConsumer";

/// Everything a data consumer is built from, apart from the channel itself
#[derive(Debug, Clone)]
pub struct DataConsumerOptions {
    pub id: String,
    pub data_producer_id: String,
    pub sctp_stream_parameters: SctpStreamParameters,
    pub app_data: AppData,
}

impl DataConsumerOptions {
    pub fn new(
        id: impl Into<String>,
        data_producer_id: impl Into<String>,
        sctp_stream_parameters: SctpStreamParameters,
    ) -> Self {
        Self {
            id: id.into(),
            data_producer_id: data_producer_id.into(),
            sctp_stream_parameters,
            app_data: AppData::default(),
        }
    }

    pub fn with_app_data(mut self, app_data: AppData) -> Self {
        self.app_data = app_data;
        self
    }
}

/// Receiving end of one data channel.
///
/// Translates the channel's events into [`DataConsumerListener`] calls and
/// owns the closing protocol: the consumer is closed either by the application
/// ([`DataConsumer::close`], reported to the session) or by the session
/// ([`DataConsumer::transport_closed`], reported to the application). Whichever
/// comes first wins; the other becomes a no-op.
pub struct DataConsumer {
    id: String,
    data_producer_id: String,
    sctp_stream_parameters: SctpStreamParameters,
    app_data: AppData,
    /// Shared with the transport, which delivers events through it
    channel: Arc<dyn DataChannelHandle>,
    /// Set once by `close` or `transport_closed`, never reset
    closed: AtomicBool,
    /// Serializes the closed check-and-set with the channel close request
    close_gate: Mutex<()>,
    /// This consumer as registered on the channel
    observer: Weak<dyn DataChannelObserver>,
    listener: Weak<dyn DataConsumerListener>,
    session_listener: Weak<dyn DataConsumerSessionListener>,
    logger: Logger,
}

impl DataConsumer {
    /// Creates a consumer and registers it as the channel's observer
    ///
    /// # Arguments
    /// * `listener` - Application listener, held weakly
    /// * `session_listener` - Session listener, held weakly
    /// * `options` - Ids, stream parameters and app data
    /// * `channel` - Live channel handle, normally still `connecting`
    /// * `logger` - Parent logger; the consumer logs under its own component
    ///
    /// A channel that already moved past `connecting` is accepted; the
    /// listener simply misses the earlier state notifications.
    pub fn new(
        listener: Weak<dyn DataConsumerListener>,
        session_listener: Weak<dyn DataConsumerSessionListener>,
        options: DataConsumerOptions,
        channel: Arc<dyn DataChannelHandle>,
        logger: &Logger,
    ) -> Arc<Self> {
        let logger = logger.for_component(LOG_COMPONENT);

        let state = channel.state();
        if state != DataChannelState::Connecting {
            logger.warn(&format!(
                "Data consumer {} attached to channel {} already in state {}",
                options.id,
                channel.id(),
                state
            ));
        }

        let consumer = Arc::new_cyclic(|weak: &Weak<Self>| {
            let observer: Weak<dyn DataChannelObserver> = weak.clone();
            Self {
                id: options.id,
                data_producer_id: options.data_producer_id,
                sctp_stream_parameters: options.sctp_stream_parameters,
                app_data: options.app_data,
                channel,
                closed: AtomicBool::new(false),
                close_gate: Mutex::new(()),
                observer,
                listener,
                session_listener,
                logger,
            }
        });

        consumer
            .channel
            .register_observer(consumer.observer.clone());

        consumer.logger.debug(&format!(
            "Data consumer {} created [producer: {}, stream: {}]",
            consumer.id, consumer.data_producer_id, consumer.sctp_stream_parameters.stream_id
        ));

        consumer
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the data producer this consumer receives from
    pub fn data_producer_id(&self) -> &str {
        &self.data_producer_id
    }

    pub fn sctp_stream_parameters(&self) -> &SctpStreamParameters {
        &self.sctp_stream_parameters
    }

    pub fn app_data(&self) -> &AppData {
        &self.app_data
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Transport-assigned stream id, as text
    pub fn local_id(&self) -> String {
        self.channel.id().to_string()
    }

    /// Live ready state of the channel
    pub fn ready_state(&self) -> DataChannelState {
        self.channel.state()
    }

    pub fn label(&self) -> String {
        self.channel.label()
    }

    pub fn protocol(&self) -> String {
        self.channel.protocol()
    }

    /// Closes the consumer on behalf of the application
    ///
    /// Asks the channel to close and tells the session listener so it can drop
    /// the consumer. The application listener is not called. No-op once closed.
    pub fn close(&self) {
        self.logger.trace(&format!("close() [id: {}]", self.id));

        if !self.close_channel() {
            return;
        }
        self.logger
            .debug(&format!("Data consumer {} closed by application", self.id));

        match self.session_listener.upgrade() {
            Some(session) => session.on_close(self),
            None => self.logger.debug("Session listener already dropped"),
        }
    }

    /// Closes the consumer because the owning transport/session went away
    ///
    /// Asks the channel to close and tells the application listener. The session
    /// listener is not called. No-op once closed.
    pub fn transport_closed(&self) {
        self.logger
            .trace(&format!("transport_closed() [id: {}]", self.id));

        if !self.close_channel() {
            return;
        }
        self.logger
            .debug(&format!("Data consumer {} closed by transport", self.id));

        if let Some(listener) = self.listener() {
            listener.on_transport_close(self);
        }
    }

    /// Flips `closed` and requests the channel close under the close gate.
    ///
    /// Returns `false` if the consumer was already closed. `is_closed` reads
    /// the flag without the gate, so it never waits on `channel.close()`.
    /// Listeners are notified by the caller after the gate is released, so
    /// they may call back into the consumer.
    fn close_channel(&self) -> bool {
        let _gate = self
            .close_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.closed.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.channel.close();
        true
    }

    fn listener(&self) -> Option<Arc<dyn DataConsumerListener>> {
        let listener = self.listener.upgrade();
        if listener.is_none() {
            self.logger.debug("Application listener already dropped");
        }
        listener
    }
}

impl DataChannelObserver for DataConsumer {
    fn on_state_change(&self) {
        let state = self.channel.state();
        self.logger.trace(&format!(
            "on_state_change() [id: {}, state: {}]",
            self.id, state
        ));

        if let DataChannelState::Unrecognized(value) = state {
            // Tolerated: the transport may grow states this consumer doesn't know.
            self.logger.warn(&format!(
                "Ignoring unknown channel state {} for data consumer {}",
                value, self.id
            ));
            return;
        }

        let Some(listener) = self.listener() else {
            return;
        };
        match state {
            DataChannelState::Connecting => listener.on_connecting(self),
            DataChannelState::Open => listener.on_open(self),
            DataChannelState::Closing => listener.on_closing(self),
            DataChannelState::Closed => listener.on_close(self),
            DataChannelState::Unrecognized(_) => {}
        }
    }

    fn on_message(&self, buffer: DataBuffer) {
        self.logger.trace(&format!(
            "on_message() [id: {}, size: {}]",
            self.id,
            buffer.len()
        ));

        if let Some(listener) = self.listener() {
            listener.on_message(self, buffer);
        }
    }

    fn on_buffered_amount_change(&self, sent_data_size: u64) {
        // Only meaningful on the sending side.
        self.logger.trace(&format!(
            "on_buffered_amount_change() [id: {}, size: {}]",
            self.id, sent_data_size
        ));
    }
}

impl Drop for DataConsumer {
    fn drop(&mut self) {
        self.channel.unregister_observer(&self.observer);
    }
}

impl fmt::Debug for DataConsumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataConsumer")
            .field("id", &self.id)
            .field("data_producer_id", &self.data_producer_id)
            .field("sctp_stream_parameters", &self.sctp_stream_parameters)
            .field("local_id", &self.channel.id())
            .field("closed", &self.is_closed())
            .finish()
    }
}
