//! Session-side consumer bookkeeping
//!
//! A [`ConsumerSession`] owns the consumers created over one transport. It is
//! their session listener: a consumer closed by the application removes itself
//! here, and tearing the session down closes every remaining consumer through
//! [`DataConsumer::transport_closed`].

use crate::channel::DataChannelHandle;
use crate::consumer::{
    DataConsumer, DataConsumerListener, DataConsumerOptions, DataConsumerSessionListener,
};
use crate::error::{DataConsumerError, Result};
use logging::Logger;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug, Default)]
struct SessionState {
    consumers: HashMap<String, Arc<DataConsumer>>,
    closed: bool,
}

/// Owner of the data consumers of one transport
#[derive(Debug)]
pub struct ConsumerSession {
    state: Mutex<SessionState>,
    logger: Logger,
}

impl ConsumerSession {
    pub fn new(logger: &Logger) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(SessionState::default()),
            logger: logger.for_component("ConsumerSession"),
        })
    }

    /// Creates a consumer over `channel` and starts tracking it
    ///
    /// The session registers itself as the consumer's session listener.
    ///
    /// # Errors
    /// * [`DataConsumerError::SessionClosed`] after [`ConsumerSession::transport_closed`]
    /// * [`DataConsumerError::DuplicateId`] if the id is already tracked
    pub fn consume(
        self: &Arc<Self>,
        listener: Weak<dyn DataConsumerListener>,
        options: DataConsumerOptions,
        channel: Arc<dyn DataChannelHandle>,
    ) -> Result<Arc<DataConsumer>> {
        let mut state = self.lock_state();
        if state.closed {
            return Err(DataConsumerError::SessionClosed);
        }
        if state.consumers.contains_key(&options.id) {
            return Err(DataConsumerError::DuplicateId(options.id));
        }

        let session_listener = Arc::downgrade(self);
        let session_listener: Weak<dyn DataConsumerSessionListener> = session_listener;
        let consumer = DataConsumer::new(listener, session_listener, options, channel, &self.logger);
        state
            .consumers
            .insert(consumer.id().to_string(), Arc::clone(&consumer));

        self.logger.info(&format!(
            "Tracking data consumer {} ({} total)",
            consumer.id(),
            state.consumers.len()
        ));
        Ok(consumer)
    }

    pub fn get(&self, id: &str) -> Option<Arc<DataConsumer>> {
        self.lock_state().consumers.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_state().consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().consumers.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.lock_state().closed
    }

    /// Tears the session down
    ///
    /// Every tracked consumer is closed with [`DataConsumer::transport_closed`]
    /// and released. Later calls do nothing.
    pub fn transport_closed(&self) {
        let consumers: Vec<Arc<DataConsumer>> = {
            let mut state = self.lock_state();
            if state.closed {
                return;
            }
            state.closed = true;
            state.consumers.drain().map(|(_, consumer)| consumer).collect()
        };

        self.logger.info(&format!(
            "Transport closed, closing {} data consumer(s)",
            consumers.len()
        ));
        // Outside the lock: application listeners may call back into the session.
        for consumer in consumers {
            consumer.transport_closed();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DataConsumerSessionListener for ConsumerSession {
    fn on_close(&self, consumer: &DataConsumer) {
        if self.lock_state().consumers.remove(consumer.id()).is_some() {
            self.logger
                .debug(&format!("Data consumer {} removed", consumer.id()));
        }
    }
}
