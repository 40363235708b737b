//! Shared listener doubles for the integration tests

#![allow(dead_code)]

use data_consumer::channel::LocalDataChannel;
use data_consumer::{
    DataBuffer, DataChannelHandle, DataConsumer, DataConsumerListener, DataConsumerSessionListener,
};
use std::sync::{Arc, Mutex, Weak};

/// Notification seen by a listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Connecting(String),
    Open(String),
    Closing(String),
    Close(String),
    Message(String, Vec<u8>),
    TransportClose(String),
    SessionClose(String),
}

#[derive(Default)]
pub struct AppRecorder {
    seen: Mutex<Vec<Seen>>,
}

impl AppRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn weak(self: &Arc<Self>) -> Weak<dyn DataConsumerListener> {
        let weak = Arc::downgrade(self);
        weak
    }

    fn record(&self, seen: Seen) {
        self.seen.lock().unwrap().push(seen);
    }
}

impl DataConsumerListener for AppRecorder {
    fn on_connecting(&self, consumer: &DataConsumer) {
        self.record(Seen::Connecting(consumer.id().to_string()));
    }

    fn on_open(&self, consumer: &DataConsumer) {
        self.record(Seen::Open(consumer.id().to_string()));
    }

    fn on_closing(&self, consumer: &DataConsumer) {
        self.record(Seen::Closing(consumer.id().to_string()));
    }

    fn on_close(&self, consumer: &DataConsumer) {
        self.record(Seen::Close(consumer.id().to_string()));
    }

    fn on_message(&self, consumer: &DataConsumer, buffer: DataBuffer) {
        self.record(Seen::Message(consumer.id().to_string(), buffer.into_inner()));
    }

    fn on_transport_close(&self, consumer: &DataConsumer) {
        self.record(Seen::TransportClose(consumer.id().to_string()));
    }
}

#[derive(Default)]
pub struct SessionRecorder {
    seen: Mutex<Vec<Seen>>,
}

impl SessionRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn weak(self: &Arc<Self>) -> Weak<dyn DataConsumerSessionListener> {
        let weak = Arc::downgrade(self);
        weak
    }
}

impl DataConsumerSessionListener for SessionRecorder {
    fn on_close(&self, consumer: &DataConsumer) {
        self.seen
            .lock()
            .unwrap()
            .push(Seen::SessionClose(consumer.id().to_string()));
    }
}

pub fn handle(channel: &Arc<LocalDataChannel>) -> Arc<dyn DataChannelHandle> {
    channel.clone()
}
