//! SCTP stream parameters

/// Negotiated description of the SCTP stream behind a data consumer.
///
/// The consumer stores and returns these untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SctpStreamParameters {
    /// SCTP stream id
    pub stream_id: u16,
    /// Whether messages are delivered in order
    pub ordered: bool,
    /// Maximum lifetime in milliseconds (None = reliable)
    pub max_packet_life_time: Option<u16>,
    /// Maximum number of retransmissions (None = reliable)
    pub max_retransmits: Option<u16>,
}

impl SctpStreamParameters {
    /// Reliable ordered stream
    pub fn reliable(stream_id: u16) -> Self {
        Self {
            stream_id,
            ordered: true,
            max_packet_life_time: None,
            max_retransmits: None,
        }
    }

    /// Unordered stream giving up after `max_retransmits` attempts
    pub fn unreliable(stream_id: u16, max_retransmits: u16) -> Self {
        Self {
            stream_id,
            ordered: false,
            max_packet_life_time: None,
            max_retransmits: Some(max_retransmits),
        }
    }

    pub fn is_reliable(&self) -> bool {
        self.max_packet_life_time.is_none() && self.max_retransmits.is_none()
    }
}
