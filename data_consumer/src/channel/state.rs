//! Data channel ready state

use std::fmt;

/// Ready state as reported by the transport.
///
/// Transports report a small integer; values outside the four known states
/// are kept as [`DataChannelState::Unrecognized`] instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataChannelState {
    /// Channel is being opened (waiting for ACK)
    Connecting,
    /// Channel is open and ready for data
    Open,
    /// Channel is closing
    Closing,
    /// Channel is closed
    Closed,
    /// Raw value outside the known range
    Unrecognized(u8),
}

impl DataChannelState {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => DataChannelState::Connecting,
            1 => DataChannelState::Open,
            2 => DataChannelState::Closing,
            3 => DataChannelState::Closed,
            other => DataChannelState::Unrecognized(other),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            DataChannelState::Connecting => 0,
            DataChannelState::Open => 1,
            DataChannelState::Closing => 2,
            DataChannelState::Closed => 3,
            DataChannelState::Unrecognized(value) => *value,
        }
    }

    /// Lowercase name, `"unknown"` for unrecognized values.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataChannelState::Connecting => "connecting",
            DataChannelState::Open => "open",
            DataChannelState::Closing => "closing",
            DataChannelState::Closed => "closed",
            DataChannelState::Unrecognized(_) => "unknown",
        }
    }

    /// Closing or closed.
    pub fn is_terminating(&self) -> bool {
        matches!(self, DataChannelState::Closing | DataChannelState::Closed)
    }
}

impl fmt::Display for DataChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataChannelState::Unrecognized(value) => write!(f, "unknown({})", value),
            known => f.write_str(known.as_str()),
        }
    }
}

impl From<u8> for DataChannelState {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(DataChannelState::from_u8(0), DataChannelState::Connecting);
        assert_eq!(DataChannelState::from_u8(1), DataChannelState::Open);
        assert_eq!(DataChannelState::from_u8(2), DataChannelState::Closing);
        assert_eq!(DataChannelState::from_u8(3), DataChannelState::Closed);
    }

    #[test]
    fn test_unrecognized_value_is_preserved() {
        let state = DataChannelState::from(42);
        assert_eq!(state, DataChannelState::Unrecognized(42));
        assert_eq!(state.as_u8(), 42);
        assert_eq!(state.as_str(), "unknown");
        assert_eq!(state.to_string(), "unknown(42)");
    }

    #[test]
    fn test_display() {
        assert_eq!(DataChannelState::Open.to_string(), "open");
        assert_eq!(DataChannelState::Closing.to_string(), "closing");
    }

    #[test]
    fn test_is_terminating() {
        assert!(!DataChannelState::Connecting.is_terminating());
        assert!(!DataChannelState::Open.is_terminating());
        assert!(DataChannelState::Closing.is_terminating());
        assert!(DataChannelState::Closed.is_terminating());
    }
}
