//! Inbound message unit

/// One message as delivered by the transport.
///
/// Carries the payload and whether the sender marked it as binary or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBuffer {
    data: Vec<u8>,
    binary: bool,
}

impl DataBuffer {
    pub fn new(data: Vec<u8>, binary: bool) -> Self {
        Self { data, binary }
    }

    /// Binary message
    pub fn binary(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data.into(), true)
    }

    /// Text message (UTF-8)
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text.into().into_bytes(), false)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_binary(&self) -> bool {
        self.binary
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Payload as text, if this is a text message holding valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        if self.binary {
            return None;
        }
        std::str::from_utf8(&self.data).ok()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
