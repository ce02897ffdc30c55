//! Message normalization for the logging facade.
//!
//! Every text-accepting facade method resolves its argument to a [`Message`]
//! before any formatting logic runs. Callers pass strings directly, or raw
//! byte buffers that decode to their UTF-8 reading first; positional
//! substitution is `format!`'s job and happens before the call.

use std::borrow::Cow;

/// A resolved log message. Never mutated after construction.
///
/// # Example
///
/// ```rust
/// use callout::Message;
///
/// let from_str = Message::from("foo");
/// let from_bytes = Message::from(&b"foo"[..]);
/// assert_eq!(from_str.as_str(), from_bytes.as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Returns the resolved text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the message, returning the resolved text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True when the resolved text is empty (the "no message" form).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message(s)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message(s.to_string())
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Message(s.clone())
    }
}

impl From<Cow<'_, str>> for Message {
    fn from(s: Cow<'_, str>) -> Self {
        Message(s.into_owned())
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Message(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Message::from(bytes.as_slice())
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(bytes: &[u8; N]) -> Self {
        Message::from(bytes.as_slice())
    }
}
