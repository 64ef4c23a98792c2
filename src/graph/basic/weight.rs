//! Named weight channels carried by edges.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the channel every edge is guaranteed to carry.
pub const DEFAULT_CHANNEL: &str = "default";

/// One named numeric attribute of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Channel name.
    pub identifier: String,
    /// Channel value.
    pub value: f64,
}

impl Weight {
    /// Creates a weight on the named channel.
    pub fn new(identifier: impl Into<String>, value: f64) -> Self {
        Self {
            identifier: identifier.into(),
            value,
        }
    }

    /// Creates a weight on [`DEFAULT_CHANNEL`].
    pub fn default_channel(value: f64) -> Self {
        Self::new(DEFAULT_CHANNEL, value)
    }

    /// Returns `true` if this is the reserved default channel.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.identifier == DEFAULT_CHANNEL
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.identifier, self.value)
    }
}
