//! `Edge` — one stored arc with its weight channels and optional payload.

use core::fmt;

use super::weight::{Weight, DEFAULT_CHANNEL};
use crate::error::{GraphError, Result};

/// A directed arc `from -> to`.
///
/// The weight list is never empty: the [`DEFAULT_CHANNEL`] entry is created
/// with the edge and cannot be removed. Further channels keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<I, P = ()> {
    from: I,
    to: I,
    payload: Option<P>,
    weights: Vec<Weight>,
}

impl<I, P> Edge<I, P> {
    /// Creates an arc whose default channel holds `value`.
    pub fn new(from: I, to: I, value: f64) -> Self {
        Self {
            from,
            to,
            payload: None,
            weights: vec![Weight::default_channel(value)],
        }
    }

    /// Creates an arc from a list of channels.
    ///
    /// The default channel starts at `1.0` unless the list overrides it; a
    /// channel named twice keeps its last value.
    pub fn with_weights<W>(from: I, to: I, weights: W) -> Self
    where
        W: IntoIterator<Item = Weight>,
    {
        let mut edge = Self::new(from, to, 1.0);
        for weight in weights {
            edge.set_weight(&weight.identifier, weight.value);
        }
        edge
    }

    /// Attaches an opaque payload.
    #[must_use]
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Source identifier.
    #[inline(always)]
    pub fn from(&self) -> &I {
        &self.from
    }

    /// Destination identifier.
    #[inline(always)]
    pub fn to(&self) -> &I {
        &self.to
    }

    /// The payload, if one was attached.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Mutable access to the payload slot.
    pub fn payload_mut(&mut self) -> &mut Option<P> {
        &mut self.payload
    }

    /// All channels in insertion order, default first.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Value of the named channel.
    pub fn weight(&self, channel: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.identifier == channel)
            .map(|w| w.value)
    }

    /// Value of the default channel.
    pub fn default_weight(&self) -> f64 {
        self.weight(DEFAULT_CHANNEL).unwrap_or_default()
    }

    /// Returns `true` if the named channel is present.
    pub fn has_weight(&self, channel: &str) -> bool {
        self.weights.iter().any(|w| w.identifier == channel)
    }

    /// Sum over every channel.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.value).sum()
    }

    /// Updates the named channel, appending it if absent.
    ///
    /// Returns the previous value.
    pub fn set_weight(&mut self, channel: &str, value: f64) -> Option<f64> {
        match self.weights.iter_mut().find(|w| w.identifier == channel) {
            Some(w) => Some(core::mem::replace(&mut w.value, value)),
            None => {
                self.weights.push(Weight::new(channel, value));
                None
            }
        }
    }

    /// Drops the named channel and returns its value.
    ///
    /// The default channel is rejected with [`GraphError::InvalidOperation`].
    pub fn remove_weight(&mut self, channel: &str) -> Result<Option<f64>> {
        if channel == DEFAULT_CHANNEL {
            return Err(GraphError::InvalidOperation(
                "the default weight channel cannot be removed".into(),
            ));
        }
        Ok(self
            .weights
            .iter()
            .position(|w| w.identifier == channel)
            .map(|idx| self.weights.remove(idx).value))
    }

    /// Reverses the arc, keeping weights and payload.
    pub(crate) fn mirrored(&self) -> Self
    where
        I: Clone,
        P: Clone,
    {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            payload: self.payload.clone(),
            weights: self.weights.clone(),
        }
    }
}

impl<I: fmt::Display, P> fmt::Display for Edge<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (", self.from, self.to)?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{w}")?;
        }
        f.write_str(")")
    }
}
