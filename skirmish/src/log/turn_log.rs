use serde::Serialize;

use crate::log::TurnEvent;

/// The events of the most recently resolved turn.
///
/// The log only covers one turn: it is cleared at the start of every resolution. Callers that want
/// a full transcript must archive the log after each turn.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TurnLog {
    events: Vec<TurnEvent>,
}

impl TurnLog {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new event to the log.
    pub(crate) fn push(&mut self, event: TurnEvent) {
        self.events.push(event)
    }

    /// Clears the log for a new turn.
    pub(crate) fn clear(&mut self) {
        self.events.clear()
    }

    /// Returns an iterator over all events, in order.
    pub fn events(&self) -> impl Iterator<Item = &TurnEvent> {
        self.events.iter()
    }

    /// Returns an iterator over the human-readable rendering of each event.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(|event| event.to_string())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
