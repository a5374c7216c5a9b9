//! Player name list for the bottle spin
//!
//! The roster owns the names; views never mutate them directly. Every change
//! publishes a fresh immutable snapshot on a watch channel so the list pane
//! and the circular layout can redraw independently.

use shared::PlayerName;
use std::sync::Arc;
use tokio::sync::watch;

pub type NamesSnapshot = Arc<[PlayerName]>;

pub struct PlayerRoster {
    names: Vec<PlayerName>,
    changes: watch::Sender<NamesSnapshot>,
}

impl Default for PlayerRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRoster {
    pub fn new() -> Self {
        let empty: NamesSnapshot = Arc::from(Vec::new());
        let (changes, _) = watch::channel(empty);
        Self {
            names: Vec::new(),
            changes,
        }
    }

    /// Split comma-separated text into valid names, dropping blank pieces
    pub fn parse_names(raw: &str) -> Vec<PlayerName> {
        raw.split(',')
            .filter_map(|piece| PlayerName::new(piece).ok())
            .collect()
    }

    /// Append every name found in `raw`, in order; returns how many were added
    pub fn add_names(&mut self, raw: &str) -> usize {
        let parsed = Self::parse_names(raw);
        if parsed.is_empty() {
            tracing::debug!("No names found in input, roster unchanged");
            return 0;
        }

        let added = parsed.len();
        self.names.extend(parsed);
        self.publish();
        tracing::info!(added, total = self.names.len(), "Players added");
        added
    }

    /// Remove the name at `index`; out-of-range indices are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<PlayerName> {
        if index >= self.names.len() {
            tracing::debug!(index, total = self.names.len(), "Remove ignored, index out of range");
            return None;
        }

        let removed = self.names.remove(index);
        self.publish();
        tracing::info!(index, name = %removed, total = self.names.len(), "Player removed");
        Some(removed)
    }

    pub fn clear(&mut self) {
        if self.names.is_empty() {
            return;
        }
        let cleared = self.names.len();
        self.names.clear();
        self.publish();
        tracing::info!(cleared, "Players cleared");
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    pub fn snapshot(&self) -> NamesSnapshot {
        Arc::from(self.names.as_slice())
    }

    /// Receiver that observes every future change
    pub fn subscribe(&self) -> watch::Receiver<NamesSnapshot> {
        self.changes.subscribe()
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}
