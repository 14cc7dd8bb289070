//! The station store: the working set every view is derived from.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::Station;

/// Identifies one issued fetch. Later fetches carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

/// Issues fetch tokens and remembers the newest one whose result was applied.
///
/// Responses can land out of order; a result is accepted only if it was
/// issued after the one currently shown.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    issued: u64,
    applied: u64,
}

impl FetchSequence {
    /// Issue the token for a new fetch.
    pub fn issue(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Record that `token`'s result is about to be applied.
    ///
    /// Returns `false` for a result older than the one already applied.
    pub fn accept(&mut self, token: FetchToken) -> bool {
        if token.0 <= self.applied {
            return false;
        }
        self.applied = token.0;
        true
    }
}

/// The last fetched station list.
///
/// The list is replaced wholesale by every accepted fetch and never edited
/// in place.
#[derive(Debug, Default)]
pub struct StationStore {
    stations: Vec<Station>,
    sequence: FetchSequence,
    updated_at: Option<DateTime<Local>>,
}

impl StationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a station fetch about to be sent.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.sequence.issue()
    }

    /// Replace the stations with a fetch result.
    ///
    /// Returns `false`, leaving the store untouched, when a newer fetch has
    /// already been applied.
    pub fn replace(&mut self, token: FetchToken, stations: Vec<Station>) -> bool {
        if !self.sequence.accept(token) {
            debug!(?token, "Discarding stale station result");
            return false;
        }
        self.stations = stations;
        self.updated_at = Some(Local::now());
        true
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// When the current stations were applied.
    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }
}
