//! Rating persistence boundary
//!
//! The engine hands its outputs — the ordered result sequence and the final
//! ledger snapshot — to a store. What durable form they take (CSV, database
//! rows, object storage) is entirely the store's concern.

use crate::error::Result;
use crate::types::{GameResult, RatingSnapshot};
use std::sync::RwLock;

/// Trait for persisting run outputs
pub trait RatingStore: Send + Sync {
    /// Persist the ordered per-game results of a run
    fn store_results(&self, results: &[GameResult]) -> Result<()>;

    /// Persist a ledger snapshot
    fn store_snapshot(&self, snapshot: &RatingSnapshot) -> Result<()>;
}

/// In-memory store for tests and development
///
/// Records everything handed to it so tests can assert on persisted output.
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    results: RwLock<Vec<GameResult>>,
    snapshots: RwLock<Vec<RatingSnapshot>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_results(&self) -> Vec<GameResult> {
        self.results.read().unwrap().clone()
    }

    pub fn stored_snapshots(&self) -> Vec<RatingSnapshot> {
        self.snapshots.read().unwrap().clone()
    }
}

impl RatingStore for InMemoryRatingStore {
    fn store_results(&self, results: &[GameResult]) -> Result<()> {
        self.results.write().unwrap().extend_from_slice(results);
        Ok(())
    }

    fn store_snapshot(&self, snapshot: &RatingSnapshot) -> Result<()> {
        self.snapshots.write().unwrap().push(snapshot.clone());
        Ok(())
    }
}
