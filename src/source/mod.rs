//! Game stream collaborator interfaces
//!
//! The engine consumes an ordered sequence of raw game records. Retrieval,
//! parsing, and date-sorting are the collaborator's job; these traits are
//! the seam where a finished, merged stream is handed over.

use crate::error::Result;
use crate::types::RawGameRecord;

/// Source of historical game records, ordered by date
///
/// Finite and restartable: each call to [`game_records`] yields the full
/// sequence from the start.
///
/// [`game_records`]: GameLogSource::game_records
pub trait GameLogSource: Send + Sync {
    fn game_records(&self) -> Result<Box<dyn Iterator<Item = RawGameRecord> + '_>>;
}

/// Source of the current season's schedule results, ordered by date
pub trait ScheduleProvider: Send + Sync {
    fn season_records(&self) -> Result<Box<dyn Iterator<Item = RawGameRecord> + '_>>;
}

/// Chain a historical log and a season schedule into one record stream
///
/// Both inputs must already be date-sorted with the schedule following the
/// log; the simulator's ordering guard rejects anything else.
pub fn merged_records<'a>(
    log: &'a dyn GameLogSource,
    schedule: &'a dyn ScheduleProvider,
) -> Result<impl Iterator<Item = RawGameRecord> + 'a> {
    Ok(log.game_records()?.chain(schedule.season_records()?))
}

/// In-memory record source for tests and replays
#[derive(Debug, Clone, Default)]
pub struct VecGameLogSource {
    records: Vec<RawGameRecord>,
}

impl VecGameLogSource {
    pub fn new(records: Vec<RawGameRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GameLogSource for VecGameLogSource {
    fn game_records(&self) -> Result<Box<dyn Iterator<Item = RawGameRecord> + '_>> {
        Ok(Box::new(self.records.iter().cloned()))
    }
}

impl ScheduleProvider for VecGameLogSource {
    fn season_records(&self) -> Result<Box<dyn Iterator<Item = RawGameRecord> + '_>> {
        Ok(Box::new(self.records.iter().cloned()))
    }
}
