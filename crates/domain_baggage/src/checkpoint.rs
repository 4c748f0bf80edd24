//! Checkpoint scans and the per-bag route log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CheckpointId;
use crate::error::BaggageError;

/// A timestamped scan of a bag at a station
///
/// Checkpoints are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    id: CheckpointId,
    name: String,
    recorded_at: DateTime<Utc>,
}

impl Checkpoint {
    /// Creates a checkpoint with a fresh identifier
    pub fn new(name: impl Into<String>, recorded_at: DateTime<Utc>) -> Result<Self, BaggageError> {
        Self::with_id(CheckpointId::generate(), name, recorded_at)
    }

    /// Creates a checkpoint captured by an external scanner with its own id,
    /// e.g. a station-issued `"S01"`
    pub fn with_id(
        id: CheckpointId,
        name: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, BaggageError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(BaggageError::EmptyCheckpointName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            recorded_at,
        })
    }

    pub fn id(&self) -> &CheckpointId {
        &self.id
    }

    /// Station label, e.g. "Security"
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Append-only, time-ordered route of a single bag
///
/// Timestamps never decrease along the route. Scans created here are clamped
/// to the previous scan's time when the clock lags; scans recorded elsewhere
/// are rejected if they would go backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointLog {
    entries: Vec<Checkpoint>,
}

impl CheckpointLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and appends a checkpoint captured at `now`
    pub fn append(&mut self, name: &str, now: DateTime<Utc>) -> Result<Checkpoint, BaggageError> {
        let recorded_at = match self.last() {
            Some(last) if last.recorded_at > now => last.recorded_at,
            _ => now,
        };
        let checkpoint = Checkpoint::new(name, recorded_at)?;
        self.entries.push(checkpoint.clone());
        Ok(checkpoint)
    }

    /// Appends a checkpoint that was captured elsewhere
    pub fn append_recorded(&mut self, checkpoint: Checkpoint) -> Result<(), BaggageError> {
        if checkpoint.name.trim().is_empty() {
            return Err(BaggageError::EmptyCheckpointName);
        }
        if self.entries.iter().any(|c| c.id == checkpoint.id) {
            return Err(BaggageError::DuplicateCheckpoint(checkpoint.id));
        }
        if let Some(last) = self.last() {
            if checkpoint.recorded_at < last.recorded_at {
                return Err(BaggageError::OutOfOrderCheckpoint {
                    last: last.recorded_at,
                    attempted: checkpoint.recorded_at,
                });
            }
        }
        self.entries.push(checkpoint);
        Ok(())
    }

    /// Full ordered route
    pub fn history(&self) -> &[Checkpoint] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Checkpoint> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
