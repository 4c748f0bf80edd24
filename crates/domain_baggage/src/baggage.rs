//! Bag aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BagTag, PaxId, Weight};
use crate::checkpoint::{Checkpoint, CheckpointLog};
use crate::error::BaggageError;

/// Status reported for a bag that has not been scanned yet
pub const STATUS_CREATED: &str = "Created";

/// A checked bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    /// Unique bag tag
    pub tag: BagTag,
    /// Weight at check-in, immutable afterwards
    pub weight: Weight,
    /// Owning passenger; resolved through the passenger directory
    pub owner: PaxId,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
    route: CheckpointLog,
}

impl Baggage {
    /// Creates an unscanned bag
    pub fn new(tag: BagTag, weight: Weight, owner: PaxId, registered_at: DateTime<Utc>) -> Self {
        Self {
            tag,
            weight,
            owner,
            registered_at,
            route: CheckpointLog::new(),
        }
    }

    /// Current status: the last checkpoint's name, or `Created`
    pub fn status(&self) -> &str {
        self.route
            .last()
            .map(Checkpoint::name)
            .unwrap_or(STATUS_CREATED)
    }

    /// Records a scan at `name`
    pub fn record_scan(&mut self, name: &str, now: DateTime<Utc>) -> Result<Checkpoint, BaggageError> {
        self.route.append(name, now)
    }

    /// Records a scan captured by an external system
    pub fn record_checkpoint(&mut self, checkpoint: Checkpoint) -> Result<(), BaggageError> {
        self.route.append_recorded(checkpoint)
    }

    /// Ordered route history
    pub fn route(&self) -> &[Checkpoint] {
        self.route.history()
    }
}
