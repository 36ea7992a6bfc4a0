//! Immutable saved state

use chrono::{DateTime, Utc};
use rig_core::Computer;
use serde::Serialize;

/// A point-in-time copy of a [`Computer`].
///
/// The copy is owned by the snapshot and never exposed mutably, so neither
/// the source configuration nor anything restored from it can change it.
#[derive(Debug, Clone, Serialize)]
pub struct ComputerSnapshot {
    state: Computer,
    created_at: DateTime<Utc>,
}

impl ComputerSnapshot {
    pub(crate) fn capture(computer: &Computer) -> Self {
        Self {
            state: computer.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &Computer {
        &self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
