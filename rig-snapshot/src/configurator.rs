//! Current configuration holder with save/restore.

use crate::snapshot::ComputerSnapshot;
use rig_core::{Computer, Result, RigError};
use rig_messages::MESSAGES;
use tracing::debug;

/// Holds the configuration currently being worked on.
///
/// Only one configuration is current at a time and there is no history:
/// `restore` simply overwrites whatever is current.
#[derive(Debug, Default)]
pub struct ComputerConfigurator {
    current: Option<Computer>,
}

impl ComputerConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current configuration.
    pub fn set_computer(&mut self, computer: Computer) {
        debug!(computer = %computer, "current configuration replaced");
        self.current = Some(computer);
    }

    /// Drop the current configuration, leaving nothing to save.
    pub fn clear_computer(&mut self) {
        self.current = None;
    }

    pub fn computer(&self) -> Option<&Computer> {
        self.current.as_ref()
    }

    /// Mutable access to the current configuration, if any.
    pub fn computer_mut(&mut self) -> Option<&mut Computer> {
        self.current.as_mut()
    }

    /// Capture a copy of the current configuration.
    pub fn save(&self) -> Result<ComputerSnapshot> {
        let computer = self
            .current
            .as_ref()
            .ok_or_else(|| RigError::invalid_state(MESSAGES.error.save_without_computer))?;

        let snapshot = ComputerSnapshot::capture(computer);
        debug!(
            computer = %snapshot.state(),
            created_at = %snapshot.created_at(),
            "snapshot saved"
        );
        Ok(snapshot)
    }

    /// Make a copy of the snapshot's state the current configuration.
    pub fn restore(&mut self, snapshot: &ComputerSnapshot) {
        self.current = Some(snapshot.state().clone());
        debug!(computer = %snapshot.state(), "snapshot restored");
    }
}
