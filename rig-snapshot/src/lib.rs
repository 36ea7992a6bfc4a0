//! Computer configuration snapshots.
//!
//! [`ComputerConfigurator`] holds the configuration being worked on and hands
//! out [`ComputerSnapshot`]s that can later be restored.

pub mod configurator;
pub mod snapshot;

pub use configurator::ComputerConfigurator;
pub use snapshot::ComputerSnapshot;
