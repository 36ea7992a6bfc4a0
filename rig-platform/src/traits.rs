//! Core traits for the platform/OS split.

use anyhow::Result;
use rig_core::Computer;
use std::io::Write;

/// Driver installation behaviour of an operating system family.
///
/// Implementations differ only in the report they write; nothing touches the
/// real system.
pub trait OperatingSystem: Send + Sync {
    /// Display name used in reports (e.g., "Linux", "Windows")
    fn name(&self) -> &'static str;

    /// Write a report of the drivers installed for `computer`.
    fn install_drivers(&self, computer: &Computer, out: &mut dyn Write) -> Result<()>;
}

/// A kind of machine that can be set up for a computer configuration.
pub trait ComputerPlatform {
    /// Platform name (e.g., "pc")
    fn name(&self) -> &'static str;

    /// The operating system this platform was bound to.
    fn operating_system(&self) -> &dyn OperatingSystem;

    /// Prepare `computer` on this platform, reporting to `out`.
    fn setup(&self, computer: &Computer, out: &mut dyn Write) -> Result<()>;
}
