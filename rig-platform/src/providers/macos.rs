//! macOS driver installation.

use super::shared::write_install_report;
use crate::traits::OperatingSystem;
use anyhow::Result;
use rig_core::Computer;
use std::io::Write;

pub struct MacOs;

impl OperatingSystem for MacOs {
    fn name(&self) -> &'static str {
        "macOS"
    }

    fn install_drivers(&self, computer: &Computer, out: &mut dyn Write) -> Result<()> {
        write_install_report(self.name(), computer, out)
    }
}
