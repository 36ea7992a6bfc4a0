//! Windows driver installation.

use super::shared::write_install_report;
use crate::traits::OperatingSystem;
use anyhow::Result;
use rig_core::Computer;
use std::io::Write;

pub struct WindowsOs;

impl OperatingSystem for WindowsOs {
    fn name(&self) -> &'static str {
        "Windows"
    }

    fn install_drivers(&self, computer: &Computer, out: &mut dyn Write) -> Result<()> {
        write_install_report(self.name(), computer, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_report_names_windows() {
        let mut out = Vec::new();
        WindowsOs.install_drivers(&Computer::default(), &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("Installing Windows drivers for: "));
    }
}
