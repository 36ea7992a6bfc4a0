//! Platform implementations.

use crate::traits::{ComputerPlatform, OperatingSystem};
use anyhow::Result;
use rig_core::Computer;
use std::io::Write;
use tracing::debug;

/// A desktop PC. Setup is exactly the bound OS's driver installation.
pub struct Pc {
    os: Box<dyn OperatingSystem>,
}

impl Pc {
    pub fn new(os: impl OperatingSystem + 'static) -> Self {
        Self { os: Box::new(os) }
    }

    /// Bind an OS obtained at runtime, e.g. from [`OsRegistry`](crate::OsRegistry).
    pub fn with_boxed(os: Box<dyn OperatingSystem>) -> Self {
        Self { os }
    }
}

impl ComputerPlatform for Pc {
    fn name(&self) -> &'static str {
        "pc"
    }

    fn operating_system(&self) -> &dyn OperatingSystem {
        self.os.as_ref()
    }

    fn setup(&self, computer: &Computer, out: &mut dyn Write) -> Result<()> {
        debug!(platform = self.name(), os = self.os.name(), "setting up");
        self.os.install_drivers(computer, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{LinuxOs, MacOs, WindowsOs};
    use rig_core::ComputerBuilder;

    fn computer() -> Computer {
        ComputerBuilder::new()
            .cpu("Intel i9")
            .gpu("RTX 4080")
            .ram("32GB")
            .build()
    }

    fn output_of(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_setup_matches_direct_install() {
        let computer = computer();
        let strategies: Vec<Box<dyn OperatingSystem>> =
            vec![Box::new(LinuxOs), Box::new(WindowsOs), Box::new(MacOs)];

        for os in strategies {
            let direct = output_of(|out| os.install_drivers(&computer, out));
            let pc = Pc::with_boxed(os);
            let via_platform = output_of(|out| pc.setup(&computer, out));
            assert_eq!(direct, via_platform);
        }
    }

    #[test]
    fn test_linux_pc_setup_output() {
        let pc = Pc::new(LinuxOs);
        let report = output_of(|out| pc.setup(&computer(), out));
        assert_eq!(
            report,
            "Installing Linux drivers for: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB\n"
        );
    }

    #[test]
    fn test_pc_keeps_bound_os() {
        let pc = Pc::new(WindowsOs);
        assert_eq!(pc.name(), "pc");
        assert_eq!(pc.operating_system().name(), "Windows");
    }
}
