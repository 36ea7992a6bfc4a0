//! The fixed demonstration sequence.

use anyhow::{Context, Result};
use rig_config::load_preset;
use rig_core::ComputerBuilder;
use rig_messages::{msg, MESSAGES};
use rig_platform::{ComputerPlatform, LinuxOs, Pc};
use rig_snapshot::ComputerConfigurator;
use std::io::Write;
use tracing::info;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut builder = ComputerBuilder::new();
    let mut configurator = ComputerConfigurator::new();

    let gaming = load_preset("gaming")?;
    let pc1 = gaming.apply(&mut builder).build();
    configurator.set_computer(pc1);
    print_current(out, MESSAGES.demo.initial_pc, &configurator)?;

    let backup = configurator.save()?;
    info!(saved_at = %backup.created_at(), "configuration backed up");

    let workstation = load_preset("workstation")?;
    let pc2 = workstation.apply(&mut builder).build();
    configurator.set_computer(pc2);
    print_current(out, MESSAGES.demo.modified_pc, &configurator)?;

    configurator.restore(&backup);
    print_current(out, MESSAGES.demo.restored_pc, &configurator)?;

    let platform = Pc::new(LinuxOs);
    let restored = configurator
        .computer()
        .context("configuration missing after restore")?;
    platform.setup(restored, out)?;

    Ok(())
}

fn print_current(
    out: &mut dyn Write,
    template: &'static str,
    configurator: &ComputerConfigurator,
) -> Result<()> {
    let computer = configurator
        .computer()
        .context("no current configuration")?;
    writeln!(out, "{}", msg!(template, computer = computer))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_prints_fixed_sequence() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Initial PC: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB",
                "Modified PC: CPU: AMD Ryzen 9, GPU: RX 7900, RAM: 64GB",
                "Restored PC: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB",
                "Installing Linux drivers for: CPU: Intel i9, GPU: RTX 4080, RAM: 32GB",
            ]
        );
    }
}
