use anyhow::{Context, Result};
use rig_core::Computer;
use rig_messages::{msg, MESSAGES};
use std::io::Write;
use tracing::info;

pub(crate) fn write_install_report(
    os: &str,
    computer: &Computer,
    out: &mut dyn Write,
) -> Result<()> {
    info!(os, computer = %computer, "installing drivers");
    let line = msg!(
        MESSAGES.platform.install_drivers,
        os = os,
        computer = computer
    );
    writeln!(out, "{line}").with_context(|| format!("Failed to report {os} driver install"))
}
