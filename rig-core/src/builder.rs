//! Step-by-step assembly of a [`Computer`].

use crate::computer::Computer;
use tracing::trace;

/// Accumulates parts and hands out [`Computer`] values.
///
/// Setters can be chained in any order and any subset. `build` copies the
/// current state out, so values built earlier are never affected by later
/// setter calls on the same builder.
#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.computer.cpu = Some(cpu.into());
        self
    }

    pub fn gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    pub fn ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.computer.ram = Some(ram.into());
        self
    }

    /// Clear every part.
    pub fn reset(&mut self) -> &mut Self {
        self.computer = Computer::default();
        self
    }

    pub fn build(&self) -> Computer {
        trace!(computer = %self.computer, "building computer");
        self.computer.clone()
    }
}
