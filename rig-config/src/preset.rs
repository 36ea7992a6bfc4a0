use crate::embedded_presets;
use anyhow::Context;
use rig_core::{Computer, ComputerBuilder, Result, RigError};
use serde::{Deserialize, Serialize};
use serde_yaml_ng as serde_yaml;
use tracing::debug;

/// Metadata about a preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetMetadata {
    pub name: String,
    pub description: String,
}

/// Parts a preset feeds into a [`ComputerBuilder`]. Missing parts are left
/// untouched on the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsPreset {
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub gpu: Option<String>,
    #[serde(default)]
    pub ram: Option<String>,
}

/// Preset file structure with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetFile {
    pub preset: PresetMetadata,
    pub parts: PartsPreset,
}

impl PartsPreset {
    pub fn apply<'b>(&self, builder: &'b mut ComputerBuilder) -> &'b mut ComputerBuilder {
        if let Some(cpu) = &self.cpu {
            builder.cpu(cpu.as_str());
        }
        if let Some(gpu) = &self.gpu {
            builder.gpu(gpu.as_str());
        }
        if let Some(ram) = &self.ram {
            builder.ram(ram.as_str());
        }
        builder
    }

    /// Build a computer from this preset alone.
    pub fn to_computer(&self) -> Computer {
        self.apply(&mut ComputerBuilder::new()).build()
    }
}

/// Parse a preset document.
pub fn parse_preset(name: &str, content: &str) -> Result<PresetFile> {
    let file: PresetFile = serde_yaml::from_str(content)
        .with_context(|| format!("Failed to parse preset '{}'", name))?;
    Ok(file)
}

/// Load an embedded preset by name.
pub fn load_preset(name: &str) -> Result<PartsPreset> {
    let content = embedded_presets::get_preset_content(name)
        .ok_or_else(|| RigError::UnknownPreset(name.to_string()))?;
    let file = parse_preset(name, content)?;
    debug!(preset = %file.preset.name, "loaded preset");
    Ok(file.parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_presets_parse() {
        for name in embedded_presets::get_preset_names() {
            let content = embedded_presets::get_preset_content(name).unwrap();
            let file = parse_preset(name, content).unwrap();
            assert_eq!(file.preset.name, name);
            assert!(file.parts.to_computer().is_complete());
        }
    }

    #[test]
    fn test_gaming_preset_parts() {
        let parts = load_preset("gaming").unwrap();
        assert_eq!(
            parts.to_computer().to_string(),
            "CPU: Intel i9, GPU: RTX 4080, RAM: 32GB"
        );
    }

    #[test]
    fn test_unknown_preset() {
        let err = load_preset("mainframe").unwrap_err();
        assert!(matches!(err, RigError::UnknownPreset(ref n) if n == "mainframe"));
    }

    #[test]
    fn test_malformed_preset_reports_name() {
        let err = parse_preset("broken", "preset: [not, a, map]").unwrap_err();
        assert!(matches!(err, RigError::Other(_)));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_partial_preset_keeps_existing_parts() {
        let partial = parse_preset(
            "ram-only",
            "preset:\n  name: ram-only\n  description: upgrade\nparts:\n  ram: 128GB\n",
        )
        .unwrap();

        let mut builder = ComputerBuilder::new();
        builder.cpu("Intel i9").ram("32GB");
        let computer = partial.parts.apply(&mut builder).build();
        assert_eq!(computer.to_string(), "CPU: Intel i9, GPU: , RAM: 128GB");
    }
}
