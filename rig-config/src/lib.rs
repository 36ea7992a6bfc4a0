//! Part presets for building computers.
//!
//! Presets are YAML documents compiled into the binary; nothing is read from
//! disk or the environment at runtime.

pub mod embedded_presets;
pub mod preset;

pub use preset::{load_preset, PartsPreset, PresetFile, PresetMetadata};
