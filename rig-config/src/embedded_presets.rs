use std::collections::BTreeMap;

/// Embedded preset files
pub fn get_embedded_presets() -> BTreeMap<&'static str, &'static str> {
    let mut presets = BTreeMap::new();

    presets.insert(
        "gaming",
        include_str!("../../configs/presets/gaming.yaml"),
    );
    presets.insert(
        "workstation",
        include_str!("../../configs/presets/workstation.yaml"),
    );

    presets
}

/// Get list of available preset names, sorted
pub fn get_preset_names() -> Vec<&'static str> {
    get_embedded_presets().keys().copied().collect()
}

/// Get raw YAML for a preset
pub fn get_preset_content(name: &str) -> Option<&'static str> {
    get_embedded_presets().get(name).copied()
}
