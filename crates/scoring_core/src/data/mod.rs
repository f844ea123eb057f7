pub mod presets;

pub use presets::{preset, preset_config, preset_names, presets, FormatPreset, PresetCatalog};
