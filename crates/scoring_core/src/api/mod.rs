pub mod json_api;

pub use json_api::{
    apply_entry_events_json, build_outcome_json, evaluate_set_json, preset_config_json,
    presets_json, smart_complement_json, ComplementRequest, ConfigSource, EntryRequest,
    EntryResponse, EvaluateSetRequest, EvaluateSetResponse, OutcomeRequest, RawField,
    RawSetEntry,
};
