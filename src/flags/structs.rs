pub mod feature_flags;
pub mod flag_reader;
pub mod flag_snapshot;
pub mod static_config_provider;
