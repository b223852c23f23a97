pub mod flag_source;
