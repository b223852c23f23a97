pub mod configuration_error;
