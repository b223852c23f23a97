use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum FlagSource {
    provider,
    no_provider,
    absent,
    provider_error,
    invalid_value,
}
