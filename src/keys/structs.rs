pub mod bulk_key_mapping;
pub mod normalized_key;
