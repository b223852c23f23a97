use crate::cache::structs::cache_value::CacheValue;

/// A write-path operation, replayable against any backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Set { key: String, value: CacheValue },
    Add { key: String, value: CacheValue },
    Replace { key: String, value: CacheValue },
    Delete { key: String },
    Increment { key: String, amount: u64 },
    Decrement { key: String, amount: u64 },
    Flush,
}
