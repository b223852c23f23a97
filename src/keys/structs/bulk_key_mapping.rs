use ahash::AHashMap;

/// Original/normalized translation for the keys of one batch that changed.
/// Keys that normalize to themselves are not stored and pass through.
#[derive(Debug, Clone, Default)]
pub struct BulkKeyMapping {
    pub(crate) to_normalized: AHashMap<String, String>,
    pub(crate) to_original: AHashMap<String, String>,
}
