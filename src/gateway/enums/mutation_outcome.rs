#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Stored(bool),
    Counter(Option<u64>),
    Flushed,
}
