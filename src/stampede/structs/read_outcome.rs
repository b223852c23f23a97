use crate::stampede::enums::hot_read_state::HotReadState;

/// `value` may be present on a denied miss when the local fallback had it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    pub state: HotReadState,
    pub value: Option<Vec<u8>>,
}
