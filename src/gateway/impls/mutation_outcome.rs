use crate::gateway::enums::mutation_outcome::MutationOutcome;

impl MutationOutcome {
    pub fn stored(&self) -> bool {
        matches!(self, MutationOutcome::Stored(true) | MutationOutcome::Flushed)
    }

    pub fn counter(&self) -> Option<u64> {
        match self {
            MutationOutcome::Counter(value) => *value,
            _ => None,
        }
    }
}
