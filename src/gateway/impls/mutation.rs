use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::gateway::enums::mutation::Mutation;
use crate::gateway::enums::mutation_outcome::MutationOutcome;

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Set { .. } => "set",
            Mutation::Add { .. } => "add",
            Mutation::Replace { .. } => "replace",
            Mutation::Delete { .. } => "delete",
            Mutation::Increment { .. } => "increment",
            Mutation::Decrement { .. } => "decrement",
            Mutation::Flush => "flush",
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Mutation::Set { key, .. }
            | Mutation::Add { key, .. }
            | Mutation::Replace { key, .. }
            | Mutation::Delete { key }
            | Mutation::Increment { key, .. }
            | Mutation::Decrement { key, .. } => Some(key),
            Mutation::Flush => None,
        }
    }

    pub async fn apply(&self, backend: &dyn CacheBackend) -> Result<MutationOutcome, CacheError> {
        match self {
            Mutation::Set { key, value } => backend.set(key, value).await.map(MutationOutcome::Stored),
            Mutation::Add { key, value } => backend.add(key, value).await.map(MutationOutcome::Stored),
            Mutation::Replace { key, value } => backend.replace(key, value).await.map(MutationOutcome::Stored),
            Mutation::Delete { key } => backend.delete(key).await.map(MutationOutcome::Stored),
            Mutation::Increment { key, amount } => backend.increment(key, *amount).await.map(MutationOutcome::Counter),
            Mutation::Decrement { key, amount } => backend.decrement(key, *amount).await.map(MutationOutcome::Counter),
            Mutation::Flush => backend.flush().await.map(|_| MutationOutcome::Flushed),
        }
    }
}
