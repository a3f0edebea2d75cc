/// Lock failures around species partitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConcurrencyError {
    #[error("partition lock poisoned for species {species:?}")]
    LockPoisoned { species: String },
}
