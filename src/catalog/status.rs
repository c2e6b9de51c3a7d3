use crate::domain::LoadFailure;

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// The fetch has been requested and has not answered yet.
    #[default]
    Pending,
    /// The catalog is in the store.
    Loaded,
    /// The fetch failed; the store is empty.
    Failed(LoadFailure),
}

impl LoadStatus {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Returns the failure, if the load failed.
    pub const fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
