//! Strongly-typed identifiers and counters.

use std::fmt;

/// Monotonically increasing version counter for a cell model.
///
/// Incremented on every mutation of the model. Never decremented and
/// never reset, so two reads with the same version saw identical state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelVersion(pub u64);

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ModelVersion {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Handle identifying a registered observer.
///
/// Returned by `subscribe` and consumed by `unsubscribe`. Handles are
/// unique within one registry for the lifetime of the process; they are
/// never reused after an unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ObserverId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
