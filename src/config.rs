use serde::{Deserialize, Serialize};

/// Capacity settings shared by every front end.
///
/// A missing `max_size` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    max_size: Option<usize>,
}

impl QueueConfig {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_size: None }
    }

    #[must_use]
    pub const fn bounded(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    #[must_use]
    pub const fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.max_size.is_some()
    }
}
