use std::time::Duration;

pub mod backends;

pub use backends::MemoryBackend;

/// Simulated per-operation delays, standing in for network latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(400),
            create: Duration::from_millis(500),
        }
    }
}

impl Latency {
    /// The same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get_all: delay,
            get_by_id: delay,
            create: delay,
        }
    }

    /// No delay at all; deterministic tests want this.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

pub mod prelude {
    pub use am_core::{Article, ArticlePage, ArticleStore, Error, ListParams, NewArticle, Result};

    pub use crate::{Latency, MemoryBackend};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency_matches_reference_delays() {
        let latency = Latency::default();
        assert_eq!(latency.list, Duration::from_millis(500));
        assert_eq!(latency.get_all, Duration::from_millis(300));
        assert_eq!(latency.get_by_id, Duration::from_millis(400));
        assert_eq!(latency.create, Duration::from_millis(500));
    }

    #[test]
    fn test_none_zeroes_every_delay() {
        assert_eq!(Latency::none(), Latency::uniform(Duration::ZERO));
    }
}
