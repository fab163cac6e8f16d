//! Startup configuration for a visualiser session.

use std::time::Duration;

use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Delay between consecutive animation events.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(40);

/// Grid dimensions and animation pacing, fixed for the lifetime of a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualiserConfig {
    pub width: i32,
    pub height: i32,
    pub interval: Duration,
}

impl Default for VisualiserConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = VisualiserConfig {
            width: 12,
            height: 8,
            interval: Duration::from_millis(15),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: VisualiserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
