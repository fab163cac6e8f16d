//! User-selected settings that live alongside, not inside, the grid.

use pathviz_core::{Endpoints, PaintType};
use pathviz_paths::Strategy;

/// Session configuration: brush, chosen strategy, and the remembered start
/// and goal coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub paint: PaintType,
    pub algorithm: Option<&'static Strategy>,
    pub endpoints: Endpoints,
}

impl Session {
    /// A fresh session painting walls with no strategy selected.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            paint: PaintType::Wall,
            algorithm: None,
            endpoints,
        }
    }

    /// Name of the selected strategy.
    pub fn algorithm_name(&self) -> Option<&'static str> {
        self.algorithm.map(|s| s.name)
    }

    /// Description of the selected strategy.
    pub fn algorithm_description(&self) -> Option<&'static str> {
        self.algorithm.map(|s| s.description)
    }
}
