//! **pathviz-core**: core types for the pathfinding visualiser.
//!
//! This crate provides the search grid and its copy-on-write editing rules,
//! geometry primitives, session configuration, input events, and the
//! Elm-architecture application loop used by terminal front ends.

pub mod app;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod screen;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use cell::{Cell, CellType, PaintType, TraversalState};
pub use config::VisualiserConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Endpoints, Grid, create_grid};
pub use messages::*;
pub use screen::{Color, Frame, Glyph, Screen};
