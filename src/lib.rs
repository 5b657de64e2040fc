//! Room map library crate.
//!
//! Builds a room graph from a compact description string, routes the player
//! through rooms they have visited, and lays the visited rooms out in 3D for a
//! renderer to draw.

pub mod config;
pub mod constants;
pub mod error;
pub mod map;

pub use error::{MapError, MapResult};
pub use map::builder::RoomMap;
pub use map::layout::Layout;
pub use map::pathfinding::Route;
