//! This module defines the room map and provides functions for querying it.

pub mod builder;
pub mod direction;
pub mod graph;
pub mod layout;
pub mod parser;
pub mod pathfinding;
pub mod shared;
