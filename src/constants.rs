//! This module contains all the constants used by the map.

/// Distance between orthogonally adjacent rooms, per unit of draw distance.
pub const ROOM_SPACING: f32 = 2.0;
/// Fraction of the room-to-room distance a passage marker spans.
///
/// Anything below 1.0 leaves a visible gap at the rooms it connects.
pub const PASSAGE_FILL: f32 = 0.8;
/// Width and depth of a passage marker.
pub const PASSAGE_THICKNESS: f32 = 0.25;
/// Edge length of the cube drawn for a room.
pub const ROOM_SIZE: f32 = 1.0;

/// Separates the map name and the room entries.
pub const ROOM_SEPARATOR: char = '/';
/// Separates a room name from its connections.
pub const CONNECTION_SEPARATOR: char = '|';
/// Separates the three fields of a connection.
pub const FIELD_SEPARATOR: char = ':';
/// Joins two room names into a passage name.
pub const PASSAGE_NAME_SEPARATOR: char = '_';

/// Prefix for configuration environment variables, e.g. `ROOMMAP_LAYOUT__SPACING`.
pub const CONFIG_ENV_PREFIX: &str = "ROOMMAP_";
/// Log filter used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// A small, fully symmetric four-room square.
pub const DEMO_MAP: &str = "Map1/First Room|n:north:Second Room|e:east:Fourth Room/Second Room|s:south:First Room|e:east:Third Room/Third Room|w:west:Second Room|s:south:Fourth Room/Fourth Room|n:north:Third Room|w:west:First Room";
