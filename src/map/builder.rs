//! Map construction and building functionality.

use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::{MapError, MapResult};
use crate::map::graph::{Room, RoomGraph, RoomId};
use crate::map::layout::{Layout, LayoutEngine};
use crate::map::parser::{DescriptionParser, ParsedMap};
use crate::map::pathfinding::{self, Route};

/// The main map structure: a named room graph plus the player's visit history.
///
/// The topology is fixed once built; only the visited flags change.
#[derive(Debug)]
pub struct RoomMap {
    name: String,
    graph: RoomGraph,
}

impl RoomMap {
    /// Creates a new `RoomMap` from a description string.
    ///
    /// Every room is created first so connections may point forward to rooms
    /// defined later in the description. Connections are directional and never
    /// mirrored automatically.
    ///
    /// # Errors
    ///
    /// Returns `MapError::MalformedDescription` for grammar violations,
    /// `MapError::DuplicateRoom` if a room name is defined twice,
    /// `MapError::DuplicateConnection` if a room repeats a draw token or true
    /// direction, and `MapError::UnknownRoomReference` if a connection names a
    /// room that is not defined.
    pub fn new(description: &str) -> MapResult<RoomMap> {
        let parsed = DescriptionParser::parse_description(description)?;
        Self::from_parsed(&parsed)
    }

    /// Builds a map from an already-parsed description.
    pub fn from_parsed(parsed: &ParsedMap<'_>) -> MapResult<RoomMap> {
        let mut graph = RoomGraph::new();

        let ids = parsed
            .rooms
            .iter()
            .map(|entry| graph.add_room(entry.name))
            .collect::<MapResult<Vec<RoomId>>>()?;

        for (entry, &id) in parsed.rooms.iter().zip(&ids) {
            for connection in &entry.connections {
                let target = graph
                    .id_of(connection.target)
                    .ok_or_else(|| MapError::UnknownRoomReference {
                        room: entry.name.to_string(),
                        target: connection.target.to_string(),
                    })?;
                graph.connect(id, connection.draw, connection.direction, target)?;
            }
        }

        debug!(
            map = parsed.name,
            rooms = graph.room_count(),
            connections = graph.connection_count(),
            "Built room map"
        );

        Ok(RoomMap {
            name: parsed.name.to_string(),
            graph,
        })
    }

    /// The map's name, taken from the start of the description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying room graph.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Flags a room as visited.
    pub fn mark_visited(&mut self, room: &str) -> MapResult<()> {
        let id = self.graph.require(room)?;
        self.graph.room_mut(id)?.set_visited();
        debug!(room, "Marked room visited");
        Ok(())
    }

    /// Flags every room as visited.
    pub fn mark_all_visited(&mut self) {
        for id in 0..self.graph.room_count() {
            if let Ok(room) = self.graph.room_mut(id) {
                room.set_visited();
            }
        }
    }

    /// Returns `true` if a room with this name exists.
    pub fn contains_room(&self, room: &str) -> bool {
        self.graph.id_of(room).is_some()
    }

    /// Returns whether the named room has been visited.
    pub fn is_visited(&self, room: &str) -> MapResult<bool> {
        let id = self.graph.require(room)?;
        Ok(self.graph.room(id)?.is_visited())
    }

    /// Returns an iterator over the names of visited rooms, in description order.
    pub fn visited_rooms(&self) -> impl Iterator<Item = &str> {
        self.graph
            .rooms()
            .map(|(_, room)| room)
            .filter(|room| room.is_visited())
            .map(Room::name)
    }

    /// Shortest list of true directions from `start` to `destination` through visited rooms.
    ///
    /// Empty both when already there and when no route exists; use
    /// [`RoomMap::find_route`] to tell the two apart.
    pub fn find_path(&self, start: &str, destination: &str) -> MapResult<Vec<String>> {
        pathfinding::find_path(&self.graph, start, destination)
    }

    /// Like [`RoomMap::find_path`], but distinguishes "already there" from "no route".
    pub fn find_route(&self, start: &str, destination: &str) -> MapResult<Route> {
        pathfinding::find_route(&self.graph, start, destination)
    }

    /// Lays the visited part of the map out in 3D with the default geometry.
    pub fn compute_layout(&self, start: &str) -> MapResult<Layout> {
        self.compute_layout_with(start, &LayoutConfig::default())
    }

    /// Lays the visited part of the map out in 3D with custom geometry.
    pub fn compute_layout_with(&self, start: &str, config: &LayoutConfig) -> MapResult<Layout> {
        LayoutEngine::new(config).compute(&self.graph, start)
    }
}
