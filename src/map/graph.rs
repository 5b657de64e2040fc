use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::{MapError, MapResult};

/// A unique identifier for a room, represented by its index in the graph's storage.
pub type RoomId = usize;

/// An edge keyed by its draw token, used only for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEdge {
    /// The token as written, distance included (e.g. `"2ne"`).
    pub token: String,
    /// The neighbouring room.
    pub target: RoomId,
}

/// An edge keyed by its true direction, used for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueEdge {
    /// Free-form direction label, e.g. `"north"` or `"inside"`.
    pub direction: String,
    /// The neighbouring room.
    pub target: RoomId,
}

/// A room in the map.
///
/// Each connection is recorded twice, once per labelling, in two parallel
/// tables. Both tables keep insertion order, which is what makes searches and
/// layouts reproducible.
#[derive(Debug)]
pub struct Room {
    name: String,
    visited: bool,
    draw_adjacency: SmallVec<[DrawEdge; 4]>,
    true_adjacency: SmallVec<[TrueEdge; 4]>,
}

impl Room {
    /// Creates an unvisited room with no connections.
    pub fn new(name: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            visited: false,
            draw_adjacency: SmallVec::new(),
            true_adjacency: SmallVec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Flags the room as visited. There is no way back.
    pub fn set_visited(&mut self) {
        self.visited = true;
    }

    /// Returns an iterator over the draw-direction edges, in insertion order.
    pub fn draw_edges(&self) -> impl Iterator<Item = &DrawEdge> {
        self.draw_adjacency.iter()
    }

    /// Returns an iterator over the true-direction edges, in insertion order.
    pub fn true_edges(&self) -> impl Iterator<Item = &TrueEdge> {
        self.true_adjacency.iter()
    }

    /// Retrieves the draw edge at `index`, in insertion order.
    pub fn draw_edge(&self, index: usize) -> Option<&DrawEdge> {
        self.draw_adjacency.get(index)
    }

    /// The room lying along the given draw token, if any.
    pub fn room_for_drawing(&self, token: &str) -> Option<RoomId> {
        self.draw_adjacency
            .iter()
            .find(|edge| edge.token == token)
            .map(|edge| edge.target)
    }

    /// The room reached by travelling in the given true direction, if any.
    pub fn room_for_traversing(&self, direction: &str) -> Option<RoomId> {
        self.true_adjacency
            .iter()
            .find(|edge| edge.direction == direction)
            .map(|edge| edge.target)
    }

    /// The first true direction (in insertion order) that leads to `target`.
    pub fn direction_to(&self, target: RoomId) -> Option<&str> {
        self.true_adjacency
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.direction.as_str())
    }

    /// Number of outgoing connections.
    pub fn degree(&self) -> usize {
        self.true_adjacency.len()
    }
}

/// A directed room graph backed by an arena.
///
/// Rooms are stored in a vector, and their indices serve as their `RoomId`.
/// A name index gives O(1) lookup by room name.
#[derive(Debug, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
}

impl RoomGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new, unconnected room and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `MapError::DuplicateRoom` if a room with the same name already exists.
    pub fn add_room(&mut self, name: &str) -> MapResult<RoomId> {
        if self.index.contains_key(name) {
            return Err(MapError::DuplicateRoom(name.to_string()));
        }

        let id = self.rooms.len();
        self.rooms.push(Room::new(name));
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Adds a directed connection from `from` to `to`, recorded in both adjacency tables.
    ///
    /// No reverse connection is added.
    ///
    /// # Errors
    ///
    /// Returns `MapError::UnknownRoom` if `from` does not exist, `MapError::UnknownRoomReference`
    /// if `to` does not exist, and `MapError::DuplicateConnection` if the room already has an
    /// edge under the same draw token or the same true direction.
    pub fn connect(&mut self, from: RoomId, draw: &str, direction: &str, to: RoomId) -> MapResult<()> {
        if to >= self.rooms.len() {
            let room = self.room(from)?.name().to_string();
            return Err(MapError::UnknownRoomReference {
                room,
                target: format!("#{to}"),
            });
        }

        let room = self
            .rooms
            .get_mut(from)
            .ok_or_else(|| MapError::UnknownRoom(format!("#{from}")))?;

        let duplicate = if room.room_for_drawing(draw).is_some() {
            Some(draw)
        } else if room.room_for_traversing(direction).is_some() {
            Some(direction)
        } else {
            None
        };
        if let Some(key) = duplicate {
            return Err(MapError::DuplicateConnection {
                room: room.name.clone(),
                key: key.to_string(),
            });
        }

        room.draw_adjacency.push(DrawEdge {
            token: draw.to_string(),
            target: to,
        });
        room.true_adjacency.push(TrueEdge {
            direction: direction.to_string(),
            target: to,
        });

        Ok(())
    }

    /// Looks up a room's ID by name.
    pub fn id_of(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    /// Looks up a room's ID by name, failing with `MapError::UnknownRoom`.
    pub fn require(&self, name: &str) -> MapResult<RoomId> {
        self.id_of(name).ok_or_else(|| MapError::UnknownRoom(name.to_string()))
    }

    /// Retrieves a room by ID.
    pub fn room(&self, id: RoomId) -> MapResult<&Room> {
        self.rooms.get(id).ok_or_else(|| MapError::UnknownRoom(format!("#{id}")))
    }

    /// Retrieves a room mutably by ID.
    pub fn room_mut(&mut self, id: RoomId) -> MapResult<&mut Room> {
        self.rooms.get_mut(id).ok_or_else(|| MapError::UnknownRoom(format!("#{id}")))
    }

    /// Retrieves a room by name.
    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.id_of(name).map(|id| &self.rooms[id])
    }

    /// Returns an iterator over all rooms, in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate()
    }

    /// Returns the total number of rooms in the graph.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns the total number of directed connections in the graph.
    pub fn connection_count(&self) -> usize {
        self.rooms.iter().map(Room::degree).sum()
    }
}
