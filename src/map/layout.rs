//! Schematic 3D placement of the visited part of a map.
//!
//! Rooms are placed depth-first from a start room at the origin, following
//! draw-direction edges in insertion order. A room is placed once, at the
//! position of the first route that reaches it; a passage is placed once per
//! unordered pair of rooms. Unvisited rooms are never placed.

use std::collections::HashSet;

use glam::{Quat, Vec3};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::constants::PASSAGE_NAME_SEPARATOR;
use crate::error::{MapError, MapResult};
use crate::map::direction::{Compass, DrawToken};
use crate::map::graph::{Room, RoomGraph, RoomId};

/// A room cube and where it goes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRoom {
    pub name: String,
    pub position: Vec3,
    /// Edge length of the cube.
    pub size: f32,
}

/// A passage marker: a thin bar lying along its connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPassage {
    /// The room the passage was laid out from.
    pub from: String,
    /// The room it leads to.
    pub to: String,
    pub direction: Compass,
    /// Midpoint between the two rooms.
    pub position: Vec3,
    /// Rotates a bar lying along +y onto the connection axis.
    pub orientation: Quat,
    /// Length of the bar, shorter than the room-to-room distance.
    pub length: f32,
    /// Marker scale along each local axis, `(thickness, length, thickness)`.
    pub scale: Vec3,
    /// Whether the room at the far end has been visited.
    pub explored: bool,
}

impl PlacedPassage {
    /// The passage's name, `"<from>_<to>"`.
    pub fn name(&self) -> String {
        format!("{}{}{}", self.from, PASSAGE_NAME_SEPARATOR, self.to)
    }

    /// Returns `true` if this passage joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Axis-aligned bounding box over the placed rooms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// The smallest box containing every point, or a degenerate box at the origin if there are none.
    pub fn around(points: impl IntoIterator<Item = Vec3>) -> Bounds {
        points
            .into_iter()
            .fold(None, |bounds: Option<Bounds>, point| {
                Some(match bounds {
                    Some(bounds) => Bounds {
                        min: bounds.min.min(point),
                        max: bounds.max.max(point),
                    },
                    None => Bounds { min: point, max: point },
                })
            })
            .unwrap_or(Bounds {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            })
    }

    /// Midpoint of the box; a renderer anchors the whole map here.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Everything a renderer needs to draw the map, and nothing engine-specific.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Placed rooms, in placement order. The start room comes first.
    pub rooms: Vec<PlacedRoom>,
    /// Placed passages, in placement order.
    pub passages: Vec<PlacedPassage>,
    pub bounds: Bounds,
}

impl Layout {
    pub fn room(&self, name: &str) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|room| room.name == name)
    }

    pub fn room_position(&self, name: &str) -> Option<Vec3> {
        self.room(name).map(|room| room.position)
    }

    /// The passage joining `a` and `b`, whichever end it was laid out from.
    pub fn passage(&self, a: &str, b: &str) -> Option<&PlacedPassage> {
        self.passages.iter().find(|passage| passage.connects(a, b))
    }
}

/// A room whose draw edges are still being walked.
struct Frame {
    room: RoomId,
    position: Vec3,
    next_edge: usize,
}

/// Computes layouts with a fixed geometry.
pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        LayoutEngine { config }
    }

    /// Lays the map out with `start` at the origin.
    ///
    /// The start room is always placed, visited or not. Each placed room's draw
    /// tokens are tokenized as they are walked, including those leading to
    /// unvisited rooms.
    ///
    /// # Errors
    ///
    /// Returns `MapError::UnknownRoom` if `start` is not in the graph and
    /// `MapError::InvalidDrawToken` if a walked draw token cannot be tokenized.
    pub fn compute(&self, graph: &RoomGraph, start: &str) -> MapResult<Layout> {
        let start_id = graph.require(start)?;

        let mut placed_rooms = vec![false; graph.room_count()];
        let mut placed_passages: HashSet<(RoomId, RoomId)> = HashSet::new();
        let mut rooms = Vec::new();
        let mut passages = Vec::new();

        placed_rooms[start_id] = true;
        rooms.push(self.place_room(graph.room(start_id)?, Vec3::ZERO));
        let mut stack = vec![Frame {
            room: start_id,
            position: Vec3::ZERO,
            next_edge: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let from_id = frame.room;
            let origin = frame.position;
            let room = graph.room(from_id)?;

            let Some(edge) = room.draw_edge(frame.next_edge) else {
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            let token: DrawToken = edge.token.parse().map_err(|source| MapError::InvalidDrawToken {
                room: room.name().to_string(),
                token: edge.token.clone(),
                source,
            })?;
            let neighbour = graph.room(edge.target)?;
            let target = origin + token.displacement(self.config.spacing);
            let explored = neighbour.is_visited();

            let passage_placed =
                placed_passages.contains(&(from_id, edge.target)) || placed_passages.contains(&(edge.target, from_id));
            if !passage_placed && (explored || self.config.unexplored_passages) {
                placed_passages.insert((from_id, edge.target));
                passages.push(self.place_passage(room, neighbour, &token, origin, explored));
            }

            if explored && !placed_rooms[edge.target] {
                placed_rooms[edge.target] = true;
                rooms.push(self.place_room(neighbour, target));
                stack.push(Frame {
                    room: edge.target,
                    position: target,
                    next_edge: 0,
                });
            }
        }

        let bounds = Bounds::around(rooms.iter().map(|room| room.position));
        debug!(
            start,
            rooms = rooms.len(),
            passages = passages.len(),
            min = %bounds.min,
            max = %bounds.max,
            "Computed layout"
        );

        Ok(Layout {
            rooms,
            passages,
            bounds,
        })
    }

    fn place_room(&self, room: &Room, position: Vec3) -> PlacedRoom {
        trace!(room = room.name(), %position, "Placing room");
        PlacedRoom {
            name: room.name().to_string(),
            position,
            size: self.config.room_size,
        }
    }

    fn place_passage(&self, from: &Room, to: &Room, token: &DrawToken, origin: Vec3, explored: bool) -> PlacedPassage {
        let length = token.span(self.config.spacing) * self.config.passage_fill;
        let position = origin + token.displacement(self.config.spacing) / 2.0;
        trace!(from = from.name(), to = to.name(), %position, length, "Placing passage");
        PlacedPassage {
            from: from.name().to_string(),
            to: to.name().to_string(),
            direction: token.compass,
            position,
            orientation: token.compass.orientation(),
            length,
            scale: Vec3::new(self.config.passage_thickness, length, self.config.passage_thickness),
            explored,
        }
    }
}
