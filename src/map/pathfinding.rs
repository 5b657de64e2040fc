//! Breadth-first routing over the rooms the player has visited.

use pathfinding::prelude::bfs;
use serde::Serialize;
use tracing::trace;

use crate::error::{MapError, MapResult};
use crate::map::graph::{RoomGraph, RoomId};

/// The outcome of a route search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "directions", rename_all = "snake_case")]
pub enum Route {
    /// Start and destination are the same room.
    AlreadyThere,
    /// The true directions to follow, in order. Never empty.
    Path(Vec<String>),
    /// The destination cannot be reached through visited rooms.
    NoPath,
}

impl Route {
    /// Flattens the route into a direction list; both `AlreadyThere` and `NoPath` become empty.
    pub fn into_directions(self) -> Vec<String> {
        match self {
            Route::Path(directions) => directions,
            Route::AlreadyThere | Route::NoPath => Vec::new(),
        }
    }

    /// Number of moves along the route, if there is one.
    pub fn moves(&self) -> Option<usize> {
        match self {
            Route::AlreadyThere => Some(0),
            Route::Path(directions) => Some(directions.len()),
            Route::NoPath => None,
        }
    }
}

/// Finds the shortest route, counted in moves, from `start` to `destination`.
///
/// Only edges leaving a visited room are followed, so an unvisited start cannot
/// go anywhere, and an unvisited destination can be reached but not passed
/// through. Ties between equally short routes go to the one whose directions
/// come first in each room's insertion order.
///
/// # Errors
///
/// Returns `MapError::UnknownRoom` if `start` is not in the graph. An unknown
/// destination is not an error; it is simply never found.
pub fn find_route(graph: &RoomGraph, start: &str, destination: &str) -> MapResult<Route> {
    let start_id = graph.require(start)?;
    let Some(destination_id) = graph.id_of(destination) else {
        trace!(start, destination, "Destination not in map");
        return Ok(Route::NoPath);
    };

    if start_id == destination_id {
        return Ok(Route::AlreadyThere);
    }

    let rooms = bfs(
        &start_id,
        |&id| successors(graph, id),
        |&id| id == destination_id,
    );

    let Some(rooms) = rooms else {
        trace!(start, destination, "No route through visited rooms");
        return Ok(Route::NoPath);
    };

    let directions = rooms
        .windows(2)
        .map(|step| {
            let room = graph.room(step[0])?;
            room.direction_to(step[1])
                .map(str::to_string)
                .ok_or_else(|| MapError::UnknownRoom(format!("#{}", step[1])))
        })
        .collect::<MapResult<Vec<_>>>()?;

    trace!(start, destination, moves = directions.len(), "Found route");
    Ok(Route::Path(directions))
}

/// Shortest list of true directions from `start` to `destination`.
///
/// Returns an empty list both when already there and when there is no route.
pub fn find_path(graph: &RoomGraph, start: &str, destination: &str) -> MapResult<Vec<String>> {
    find_route(graph, start, destination).map(Route::into_directions)
}

/// Rooms reachable in one move from `id`, in insertion order. Unvisited rooms have none.
fn successors(graph: &RoomGraph, id: RoomId) -> Vec<RoomId> {
    match graph.room(id) {
        Ok(room) if room.is_visited() => {
            trace!(room = room.name(), "Expanding room");
            room.true_edges().map(|edge| edge.target).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::builder::RoomMap;

    #[test]
    fn test_route_moves() {
        assert_eq!(Route::AlreadyThere.moves(), Some(0));
        assert_eq!(Route::Path(vec!["up".into()]).moves(), Some(1));
        assert_eq!(Route::NoPath.moves(), None);
    }

    #[test]
    fn test_parallel_edges_pick_first_direction() {
        let mut map = RoomMap::new("Twin/A|n:north:B|e:around:B/B").unwrap();
        map.mark_visited("A").unwrap();
        assert_eq!(map.find_path("A", "B").unwrap(), ["north"]);
    }
}
