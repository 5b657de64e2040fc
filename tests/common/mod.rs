#![allow(dead_code)]

use roommap::constants::DEMO_MAP;
use roommap::RoomMap;

pub const DEMO_ROOMS: [&str; 4] = ["First Room", "Second Room", "Third Room", "Fourth Room"];

/// Two routes from A to E: the first-listed one is longer.
pub const DETOUR_MAP: &str = "Detour/A|e:east:B|n:north:D/B|e:east:C|w:west:A/C|n:north:E|w:west:B/D|e:east:E|s:south:A/E|s:south:C|w:west:D";

/// One diagonal neighbour at distance 1 and one at distance 2.
pub const DIAGONAL_MAP: &str = "Diag/A|ne:northeast:B|2sw:southwest:C/B|sw:southwest:A/C|2ne:northeast:A";

/// Rooms stacked along the z axis.
pub const TOWER_MAP: &str = "Tower/Hall|u:up:Attic|3d:down:Cellar/Attic|d:down:Hall/Cellar|3u:up:Hall";

/// Builds the four-room demo map with every room visited.
pub fn visited_demo_map() -> RoomMap {
    visited_map(DEMO_MAP)
}

/// Builds a map with every room visited.
pub fn visited_map(description: &str) -> RoomMap {
    let mut map = RoomMap::new(description).expect("Failed to build test map");
    map.mark_all_visited();
    map
}

/// Builds a map with only the named rooms visited.
pub fn map_visiting(description: &str, rooms: &[&str]) -> RoomMap {
    let mut map = RoomMap::new(description).expect("Failed to build test map");
    for room in rooms {
        map.mark_visited(room).expect("Test room should exist");
    }
    map
}
