//! A room map that several threads can query while one of them records visits.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LayoutConfig;
use crate::error::MapResult;
use crate::map::builder::RoomMap;
use crate::map::layout::Layout;
use crate::map::pathfinding::Route;

/// A cloneable handle to a [`RoomMap`].
///
/// Queries share a read lock and see a consistent snapshot of the visited
/// flags; `mark_visited` takes the write lock.
#[derive(Debug, Clone)]
pub struct SharedRoomMap {
    inner: Arc<RwLock<RoomMap>>,
}

impl SharedRoomMap {
    pub fn new(map: RoomMap) -> Self {
        SharedRoomMap {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn mark_visited(&self, room: &str) -> MapResult<()> {
        self.inner.write().mark_visited(room)
    }

    pub fn contains_room(&self, room: &str) -> bool {
        self.inner.read().contains_room(room)
    }

    pub fn is_visited(&self, room: &str) -> MapResult<bool> {
        self.inner.read().is_visited(room)
    }

    pub fn find_path(&self, start: &str, destination: &str) -> MapResult<Vec<String>> {
        self.inner.read().find_path(start, destination)
    }

    pub fn find_route(&self, start: &str, destination: &str) -> MapResult<Route> {
        self.inner.read().find_route(start, destination)
    }

    pub fn compute_layout(&self, start: &str) -> MapResult<Layout> {
        self.inner.read().compute_layout(start)
    }

    pub fn compute_layout_with(&self, start: &str, config: &LayoutConfig) -> MapResult<Layout> {
        self.inner.read().compute_layout_with(start, config)
    }

    /// Runs `f` with a read lock held, for several queries against one snapshot.
    pub fn read<R>(&self, f: impl FnOnce(&RoomMap) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<RoomMap> for SharedRoomMap {
    fn from(map: RoomMap) -> Self {
        SharedRoomMap::new(map)
    }
}
