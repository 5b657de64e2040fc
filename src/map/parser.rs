//! Map parsing functionality for converting a description string into structured data.
//!
//! The grammar is small enough to split by hand:
//!
//! ```text
//! description := map-name "/" room-entry ("/" room-entry)*
//! room-entry  := room-name ("|" connection)*
//! connection  := draw-token ":" true-direction ":" room-name
//! ```

use crate::constants::{CONNECTION_SEPARATOR, FIELD_SEPARATOR, ROOM_SEPARATOR};
use crate::error::ParseError;

/// One connection exactly as written in the description.
///
/// Nothing here is validated yet: the draw token is checked by the layout
/// engine, the target by the map builder, and the true direction never.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSpec<'a> {
    pub draw: &'a str,
    pub direction: &'a str,
    pub target: &'a str,
}

/// A room name and its outgoing connections, in description order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry<'a> {
    pub name: &'a str,
    pub connections: Vec<ConnectionSpec<'a>>,
}

/// Structured representation of a parsed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMap<'a> {
    /// Everything before the first `/`.
    pub name: &'a str,
    /// Room entries in the order they were written.
    pub rooms: Vec<RoomEntry<'a>>,
}

/// Parser for converting map description strings into structured map data.
pub struct DescriptionParser;

impl DescriptionParser {
    /// Splits a single `draw:direction:target` connection.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MalformedConnection` unless there are exactly three fields.
    pub fn parse_connection<'a>(room: &str, connection: &'a str) -> Result<ConnectionSpec<'a>, ParseError> {
        let fields: Vec<&str> = connection.split(FIELD_SEPARATOR).collect();
        match fields[..] {
            [draw, direction, target] => Ok(ConnectionSpec {
                draw,
                direction,
                target,
            }),
            _ => Err(ParseError::MalformedConnection {
                room: room.to_string(),
                connection: connection.to_string(),
                fields: fields.len(),
            }),
        }
    }

    /// Splits one `name|connection|...` room entry.
    ///
    /// `index` is the entry's position in the description and only feeds error messages.
    pub fn parse_room_entry(index: usize, entry: &str) -> Result<RoomEntry<'_>, ParseError> {
        let mut fields = entry.split(CONNECTION_SEPARATOR);
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            return Err(ParseError::EmptyRoomName { entry: index });
        }

        let connections = fields
            .map(|connection| Self::parse_connection(name, connection))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoomEntry { name, connections })
    }

    /// Parses a full map description.
    ///
    /// # Errors
    ///
    /// Returns an error if the description has no `/`, if any room entry has an
    /// empty name, or if any connection does not have exactly three fields.
    pub fn parse_description(description: &str) -> Result<ParsedMap<'_>, ParseError> {
        let (name, entries) = description
            .split_once(ROOM_SEPARATOR)
            .ok_or(ParseError::MissingMapSeparator)?;

        let rooms = entries
            .split(ROOM_SEPARATOR)
            .enumerate()
            .map(|(index, entry)| Self::parse_room_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedMap { name, rooms })
    }
}
