use pretty_assertions::assert_eq;
use roommap::constants::DEMO_MAP;
use roommap::error::ParseError;
use roommap::map::parser::{ConnectionSpec, DescriptionParser};
use speculoos::prelude::*;

#[test]
fn test_parse_description() {
    let parsed = DescriptionParser::parse_description(DEMO_MAP).unwrap();

    assert_that(&parsed.name).is_equal_to("Map1");
    assert_that(&parsed.rooms).has_length(4);
    assert_eq!(
        parsed.rooms[2].connections,
        vec![
            ConnectionSpec {
                draw: "w",
                direction: "west",
                target: "Second Room",
            },
            ConnectionSpec {
                draw: "s",
                direction: "south",
                target: "Fourth Room",
            },
        ]
    );
}

#[test]
fn test_map_name_ends_at_first_separator() {
    let parsed = DescriptionParser::parse_description("Cave/Mouth|2d:down:Pit/Pit").unwrap();
    assert_that(&parsed.name).is_equal_to("Cave");
    assert_that(&parsed.rooms[0].name).is_equal_to("Mouth");

    let parsed = DescriptionParser::parse_description("/Lonely").unwrap();
    assert_that(&parsed.name).is_equal_to("");
}

#[test]
fn test_direction_vocabulary_is_not_checked() {
    let parsed = DescriptionParser::parse_description("Odd/A|sideways:widdershins:B/B").unwrap();
    assert_eq!(
        parsed.rooms[0].connections[0],
        ConnectionSpec {
            draw: "sideways",
            direction: "widdershins",
            target: "B",
        }
    );
}

#[test]
fn test_missing_separator() {
    let result = DescriptionParser::parse_description("Map1");
    assert_that(&result).is_err_containing(ParseError::MissingMapSeparator);
}

#[test]
fn test_empty_room_names() {
    let test_cases = [
        ("Map/", 0),
        ("Map/A//B", 1),
        ("Map/A/", 1),
        ("Map/|n:north:A", 0),
    ];

    for (description, entry) in test_cases {
        let result = DescriptionParser::parse_description(description);
        assert_eq!(result, Err(ParseError::EmptyRoomName { entry }), "{description}");
    }
}

#[test]
fn test_malformed_connection() {
    let result = DescriptionParser::parse_description("Map/Hall|n:Kitchen/Kitchen");
    assert_eq!(
        result,
        Err(ParseError::MalformedConnection {
            room: "Hall".to_string(),
            connection: "n:Kitchen".to_string(),
            fields: 2,
        })
    );

    // A trailing '|' leaves an empty connection with a single field.
    let result = DescriptionParser::parse_description("Map/Hall|");
    assert!(matches!(result, Err(ParseError::MalformedConnection { fields: 1, .. })));
}
