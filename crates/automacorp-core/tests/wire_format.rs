//! Integration tests for the JSON wire format of the domain records.
//!
//! These tests pin the exact field names and value encodings the REST service
//! uses, through the public API only.  A renamed field here means the client
//! silently stops understanding the server, so each shape is checked against a
//! literal JSON document rather than against our own serializer output.

use automacorp_core::{Room, RoomCommand, Window, WindowStatus};
use serde_json::json;

#[test]
fn test_room_list_payload_decodes_in_server_order() {
    // Arrange
    let body = json!([
        { "id": 1, "name": "Lab", "currentTemperature": 19.5, "targetTemperature": 21.0 },
        { "id": 2, "name": "Office", "currentTemperature": null, "targetTemperature": null }
    ]);

    // Act
    let rooms: Vec<Room> = serde_json::from_value(body).expect("decode rooms");

    // Assert
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, 1);
    assert_eq!(rooms[0].name, "Lab");
    assert_eq!(rooms[0].current_temperature, Some(19.5));
    assert_eq!(rooms[0].target_temperature, Some(21.0));
    assert_eq!(rooms[1], Room::new(2, "Office"));
}

#[test]
fn test_room_encodes_with_camel_case_fields() {
    let room = Room::new(5, "Hall").with_target_temperature(20.0);

    let value = serde_json::to_value(&room).expect("encode room");

    assert_eq!(
        value,
        json!({
            "id": 5,
            "name": "Hall",
            "currentTemperature": null,
            "targetTemperature": 20.0
        })
    );
}

#[test]
fn test_room_command_payload_shape() {
    // Arrange: a slider value with more precision than the service stores.
    let room = Room::new(1, "Lab")
        .with_current_temperature(19.5)
        .with_target_temperature(21.27);

    // Act
    let value = serde_json::to_value(RoomCommand::from_room(&room)).expect("encode command");

    // Assert
    assert_eq!(
        value,
        json!({
            "name": "Lab",
            "currentTemperature": 19.5,
            "targetTemperature": 21.3
        })
    );
}

#[test]
fn test_window_payload_decodes() {
    let body = json!({
        "id": 10,
        "name": "North",
        "roomId": 1,
        "roomName": "Lab",
        "windowStatus": "OPENED"
    });

    let window: Window = serde_json::from_value(body).expect("decode window");

    assert_eq!(window.id, 10);
    assert_eq!(window.room_id, 1);
    assert_eq!(window.room_name, "Lab");
    assert_eq!(window.window_status, WindowStatus::Opened);
}

#[test]
fn test_toggled_window_encodes_closed_status() {
    let window = Window {
        id: 10,
        name: "North".to_string(),
        room_id: 1,
        room_name: "Lab".to_string(),
        window_status: WindowStatus::Opened,
    };

    let value = serde_json::to_value(window.with_toggled_status()).expect("encode window");

    assert_eq!(value["windowStatus"], "CLOSED");
    assert_eq!(value["roomId"], 1);
}
