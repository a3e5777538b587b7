//! Strict decoding of generative plan payloads into drafts.
//!
//! A draft keeps every field optional so the defaults pass can tell "absent"
//! from "present". Scalars of an unusable type read as absent: numbers also
//! accept numeric strings, text also accepts numbers. Fixture lists are decoded
//! element by element and a list that is not an array of well-formed fixtures
//! is marked [`ListField::Malformed`]. Only a missing `rooms` array or a room
//! that is not an object fails the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DecodeError;
use crate::generative::extract::clean_payload;
use crate::model::{Door, ElectricalPoint, Furniture, PlumbingPoint, Wall, Window};

/// A list-valued field as it arrived
#[derive(Debug, Clone, PartialEq)]
pub enum ListField<T> {
    /// An array whose every element decoded
    Present(Vec<T>),
    /// Absent or null
    Missing,
    /// Not an array, or an array with an element of the wrong shape
    Malformed,
}

impl<T> Default for ListField<T> {
    fn default() -> Self {
        ListField::Missing
    }
}

impl<T: DeserializeOwned> ListField<T> {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Null => ListField::Missing,
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .map(ListField::Present)
                .unwrap_or(ListField::Malformed),
            _ => ListField::Malformed,
        }
    }
}

impl<T> ListField<T> {
    /// The decoded list, or `fallback()` when it was missing or malformed
    pub fn or_else(self, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            ListField::Present(items) => items,
            ListField::Missing | ListField::Malformed => fallback(),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ListField::from_value)
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Value::deserialize(deserializer).map(|value| as_number(&value))
}

/// A positive whole number, so `2` and `2.0` both count
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Value::deserialize(deserializer).map(|value| {
        as_number(&value)
            .filter(|v| *v >= 1.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v as u32)
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// One room as proposed by the generative source
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Raw type tag; coerced to a known room type later
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub doors: ListField<Door>,
    #[serde(default)]
    pub windows: ListField<Window>,
    #[serde(default)]
    pub furniture: ListField<Furniture>,
    #[serde(default)]
    pub walls: ListField<Wall>,
    #[serde(default)]
    pub electrical: ListField<ElectricalPoint>,
    #[serde(default)]
    pub plumbing: ListField<PlumbingPoint>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub flooring: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ceiling_height: Option<f64>,
    #[serde(default)]
    pub features: ListField<String>,
}

/// A whole plan as proposed by the generative source
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub floors: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub orientation: Option<String>,
    #[serde(default)]
    pub features: ListField<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub estimated_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub building_code: Option<String>,
    pub rooms: Vec<RoomDraft>,
}

/// Decode an already-cleaned JSON payload
pub fn decode_payload(payload: &str) -> Result<PlanDraft, DecodeError> {
    serde_json::from_str(payload).map_err(|err| DecodeError::from_json(&err, payload))
}

/// Extract, clean and decode a raw generative response
pub fn decode_plan(text: &str) -> Result<PlanDraft, DecodeError> {
    let payload = clean_payload(text)?;
    decode_payload(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DoorKind;

    #[test]
    fn test_minimal_payload() {
        let draft = decode_plan(r#"{"rooms": []}"#).unwrap();
        assert!(draft.rooms.is_empty());
        assert_eq!(draft.name, None);
        assert_eq!(draft.features, ListField::Missing);
    }

    #[test]
    fn test_missing_rooms_is_schema_error() {
        let err = decode_plan(r#"{"name": "Plan"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Schema { .. }));
    }

    #[test]
    fn test_non_object_room_is_schema_error() {
        let err = decode_plan(r#"{"rooms": [42]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Schema { .. }));
    }

    #[test]
    fn test_unusable_scalars_read_as_missing() {
        let draft = decode_plan(
            r#"{"estimatedCost": "2 crore", "floors": 2.5, "style": ["modern"],
                "rooms": [{"width": "wide", "name": true, "x": {}}]}"#,
        )
        .unwrap();
        assert_eq!(draft.estimated_cost, None);
        assert_eq!(draft.floors, None);
        assert_eq!(draft.style, None);
        assert_eq!(draft.rooms[0].width, None);
        assert_eq!(draft.rooms[0].name, None);
        assert_eq!(draft.rooms[0].x, None);
    }

    #[test]
    fn test_scalars_coerced_across_types() {
        let draft = decode_plan(
            r#"{"floors": 2.0, "buildingCode": 2016,
                "rooms": [{"id": 7, "width": "4", "length": " 3.5 "}]}"#,
        )
        .unwrap();
        assert_eq!(draft.floors, Some(2));
        assert_eq!(draft.building_code.as_deref(), Some("2016"));
        assert_eq!(draft.rooms[0].id.as_deref(), Some("7"));
        assert_eq!(draft.rooms[0].width, Some(4.0));
        assert_eq!(draft.rooms[0].length, Some(3.5));
    }

    #[test]
    fn test_floors_must_be_positive_whole() {
        for text in [r#"{"floors": 0, "rooms": []}"#, r#"{"floors": -1, "rooms": []}"#] {
            assert_eq!(decode_plan(text).unwrap().floors, None);
        }
        assert_eq!(decode_plan(r#"{"floors": "3", "rooms": []}"#).unwrap().floors, Some(3));
    }

    #[test]
    fn test_fixture_lists_classified() {
        let text = r#"{"rooms": [{
            "name": "Den",
            "type": "study",
            "doors": [{"x": 1, "y": 0, "width": 0.9, "type": "interior"}],
            "windows": "two",
            "walls": [{"x1": 0}],
            "plumbing": null
        }]}"#;
        let draft = decode_plan(text).unwrap();
        let room = &draft.rooms[0];

        match &room.doors {
            ListField::Present(doors) => {
                assert_eq!(doors.len(), 1);
                assert_eq!(doors[0].kind, DoorKind::Interior);
                assert_eq!(doors[0].rotation, 0.0);
            }
            other => panic!("expected doors, got {:?}", other),
        }
        assert_eq!(room.windows, ListField::Malformed);
        assert_eq!(room.walls, ListField::Malformed);
        assert_eq!(room.plumbing, ListField::Missing);
        assert_eq!(room.furniture, ListField::Missing);
    }

    #[test]
    fn test_camel_case_fields() {
        let text = r#"{"estimatedCost": 1000, "buildingCode": "IBC",
            "rooms": [{"ceilingHeight": 3.1}]}"#;
        let draft = decode_plan(text).unwrap();
        assert_eq!(draft.estimated_cost, Some(1000.0));
        assert_eq!(draft.building_code.as_deref(), Some("IBC"));
        assert_eq!(draft.rooms[0].ceiling_height, Some(3.1));
    }

    #[test]
    fn test_list_field_or_else() {
        let present: ListField<u8> = ListField::Present(vec![1]);
        assert_eq!(present.or_else(|| vec![9]), vec![1]);
        let malformed: ListField<u8> = ListField::Malformed;
        assert_eq!(malformed.or_else(|| vec![9]), vec![9]);
    }
}
