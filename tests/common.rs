#![cfg(all(feature = "std", feature = "chrono"))]

use std::path::Path;

use bsonview::{ElementType, Value};
use csv::ReaderBuilder;

#[test]
fn get_dotted_profile() {
    const PATH: &str = "fixtures/profile.bson";
    let data = std::fs::read(PATH).unwrap();
    Validator::new(PATH).validate(Value::document(&data));
}

#[test]
fn get_dotted_bulk() {
    const PATH: &str = "fixtures/bulk.bson";
    let data = std::fs::read(PATH).unwrap();
    Validator::new(PATH).validate(Value::document(&data));
}

#[test]
fn get_segments_bulk() {
    const PATH: &str = "fixtures/bulk.bson";
    let data = std::fs::read(PATH).unwrap();

    for key in ["list-0", "list-49"] {
        let list = bsonview::get(&data, &[key]);
        assert!(list.exists());
        assert_eq!(list.kind(), ElementType::Array);

        let mut items = Vec::with_capacity(list.len());
        list.iter_array(|v| {
            items.push(v.i64());
            std::ops::ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(items, (1..=10).collect::<Vec<_>>());
    }

    assert_eq!(bsonview::get(&data, &["value-48"]).i64(), 48);
}

#[test]
fn to_map_bulk() {
    const PATH: &str = "fixtures/bulk.bson";
    let data = std::fs::read(PATH).unwrap();
    let root = Value::document(&data);

    assert_eq!(root.len(), 100);
    assert_eq!(root.to_map().unwrap().len(), 100);
    assert_eq!(root.to_map_sized(200).unwrap().len(), 100);
}

/// Expected `(path, type, rendering)` rows for a fixture.
struct Validator(Vec<(String, String, String)>);

impl Validator {
    fn new(fixture: impl AsRef<Path>) -> Self {
        let rows = ReaderBuilder::new()
            .has_headers(false)
            .from_path(fixture.as_ref().with_extension("csv"))
            .unwrap()
            .into_deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        Self(rows)
    }

    fn validate(self, root: Value<'_>) {
        for (path, tag, expected) in self.0 {
            let value = root.get_dotted(&path);

            let tag = u8::from_str_radix(&tag, 16).unwrap();
            assert_eq!(value.kind(), ElementType::from_tag(tag).unwrap(), "{path}");
            assert_eq!(render(value), expected, "{path}");
        }
    }
}

fn render(value: Value<'_>) -> String {
    match value.kind() {
        ElementType::Double => value.f64().to_string(),
        ElementType::String => value.str().to_string(),
        ElementType::Document | ElementType::Array => value.len().to_string(),
        ElementType::Binary => {
            let (subtype, payload) = value.binary().unwrap();
            format!("{}:{}", hex(&[subtype]), hex(payload))
        }
        ElementType::ObjectId => hex(&value.object_id().unwrap()),
        ElementType::Boolean => value.bool().to_string(),
        ElementType::DateTime => value.time().timestamp_millis().to_string(),
        ElementType::Regex => {
            let (pattern, options) = value.regex().unwrap();
            format!("{pattern}/{options}")
        }
        ElementType::JavaScript => value.js_code().unwrap().to_string(),
        ElementType::Int32 => value.i32().to_string(),
        ElementType::Timestamp => {
            let (seconds, increment) = value.timestamp().unwrap();
            format!("{seconds}:{increment}")
        }
        ElementType::Int64 => value.i64().to_string(),
        ElementType::Decimal128 => hex(value.raw()),
        _ => String::new(),
    }
}

fn hex(r: &[u8]) -> String {
    r.iter().map(|b| format!("{b:02x}")).collect()
}
