//! `Inspect` for parsed JSON documents
//!
//! Arrays are array-like, objects are composites whose keys are slots of
//! declared type `Value`, strings are byte arrays and numbers/booleans are
//! objects with a single primitive slot. `null` is a null slot or element.

use std::borrow::Cow;
use std::mem::size_of;

use serde_json::Value;

use super::{ArrayShape, Element, Inspect, Shape, Slot};

impl Inspect for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Array(items) => Shape::Array(ArrayShape::references(items.iter().map(<Value as Element>::get))),
            Value::Object(map) => Shape::composite(
                map.iter()
                    .map(|(key, value)| Slot::field(key.clone(), value)),
            ),
            Value::String(_) => Shape::Array(ArrayShape::primitive()),
            Value::Bool(_) => Shape::composite([Slot::primitive("value", "bool")]),
            Value::Number(_) => Shape::composite([Slot::primitive("value", "f64")]),
            Value::Null => Shape::Composite(Vec::new()),
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Value::Array(_) => "Value[]",
            Value::Object(_) => "Map",
            Value::String(_) => "String",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::Null => "Null",
        })
    }

    fn shallow_size(&self) -> u64 {
        let own = size_of::<Value>();
        let heap = match self {
            Value::Array(items) => items.capacity() * size_of::<Value>(),
            Value::Object(map) => map
                .keys()
                .map(|key| size_of::<String>() + size_of::<Value>() + key.capacity())
                .sum(),
            Value::String(text) => text.capacity(),
            Value::Bool(_) | Value::Number(_) | Value::Null => 0,
        };
        (own + heap) as u64
    }

    fn declared_name() -> Cow<'static, str> {
        Cow::Borrowed("Value")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_keys_become_slots() {
        let doc = json!({"name": "fig", "parent": null});
        let Shape::Composite(slots) = doc.shape() else {
            panic!("expected composite shape");
        };
        let summary: Vec<(&str, &str, bool)> = slots
            .iter()
            .map(|s| (s.name(), s.declared_type(), s.read().ok().flatten().is_some()))
            .collect();
        assert_eq!(
            summary,
            vec![("name", "Value", true), ("parent", "Value", false)]
        );
    }

    #[test]
    fn test_array_nulls_are_empty_elements() {
        let doc = json!([1, null, 3]);
        let Shape::Array(array) = doc.shape() else {
            panic!("expected array shape");
        };
        assert_eq!(array.elements().len(), 3);
        assert!(array.elements()[1].is_none());
    }

    #[test]
    fn test_type_names_per_variant() {
        assert_eq!(json!([]).type_name(), "Value[]");
        assert_eq!(json!({}).type_name(), "Map");
        assert_eq!(json!("s").type_name(), "String");
        assert_eq!(json!(1.5).type_name(), "Number");
        assert_eq!(json!(true).type_name(), "Bool");
    }

    #[test]
    fn test_null_reads_as_empty_storage() {
        assert!(Element::get(&Value::Null).is_none());
        assert!(Element::get(&Some(Value::Null)).is_none());
        assert!(Element::get(&Box::new(Value::Null)).is_none());
        assert!(Element::get(&json!(0)).is_some());
    }
}
