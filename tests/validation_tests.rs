//! Checks inferred schemas against an independent JSON Schema validator.

use schema_by_example::{infer, UnsupportedKind};
use serde_json::{json, Value};

fn schema_for(example: &Value) -> Value {
    infer(example).unwrap().to_value()
}

fn accepts(schema: &Value, instance: &Value) -> bool {
    jsonschema::is_valid(schema, instance)
}

#[test]
fn singular_data_types() {
    let example = json!({
        "foo": "i am a string",
        "bar": 5,
        "quux": false,
    });
    let schema = schema_for(&example);

    assert_eq!(
        json!({
            "type": "object",
            "required": ["foo", "bar", "quux"],
            "properties": {
                "foo": { "type": "string" },
                "bar": { "type": "number" },
                "quux": { "type": "boolean" },
            },
        }),
        schema
    );
    assert!(accepts(&schema, &example));

    assert!(accepts(
        &schema,
        &json!({ "foo": "another", "bar": -1.5, "quux": true })
    ));
    assert!(!accepts(&schema, &json!({ "foo": "x", "bar": 5 })));
    assert!(!accepts(
        &schema,
        &json!({ "foo": 5, "bar": 5, "quux": false })
    ));
}

#[test]
fn first_item_of_list() {
    let example = json!([5]);
    let schema = schema_for(&example);

    assert_eq!(json!({ "type": "array", "items": { "type": "number" } }), schema);
    assert!(accepts(&schema, &example));
    assert!(accepts(&schema, &json!([1, 2.5, -3])));
    assert!(!accepts(&schema, &json!([1, "two"])));
}

#[test]
fn complex_nested_structures() {
    let example = json!({ "foo": [{ "bar": [5] }] });
    let schema = schema_for(&example);

    assert_eq!(
        json!({
            "type": "object",
            "required": ["foo"],
            "properties": {
                "foo": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["bar"],
                        "properties": {
                            "bar": {
                                "type": "array",
                                "items": { "type": "number" },
                            },
                        },
                    },
                },
            },
        }),
        schema
    );
    assert!(accepts(&schema, &example));
    assert!(accepts(
        &schema,
        &json!({ "foo": [{ "bar": [] }, { "bar": [1, 2], "extra": null }] })
    ));
    assert!(!accepts(&schema, &json!({ "foo": [{ "bar": ["5"] }] })));
}

#[test]
fn empty_array_allows_arbitrary_items() {
    let example = json!([]);
    let schema = schema_for(&example);

    assert_eq!(json!({ "type": "array" }), schema);
    assert!(accepts(&schema, &example));
    assert!(accepts(&schema, &json!([2, "foo", null, null, false])));
    assert!(!accepts(&schema, &json!({})));
}

#[test]
fn rejects_unrecognized_input() {
    for example in &[
        json!(null),
        json!({ "foo": null }),
        json!([null]),
        json!({ "foo": [{ "bar": [null] }] }),
    ] {
        let err = infer(example).unwrap_err();
        assert_eq!(&UnsupportedKind::Null, err.kind());
    }
}
