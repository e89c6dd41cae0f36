//! JSON document scalars.
//!
//! Three codecs share the decode path: `Json` accepts any document,
//! `JsonObject` additionally requires the top level to be an object,
//! and `GeoJson` requires the document to carry a well-formed GeoJSON
//! shape (a `type` tag plus the member that type mandates). Output
//! serialization is compact; `GeoJson` output has its keys sorted,
//! which the map representation already guarantees.

use serde_json::Value;

use crate::literal::Literal;
use crate::scalars::{string_literal, ScalarCodec, ScalarError, ScalarResult};
use crate::value::ScalarValue;

fn decode(scalar: &str, text: &str) -> ScalarResult<Value> {
    serde_json::from_str(text).map_err(|_| {
        ScalarError::Value(format!(
            "Value is not a valid {} value: < {} >",
            scalar, text
        ))
    })
}

fn require_string(scalar: &str, value: ScalarValue) -> ScalarResult<String> {
    match value {
        ScalarValue::String(s) => Ok(s),
        other => Err(ScalarError::Type(format!(
            "{} cannot represent values other than strings: < {} >",
            scalar, other
        ))),
    }
}

/// Converts a scalar value to a serializable JSON tree, or reports the
/// offending type by name.
fn to_json_tree(scalar: &str, value: &ScalarValue) -> ScalarResult<Value> {
    let tree = match value {
        ScalarValue::Json(v) => Some(v.clone()),
        ScalarValue::Boolean(b) => Some(Value::Bool(*b)),
        ScalarValue::Int(i) => Some(Value::from(*i)),
        ScalarValue::BigInt(i) => i64::try_from(*i).ok().map(Value::from),
        ScalarValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        ScalarValue::String(s) => Some(Value::String(s.clone())),
        _ => None,
    };
    tree.ok_or_else(|| {
        ScalarError::Value(format!(
            "Object of type {} is not {} serializable",
            value.type_name(),
            scalar
        ))
    })
}

/// The member each GeoJSON type tag mandates alongside itself.
fn geojson_required_member(type_tag: &str) -> Option<&'static str> {
    match type_tag {
        "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "Polygon"
        | "MultiPolygon" => Some("coordinates"),
        "GeometryCollection" => Some("geometries"),
        "Feature" => Some("geometry"),
        "FeatureCollection" => Some("features"),
        _ => None,
    }
}

fn check_geojson_shape(tree: &Value) -> bool {
    let Value::Object(members) = tree else {
        return false;
    };
    let Some(Value::String(type_tag)) = members.get("type") else {
        return false;
    };
    match geojson_required_member(type_tag) {
        Some(member) => members.contains_key(member),
        None => false,
    }
}

/// Scalar which handles JSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ScalarCodec for Json {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        decode("JSON", s).ok().map(ScalarValue::Json)
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let text = require_string("JSON", value)?;
        decode("JSON", &text).map(ScalarValue::Json)
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let tree = to_json_tree("JSON", &value)?;
        Ok(ScalarValue::String(tree.to_string()))
    }
}

/// Scalar which handles JSON objects
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObject;

impl ScalarCodec for JsonObject {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.coerce_input(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let text = require_string("JSON", value)?;
        let tree = decode("JSON", &text)?;
        if !tree.is_object() {
            return Err(ScalarError::Value(format!(
                "Value is not a valid JSON object: < {} >",
                text
            )));
        }
        Ok(ScalarValue::Json(tree))
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Json(tree @ Value::Object(_)) => {
                Ok(ScalarValue::String(tree.to_string()))
            }
            other => Err(ScalarError::unrepresentable("JSONObject", &other)),
        }
    }
}

/// Scalar which handles GeoJSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJson;

impl ScalarCodec for GeoJson {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        let s = string_literal(literal)?;
        self.coerce_input(ScalarValue::from(s)).ok()
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let text = require_string("GeoJSON", value)?;
        let tree = decode("GeoJSON", &text)?;
        if !check_geojson_shape(&tree) {
            return Err(ScalarError::Value(format!(
                "Value is not a valid GeoJSON value: < {} >",
                text
            )));
        }
        Ok(ScalarValue::Json(tree))
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        let tree = to_json_tree("GeoJSON", &value)?;
        Ok(ScalarValue::String(tree.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_input() {
        let parsed = Json
            .coerce_input(ScalarValue::from(r#"{"key": [1, 2.5, null, true]}"#))
            .unwrap();
        assert_eq!(parsed, ScalarValue::Json(json!({"key": [1, 2.5, null, true]})));

        let err = Json.coerce_input(ScalarValue::from("{nok")).unwrap_err();
        assert!(err.is_value());
        assert_eq!(err.to_string(), "Value is not a valid JSON value: < {nok >");

        let err = Json.coerce_input(ScalarValue::Int(4)).unwrap_err();
        assert!(err.is_type());
        assert_eq!(
            err.to_string(),
            "JSON cannot represent values other than strings: < 4 >"
        );
    }

    #[test]
    fn test_json_output() {
        let out = |v: ScalarValue| Json.coerce_output(v).unwrap();
        assert_eq!(
            out(ScalarValue::Json(json!([1, "a"]))),
            ScalarValue::from(r#"[1,"a"]"#)
        );
        assert_eq!(out(ScalarValue::Int(4)), ScalarValue::from("4"));
        assert_eq!(out(ScalarValue::Boolean(true)), ScalarValue::from("true"));
        assert_eq!(out(ScalarValue::from("a")), ScalarValue::from(r#""a""#));

        // a non-serializable value is a domain error naming its type
        let err = Json
            .coerce_output(ScalarValue::Uuid(uuid::Uuid::nil()))
            .unwrap_err();
        assert!(err.is_value());
        assert_eq!(err.to_string(), "Object of type uuid is not JSON serializable");
        assert!(Json
            .coerce_output(ScalarValue::Float(f64::NAN))
            .unwrap_err()
            .is_value());
    }

    #[test]
    fn test_json_object() {
        let parsed = JsonObject
            .coerce_input(ScalarValue::from(r#"{"a": 1}"#))
            .unwrap();
        assert_eq!(parsed, ScalarValue::Json(json!({"a": 1})));

        let err = JsonObject
            .coerce_input(ScalarValue::from("[1, 2]"))
            .unwrap_err();
        assert!(err.is_value());
        assert_eq!(
            err.to_string(),
            "Value is not a valid JSON object: < [1, 2] >"
        );

        assert_eq!(
            JsonObject
                .coerce_output(ScalarValue::Json(json!({"a": 1})))
                .unwrap(),
            ScalarValue::from(r#"{"a":1}"#)
        );
        assert!(JsonObject
            .coerce_output(ScalarValue::Json(json!([1])))
            .unwrap_err()
            .is_type());
    }

    #[test]
    fn test_geojson_shapes() {
        let ok = |s: &str| GeoJson.coerce_input(ScalarValue::from(s)).is_ok();
        assert!(ok(r#"{"type": "Point", "coordinates": [125.6, 10.1]}"#));
        assert!(ok(r#"{"type": "GeometryCollection", "geometries": []}"#));
        assert!(ok(
            r#"{"type": "Feature", "geometry": null, "properties": {}}"#
        ));
        assert!(ok(r#"{"type": "FeatureCollection", "features": []}"#));

        // missing mandated member, unknown tag, non-object
        assert!(!ok(r#"{"type": "Point"}"#));
        assert!(!ok(r#"{"type": "Circle", "coordinates": []}"#));
        assert!(!ok(r#"{"coordinates": []}"#));
        assert!(!ok("[1, 2]"));

        let err = GeoJson.coerce_input(ScalarValue::from("{nok")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value is not a valid GeoJSON value: < {nok >"
        );
    }

    #[test]
    fn test_geojson_output_sorts_keys() {
        let parsed = GeoJson
            .coerce_input(ScalarValue::from(
                r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#,
            ))
            .unwrap();
        assert_eq!(
            GeoJson.coerce_output(parsed).unwrap(),
            ScalarValue::from(r#"{"coordinates":[1.0,2.0],"type":"Point"}"#)
        );

        let err = GeoJson
            .coerce_output(ScalarValue::Uuid(uuid::Uuid::nil()))
            .unwrap_err();
        assert!(err.is_value());
        assert_eq!(
            err.to_string(),
            "Object of type uuid is not GeoJSON serializable"
        );
    }

    #[test]
    fn test_literals() {
        assert!(Json.parse_literal(&Literal::string("[1]")).is_some());
        assert_eq!(Json.parse_literal(&Literal::string("{nok")), None);
        assert_eq!(Json.parse_literal(&Literal::int("1")), None);
        assert_eq!(JsonObject.parse_literal(&Literal::string("[1]")), None);
        assert_eq!(
            GeoJson.parse_literal(&Literal::string(r#"{"type": "Point"}"#)),
            None
        );
    }
}
