#![cfg(feature = "serde")]

use camera_algebra::{Matrix33, Matrix44, Vec3};

#[test]
fn test_vector_serializes_named_fields() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    let back: Vec3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_matrix_serializes_row_major() {
    let m = Matrix44::translate(Vec3::new(5.0, 6.0, 7.0));
    let value = serde_json::to_value(m).unwrap();
    let cells: Vec<f64> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_f64().unwrap())
        .collect();
    assert_eq!(cells[3], 5.0);
    assert_eq!(cells[7], 6.0);
    assert_eq!(cells[11], 7.0);

    let back: Matrix44 = serde_json::from_value(value).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_matrix33_rejects_short_array() {
    let json = r#"{"data":[1.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0]}"#;
    assert!(serde_json::from_str::<Matrix33>(json).is_err());
}
