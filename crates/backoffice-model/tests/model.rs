//! Tests for backoffice-model types.

use backoffice_model::{FieldName, FieldValue, ProjectId, Record, RoleId};

#[test]
fn ids_trim_and_validate() {
    assert_eq!(RoleId::new(" ADMIN ").unwrap().as_str(), "ADMIN");
    assert_eq!(
        ProjectId::new("agricultura").unwrap().as_str(),
        "agricultura"
    );
    assert!(FieldName::new("\t").is_err());
}

#[test]
fn record_deserializes_from_backend_json() {
    let json = r#"{"nombre":"Arroz","hectareas":12.5,"activo":true,"nota":null}"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");

    let nombre = FieldName::new("nombre").unwrap();
    let hectareas = FieldName::new("hectareas").unwrap();
    let activo = FieldName::new("activo").unwrap();
    let nota = FieldName::new("nota").unwrap();

    assert_eq!(
        record.get(&nombre),
        Some(&FieldValue::Text("Arroz".to_string()))
    );
    assert_eq!(record.get(&hectareas), Some(&FieldValue::Number(12.5)));
    assert_eq!(record.get(&activo), Some(&FieldValue::Bool(true)));
    assert_eq!(record.get(&nota), Some(&FieldValue::Missing));
}

#[test]
fn search_text_coercion() {
    let json = r#"{"n":3.0,"b":false,"t":"Maíz","m":null}"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");

    assert_eq!(record.search_text(&FieldName::new("n").unwrap()), "3");
    assert_eq!(record.search_text(&FieldName::new("b").unwrap()), "false");
    assert_eq!(record.search_text(&FieldName::new("t").unwrap()), "Maíz");
    assert_eq!(record.search_text(&FieldName::new("m").unwrap()), "");
    // Absent fields coerce the same way as nulls.
    assert_eq!(record.search_text(&FieldName::new("absent").unwrap()), "");
}

#[test]
fn record_serialization_round_trip() {
    let mut record = Record::new();
    record.insert(
        FieldName::new("nombre").unwrap(),
        FieldValue::Text("Trigo".to_string()),
    );
    record.insert(FieldName::new("id").unwrap(), FieldValue::Number(7.0));

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: Record = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}
