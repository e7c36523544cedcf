//! Typed reads of entries that crossed the transport boundary.

use kvstore_core::{
    get_array, get_boolean, get_integer, get_number, get_object, get_string, ElementDataType,
    KvsError,
};
use kvstore_testkit::prelude::*;

#[test]
fn sample_collection_reads_back_typed() {
    let entries = transport_roundtrip(&sample_collection());

    let display_name = get_object(APP_NAME, entries.find("Table", "default", "displayName"));
    assert_eq!(
        display_name.unwrap().as_deref(),
        Some(r#"{"text":"Visits"}"#)
    );

    let view = get_string(entries.find("Table", "default", "defaultViewType")).unwrap();
    assert_eq!(view.as_deref(), Some("SPREADSHEET"));

    let order: Vec<String> =
        get_array(APP_NAME, entries.find("Table", "default", "colOrder"))
            .unwrap()
            .unwrap();
    assert_eq!(order, ["name", "age", "visited"]);

    assert_eq!(
        get_boolean(entries.find("Column", "age", "displayVisible")).unwrap(),
        Some(true)
    );
    assert_eq!(
        get_integer(entries.find("Column", "age", "width")).unwrap(),
        Some(120)
    );
}

#[test]
fn absent_property_is_not_an_error() {
    let entries = sample_collection();
    let missing = entries.find("Column", "age", "nope");
    assert!(missing.is_none());
    assert_eq!(get_number(missing).unwrap(), None);
    assert_eq!(get_object(APP_NAME, missing).unwrap(), None);
}

#[test]
fn wrong_accessor_is_a_type_mismatch() {
    let entries = sample_collection();
    let width = entries.find("Column", "age", "width");
    let err = get_number(width).unwrap_err();
    assert!(matches!(
        err,
        KvsError::TypeMismatch { ref key, .. } if key.as_deref() == Some("width")
    ));
}

#[test]
fn literal_scenarios() {
    let number = typed_entry(ElementDataType::Number, Some("404.22"));
    assert!((get_number(Some(&number)).unwrap().unwrap() - 404.22).abs() < 1e-9);

    let integer = typed_entry(ElementDataType::Integer, Some("404"));
    assert_eq!(get_integer(Some(&integer)).unwrap(), Some(404));

    let fractional = typed_entry(ElementDataType::Integer, Some("404.22"));
    assert!(get_number(Some(&fractional)).unwrap_err().is_type_mismatch());
    assert!(get_integer(Some(&fractional)).unwrap_err().is_parse_error());

    let one = typed_entry(ElementDataType::Bool, Some("1"));
    assert_eq!(get_boolean(Some(&one)).unwrap(), Some(true));
    let zero = typed_entry(ElementDataType::Bool, Some("0"));
    assert_eq!(get_boolean(Some(&zero)).unwrap(), Some(false));
    let wrong = typed_entry(ElementDataType::Bool, Some("wrongValue"));
    assert!(get_boolean(Some(&wrong)).unwrap_err().is_parse_error());

    let array = typed_entry(ElementDataType::Array, Some(r#"["a","b"]"#));
    assert_eq!(
        get_array::<String>(APP_NAME, Some(&array)).unwrap(),
        Some(vec!["a".to_string(), "b".to_string()])
    );
    let not_json = typed_entry(ElementDataType::Array, Some("notjson"));
    assert!(get_array::<String>(APP_NAME, Some(&not_json))
        .unwrap_err()
        .is_parse_error());
}
