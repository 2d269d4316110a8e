//! Encoding the team model into JSON.

mod model;

use anyhow::Result;
use jsonsz::{JsonSz, MappingConfig};
use serde_json::{json, Value};

use model::{contributor, full_contributor, glasgow_address, init_logging, Contributor, Team};

#[test]
fn test_encode_primitive_attributes() -> Result<()> {
    init_logging();

    let mut contributor = full_contributor();
    contributor.address = None;
    let json = jsonsz::encode_one(&mut contributor)?;

    assert_eq!(json["id"], json!(100));
    assert_eq!(json["firstname"], json!("John"));
    assert_eq!(json["lastname"], json!("Doe"));
    assert_eq!(json["title"], json!("Software Engineer"));
    assert_eq!(json["age"].as_f64(), Some(40.0));
    assert_eq!(json["committer"], json!(true));
    assert_eq!(json["weight"].as_f64().map(|w| w as f32), Some(60.2));
    assert_eq!(json["githubReposList"], json!(["foo", "bar"]));
    assert_eq!(json["dictionary"], json!({"foo": "bar"}));
    assert!(!json.contains_key("address"));
    Ok(())
}

#[test]
fn test_encode_omits_missing_values() -> Result<()> {
    init_logging();

    let mut contributor = Contributor {
        id: Some(100),
        title: Some("Software Engineer".to_string()),
        ..Default::default()
    };
    let json = jsonsz::encode_one(&mut contributor)?;

    assert_eq!(
        Value::Object(json),
        json!({"id": 100, "title": "Software Engineer"})
    );
    Ok(())
}

#[test]
fn test_encode_one_to_one_relationship() -> Result<()> {
    init_logging();

    let mut contributor = Contributor {
        firstname: Some("John".to_string()),
        address: Some(glasgow_address()),
        ..Default::default()
    };
    let json = jsonsz::encode_one(&mut contributor)?;

    assert_eq!(json["firstname"], json!("John"));
    assert_eq!(
        json["address"],
        json!({
            "street": "Buchanan Street",
            "poBox": 123,
            "city": "Glasgow",
            "country": "UK"
        })
    );
    Ok(())
}

#[test]
fn test_encode_one_to_many_relationship() -> Result<()> {
    init_logging();

    let mut team = Team {
        name: Some("AeroGear".to_string()),
        contributors: Some(vec![contributor(100, "John"), contributor(101, "Maria")]),
    };
    let json = jsonsz::encode_one(&mut team)?;

    assert_eq!(json["name"], json!("AeroGear"));
    assert_eq!(
        json["contributors"],
        json!([
            {"id": 100, "firstname": "John"},
            {"id": 101, "firstname": "Maria"}
        ])
    );
    Ok(())
}

#[test]
fn test_encode_empty_collection_omits_key() -> Result<()> {
    init_logging();

    let mut team = Team {
        name: Some("AeroGear".to_string()),
        contributors: Some(Vec::new()),
    };
    let json = jsonsz::encode_one(&mut team)?;

    assert!(!json.contains_key("contributors"));
    assert_eq!(Value::Object(json), json!({"name": "AeroGear"}));
    Ok(())
}

#[test]
fn test_encode_does_not_modify_object() -> Result<()> {
    init_logging();

    let mut team = Team {
        name: Some("AeroGear".to_string()),
        contributors: Some(vec![full_contributor()]),
    };
    let before = team.clone();
    jsonsz::encode_one(&mut team)?;

    assert_eq!(team, before);
    Ok(())
}

#[test]
fn test_encode_non_finite_number() -> Result<()> {
    init_logging();

    let mut contributor = Contributor {
        firstname: Some("John".to_string()),
        age: Some(f64::NAN),
        ..Default::default()
    };

    let json = jsonsz::encode_one(&mut contributor)?;
    assert!(!json.contains_key("age"));

    let strict = JsonSz::with_config(MappingConfig::strict());
    let err = strict.encode_one(&mut contributor).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch at 'age': expected number, got non-finite number"
    );
    Ok(())
}

#[test]
fn test_encode_many_and_to_string() -> Result<()> {
    init_logging();

    let serializer = JsonSz::new();
    let mut contributors = vec![contributor(100, "John"), contributor(101, "Maria")];

    let items = serializer.encode_many(&mut contributors)?;
    assert_eq!(
        items,
        json!([
            {"id": 100, "firstname": "John"},
            {"id": 101, "firstname": "Maria"}
        ])
    );

    let text = serializer.encode_to_string(&mut contributors[0])?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, json!({"id": 100, "firstname": "John"}));
    Ok(())
}
