//! Shared domain model for the integration tests: a team of contributors,
//! each with an optional postal address.

#![allow(dead_code)]

use jsonsz::{bind, Cursor, Mappable, Result};
use serde_json::{Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for tests
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: Option<String>,
    pub po_box: Option<i64>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Mappable for Address {
    fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()> {
        bind(&mut self.street, json.index("street"))?;
        bind(&mut self.po_box, json.index("poBox"))?;
        bind(&mut self.city, json.index("city"))?;
        bind(&mut self.country, json.index("country"))?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contributor {
    pub id: Option<i64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub title: Option<String>,
    pub age: Option<f64>,
    pub committer: Option<bool>,
    pub weight: Option<f32>,
    pub github_repos_list: Option<Vec<Value>>,
    pub dictionary: Option<Map<String, Value>>,
    pub address: Option<Address>,
}

impl Mappable for Contributor {
    fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()> {
        bind(&mut self.id, json.index("id"))?;
        bind(&mut self.firstname, json.index("firstname"))?;
        bind(&mut self.lastname, json.index("lastname"))?;
        bind(&mut self.title, json.index("title"))?;
        bind(&mut self.age, json.index("age"))?;
        bind(&mut self.committer, json.index("committer"))?;
        bind(&mut self.weight, json.index("weight"))?;
        bind(&mut self.github_repos_list, json.index("githubReposList"))?;
        bind(&mut self.dictionary, json.index("dictionary"))?;
        bind(&mut self.address, json.index("address"))?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Team {
    pub name: Option<String>,
    pub contributors: Option<Vec<Contributor>>,
}

impl Mappable for Team {
    fn describe_mapping(&mut self, json: &mut Cursor<'_>) -> Result<()> {
        bind(&mut self.name, json.index("name"))?;
        bind(&mut self.contributors, json.index("contributors"))?;
        Ok(())
    }
}

pub fn glasgow_address() -> Address {
    Address {
        street: Some("Buchanan Street".to_string()),
        po_box: Some(123),
        city: Some("Glasgow".to_string()),
        country: Some("UK".to_string()),
    }
}

pub fn contributor(id: i64, firstname: &str) -> Contributor {
    Contributor {
        id: Some(id),
        firstname: Some(firstname.to_string()),
        ..Default::default()
    }
}

/// A contributor with every field populated.
pub fn full_contributor() -> Contributor {
    let mut dictionary = Map::new();
    dictionary.insert("foo".to_string(), Value::String("bar".to_string()));

    Contributor {
        id: Some(100),
        firstname: Some("John".to_string()),
        lastname: Some("Doe".to_string()),
        title: Some("Software Engineer".to_string()),
        age: Some(40.0),
        committer: Some(true),
        weight: Some(60.2),
        github_repos_list: Some(vec![
            Value::String("foo".to_string()),
            Value::String("bar".to_string()),
        ]),
        dictionary: Some(dictionary),
        address: Some(glasgow_address()),
    }
}
