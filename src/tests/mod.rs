
pub mod utils;

use std::sync::Arc;

use serde::Deserialize;

use rstest::*;

use crate::config::SurrealDbConfig;
use crate::container::Container;
use crate::infrastructure::databases::surrealdb::{self, Database};
use crate::services::password::fixtures::hashing_config;

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
}

/// Full application state over a fresh in-memory SurrealDB.
#[fixture]
async fn context() -> TestContext {
    let db = surrealdb::connect(&SurrealDbConfig {
        endpoint: "mem://".to_string(),
        namespace: "test".to_string(),
        database: "test".to_string(),
        ..Default::default()
    })
    .await
    .unwrap();

    let container = Arc::new(Container::new(db.clone(), &hashing_config()).unwrap());

    TestContext { db, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
