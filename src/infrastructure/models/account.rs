use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::account::{Account, CreateAccount};

/// Row of the `account` table as SurrealDB returns it.
#[derive(Deserialize)]
pub struct AccountRecord {
    id: Thing,
    name: String,
    email: String,
    password: String,
}

/// Content written on insert; the id is assigned by SurrealDB.
#[derive(Serialize)]
pub struct NewAccountRecord {
    name: String,
    email: String,
    password: String,
}

impl From<CreateAccount> for NewAccountRecord {
    fn from(account: CreateAccount) -> Self {
        NewAccountRecord {
            name: account.name,
            email: account.email,
            password: account.password,
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account {
            id: record.id.id.to_raw(),
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

#[derive(Deserialize)]
pub struct CountRecord {
    pub count: i64,
}
