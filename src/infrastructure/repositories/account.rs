use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::{AccountRepository, FindByCol};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::models::account::{AccountRecord, CountRecord, NewAccountRecord};

pub struct AccountRepositoryImpl {
    db: Arc<Database>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<AccountRecord> = self
            .db
            .create(ACCOUNT)
            .content(NewAccountRecord::from(new_account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotReturned(ACCOUNT))
    }

    async fn is_account(&self, email: &str) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE email = type::string($email))[0] or { count: 0 }")
            .bind(("table", ACCOUNT))
            .bind(("email", email.to_owned()))
            .await?;

        let counter = res.take::<Option<CountRecord>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>> {
        let account: Option<AccountRecord> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {column} = type::string($value) LIMIT 1"
            ))
            .bind(("table", ACCOUNT))
            .bind(("value", column.value()))
            .await?
            .take(0)?;

        Ok(account.map(Into::into))
    }
}
