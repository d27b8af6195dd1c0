use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, Credentials};

#[async_trait]
pub trait SignInUseCase: 'static + Sync + Send {
    async fn execute(&self, credentials: Credentials) -> AppResult<Account>;
}
