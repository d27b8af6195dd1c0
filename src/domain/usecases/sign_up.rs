use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::CreateAccount;

#[async_trait]
pub trait SignUpUseCase: 'static + Sync + Send {
    async fn execute(&self, new_account: CreateAccount) -> AppResult<()>;
}
