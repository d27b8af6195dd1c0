use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::CreateAccount,
    repositories::account::AccountRepository,
    services::password::PasswordService,
    usecases::sign_up::SignUpUseCase,
};

pub struct SignUpUseCaseImpl {
    repository: Arc<dyn AccountRepository>,
    password_service: Arc<dyn PasswordService>,
}

impl SignUpUseCaseImpl {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        password_service: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            repository,
            password_service,
        }
    }
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    #[tracing::instrument(name = "sign up", skip_all, fields(email = %new_account.email))]
    async fn execute(&self, mut new_account: CreateAccount) -> AppResult<()> {
        // Not atomic with the insert below.
        if self.repository.is_account(&new_account.email).await? {
            tracing::warn!("account already exists");
            return Err(AppError::AccountAlreadyExists());
        }

        new_account.password = self.password_service.hash(&new_account.password).await?;

        let account = self.repository.create(new_account).await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(())
    }
}
