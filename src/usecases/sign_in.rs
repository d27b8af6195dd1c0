use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, Credentials},
    repositories::account::{AccountRepository, FindByCol},
    services::password::PasswordService,
    usecases::sign_in::SignInUseCase,
};

/// Verified against when no account matches, so an unknown email costs the
/// same key derivation as a wrong password.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$Y0ea1poJCyWCd+yPum+ZQQ$IN7I8PjJB2q9RXxcHlgA3wlDXkvt/uyDcu1XP7OiKLw";

pub struct SignInUseCaseImpl {
    repository: Arc<dyn AccountRepository>,
    password_service: Arc<dyn PasswordService>,
}

impl SignInUseCaseImpl {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        password_service: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            repository,
            password_service,
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .repository
            .find_one(FindByCol::Email(email.to_string()))
            .await?)
    }
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    #[tracing::instrument(name = "sign in", skip_all, fields(email = %credentials.email))]
    async fn execute(&self, credentials: Credentials) -> AppResult<Account> {
        let account = self.find_by_email(&credentials.email).await?;

        let hash = account
            .as_ref()
            .map_or(DUMMY_PASSWORD_HASH, |account| account.password.as_str());

        self.password_service
            .verify(&credentials.password, hash)
            .await?;

        account.ok_or_else(AppError::Unauthorized)
    }
}
