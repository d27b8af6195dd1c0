use std::sync::Arc;

use crate::config::HashingConfig;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::password::PasswordService;
use crate::domain::usecases::sign_in::SignInUseCase;
use crate::domain::usecases::sign_up::SignUpUseCase;

use crate::services::password::Argon2PasswordService;
use crate::usecases::sign_in::SignInUseCaseImpl;
use crate::usecases::sign_up::SignUpUseCaseImpl;

use crate::infrastructure::databases::surrealdb::Database;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub sign_up_use_case: Arc<dyn SignUpUseCase>,
    pub sign_in_use_case: Arc<dyn SignInUseCase>,
}

impl Container {
    pub fn new(conn: Database, hashing: &HashingConfig) -> Result<Self, argon2::Error> {
        let db = Arc::new(conn);

        let account_repository = account_repository(db);
        let password_service = password_service(hashing)?;

        Ok(Container {
            sign_up_use_case: sign_up_use_case(
                account_repository.clone(),
                password_service.clone(),
            ),
            sign_in_use_case: sign_in_use_case(account_repository, password_service),
        })
    }
}

fn account_repository(db: Arc<Database>) -> Arc<dyn AccountRepository> {
    Arc::new(AccountRepositoryImpl::new(db))
}

fn password_service(hashing: &HashingConfig) -> Result<Arc<dyn PasswordService>, argon2::Error> {
    Ok(Arc::new(Argon2PasswordService::new(hashing)?))
}

fn sign_up_use_case(
    repository: Arc<dyn AccountRepository>,
    password_service: Arc<dyn PasswordService>,
) -> Arc<dyn SignUpUseCase> {
    Arc::new(SignUpUseCaseImpl::new(repository, password_service))
}

fn sign_in_use_case(
    repository: Arc<dyn AccountRepository>,
    password_service: Arc<dyn PasswordService>,
) -> Arc<dyn SignInUseCase> {
    Arc::new(SignInUseCaseImpl::new(repository, password_service))
}
