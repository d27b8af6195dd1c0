use actix_web::web;
use async_trait::async_trait;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use crate::config::HashingConfig;
use crate::domain::{error::AppResult, services::password::PasswordService};

/// Argon2id hasher. Hashing runs on the blocking pool so request workers
/// are not stalled by the key derivation.
#[derive(Clone)]
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new(config: &HashingConfig) -> core::result::Result<Self, argon2::Error> {
        let params = Params::new(config.memory_kib, config.cost, Params::DEFAULT_P_COST, None)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl PasswordService for Argon2PasswordService {
    async fn hash(&self, password: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        Ok(web::block(move || encrypt_password(&argon2, &password)).await??)
    }

    async fn verify(&self, password: &str, hash: &str) -> AppResult<()> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        Ok(web::block(move || verify_password(&argon2, &password, &hash)).await??)
    }
}

fn encrypt_password(argon2: &Argon2, password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

fn verify_password(argon2: &Argon2, password: &str, hash: &str) -> Result<()> {
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
