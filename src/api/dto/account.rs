use crate::api::dto::validation::{is_email, is_name, is_password};
use crate::domain::models::account::CreateAccount;
use crate::domain::models::account::{Account, Credentials};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct SignUpDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Ana"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("ana@x.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("secret"))]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("ana@x.com"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    #[schema(examples("secret"))]
    pub password: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
        }
    }
}

impl From<SignUpDTO> for CreateAccount {
    fn from(sign_up: SignUpDTO) -> Self {
        CreateAccount {
            name: sign_up.name,
            email: sign_up.email,
            password: sign_up.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}
