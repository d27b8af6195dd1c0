use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::usecases::sign_in::SignInUseCase;
use crate::domain::usecases::sign_up::SignUpUseCase;

use crate::api::dto::account::{AccountDTO, CredentialsDTO, SignUpDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(sign_up).service(sign_in);
}

#[utoipa::path(
    responses(
        (status = 201, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
    ),
    request_body = SignUpDTO,
    tag = "Account",
)]
#[post("/sign-up")]
pub async fn sign_up(
    payload: Json<SignUpDTO>,
    sign_up_use_case: State<Arc<dyn SignUpUseCase>>,
) -> ApiResult {
    sign_up_use_case.execute(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created().finish())
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/sign-in")]
pub async fn sign_in(
    payload: Json<CredentialsDTO>,
    sign_in_use_case: State<Arc<dyn SignInUseCase>>,
) -> ApiResult {
    let account = sign_in_use_case.execute(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        dev::ServiceResponse,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;
    use crate::domain::error::{AppResult, message};
    use crate::domain::models::account::{Account, CreateAccount, Credentials};

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    /// Replies with a fixed outcome regardless of input.
    struct Stub(fn() -> AppResult<Account>);

    #[async_trait]
    impl SignUpUseCase for Stub {
        async fn execute(&self, _: CreateAccount) -> AppResult<()> {
            (self.0)().map(|_| ())
        }
    }

    #[async_trait]
    impl SignInUseCase for Stub {
        async fn execute(&self, _: Credentials) -> AppResult<Account> {
            (self.0)()
        }
    }

    fn ana() -> AppResult<Account> {
        Ok(Account {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "digest".to_string(),
        })
    }

    async fn send(uri: &str, data: Value, outcome: fn() -> AppResult<Account>) -> ServiceResponse {
        let sign_up_use_case: Arc<dyn SignUpUseCase> = Arc::new(Stub(outcome));
        let sign_in_use_case: Arc<dyn SignInUseCase> = Arc::new(Stub(outcome));

        let app = test::init_service(
            App::new()
                .into_utoipa_app()
                .configure(routes)
                .into_app()
                .app_data(web::Data::new(sign_up_use_case))
                .app_data(web::Data::new(sign_in_use_case)),
        )
        .await;

        TestRequest::post()
            .uri(uri)
            .set_json(data)
            .send_request(&app)
            .await
    }

    fn sign_up_payload() -> Value {
        json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "secret"
        })
    }

    #[actix_web::test]
    async fn test_sign_up_created() {
        let res = send("/sign-up", sign_up_payload(), ana).await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body = test::read_body(res).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_sign_up_account_already_exists() {
        let res = send("/sign-up", sign_up_payload(), || {
            Err(AppError::AccountAlreadyExists())
        })
        .await;

        assert_eq!(res.status(), StatusCode::CONFLICT);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(
            err,
            Error {
                code: 409,
                message: "Account already exists".to_string()
            }
        );
    }

    #[actix_web::test]
    async fn test_sign_up_unexpected_failure() {
        let res = send("/sign-up", sign_up_payload(), || {
            Err(AppError::InternalError().trace("connection reset"))
        })
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.message, message::INTERNAL_ERROR);
    }

    #[actix_web::test]
    async fn test_sign_up_invalid_email_format() {
        let payload = json!({
            "name": "Ana",
            "email": "not-an-email",
            "password": "secret"
        });

        let res = send("/sign-up", payload, ana).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 422);
        assert!(err.message.contains("Invalid email format"));
    }

    #[actix_web::test]
    async fn test_sign_up_empty_password() {
        let payload = json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": ""
        });

        let res = send("/sign-up", payload, ana).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert!(
            err.message
                .contains("Password must contain between 1 and 128 characters")
        );
    }

    #[actix_web::test]
    async fn test_sign_up_missing_name() {
        let payload = json!({
            "email": "ana@x.com",
            "password": "secret"
        });

        let res = send("/sign-up", payload, ana).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 400);
    }

    #[actix_web::test]
    async fn test_sign_up_email_too_long() {
        let payload = json!({
            "name": "Ana",
            "email": format!("{}@example.com", "a".repeat(250)),
            "password": "secret"
        });

        let res = send("/sign-up", payload, ana).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: Error = test::read_body_json(res).await;
        assert!(
            err.message
                .contains("Email must contain between 3 and 255 characters")
        );
    }

    #[actix_web::test]
    async fn test_sign_in_success() {
        let payload = json!({ "email": "ana@x.com", "password": "secret" });

        let res = send("/sign-in", payload, ana).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({ "id": "1", "name": "Ana", "email": "ana@x.com" })
        );
    }

    #[actix_web::test]
    async fn test_sign_in_unauthorized() {
        let payload = json!({ "email": "ana@x.com", "password": "wrong" });

        let res = send("/sign-in", payload, || Err(AppError::Unauthorized())).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 401);
        assert_eq!(err.message, message::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_sign_in_missing_password() {
        let res = send("/sign-in", json!({ "email": "ana@x.com" }), ana).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_sign_in_empty_password() {
        let payload = json!({ "email": "ana@x.com", "password": "" });

        let res = send("/sign-in", payload, ana).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 422);
        assert!(err.message.contains("Password must not be empty"));
    }
}
