use crate::api::error::ApiResult;
use crate::api::dto::lead::LeadsDTO;
use crate::domain::models::lead::Lead;

use actix_web::{HttpResponse, get};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(list_leads);
}

#[utoipa::path(
    responses(
        (status = 200, body = LeadsDTO, description = "Fixed list of leads"),
    ),
    tag = "Leads",
)]
#[get("/leads")]
pub async fn list_leads() -> ApiResult {
    Ok(HttpResponse::Ok().json(LeadsDTO::from(Lead::fixtures())))
}
