use utoipa_actix_web::service_config::ServiceConfig;

mod controllers;
mod dto;
mod error;
mod middlewares;

pub fn routes(cfg: &mut ServiceConfig) {
    controllers::account::routes(cfg);
    controllers::leads::routes(cfg);
}
