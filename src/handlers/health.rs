use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::models::ApiResponse;
use crate::registry::CollectionRegistry;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    collections: usize,
}

pub async fn health_check(registry: Option<web::Data<CollectionRegistry>>) -> Result<HttpResponse> {
    let status = HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        collections: registry.map(|r| r.len()).unwrap_or(0),
    };
    let response = ApiResponse::success_with_message(status, "Service is healthy");
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
