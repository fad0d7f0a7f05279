//! HTTP 请求处理器

pub mod collections;
pub mod health;
pub mod tasks;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(collections::config)
            .configure(tasks::config),
    );
}
