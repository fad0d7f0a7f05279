//! 后台任务接口
//!
//! - GET /tasks/{task_id} - 查询刷新任务状态和进度

use actix_web::{web, HttpResponse, Result};

use crate::models::ApiResponse;
use crate::registry::CollectionRegistry;

/// 查询任务
///
/// GET /api/v1/tasks/{task_id}
pub async fn get_task(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let task_id = path.into_inner();
    match registry.tasks().get(&task_id).await {
        Some(task) => Ok(HttpResponse::Ok().json(ApiResponse::success(task))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error_with_code(
            format!("任务不存在: {}", task_id),
            "TASK_NOT_FOUND",
        ))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/tasks").route("/{task_id}", web::get().to(get_task)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use crate::providers::fetcher::testing::StaticFetcher;
    use crate::services::BatchSettings;
    use crate::storage::MemoryStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn known_and_unknown_tasks() {
        let registry = web::Data::new(CollectionRegistry::from_catalog(
            Arc::new(MemoryStore::new()),
            Arc::new(StaticFetcher::new()),
            BatchSettings::default(),
        ));
        let task = registry
            .tasks()
            .create("bond_cb_jsl", "更新可转债数据".to_string())
            .await;
        let app = test::init_service(
            App::new()
                .app_data(registry.clone())
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/tasks/{}", task.task_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["collection_name"], "bond_cb_jsl");

        let req = test::TestRequest::get()
            .uri("/api/v1/tasks/no-such-task")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "TASK_NOT_FOUND");
    }
}
