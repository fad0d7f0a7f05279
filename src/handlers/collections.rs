//! 数据集合接口处理器
//!
//! 所有集合共用同一组路由，按路径中的集合名称分发到对应服务
//!
//! ## API 列表
//! - GET /collections - 获取集合列表（可按 domain 过滤）
//! - GET /collections/{name} - 分页查询数据，支持排序、模糊匹配，其余查询参数作为等值过滤
//! - GET /collections/{name}/overview - 数据概览
//! - GET /collections/{name}/stats - 数据统计
//! - GET /collections/{name}/fields - 字段信息
//! - POST /collections/{name}/refresh - 从 akshare 更新数据（单次或批量，批量在后台执行）
//! - POST /collections/{name}/export - 导出 CSV / JSON 文件
//! - DELETE /collections/{name}/clear - 清空集合

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::CollectionError;
use crate::models::{
    value_to_param, ApiResponse, CollectionListQuery, Domain, ExportRequest, Params, RefreshMode,
    RefreshOutcome, RefreshRequest, TaskAccepted,
};
use crate::registry::CollectionRegistry;
use crate::services::collection_service::{DEFAULT_LIMIT, FRONTEND_ONLY_PARAMS, MAX_LIMIT};
use crate::services::{CollectionService, DataQuery};

/// 集合错误转 HTTP 响应
fn error_response(err: &CollectionError) -> HttpResponse {
    HttpResponse::build(err.status_code())
        .json(ApiResponse::<()>::error_with_code(err.to_string(), err.code()))
}

/// 解析分页参数
fn parse_number<T: std::str::FromStr>(
    query: &HashMap<String, String>,
    key: &str,
    domain: Domain,
) -> std::result::Result<Option<T>, CollectionError> {
    match query.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| CollectionError::DataValidation {
            domain,
            field: key.to_string(),
            reason: format!("无效的数值: {}", raw),
        }),
    }
}

/// 解析 JSON 请求体，空请求体取默认值，格式错误返回 400
fn parse_body<T: DeserializeOwned + Default>(
    body: &web::Bytes,
    domain: Domain,
) -> std::result::Result<T, CollectionError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| CollectionError::DataValidation {
        domain,
        field: "body".to_string(),
        reason: format!("请求体无效: {}", e),
    })
}

fn non_empty<'a>(query: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    query.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// 查询字符串转换成数据查询条件
///
/// `page` 从 1 开始，给出时覆盖 `skip`；`page_size` 是 `limit` 的别名
fn parse_data_query(
    service: &CollectionService,
    query: &HashMap<String, String>,
) -> std::result::Result<DataQuery, CollectionError> {
    let domain = service.spec().domain;
    let limit = match parse_number::<i64>(query, "page_size", domain)? {
        Some(n) => Some(n),
        None => parse_number::<i64>(query, "limit", domain)?,
    };

    let skip = match parse_number::<u64>(query, "page", domain)? {
        Some(0) => {
            return Err(CollectionError::DataValidation {
                domain,
                field: "page".to_string(),
                reason: "页码从 1 开始".to_string(),
            })
        }
        Some(page) => {
            let per_page = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u64;
            (page - 1) * per_page
        }
        None => parse_number::<u64>(query, "skip", domain)?.unwrap_or(0),
    };

    let search = match (non_empty(query, "filter_field"), non_empty(query, "filter_value")) {
        (Some(field), Some(value)) => Some((field.to_string(), value.to_string())),
        _ => None,
    };

    let mut equals: Vec<(String, String)> = query
        .iter()
        .filter(|(k, v)| !FRONTEND_ONLY_PARAMS.contains(&k.as_str()) && !v.is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    equals.sort();

    Ok(DataQuery {
        skip,
        limit,
        sort_by: non_empty(query, "sort_by").map(str::to_string),
        sort_order: service.parse_sort_dir(query.get("sort_dir").map(String::as_str))?,
        equals,
        search,
    })
}

/// 获取集合列表
///
/// GET /api/v1/collections?domain=bonds
pub async fn list_collections(
    registry: web::Data<CollectionRegistry>,
    query: web::Query<CollectionListQuery>,
) -> Result<HttpResponse> {
    let domain = match query.domain.as_deref().filter(|d| !d.is_empty()) {
        None => None,
        Some(raw) => match Domain::parse(raw) {
            Some(domain) => Some(domain),
            None => {
                let response = ApiResponse::<()>::error_with_code(
                    format!("未知的业务域: {}", raw),
                    "INVALID_DOMAIN",
                );
                return Ok(HttpResponse::BadRequest().json(response));
            }
        },
    };

    let collections = registry.list(domain);
    Ok(HttpResponse::Ok().json(ApiResponse::success(collections)))
}

/// 分页查询集合数据
///
/// GET /api/v1/collections/{name}?page=1&page_size=100&sort_by=最新价&sort_dir=asc&代码=123001
///
/// `filter_field` + `filter_value` 做不区分大小写的正则匹配
pub async fn get_collection_data(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    let service = match registry.get(&name) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };

    let query = match parse_data_query(&service, &query) {
        Ok(query) => query,
        Err(e) => return Ok(error_response(&e)),
    };

    match service.get_data(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 数据概览
///
/// GET /api/v1/collections/{name}/overview
pub async fn get_collection_overview(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let service = match registry.get(&path.into_inner()) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };

    match service.get_overview().await {
        Ok(overview) => Ok(HttpResponse::Ok().json(ApiResponse::success(overview))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 数据统计
///
/// GET /api/v1/collections/{name}/stats
pub async fn get_collection_stats(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let service = match registry.get(&path.into_inner()) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };

    match service.get_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 字段信息
///
/// GET /api/v1/collections/{name}/fields
pub async fn get_collection_fields(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match registry.get(&path.into_inner()) {
        Ok(service) => Ok(HttpResponse::Ok().json(ApiResponse::success(service.fields()))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 更新集合数据
///
/// POST /api/v1/collections/{name}/refresh
///
/// # 请求体
/// `{"mode": "single" | "batch", "concurrency": 3, "background": false, "params": {...}}`
///
/// 查询字符串中的参数合并进 params，请求体中的同名参数优先。
/// 批量更新或 `background: true` / `?async=true` 时在后台执行，返回 202 和任务 ID
pub async fn refresh_collection(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let service = match registry.get(&path.into_inner()) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };
    let domain = service.spec().domain;

    let request: RefreshRequest = match parse_body(&body, domain) {
        Ok(request) => request,
        Err(e) => return Ok(error_response(&e)),
    };
    let query = query.into_inner();

    let mode = if request.mode == RefreshMode::Batch
        || query.get("mode").map(|m| m == "batch").unwrap_or(false)
    {
        RefreshMode::Batch
    } else {
        RefreshMode::Single
    };
    let background = mode == RefreshMode::Batch
        || request.background
        || query.get("async").map(|v| v == "true").unwrap_or(false);
    let concurrency = match request.concurrency {
        Some(n) => Some(n),
        None => match parse_number::<usize>(&query, "concurrency", domain) {
            Ok(n) => n,
            Err(e) => return Ok(error_response(&e)),
        },
    };

    let mut params: Params = query.into_iter().collect();
    for (key, value) in &request.params {
        match value_to_param(value) {
            Some(v) => {
                params.insert(key.clone(), v);
            }
            None => {
                params.remove(key);
            }
        }
    }

    if background {
        let task = service
            .spawn_refresh(registry.tasks(), mode, params, concurrency)
            .await;
        let accepted = TaskAccepted {
            task_id: task.task_id,
            status: task.status,
            message: format!("刷新任务已创建: {}", service.spec().name),
        };
        let message = accepted.message.clone();
        return Ok(HttpResponse::Accepted().json(ApiResponse::success_with_message(
            RefreshOutcome::Task(accepted),
            message,
        )));
    }

    match service.refresh_data(params).await {
        Ok(result) => {
            let message = result.message.clone();
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
                RefreshOutcome::Single(result),
                message,
            )))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 导出集合数据
///
/// POST /api/v1/collections/{name}/export
///
/// # 请求体
/// `{"file_format": "csv" | "json", "sort_by": "...", "sort_dir": "asc", "filter_field": "...", "filter_value": "..."}`
pub async fn export_collection(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let service = match registry.get(&path.into_inner()) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };

    let request: ExportRequest = match parse_body(&body, service.spec().domain) {
        Ok(request) => request,
        Err(e) => return Ok(error_response(&e)),
    };

    match service.export(&request).await {
        Ok(file) => Ok(HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(file.filename)],
            })
            .body(file.content)),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 清空集合
///
/// DELETE /api/v1/collections/{name}/clear
pub async fn clear_collection(
    registry: web::Data<CollectionRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let service = match registry.get(&path.into_inner()) {
        Ok(service) => service,
        Err(e) => return Ok(error_response(&e)),
    };

    match service.clear_data().await {
        Ok(result) => {
            let message = result.message.clone();
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(result, message)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 配置集合路由
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/collections")
            .route("", web::get().to(list_collections))
            .route("/{name}", web::get().to(get_collection_data))
            .route("/{name}/overview", web::get().to(get_collection_overview))
            .route("/{name}/stats", web::get().to(get_collection_stats))
            .route("/{name}/fields", web::get().to(get_collection_fields))
            .route("/{name}/refresh", web::post().to(refresh_collection))
            .route("/{name}/export", web::post().to(export_collection))
            .route("/{name}/clear", web::delete().to(clear_collection)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use crate::providers::fetcher::testing::StaticFetcher;
    use crate::services::BatchSettings;
    use crate::storage::MemoryStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn registry(fetcher: Arc<StaticFetcher>) -> web::Data<CollectionRegistry> {
        web::Data::new(CollectionRegistry::from_catalog(
            Arc::new(MemoryStore::new()),
            fetcher,
            BatchSettings::default(),
        ))
    }

    fn bond_fetcher() -> Arc<StaticFetcher> {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![
                json!({"code": "123001", "name": "蓝标转债", "trade": 131.5}),
                json!({"code": "113009", "name": "广汽转债", "trade": 108.2}),
            ],
        );
        fetcher
    }

    #[actix_web::test]
    async fn list_filters_by_domain() {
        let app = test::init_service(
            App::new()
                .app_data(registry(Arc::new(StaticFetcher::new())))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/collections?domain=options")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["name"], "option_contract_info_ctp");
        assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));

        let req = test::TestRequest::get()
            .uri("/api/v1/collections?domain=crypto")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn refresh_then_query_and_clear() {
        let app = test::init_service(
            App::new()
                .app_data(registry(bond_fetcher()))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/refresh")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["inserted"], 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?limit=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["limit"], 1);
        assert_eq!(body["data"]["data"].as_array().map(|a| a.len()), Some(1));
        assert!(body["data"]["data"][0]["最新价"].is_number());

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?%E4%BB%A3%E7%A0%81=123001")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["data"][0]["名称"], "蓝标转债");

        let req = test::TestRequest::delete()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/clear")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["deleted_count"], 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/overview")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total_count"], 0);
    }

    #[actix_web::test]
    async fn unknown_collection_returns_404() {
        let app = test::init_service(
            App::new()
                .app_data(registry(Arc::new(StaticFetcher::new())))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_missing/overview")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "BOND_COLLECTION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn missing_params_returns_400() {
        let fetcher = Arc::new(StaticFetcher::new());
        let app = test::init_service(
            App::new()
                .app_data(registry(fetcher.clone()))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/fund_portfolio_hold_em/refresh?fund_code=000001")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "FUND_MISSING_PARAMS");
        assert_eq!(body["message"], "缺少必须参数: date");
        assert_eq!(fetcher.calls(), 0);
    }

    #[actix_web::test]
    async fn body_params_override_query() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "fund_portfolio_hold_em",
            vec![json!({"股票代码": "600519", "季度": "2024年4季度股票投资明细"})],
        );
        let app = test::init_service(
            App::new()
                .app_data(registry(fetcher.clone()))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/fund_portfolio_hold_em/refresh?fund_code=000001&year=2023")
            .set_json(json!({"params": {"year": 2024}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let sent = fetcher.last_params().unwrap();
        assert_eq!(sent.get("symbol").map(String::as_str), Some("000001"));
        assert_eq!(sent.get("date").map(String::as_str), Some("2024"));
    }

    #[actix_web::test]
    async fn fields_endpoint_lists_declared_fields() {
        let app = test::init_service(
            App::new()
                .app_data(registry(Arc::new(StaticFetcher::new())))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/option_contract_info_ctp/fields")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["unique_keys"], json!(["交易所ID", "合约ID"]));
        assert_eq!(body["data"]["fields"][0]["name"], "交易所ID");
        assert_eq!(body["data"]["fields"][0]["type"], "string");
    }
    async fn refreshed_bond_registry() -> web::Data<CollectionRegistry> {
        let registry = registry(bond_fetcher());
        registry
            .get("bond_zh_hs_cov_spot")
            .unwrap()
            .refresh_data(Params::new())
            .await
            .unwrap();
        registry
    }

    #[actix_web::test]
    async fn malformed_refresh_body_is_rejected() {
        let fetcher = bond_fetcher();
        let app = test::init_service(
            App::new()
                .app_data(registry(fetcher.clone()))
                .configure(handlers::config),
        )
        .await;

        for payload in [r#"{"mode": "bach"}"#, "not json", r#"{"params": [1, 2]}"#] {
            let req = test::TestRequest::post()
                .uri("/api/v1/collections/bond_zh_hs_cov_spot/refresh")
                .insert_header(("content-type", "application/json"))
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "BOND_DATA_VALIDATION_ERROR");
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[actix_web::test]
    async fn query_supports_numeric_filter_sort_search_and_pages() {
        let app = test::init_service(
            App::new()
                .app_data(refreshed_bond_registry().await)
                .configure(handlers::config),
        )
        .await;

        // 最新价=131.5
        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?%E6%9C%80%E6%96%B0%E4%BB%B7=131.5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["data"][0]["代码"], "123001");

        // sort_by=最新价&sort_dir=asc
        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?sort_by=%E6%9C%80%E6%96%B0%E4%BB%B7&sort_dir=asc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["data"][0]["代码"], "113009");

        // filter_field=名称&filter_value=广汽
        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?filter_field=%E5%90%8D%E7%A7%B0&filter_value=%E5%B9%BF%E6%B1%BD")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["data"][0]["代码"], "113009");

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot?page=2&page_size=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["skip"], 1);
        assert_eq!(body["data"]["limit"], 1);
        assert_eq!(body["data"]["data"].as_array().map(|a| a.len()), Some(1));

        for bad in ["sort_dir=up", "page=0", "filter_field=code&filter_value=(", "skip=-1"] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/v1/collections/bond_zh_hs_cov_spot?{}", bad))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", bad);
        }
    }

    #[actix_web::test]
    async fn stats_and_export_routes() {
        let app = test::init_service(
            App::new()
                .app_data(refreshed_bond_registry().await)
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/stats")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total_count"], 2);
        assert_eq!(body["data"]["display_name"], "可转债实时行情-沪深");
        assert!(body["data"]["latest_time"].is_string());

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/export")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers().clone();
        let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("text/csv; charset=utf-8"));
        let disposition = headers
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("bond_zh_hs_cov_spot_"));
        let bytes = test::read_body(resp).await;
        assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
        assert_eq!(String::from_utf8_lossy(&bytes).lines().count(), 3);

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/bond_zh_hs_cov_spot/export")
            .set_json(json!({"file_format": "xlsx"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn batch_refresh_runs_in_background() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "fund_name_em",
            vec![
                json!({"基金代码": "000001", "基金简称": "华夏成长"}),
                json!({"基金代码": "000002", "基金简称": "华夏回报"}),
            ],
        );
        fetcher.set_rows(
            "fund_portfolio_hold_em",
            vec![json!({"股票代码": "600519", "季度": "2024年4季度股票投资明细"})],
        );
        let app = test::init_service(
            App::new()
                .app_data(registry(fetcher.clone()))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/fund_name_em/refresh")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/v1/collections/fund_portfolio_hold_em/refresh")
            .set_json(json!({"mode": "batch", "params": {"year": "2024"}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "pending");
        let task_id = body["data"]["task_id"].as_str().unwrap_or_default().to_string();
        assert!(!task_id.is_empty());

        let mut task = Value::Null;
        for _ in 0..200 {
            let req = test::TestRequest::get()
                .uri(&format!("/api/v1/tasks/{}", task_id))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            task = body["data"].clone();
            if task["status"] == "success" || task["status"] == "failed" {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(task["status"], "success");
        assert_eq!(task["progress"], 2);
        assert_eq!(task["total"], 2);
        assert_eq!(task["result"]["success_count"], 2);
        assert_eq!(fetcher.calls(), 3);
    }
}
