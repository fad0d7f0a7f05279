//! AkShare 数据集合后端服务
//!
//! 把 akshare 的期货、股票、债券、期权、货币、基金接口封装成统一的数据集合，
//! 数据写入 MongoDB，通过 RESTful API 提供查询、概览、更新和清空

mod collections; // 集合描述符表
mod common;      // 公共常量和工具函数
mod config;      // 配置
mod error;       // 错误类型
mod handlers;    // HTTP 请求处理器
mod middleware;  // 中间件
mod models;      // 数据模型定义
mod providers;   // akshare 数据提供者
mod registry;    // 集合注册表
mod services;    // 业务逻辑服务
mod storage;     // 存储层

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::middleware::ApiKeyMiddleware;
use crate::providers::{AkToolsFetcher, DataFetcher};
use crate::registry::CollectionRegistry;
use crate::storage::{CollectionStore, MemoryStore, MongoStore};

/// 按配置创建存储后端
async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn CollectionStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            log::warn!("使用内存存储，数据不会持久化");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Mongo => {
            let store =
                MongoStore::connect(&config.storage.mongo_uri, &config.storage.database).await?;
            Ok(Arc::new(store))
        }
    }
}

/// 应用程序入口
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    log::info!("启动 AkShare 数据集合服务");
    log::info!("akshare 桥接服务: {}", config.akshare.base_url);

    if config.api.api_key.is_empty() {
        log::warn!("未设置 API Key，接口认证已关闭");
    }

    let fetcher: Arc<dyn DataFetcher> = Arc::new(AkToolsFetcher::new(
        &config.akshare.base_url,
        config.request_timeout(),
        config.connect_timeout(),
    )?);
    let store = build_store(&config).await?;

    let registry = CollectionRegistry::from_catalog(store, fetcher, config.batch_settings());
    if registry.is_empty() {
        log::warn!("没有可用的数据集合");
    }
    if config.storage.create_indexes {
        let created = registry.ensure_indexes().await;
        log::info!("唯一索引检查完成: {}/{}", created, registry.len());
    }
    let registry = web::Data::new(registry);

    let api_key = config.api.api_key.clone();
    let bind_addr = config.bind_addr();
    log::info!("监听地址: {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .wrap(Logger::default()) // 请求日志
            .wrap(ApiKeyMiddleware::new(api_key.clone())) // API Key 认证
            .configure(handlers::config) // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await?;
    Ok(())
}
