//! 集合注册表
//!
//! 集合名称 -> 服务，启动时由各业务域的描述符表构建，之后只读；
//! 同时持有后台刷新任务的管理器

use std::collections::HashMap;
use std::sync::Arc;

use crate::collections;
use crate::common::is_valid_collection_name;
use crate::error::{CollectionError, Result};
use crate::models::{CollectionSpec, CollectionSummary, Domain};
use crate::providers::{build_provider, DataFetcher};
use crate::services::{BatchSettings, CollectionService, TaskManager};
use crate::storage::CollectionStore;

pub struct CollectionRegistry {
    services: HashMap<&'static str, Arc<CollectionService>>,
    /// 注册顺序
    order: Vec<&'static str>,
    tasks: Arc<TaskManager>,
}

/// 按集合名称前缀推断业务域
fn infer_domain(name: &str) -> Domain {
    let prefix = name.split('_').next().unwrap_or_default();
    match prefix {
        "futures" => Domain::Futures,
        "bond" => Domain::Bonds,
        "option" => Domain::Options,
        "currency" => Domain::Currencies,
        "fund" => Domain::Funds,
        _ => Domain::Stocks,
    }
}

impl CollectionRegistry {
    pub fn new<I>(
        specs: I,
        store: Arc<dyn CollectionStore>,
        fetcher: Arc<dyn DataFetcher>,
        settings: BatchSettings,
    ) -> Self
    where
        I: IntoIterator<Item = &'static CollectionSpec>,
    {
        let mut services = HashMap::new();
        let mut order = Vec::new();

        for spec in specs {
            if !is_valid_collection_name(spec.name) {
                log::warn!("集合名称无效，已忽略: {:?}", spec.name);
                continue;
            }
            if services.contains_key(spec.name) {
                log::warn!("集合 {} 重复声明，保留第一个", spec.name);
                continue;
            }

            let provider = build_provider(spec, fetcher.clone());
            let service = CollectionService::new(provider, store.clone(), settings);
            services.insert(spec.name, Arc::new(service));
            order.push(spec.name);
        }

        log::info!("已注册 {} 个数据集合", order.len());
        Self {
            services,
            order,
            tasks: Arc::new(TaskManager::new(settings.task_retention)),
        }
    }

    /// 使用内置的全部集合
    pub fn from_catalog(
        store: Arc<dyn CollectionStore>,
        fetcher: Arc<dyn DataFetcher>,
        settings: BatchSettings,
    ) -> Self {
        Self::new(collections::all(), store, fetcher, settings)
    }

    pub fn get(&self, name: &str) -> Result<Arc<CollectionService>> {
        self.services
            .get(name)
            .cloned()
            .ok_or_else(|| CollectionError::CollectionNotFound {
                domain: infer_domain(name),
                name: name.to_string(),
            })
    }

    /// 集合列表，可按业务域过滤
    pub fn list(&self, domain: Option<Domain>) -> Vec<CollectionSummary> {
        self.order
            .iter()
            .filter_map(|name| self.services.get(name))
            .map(|service| service.spec())
            .filter(|spec| domain.map_or(true, |d| spec.domain == d))
            .map(CollectionSummary::from)
            .collect()
    }

    /// 为所有带唯一键的集合创建索引，失败只记录日志
    pub async fn ensure_indexes(&self) -> usize {
        let mut created = 0;
        for name in &self.order {
            let Some(service) = self.services.get(name) else {
                continue;
            };
            if service.spec().unique_keys.is_empty() {
                continue;
            }
            match service.ensure_indexes().await {
                Ok(()) => created += 1,
                Err(e) => log::warn!("[{}] 创建唯一索引失败: {}", name, e),
            }
        }
        created
    }

    /// 后台任务管理器
    pub fn tasks(&self) -> Arc<TaskManager> {
        Arc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
