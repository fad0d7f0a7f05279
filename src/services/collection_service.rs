//! 集合数据服务
//!
//! 调用 provider 获取数据，按唯一键写入存储，并提供查询、统计、导出、清空和批量更新

use futures::stream::{self, StreamExt};
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::common::{
    current_year, extract_leading_year, get_beijing_time, DATA_SOURCE_AKSHARE, DATA_SOURCE_FIELD,
    INTERFACE_FIELD, UPDATED_AT_FIELD,
};
use crate::error::{CollectionError, Result, StorageError};
use crate::models::{
    value_to_param, BatchReport, BatchSpec, ClearResult, CollectionSpec, CollectionStats,
    DataPage, ExportRequest, FieldInfo, FieldType, FieldsResponse, Overview, Params, Record,
    RefreshMode, RefreshResult, TaskInfo, UpsertStats,
};
use crate::providers::{redact_params, Provider};
use crate::services::export::{self, ExportFile, EXPORT_LIMIT};
use crate::services::task_manager::{ProgressReporter, TaskManager};
use crate::storage::{compile_pattern, CollectionStore, Condition, Filter, SortOrder};

/// 只在前端使用、不传给 akshare 的参数
pub const FRONTEND_ONLY_PARAMS: &[&str] = &[
    "update_type",
    "update_mode",
    "batch_update",
    "batch_size",
    "page",
    "limit",
    "skip",
    "filters",
    "sort",
    "order",
    "task_id",
    "callback",
    "async",
    "timeout",
    "_t",
    "_timestamp",
    "force",
    "clear_first",
    "overwrite",
    "mode",
    "concurrency",
    "page_size",
    "sort_by",
    "sort_dir",
    "filter_field",
    "filter_value",
];

/// 默认每页条数
pub const DEFAULT_LIMIT: i64 = 100;
/// 每页最大条数
pub const MAX_LIMIT: i64 = 1000;

/// 批量更新设置
#[derive(Debug, Clone, Copy)]
pub struct BatchSettings {
    /// 默认并发数
    pub concurrency: usize,
    /// 单个任务超时
    pub task_timeout: Duration,
    /// 已结束的后台任务保留时长
    pub task_retention: Duration,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            concurrency: 3,
            task_timeout: Duration::from_secs(300),
            task_retention: Duration::from_secs(3600),
        }
    }
}

/// 数据查询条件
#[derive(Debug, Clone, Default)]
pub struct DataQuery {
    pub skip: u64,
    pub limit: Option<i64>,
    /// 排序字段，默认更新时间
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// 字段等值过滤，取值按字段声明类型转换
    pub equals: Vec<(String, String)>,
    /// 单字段模糊匹配：(字段, 正则)
    pub search: Option<(String, String)>,
}

/// 查询参数都是字符串，按字段声明类型转换成匹配条件
///
/// 字符串和日期字段按原样比较；数值或未声明的字段同时匹配字符串和数值形式
pub fn query_condition(raw: &str, field_type: Option<FieldType>) -> Condition {
    if matches!(
        field_type,
        Some(FieldType::String | FieldType::Date | FieldType::Datetime)
    ) {
        return Condition::Eq(Value::String(raw.to_string()));
    }

    let mut candidates = vec![Value::String(raw.to_string())];
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        candidates.push(Value::from(i));
    } else if let Some(f) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        candidates.push(Value::Number(f));
    } else if let Ok(b) = trimmed.parse::<bool>() {
        candidates.push(Value::Bool(b));
    }

    if candidates.len() == 1 {
        Condition::Eq(candidates.remove(0))
    } else {
        Condition::In(candidates)
    }
}

/// 集合服务
pub struct CollectionService {
    spec: &'static CollectionSpec,
    provider: Arc<dyn Provider>,
    store: Arc<dyn CollectionStore>,
    settings: BatchSettings,
}

/// 去掉前端专用参数和空值
pub fn clean_params(params: &Params) -> Params {
    params
        .iter()
        .filter(|(k, v)| !FRONTEND_ONLY_PARAMS.contains(&k.as_str()) && !v.trim().is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// 按字段信息重排列：声明的字段在前，其余字段保持原顺序放在后面
pub fn reorder_columns(row: Record, fields: &[FieldInfo]) -> Record {
    if fields.is_empty() {
        return row;
    }

    let mut rest = row;
    let mut ordered = Record::new();
    for field in fields {
        if let Some(value) = rest.remove(field.name) {
            ordered.insert(field.name.to_string(), value);
        }
    }
    ordered.extend(rest);
    ordered
}

impl CollectionService {
    pub fn new(
        provider: Arc<dyn Provider>,
        store: Arc<dyn CollectionStore>,
        settings: BatchSettings,
    ) -> Self {
        Self {
            spec: provider.spec(),
            provider,
            store,
            settings,
        }
    }

    pub fn spec(&self) -> &'static CollectionSpec {
        self.spec
    }

    fn storage_error(&self, source: StorageError) -> CollectionError {
        log::error!("[{}] 存储操作失败: {}", self.spec.name, source);
        CollectionError::storage(self.spec.domain, source)
    }

    /// 从 akshare 获取数据并写入存储
    pub async fn refresh_data(&self, params: Params) -> Result<RefreshResult> {
        let params = clean_params(&params);
        log::info!(
            "[{}] 开始更新数据，参数: {:?}",
            self.spec.name,
            redact_params(&params)
        );

        let rows = self.provider.fetch_data(params).await?;
        if rows.is_empty() {
            log::info!("[{}] 没有获取到数据", self.spec.name);
            return Ok(RefreshResult::empty());
        }

        let fetched = rows.len() as u64;
        let stats = self.save_rows(rows).await?;
        log::info!(
            "[{}] 更新完成: 获取 {} 条，新增 {} 条，更新 {} 条，未变化 {} 条，跳过 {} 条",
            self.spec.name,
            fetched,
            stats.inserted,
            stats.updated,
            stats.unchanged,
            stats.skipped
        );

        Ok(RefreshResult::from_stats(
            format!("成功更新 {} 条数据", stats.total_processed()),
            fetched,
            stats,
        ))
    }

    /// 重排列、追加元数据后按唯一键写入
    async fn save_rows(&self, rows: Vec<Record>) -> Result<UpsertStats> {
        let fields = self.provider.field_info();
        let updated_at = Value::String(get_beijing_time());

        let rows: Vec<Record> = rows
            .into_iter()
            .map(|row| {
                let mut row = reorder_columns(row, &fields);
                row.insert(
                    DATA_SOURCE_FIELD.to_string(),
                    Value::String(DATA_SOURCE_AKSHARE.to_string()),
                );
                row.insert(
                    INTERFACE_FIELD.to_string(),
                    Value::String(self.spec.akshare_func.to_string()),
                );
                row.insert(UPDATED_AT_FIELD.to_string(), updated_at.clone());
                row
            })
            .collect();

        let stats = self
            .store
            .upsert_many(self.spec.name, rows, self.spec.unique_keys)
            .await
            .map_err(|e| self.storage_error(e))?;

        if stats.skipped > 0 {
            log::warn!(
                "[{}] {} 条数据缺少唯一键 {:?}，已跳过",
                self.spec.name,
                stats.skipped,
                self.spec.unique_keys
            );
        }
        Ok(stats)
    }

    fn validation_error(&self, field: &str, reason: String) -> CollectionError {
        CollectionError::DataValidation {
            domain: self.spec.domain,
            field: field.to_string(),
            reason,
        }
    }

    /// 解析排序方向，未指定时倒序
    pub fn parse_sort_dir(&self, raw: Option<&str>) -> Result<SortOrder> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(SortOrder::Desc),
            Some(dir) => SortOrder::parse(dir)
                .ok_or_else(|| self.validation_error("sort_dir", format!("排序方向无效: {}", dir))),
        }
    }

    /// 查询条件转换成存储层过滤条件
    fn build_query_filter(&self, query: &DataQuery) -> Result<Filter> {
        let fields = self.provider.field_info();
        let field_type = |name: &str| fields.iter().find(|f| f.name == name).map(|f| f.field_type);

        let mut filter: Filter = query
            .equals
            .iter()
            .map(|(field, raw)| (field.clone(), query_condition(raw, field_type(field.as_str()))))
            .collect();

        if let Some((field, pattern)) = &query.search {
            compile_pattern(pattern)
                .map_err(|e| self.validation_error(field, format!("过滤条件无效: {}", e)))?;
            filter.push((field.clone(), Condition::Regex(pattern.clone())));
        }
        Ok(filter)
    }

    async fn find_rows(
        &self,
        filter: &Filter,
        query: &DataQuery,
        limit: i64,
    ) -> Result<Vec<Record>> {
        let sort_field = query.sort_by.as_deref().unwrap_or(UPDATED_AT_FIELD);
        self.store
            .find(
                self.spec.name,
                filter,
                sort_field,
                query.sort_order,
                query.skip,
                limit,
            )
            .await
            .map_err(|e| self.storage_error(e))
    }

    /// 分页查询，默认按更新时间倒序
    pub async fn get_data(&self, query: &DataQuery) -> Result<DataPage> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let filter = self.build_query_filter(query)?;

        let total = self
            .store
            .count(self.spec.name, &filter)
            .await
            .map_err(|e| self.storage_error(e))?;
        let data = self.find_rows(&filter, query, limit).await?;

        Ok(DataPage {
            data,
            total,
            skip: query.skip,
            limit,
        })
    }

    /// 总数和首末写入时间
    async fn time_range(&self) -> Result<(u64, Option<Value>, Option<Value>)> {
        let name = self.provider.collection_name();
        let total = self
            .store
            .count(name, &Vec::new())
            .await
            .map_err(|e| self.storage_error(e))?;
        let latest = self
            .store
            .first_value(name, UPDATED_AT_FIELD, SortOrder::Desc)
            .await
            .map_err(|e| self.storage_error(e))?;
        let earliest = self
            .store
            .first_value(name, UPDATED_AT_FIELD, SortOrder::Asc)
            .await
            .map_err(|e| self.storage_error(e))?;
        Ok((total, latest, earliest))
    }

    /// 数据概览
    pub async fn get_overview(&self) -> Result<Overview> {
        let (total_count, last_updated, oldest_date) = self.time_range().await?;
        Ok(Overview {
            collection_name: self.provider.collection_name().to_string(),
            display_name: self.provider.display_name().to_string(),
            total_count,
            last_updated,
            oldest_date,
        })
    }

    /// 集合统计
    pub async fn get_stats(&self) -> Result<CollectionStats> {
        let (total_count, latest_time, earliest_time) = self.time_range().await?;
        Ok(CollectionStats {
            collection_name: self.provider.collection_name().to_string(),
            display_name: self.provider.display_name().to_string(),
            total_count,
            latest_time,
            earliest_time,
        })
    }

    /// 按排序和过滤条件导出，最多 `EXPORT_LIMIT` 行
    pub async fn export(&self, request: &ExportRequest) -> Result<ExportFile> {
        let search = match (&request.filter_field, &request.filter_value) {
            (Some(field), Some(value)) if !field.is_empty() && !value.is_empty() => {
                Some((field.clone(), value.clone()))
            }
            _ => None,
        };
        let query = DataQuery {
            sort_by: request.sort_by.clone().filter(|s| !s.is_empty()),
            sort_order: self.parse_sort_dir(request.sort_dir.as_deref())?,
            search,
            ..DataQuery::default()
        };

        let filter = self.build_query_filter(&query)?;
        let rows = self.find_rows(&filter, &query, EXPORT_LIMIT).await?;
        let content = export::render(request.file_format, &rows, &self.provider.field_info())
            .map_err(|e| CollectionError::DataUpdate {
                domain: self.spec.domain,
                name: self.spec.name.to_string(),
                reason: format!("导出失败: {}", e),
            })?;

        log::info!(
            "[{}] 导出 {} 条数据 ({})",
            self.spec.name,
            rows.len(),
            request.file_format.extension()
        );
        Ok(ExportFile {
            filename: export::export_filename(self.spec.name, request.file_format),
            content_type: request.file_format.content_type(),
            content,
            rows: rows.len(),
        })
    }

    /// 清空集合
    pub async fn clear_data(&self) -> Result<ClearResult> {
        let deleted_count = self
            .store
            .delete_all(self.spec.name)
            .await
            .map_err(|e| self.storage_error(e))?;
        log::info!("[{}] 已删除 {} 条数据", self.spec.name, deleted_count);

        Ok(ClearResult {
            deleted_count,
            message: format!("已删除 {} 条数据", deleted_count),
        })
    }

    /// 字段信息
    pub fn fields(&self) -> FieldsResponse {
        FieldsResponse {
            collection_name: self.provider.collection_name(),
            display_name: self.provider.display_name(),
            unique_keys: self.provider.unique_keys(),
            fields: self.provider.field_info(),
        }
    }

    /// 创建唯一键索引
    pub async fn ensure_indexes(&self) -> Result<()> {
        if self.spec.unique_keys.is_empty() {
            return Ok(());
        }
        self.store
            .ensure_unique_index(self.spec.name, self.spec.unique_keys)
            .await
            .map_err(|e| self.storage_error(e))
    }

    /// 后台执行刷新，立即返回任务信息
    pub async fn spawn_refresh(
        self: &Arc<Self>,
        tasks: Arc<TaskManager>,
        mode: RefreshMode,
        params: Params,
        concurrency: Option<usize>,
    ) -> TaskInfo {
        let description = match mode {
            RefreshMode::Single => format!("更新{}", self.provider.display_name()),
            RefreshMode::Batch => format!("批量更新{}", self.provider.display_name()),
        };
        let task = tasks.create(self.spec.name, description).await;
        log::info!("[{}] 创建后台刷新任务 {}", self.spec.name, task.task_id);

        let service = Arc::clone(self);
        let task_id = task.task_id.clone();
        tokio::spawn(async move {
            tasks.start(&task_id).await;
            let progress = ProgressReporter::new(&tasks, &task_id);

            let outcome = match mode {
                RefreshMode::Single => {
                    progress.report(0, 1).await;
                    service
                        .refresh_data(params)
                        .await
                        .map(|r| (r.message.clone(), serde_json::to_value(&r)))
                }
                RefreshMode::Batch => service
                    .refresh_batch(params, concurrency, Some(&progress))
                    .await
                    .map(|r| (r.message.clone(), serde_json::to_value(&r))),
            };

            match outcome {
                Ok((message, result)) => {
                    tasks
                        .complete(&task_id, result.unwrap_or_default(), message)
                        .await
                }
                Err(e) => {
                    log::error!("[{}] 后台任务 {} 失败: {}", service.spec.name, task_id, e);
                    tasks.fail(&task_id, e.to_string()).await
                }
            }
        });

        task
    }

    /// 批量更新，可选上报进度
    ///
    /// 没有批量配置的集合退化为一次普通更新
    pub async fn refresh_batch(
        &self,
        params: Params,
        concurrency: Option<usize>,
        progress: Option<&ProgressReporter<'_>>,
    ) -> Result<BatchReport> {
        let Some(batch) = self.spec.batch else {
            if let Some(progress) = progress {
                progress.report(0, 1).await;
            }
            let result = self.refresh_data(params).await?;
            return Ok(BatchReport {
                message: result.message,
                total_tasks: 1,
                processed: 1,
                success_count: 1,
                failed: 0,
                fetched_rows: result.fetched_rows,
                saved_rows: result.total_processed,
                inserted: result.inserted + result.updated,
            });
        };

        let mut params = clean_params(&params);
        let years = self.batch_years(&batch, params.remove("year"))?;
        let codes = self.source_codes(&batch).await?;
        let tasks = self.pending_tasks(&batch, &codes, &years).await?;

        if tasks.is_empty() {
            log::info!("[{}] 所有数据已存在，无需更新", self.spec.name);
            return Ok(BatchReport {
                message: "所有数据已存在，无需更新".to_string(),
                ..BatchReport::default()
            });
        }

        let concurrency = concurrency
            .unwrap_or(self.settings.concurrency)
            .clamp(1, 10);
        let total = tasks.len() as u64;
        log::info!(
            "[{}] 开始批量更新: {} 个任务，并发 {}",
            self.spec.name,
            total,
            concurrency
        );

        let requests = tasks.into_iter().map(|(code, year)| {
            let mut task_params = params.clone();
            task_params.insert(batch.param.to_string(), code);
            if let Some(year) = year {
                task_params.insert("year".to_string(), year);
            }
            task_params
        });

        let mut results = stream::iter(requests)
            .map(|task_params| self.run_task(task_params))
            .buffer_unordered(concurrency);

        let mut report = BatchReport {
            total_tasks: total,
            ..BatchReport::default()
        };
        if let Some(progress) = progress {
            progress.report(0, total).await;
        }
        while let Some(result) = results.next().await {
            report.processed += 1;
            match result {
                Ok(r) => {
                    report.success_count += 1;
                    report.fetched_rows += r.fetched_rows;
                    report.saved_rows += r.total_processed;
                    report.inserted += r.inserted + r.updated;
                }
                Err(e) => {
                    report.failed += 1;
                    log::warn!("[{}] 批量任务失败: {}", self.spec.name, e);
                }
            }
            if let Some(progress) = progress {
                progress.report(report.processed, total).await;
            }
        }

        report.message = format!(
            "批量更新完成，处理 {} 个任务，成功 {} 个，失败 {} 个，保存 {} 条数据",
            report.processed, report.success_count, report.failed, report.saved_rows
        );
        log::info!("[{}] {}", self.spec.name, report.message);
        Ok(report)
    }

    /// 单个批量任务，带超时
    async fn run_task(&self, params: Params) -> Result<RefreshResult> {
        let timeout = self.settings.task_timeout;
        match tokio::time::timeout(timeout, self.refresh_data(params.clone())).await {
            Ok(result) => result,
            Err(_) => Err(CollectionError::DataUpdate {
                domain: self.spec.domain,
                name: self.spec.name.to_string(),
                reason: format!(
                    "任务超时 ({} 秒)，参数: {:?}",
                    timeout.as_secs(),
                    redact_params(&params)
                ),
            }),
        }
    }

    /// 年份列表；不按年份展开时返回单个 None
    fn batch_years(&self, batch: &BatchSpec, year: Option<String>) -> Result<Vec<Option<String>>> {
        if let Some(year) = year {
            let year: i32 = year
                .trim()
                .parse()
                .map_err(|_| self.validation_error("year", format!("年份参数无效: {}", year)))?;
            return Ok(vec![Some(year.to_string())]);
        }

        if !batch.use_year {
            return Ok(vec![None]);
        }

        let to = current_year();
        let from = batch.years_from.unwrap_or(to).min(to);
        Ok((from..=to).rev().map(|y| Some(y.to_string())).collect())
    }

    /// 从来源集合读取代码列表
    async fn source_codes(&self, batch: &BatchSpec) -> Result<Vec<String>> {
        let values = self
            .store
            .distinct(batch.source_collection, batch.source_field)
            .await
            .map_err(|e| self.storage_error(e))?;

        let codes: Vec<String> = values.iter().filter_map(value_to_param).collect();
        if codes.is_empty() {
            return Err(CollectionError::DataUpdate {
                domain: self.spec.domain,
                name: self.spec.name.to_string(),
                reason: format!("{} 集合为空，请先更新相关数据", batch.source_collection),
            });
        }
        Ok(codes)
    }

    /// 生成任务并去掉已存在的组合
    async fn pending_tasks(
        &self,
        batch: &BatchSpec,
        codes: &[String],
        years: &[Option<String>],
    ) -> Result<Vec<(String, Option<String>)>> {
        let existing = self.existing_combinations(batch).await?;
        let key_len = batch.incremental_fields.len();

        let mut tasks = Vec::new();
        for code in codes {
            for year in years {
                if key_len > 0 {
                    let mut key = vec![code.clone()];
                    key.extend(year.clone());
                    key.truncate(key_len);
                    if existing.contains(&key) {
                        continue;
                    }
                }
                tasks.push((code.clone(), year.clone()));
            }
        }

        let skipped = codes.len() * years.len() - tasks.len();
        if skipped > 0 {
            log::info!("[{}] 增量更新: 跳过 {} 个已存在的组合", self.spec.name, skipped);
        }
        Ok(tasks)
    }

    async fn existing_combinations(&self, batch: &BatchSpec) -> Result<HashSet<Vec<String>>> {
        if batch.incremental_fields.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = self
            .store
            .scan_fields(self.spec.name, batch.incremental_fields)
            .await
            .map_err(|e| self.storage_error(e))?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                batch
                    .incremental_fields
                    .iter()
                    .map(|field| {
                        let value = row.get(*field).and_then(value_to_param)?;
                        if batch.year_fields.contains(field) {
                            extract_leading_year(&value)
                        } else {
                            Some(value)
                        }
                    })
                    .collect::<Option<Vec<String>>>()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::{Domain, ProviderKind};
    use crate::providers::build_provider;
    use crate::providers::fetcher::testing::{FnFetcher, StaticFetcher};
    use crate::providers::DataFetcher;
    use crate::storage::MemoryStore;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BOND_SPEC: CollectionSpec = CollectionSpec {
        name: "bond_zh_hs_cov_spot",
        display_name: "可转债实时行情",
        domain: Domain::Bonds,
        akshare_func: "bond_zh_hs_cov_spot",
        unique_keys: &["代码"],
        field_info: &[
            FieldInfo::string("代码", "债券代码"),
            FieldInfo::float("现价", "最新价"),
        ],
        ..CollectionSpec::EMPTY
    };

    static HOLD_SPEC: CollectionSpec = CollectionSpec {
        name: "fund_portfolio_hold_em",
        display_name: "基金持仓",
        domain: Domain::Funds,
        akshare_func: "fund_portfolio_hold_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "股票代码", "季度"],
        param_mapping: &[("symbol", "symbol"), ("year", "date")],
        required_params: &["symbol", "date"],
        add_param_columns: &[("symbol", "基金代码")],
        timestamp_field: UPDATED_AT_FIELD,
        batch: Some(BatchSpec {
            source_collection: "fund_name_em",
            source_field: "基金代码",
            param: "symbol",
            use_year: true,
            years_from: Some(2010),
            incremental_fields: &["基金代码", "季度"],
            year_fields: &["季度"],
        }),
        ..CollectionSpec::EMPTY
    };

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bond_service(fetcher: Arc<StaticFetcher>, store: Arc<MemoryStore>) -> CollectionService {
        CollectionService::new(
            build_provider(&BOND_SPEC, fetcher),
            store,
            BatchSettings::default(),
        )
    }

    fn hold_rows(symbol: &str, date: &str) -> Vec<Record> {
        vec![json!({"股票代码": "600519", "股票名称": "贵州茅台", "季度": format!("{}年4季度股票投资明细", date), "占净值比例": symbol.len()})]
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    async fn seed_fund_names(store: &MemoryStore, codes: &[&str]) {
        let rows = codes
            .iter()
            .filter_map(|c| match json!({"基金代码": c, "基金简称": "测试基金"}) {
                Value::Object(m) => Some(m),
                _ => None,
            })
            .collect();
        store
            .upsert_many("fund_name_em", rows, &["基金代码"])
            .await
            .unwrap();
    }

    #[test]
    fn frontend_only_params_are_stripped() {
        let cleaned = clean_params(&params(&[
            ("symbol", "000001"),
            ("page", "2"),
            ("_t", "1700000000"),
            ("date", " "),
        ]));
        assert_eq!(cleaned, params(&[("symbol", "000001")]));
    }

    #[test]
    fn declared_fields_come_first() {
        let row = match json!({"extra": 1, "现价": 131.5, "代码": "123001"}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let ordered = reorder_columns(row, BOND_SPEC.field_info);
        let keys: Vec<&String> = ordered.keys().collect();
        assert_eq!(keys, vec!["代码", "现价", "extra"]);
    }

    #[tokio::test]
    async fn refresh_then_get_returns_rows_with_metadata() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![
                json!({"代码": "123001", "现价": 131.5}),
                json!({"代码": "113009", "现价": 108.2}),
            ],
        );
        let store = Arc::new(MemoryStore::new());
        let service = bond_service(fetcher, store);

        let result = service.refresh_data(Params::new()).await.unwrap();
        assert_eq!(result.fetched_rows, 2);
        assert_eq!(result.inserted, 2);

        let page = service.get_data(&DataQuery::default()).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.limit, DEFAULT_LIMIT);
        for row in &page.data {
            assert!(row.contains_key("代码"));
            assert_eq!(row[DATA_SOURCE_FIELD], "akshare");
            assert_eq!(row[INTERFACE_FIELD], "bond_zh_hs_cov_spot");
            assert!(row.contains_key(UPDATED_AT_FIELD));
            assert!(row.contains_key("scraped_at"));
        }
    }

    #[tokio::test]
    async fn catalog_defaults_become_key_columns() {
        let spec = crate::collections::all()
            .find(|s| s.name == "bond_composite_index_cbond")
            .unwrap();
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_composite_index_cbond",
            vec![
                json!({"date": "2024-01-02", "value": 230.1}),
                json!({"date": "2024-01-03", "value": 230.4}),
            ],
        );
        let service = CollectionService::new(
            build_provider(spec, fetcher.clone()),
            Arc::new(MemoryStore::new()),
            BatchSettings::default(),
        );

        let result = service.refresh_data(Params::new()).await.unwrap();
        assert_eq!((result.inserted, result.skipped), (2, 0));
        assert_eq!(
            fetcher.last_params(),
            Some(params(&[("indicator", "财富"), ("period", "总值")]))
        );

        // 换一个期限是另一组数据
        service
            .refresh_data(params(&[("period", "1-3年")]))
            .await
            .unwrap();
        let page = service.get_data(&DataQuery::default()).await.unwrap();
        assert_eq!(page.total, 4);
        assert!(page.data.iter().all(|r| r["指标类型"] == "财富"));
    }

    #[tokio::test]
    async fn refreshing_twice_keeps_row_count() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![json!({"代码": "123001", "现价": 131.5})],
        );
        let store = Arc::new(MemoryStore::new());
        let service = bond_service(fetcher.clone(), store);

        service.refresh_data(Params::new()).await.unwrap();
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![json!({"代码": "123001", "现价": 132.8})],
        );
        let second = service.refresh_data(Params::new()).await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.updated, 1);

        let query = DataQuery {
            limit: Some(10),
            ..DataQuery::default()
        };
        let page = service.get_data(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0]["现价"], json!(132.8));
    }

    #[tokio::test]
    async fn rows_missing_unique_key_are_skipped() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![json!({"代码": "123001", "现价": 131.5}), json!({"现价": 99.0})],
        );
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));

        let result = service.refresh_data(Params::new()).await.unwrap();
        assert_eq!(result.skipped, 1);
        assert_eq!(result.total_processed, 1);
    }

    #[tokio::test]
    async fn empty_fetch_reports_no_data() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows("bond_zh_hs_cov_spot", vec![]);
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));

        let result = service.refresh_data(Params::new()).await.unwrap();
        assert_eq!(result.message, "No data available");
        assert_eq!(result.total_processed, 0);
    }

    #[tokio::test]
    async fn clear_then_overview_reports_zero() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![json!({"代码": "123001", "现价": 131.5})],
        );
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));
        service.refresh_data(Params::new()).await.unwrap();

        let overview = service.get_overview().await.unwrap();
        assert_eq!(overview.total_count, 1);
        assert!(overview.last_updated.is_some());

        let cleared = service.clear_data().await.unwrap();
        assert_eq!(cleared.deleted_count, 1);
        assert_eq!(cleared.message, "已删除 1 条数据");

        let overview = service.get_overview().await.unwrap();
        assert_eq!(overview.total_count, 0);
        assert!(overview.last_updated.is_none());
    }

    #[tokio::test]
    async fn limit_is_clamped() {
        let fetcher = Arc::new(StaticFetcher::new());
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));

        let query = |limit| DataQuery {
            limit: Some(limit),
            ..DataQuery::default()
        };
        assert_eq!(service.get_data(&query(0)).await.unwrap().limit, 1);
        assert_eq!(service.get_data(&query(5000)).await.unwrap().limit, MAX_LIMIT);
    }

    #[tokio::test]
    async fn missing_required_param_fails_before_fetch() {
        let fetcher = Arc::new(StaticFetcher::new());
        let store = Arc::new(MemoryStore::new());
        let service = CollectionService::new(
            build_provider(&HOLD_SPEC, fetcher.clone()),
            store.clone(),
            BatchSettings::default(),
        );

        let err = service
            .refresh_data(params(&[("symbol", "000001")]))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::MissingParams { .. }));
        assert_eq!(err.code(), "FUND_MISSING_PARAMS");
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(store.count(HOLD_SPEC.name, &Vec::new()).await.unwrap(), 0);
    }

    fn hold_service(
        store: Arc<MemoryStore>,
        calls: Arc<AtomicUsize>,
        fail_symbol: Option<&'static str>,
    ) -> CollectionService {
        let fetcher: Arc<dyn DataFetcher> =
            Arc::new(FnFetcher(move |_func: &str, p: &Params| -> std::result::Result<Vec<Record>, FetchError> {
                calls.fetch_add(1, Ordering::SeqCst);
                let symbol = p.get("symbol").cloned().unwrap_or_default();
                if Some(symbol.as_str()) == fail_symbol {
                    return Err(FetchError::Decode("boom".to_string()));
                }
                let date = p.get("date").cloned().unwrap_or_default();
                Ok(hold_rows(&symbol, &date))
            }));
        CollectionService::new(
            build_provider(&HOLD_SPEC, fetcher),
            store,
            BatchSettings::default(),
        )
    }

    #[tokio::test]
    async fn batch_refresh_is_incremental() {
        let store = Arc::new(MemoryStore::new());
        seed_fund_names(&store, &["000001", "000002"]).await;
        let calls = Arc::new(AtomicUsize::new(0));
        let service = hold_service(store.clone(), calls.clone(), None);

        let report = service
            .refresh_batch(params(&[("year", "2024")]), Some(2), None)
            .await
            .unwrap();
        assert_eq!(report.total_tasks, 2);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(report.saved_rows, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let page = service.get_data(&DataQuery::default()).await.unwrap();
        assert_eq!(page.total, 2);
        assert!(page.data.iter().all(|r| r.contains_key("基金代码")));

        let again = service
            .refresh_batch(params(&[("year", "2024")]), None, None)
            .await
            .unwrap();
        assert_eq!(again.total_tasks, 0);
        assert_eq!(again.message, "所有数据已存在，无需更新");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn batch_failures_are_counted_not_fatal() {
        let store = Arc::new(MemoryStore::new());
        seed_fund_names(&store, &["000001", "000002", "000003"]).await;
        let calls = Arc::new(AtomicUsize::new(0));
        let service = hold_service(store, calls.clone(), Some("000002"));

        let report = service
            .refresh_batch(params(&[("year", "2023")]), None, None)
            .await
            .unwrap();
        assert_eq!(report.processed, 3);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn batch_requires_source_collection() {
        let store = Arc::new(MemoryStore::new());
        let service = hold_service(store, Arc::new(AtomicUsize::new(0)), None);

        let err = service
            .refresh_batch(params(&[("year", "2024")]), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::DataUpdate { .. }));
        assert!(err.to_string().contains("fund_name_em 集合为空"));
    }

    #[tokio::test]
    async fn batch_rejects_invalid_year() {
        let store = Arc::new(MemoryStore::new());
        seed_fund_names(&store, &["000001"]).await;
        let service = hold_service(store, Arc::new(AtomicUsize::new(0)), None);

        let err = service
            .refresh_batch(params(&[("year", "二零二四")]), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::DataValidation { .. }));
        assert_eq!(err.status_code(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn batch_without_descriptor_runs_single_refresh() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![json!({"代码": "123001", "现价": 131.5})],
        );
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));

        let report = service.refresh_batch(Params::new(), None, None).await.unwrap();
        assert_eq!(report.total_tasks, 1);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.inserted, 1);
    }

    fn equals(field: &str, value: &str) -> DataQuery {
        DataQuery {
            equals: vec![(field.to_string(), value.to_string())],
            ..DataQuery::default()
        }
    }

    async fn seeded_bond_service() -> CollectionService {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "bond_zh_hs_cov_spot",
            vec![
                json!({"代码": "123001", "名称": "蓝晓转债", "现价": 131.5}),
                json!({"代码": "113009", "名称": "广汽转债", "现价": 108}),
                json!({"代码": "128136", "名称": "立讯转债", "现价": 120.25}),
            ],
        );
        let service = bond_service(fetcher, Arc::new(MemoryStore::new()));
        service.refresh_data(Params::new()).await.unwrap();
        service
    }

    #[test]
    fn query_values_follow_field_type() {
        assert_eq!(
            query_condition("123001", Some(FieldType::String)),
            Condition::Eq(json!("123001"))
        );
        assert_eq!(
            query_condition("131.5", Some(FieldType::Float)),
            Condition::In(vec![json!("131.5"), json!(131.5)])
        );
        assert_eq!(
            query_condition("2024", None),
            Condition::In(vec![json!("2024"), json!(2024)])
        );
        assert_eq!(
            query_condition("true", None),
            Condition::In(vec![json!("true"), json!(true)])
        );
        assert_eq!(query_condition("NaN", None), Condition::Eq(json!("NaN")));
        assert_eq!(query_condition("国债", None), Condition::Eq(json!("国债")));
    }

    #[tokio::test]
    async fn numeric_columns_match_query_strings() {
        let service = seeded_bond_service().await;

        let page = service.get_data(&equals("现价", "131.5")).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0]["代码"], "123001");

        // 整数存储也能用 "108" 或 "108.0" 命中
        assert_eq!(service.get_data(&equals("现价", "108")).await.unwrap().total, 1);
        assert_eq!(service.get_data(&equals("现价", "108.0")).await.unwrap().total, 1);

        // 未声明的字段同样按数值兼容
        assert_eq!(service.get_data(&equals("名称", "广汽转债")).await.unwrap().total, 1);
        assert_eq!(service.get_data(&equals("代码", "123001")).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn sort_and_search_options() {
        let service = seeded_bond_service().await;

        let query = DataQuery {
            sort_by: Some("现价".to_string()),
            sort_order: SortOrder::Asc,
            ..DataQuery::default()
        };
        let page = service.get_data(&query).await.unwrap();
        let codes: Vec<&Value> = page.data.iter().map(|r| &r["代码"]).collect();
        assert_eq!(codes, vec!["113009", "128136", "123001"]);

        let query = DataQuery {
            search: Some(("名称".to_string(), "立讯|蓝晓".to_string())),
            ..DataQuery::default()
        };
        assert_eq!(service.get_data(&query).await.unwrap().total, 2);

        let query = DataQuery {
            search: Some(("代码".to_string(), "(".to_string())),
            ..DataQuery::default()
        };
        let err = service.get_data(&query).await.unwrap_err();
        assert!(matches!(err, CollectionError::DataValidation { .. }));
        assert_eq!(err.code(), "BOND_DATA_VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn sort_direction_is_validated() {
        let service = bond_service(Arc::new(StaticFetcher::new()), Arc::new(MemoryStore::new()));
        assert_eq!(service.parse_sort_dir(None).unwrap(), SortOrder::Desc);
        assert_eq!(service.parse_sort_dir(Some("asc")).unwrap(), SortOrder::Asc);
        assert!(service.parse_sort_dir(Some("up")).is_err());
    }

    #[tokio::test]
    async fn stats_and_fields_use_provider_names() {
        let service = seeded_bond_service().await;

        let stats = service.get_stats().await.unwrap();
        assert_eq!(stats.collection_name, "bond_zh_hs_cov_spot");
        assert_eq!(stats.display_name, "可转债实时行情");
        assert_eq!(stats.total_count, 3);
        assert!(stats.latest_time.is_some());
        assert!(stats.earliest_time.is_some());

        let fields = service.fields();
        assert_eq!(fields.collection_name, "bond_zh_hs_cov_spot");
        assert_eq!(fields.display_name, "可转债实时行情");
    }

    #[tokio::test]
    async fn export_applies_sort_and_filter() {
        use crate::models::ExportFormat;

        let service = seeded_bond_service().await;
        let request = ExportRequest {
            file_format: ExportFormat::Csv,
            sort_by: Some("现价".to_string()),
            sort_dir: Some("asc".to_string()),
            filter_field: Some("名称".to_string()),
            filter_value: Some("转债".to_string()),
        };
        let file = service.export(&request).await.unwrap();
        assert_eq!(file.rows, 3);
        assert!(file.filename.starts_with("bond_zh_hs_cov_spot_"));
        assert!(file.filename.ends_with(".csv"));

        let text = String::from_utf8(file.content).unwrap();
        let mut lines = text.trim_start_matches('\u{feff}').lines();
        assert!(lines.next().unwrap().starts_with("代码,现价,名称"));
        assert!(lines.next().unwrap().starts_with("113009,108,广汽转债"));

        let request = ExportRequest {
            file_format: ExportFormat::Json,
            filter_field: Some("代码".to_string()),
            filter_value: Some("^12".to_string()),
            ..ExportRequest::default()
        };
        let file = service.export(&request).await.unwrap();
        assert_eq!(file.rows, 2);
        assert_eq!(file.content_type, "application/json");
    }

    async fn wait_for_task(tasks: &TaskManager, task_id: &str) -> TaskInfo {
        for _ in 0..200 {
            if let Some(task) = tasks.get(task_id).await {
                if task.completed_at.is_some() {
                    return task;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("task {task_id} did not finish");
    }

    #[tokio::test]
    async fn background_batch_reports_progress() {
        use crate::models::TaskStatus;

        let store = Arc::new(MemoryStore::new());
        seed_fund_names(&store, &["000001", "000002", "000003"]).await;
        let calls = Arc::new(AtomicUsize::new(0));
        let service = Arc::new(hold_service(store, calls.clone(), None));
        let tasks = Arc::new(TaskManager::new(Duration::from_secs(3600)));

        let task = service
            .spawn_refresh(
                tasks.clone(),
                RefreshMode::Batch,
                params(&[("year", "2024")]),
                Some(2),
            )
            .await;
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.collection_name, "fund_portfolio_hold_em");

        let done = wait_for_task(&tasks, &task.task_id).await;
        assert_eq!(done.status, TaskStatus::Success);
        assert_eq!((done.progress, done.total), (3, 3));
        assert_eq!(done.result.as_ref().unwrap()["success_count"], 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn background_failure_is_recorded() {
        use crate::models::TaskStatus;

        let service = Arc::new(hold_service(
            Arc::new(MemoryStore::new()),
            Arc::new(AtomicUsize::new(0)),
            None,
        ));
        let tasks = Arc::new(TaskManager::new(Duration::from_secs(3600)));

        let task = service
            .spawn_refresh(tasks.clone(), RefreshMode::Single, Params::new(), None)
            .await;
        let done = wait_for_task(&tasks, &task.task_id).await;
        assert_eq!(done.status, TaskStatus::Failed);
        assert!(done.error.unwrap().contains("缺少必须参数"));
    }
}
