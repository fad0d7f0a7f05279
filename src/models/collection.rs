//! 数据集合模型
//!
//! 定义集合描述符、字段信息以及刷新/查询/概览等接口的数据结构

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::common::SCRAPED_AT_FIELD;

/// 一行数据：字段名 -> 值（保持数据源返回的字段顺序）
pub type Record = Map<String, Value>;

/// 传给 akshare 的参数（akshare 接口参数一律按字符串传递）
pub type Params = BTreeMap<String, String>;

/// 数据所属业务域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Futures,
    Stocks,
    Bonds,
    Options,
    Currencies,
    Funds,
}

impl Domain {
    /// 错误码前缀
    pub fn code_prefix(&self) -> &'static str {
        match self {
            Domain::Futures => "FUTURES",
            Domain::Stocks => "STOCK",
            Domain::Bonds => "BOND",
            Domain::Options => "OPTION",
            Domain::Currencies => "CURRENCY",
            Domain::Funds => "FUND",
        }
    }

    /// 中文名称
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Futures => "期货",
            Domain::Stocks => "股票",
            Domain::Bonds => "债券",
            Domain::Options => "期权",
            Domain::Currencies => "货币",
            Domain::Funds => "基金",
        }
    }

    pub fn parse(s: &str) -> Option<Domain> {
        match s.trim().to_lowercase().as_str() {
            "futures" => Some(Domain::Futures),
            "stocks" | "stock" => Some(Domain::Stocks),
            "bonds" | "bond" => Some(Domain::Bonds),
            "options" | "option" => Some(Domain::Options),
            "currencies" | "currency" => Some(Domain::Currencies),
            "funds" | "fund" => Some(Domain::Funds),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 字段声明类型（仅用于描述，不做强制校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Float,
    Date,
    Datetime,
    Object,
}

/// 字段信息
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldInfo {
    /// 字段名
    pub name: &'static str,
    /// 声明类型
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// 字段说明
    pub description: &'static str,
}

impl FieldInfo {
    pub const fn new(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self { name, field_type, description }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldType::String, description)
    }

    pub const fn int(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldType::Int, description)
    }

    pub const fn float(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldType::Float, description)
    }

    pub const fn date(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldType::Date, description)
    }

    pub const fn datetime(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldType::Datetime, description)
    }
}

/// Provider 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// 参数原样透传，只追加时间戳
    Simple,
    /// 参数映射 + 必填校验 + 参数列 + 列重命名
    Mapped,
}

/// 批量更新配置
///
/// 从 `source_collection` 的 `source_field` 取出代码列表，
/// 逐个（可选再按年份展开）调用 provider
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchSpec {
    /// 代码来源集合
    pub source_collection: &'static str,
    /// 代码来源字段
    pub source_field: &'static str,
    /// 代码传给 provider 时使用的参数名
    pub param: &'static str,
    /// 是否按年份展开
    pub use_year: bool,
    /// 年份起点（到今年为止）
    pub years_from: Option<i32>,
    /// 增量检查字段，顺序与 (code, year) 对应
    pub incremental_fields: &'static [&'static str],
    /// 需要截取开头四位年份再比较的字段
    pub year_fields: &'static [&'static str],
}

/// 集合描述符
///
/// 每个集合对应一个 akshare 函数，描述符是纯静态配置
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectionSpec {
    /// 集合名称（MongoDB collection）
    pub name: &'static str,
    /// 显示名称
    pub display_name: &'static str,
    /// 业务域
    pub domain: Domain,
    /// akshare 函数名
    pub akshare_func: &'static str,
    /// Provider 类型
    pub kind: ProviderKind,
    /// 去重唯一键
    pub unique_keys: &'static [&'static str],
    /// 字段信息
    pub field_info: &'static [FieldInfo],
    /// 参数映射：(前端参数名, akshare 参数名)，同一 akshare 参数取第一个命中的前端参数
    pub param_mapping: &'static [(&'static str, &'static str)],
    /// 参数缺省值：(akshare 参数名, 取值)，映射后仍缺失时补上
    pub default_params: &'static [(&'static str, &'static str)],
    /// 必填参数（akshare 参数名）
    pub required_params: &'static [&'static str],
    /// 参数列：(akshare 参数名, 写入的列名)
    pub add_param_columns: &'static [(&'static str, &'static str)],
    /// 列重命名：(原列名, 新列名)
    pub column_renames: &'static [(&'static str, &'static str)],
    /// 时间戳字段名
    pub timestamp_field: &'static str,
    /// 批量更新配置
    pub batch: Option<BatchSpec>,
}

impl CollectionSpec {
    /// 所有可选项取空值的模板，配合结构体更新语法使用
    pub const EMPTY: CollectionSpec = CollectionSpec {
        name: "",
        display_name: "",
        domain: Domain::Stocks,
        akshare_func: "",
        kind: ProviderKind::Simple,
        unique_keys: &[],
        field_info: &[],
        param_mapping: &[],
        default_params: &[],
        required_params: &[],
        add_param_columns: &[],
        column_renames: &[],
        timestamp_field: SCRAPED_AT_FIELD,
        batch: None,
    };
}

/// 集合列表项
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    pub name: &'static str,
    pub display_name: &'static str,
    pub domain: Domain,
    pub akshare_func: &'static str,
    pub unique_keys: &'static [&'static str],
    pub required_params: &'static [&'static str],
    pub batch: bool,
    pub route: String,
}

impl From<&CollectionSpec> for CollectionSummary {
    fn from(spec: &CollectionSpec) -> Self {
        Self {
            name: spec.name,
            display_name: spec.display_name,
            domain: spec.domain,
            akshare_func: spec.akshare_func,
            unique_keys: spec.unique_keys,
            required_params: spec.required_params,
            batch: spec.batch.is_some(),
            route: format!("/api/v1/collections/{}", spec.name),
        }
    }
}

/// 字段信息响应
#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    pub collection_name: &'static str,
    pub display_name: &'static str,
    pub unique_keys: &'static [&'static str],
    pub fields: Vec<FieldInfo>,
}

/// 数据概览
#[derive(Debug, Serialize, Deserialize)]
pub struct Overview {
    pub collection_name: String,
    pub display_name: String,
    pub total_count: u64,
    pub last_updated: Option<Value>,
    pub oldest_date: Option<Value>,
}

/// 集合统计
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionStats {
    pub collection_name: String,
    pub display_name: String,
    pub total_count: u64,
    /// 最近一次写入时间
    pub latest_time: Option<Value>,
    /// 最早一次写入时间
    pub earliest_time: Option<Value>,
}

/// 分页数据
#[derive(Debug, Serialize, Deserialize)]
pub struct DataPage {
    pub data: Vec<Record>,
    pub total: u64,
    pub skip: u64,
    pub limit: i64,
}

/// 清空结果
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResult {
    pub deleted_count: u64,
    pub message: String,
}

/// 单次 upsert 的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertStats {
    /// 新增
    pub inserted: u64,
    /// 已存在且内容有变化
    pub updated: u64,
    /// 已存在且内容无变化
    pub unchanged: u64,
    /// 缺少唯一键被跳过
    pub skipped: u64,
}

impl UpsertStats {
    pub fn total_processed(&self) -> u64 {
        self.inserted + self.updated + self.unchanged
    }
}

/// 单次刷新结果
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResult {
    pub message: String,
    pub fetched_rows: u64,
    pub inserted: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub total_processed: u64,
}

impl RefreshResult {
    pub fn empty() -> Self {
        Self::from_stats("No data available".to_string(), 0, UpsertStats::default())
    }

    pub fn from_stats(message: String, fetched_rows: u64, stats: UpsertStats) -> Self {
        Self {
            message,
            fetched_rows,
            inserted: stats.inserted,
            updated: stats.updated,
            unchanged: stats.unchanged,
            skipped: stats.skipped,
            total_processed: stats.total_processed(),
        }
    }
}

/// 批量刷新报告
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub message: String,
    /// 任务总数
    pub total_tasks: u64,
    /// 已处理任务数
    pub processed: u64,
    /// 成功保存的任务数
    pub success_count: u64,
    /// 失败任务数
    pub failed: u64,
    /// 获取的数据行数
    pub fetched_rows: u64,
    /// 保存的数据行数
    pub saved_rows: u64,
    /// 新增 + 更新
    pub inserted: u64,
}

/// 刷新模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    #[default]
    Single,
    Batch,
}

/// 刷新请求体
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshRequest {
    /// 刷新模式
    #[serde(default, alias = "update_type")]
    pub mode: RefreshMode,
    /// 批量并发数
    pub concurrency: Option<usize>,
    /// 后台执行，立即返回任务 ID（批量刷新总是后台执行）
    #[serde(default)]
    pub background: bool,
    /// akshare 参数
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// 刷新响应：同步刷新结果或后台任务（批量刷新报告写入任务结果）
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RefreshOutcome {
    Single(RefreshResult),
    Task(TaskAccepted),
}

/// 后台刷新任务已创建
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskAccepted {
    pub task_id: String,
    pub status: TaskStatus,
    pub message: String,
}

/// 后台任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Success,
    Failed,
}

/// 后台任务信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInfo {
    pub task_id: String,
    /// 所属集合
    pub collection_name: String,
    pub description: String,
    pub status: TaskStatus,
    /// 已完成的子任务数
    pub progress: u64,
    /// 子任务总数
    pub total: u64,
    pub message: String,
    pub created_at: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    /// 完成后的刷新结果
    pub result: Option<Value>,
    pub error: Option<String>,
}

/// 导出文件格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

/// 导出请求体
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportRequest {
    #[serde(default)]
    pub file_format: ExportFormat,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub filter_field: Option<String>,
    pub filter_value: Option<String>,
}

/// 集合列表查询参数
#[derive(Debug, Deserialize)]
pub struct CollectionListQuery {
    /// 业务域过滤
    pub domain: Option<String>,
}

/// 把 JSON 值转换成 akshare 参数字符串，空值返回 None
pub fn value_to_param(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}
