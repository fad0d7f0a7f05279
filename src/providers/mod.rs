//! 数据提供者
//!
//! 每个集合对应一个 provider：调用一个 akshare 函数，按描述符做参数映射、
//! 必填校验，并给每行数据打上抓取时间戳
//!
//! - `BaseProvider`：参数映射 + 必填校验 + 参数列 + 列重命名 + 时间戳
//! - `SimpleProvider`：参数原样透传，只追加时间戳

pub mod fetcher;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use crate::common::get_beijing_time;
use crate::error::{CollectionError, Result};
use crate::models::{CollectionSpec, FieldInfo, Params, ProviderKind, Record};

pub use fetcher::{AkToolsFetcher, DataFetcher};

/// 数据提供者接口
#[async_trait]
pub trait Provider: Send + Sync {
    /// 集合描述符
    fn spec(&self) -> &'static CollectionSpec;

    /// 获取数据，无数据时返回空列表
    async fn fetch_data(&self, params: Params) -> Result<Vec<Record>>;

    fn collection_name(&self) -> &'static str {
        self.spec().name
    }

    fn display_name(&self) -> &'static str {
        self.spec().display_name
    }

    fn unique_keys(&self) -> &'static [&'static str] {
        self.spec().unique_keys
    }

    /// 字段信息，未声明时只返回时间戳字段
    fn field_info(&self) -> Vec<FieldInfo> {
        let spec = self.spec();
        if spec.field_info.is_empty() {
            vec![FieldInfo::datetime(spec.timestamp_field, "抓取时间")]
        } else {
            spec.field_info.to_vec()
        }
    }
}

/// 按描述符类型创建 provider
pub fn build_provider(
    spec: &'static CollectionSpec,
    fetcher: Arc<dyn DataFetcher>,
) -> Arc<dyn Provider> {
    match spec.kind {
        ProviderKind::Simple => Arc::new(SimpleProvider::new(spec, fetcher)),
        ProviderKind::Mapped => Arc::new(BaseProvider::new(spec, fetcher)),
    }
}

/// 将前端参数名映射到 akshare 参数名
///
/// 多个前端参数可映射到同一个 akshare 参数，按映射表顺序第一个命中的生效；
/// 不在映射表中的参数原样保留（结果中已有同名参数时丢弃），
/// 最后为仍缺失的参数补上缺省值
pub fn map_params(spec: &CollectionSpec, params: &Params) -> Params {
    let mut result = Params::new();
    let mut used: HashSet<&str> = HashSet::new();

    for (frontend, target) in spec.param_mapping {
        if let Some(value) = params.get(*frontend).filter(|v| !v.is_empty()) {
            if !result.contains_key(*target) {
                result.insert(target.to_string(), value.clone());
            }
            used.insert(*frontend);
        }
    }

    for (key, value) in params {
        if used.contains(key.as_str()) || value.is_empty() {
            continue;
        }
        if !result.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    for (target, value) in spec.default_params {
        result
            .entry(target.to_string())
            .or_insert_with(|| value.to_string());
    }

    result
}

/// 日志中需要隐藏取值的参数
pub const SENSITIVE_PARAMS: &[&str] = &["api_key", "token", "cookie"];

/// 隐藏敏感参数的取值，只用于日志
pub fn redact_params(params: &Params) -> Params {
    params
        .iter()
        .map(|(k, v)| {
            if SENSITIVE_PARAMS.contains(&k.to_lowercase().as_str()) {
                (k.clone(), "***".to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}

/// 校验必填参数，返回全部缺失项
pub fn validate_params(spec: &CollectionSpec, params: &Params) -> Result<()> {
    let missing: Vec<String> = spec
        .required_params
        .iter()
        .filter(|p| params.get(**p).map(|v| v.is_empty()).unwrap_or(true))
        .map(|p| p.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CollectionError::MissingParams {
            domain: spec.domain,
            collection: spec.name.to_string(),
            missing,
        })
    }
}

/// 调用 akshare，失败时记录日志并原样返回错误
async fn call_akshare(
    spec: &CollectionSpec,
    fetcher: &dyn DataFetcher,
    params: &Params,
) -> Result<Vec<Record>> {
    fetcher
        .call(spec.akshare_func, params)
        .await
        .map_err(|e| {
            log::error!("调用 akshare.{} 失败: {}", spec.akshare_func, e);
            CollectionError::Fetch {
                domain: spec.domain,
                func: spec.akshare_func.to_string(),
                source: e,
            }
        })
}

/// 追加时间戳字段
fn add_metadata(rows: &mut [Record], timestamp_field: &str) {
    let now = get_beijing_time();
    for row in rows.iter_mut() {
        row.insert(timestamp_field.to_string(), Value::String(now.clone()));
    }
}

/// 通用数据提供者
pub struct BaseProvider {
    spec: &'static CollectionSpec,
    fetcher: Arc<dyn DataFetcher>,
}

impl BaseProvider {
    pub fn new(spec: &'static CollectionSpec, fetcher: Arc<dyn DataFetcher>) -> Self {
        Self { spec, fetcher }
    }

    /// 将参数值作为列写入数据（列已存在时不覆盖）
    fn add_param_columns(&self, rows: &mut [Record], params: &Params) {
        for (param, column) in self.spec.add_param_columns {
            if let Some(value) = params.get(*param) {
                for row in rows.iter_mut() {
                    if !row.contains_key(*column) {
                        row.insert(column.to_string(), Value::String(value.clone()));
                    }
                }
            }
        }
    }

    /// 按描述符重命名列，保持列的位置
    fn rename_columns(&self, rows: Vec<Record>) -> Vec<Record> {
        if self.spec.column_renames.is_empty() {
            return rows;
        }

        rows.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(key, value)| {
                        let renamed = self
                            .spec
                            .column_renames
                            .iter()
                            .find(|(from, _)| *from == key)
                            .map(|(_, to)| to.to_string())
                            .unwrap_or(key);
                        (renamed, value)
                    })
                    .collect()
            })
            .collect()
    }
}

#[async_trait]
impl Provider for BaseProvider {
    fn spec(&self) -> &'static CollectionSpec {
        self.spec
    }

    async fn fetch_data(&self, params: Params) -> Result<Vec<Record>> {
        let mapped = map_params(self.spec, &params);
        validate_params(self.spec, &mapped)?;

        log::info!(
            "[{}] 获取数据，参数: {:?}",
            self.spec.name,
            redact_params(&mapped)
        );

        let mut rows = call_akshare(self.spec, self.fetcher.as_ref(), &mapped).await?;
        if rows.is_empty() {
            log::warn!("[{}] akshare 没有返回数据", self.spec.name);
            return Ok(rows);
        }

        self.add_param_columns(&mut rows, &mapped);
        let mut rows = self.rename_columns(rows);
        add_metadata(&mut rows, self.spec.timestamp_field);

        log::info!("[{}] 获取到 {} 条数据", self.spec.name, rows.len());
        Ok(rows)
    }
}

/// 简单数据提供者，用于无参数或参数无需处理的接口
pub struct SimpleProvider {
    spec: &'static CollectionSpec,
    fetcher: Arc<dyn DataFetcher>,
}

impl SimpleProvider {
    pub fn new(spec: &'static CollectionSpec, fetcher: Arc<dyn DataFetcher>) -> Self {
        Self { spec, fetcher }
    }
}

#[async_trait]
impl Provider for SimpleProvider {
    fn spec(&self) -> &'static CollectionSpec {
        self.spec
    }

    async fn fetch_data(&self, params: Params) -> Result<Vec<Record>> {
        log::info!("[{}] 获取数据", self.spec.name);

        let mut rows = call_akshare(self.spec, self.fetcher.as_ref(), &params).await?;
        if rows.is_empty() {
            log::warn!("[{}] akshare 没有返回数据", self.spec.name);
            return Ok(rows);
        }

        add_metadata(&mut rows, self.spec.timestamp_field);
        log::info!("[{}] 获取到 {} 条数据", self.spec.name, rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::fetcher::testing::StaticFetcher;
    use super::*;
    use crate::models::Domain;
    use serde_json::json;

    static HOLD_SPEC: CollectionSpec = CollectionSpec {
        name: "fund_portfolio_hold_em",
        display_name: "基金持仓股票",
        domain: Domain::Funds,
        akshare_func: "fund_portfolio_hold_em",
        kind: ProviderKind::Mapped,
        unique_keys: &["基金代码", "股票代码", "季度"],
        param_mapping: &[
            ("fund_code", "symbol"),
            ("symbol", "symbol"),
            ("code", "symbol"),
            ("year", "date"),
            ("date", "date"),
        ],
        required_params: &["symbol", "date"],
        add_param_columns: &[("symbol", "基金代码")],
        column_renames: &[("name", "股票名称")],
        timestamp_field: "更新时间",
        ..CollectionSpec::EMPTY
    };

    static SIMPLE_SPEC: CollectionSpec = CollectionSpec {
        name: "fund_name_em",
        display_name: "基金基本信息",
        domain: Domain::Funds,
        akshare_func: "fund_name_em",
        unique_keys: &["基金代码"],
        ..CollectionSpec::EMPTY
    };

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn maps_frontend_names_to_akshare_names() {
        let mapped = map_params(&HOLD_SPEC, &params(&[("fund_code", "000001"), ("year", "2024")]));
        assert_eq!(mapped, params(&[("symbol", "000001"), ("date", "2024")]));
    }

    #[test]
    fn first_matching_alias_wins() {
        let mapped = map_params(
            &HOLD_SPEC,
            &params(&[("fund_code", "000001"), ("code", "999999"), ("date", "2023")]),
        );
        assert_eq!(mapped.get("symbol").map(String::as_str), Some("000001"));
        assert_eq!(mapped.get("date").map(String::as_str), Some("2023"));
        assert!(!mapped.contains_key("code"));
    }

    #[test]
    fn unmapped_params_pass_through() {
        let mapped = map_params(&HOLD_SPEC, &params(&[("symbol", "000001"), ("adjust", "qfq")]));
        assert_eq!(mapped.get("adjust").map(String::as_str), Some("qfq"));
    }

    #[test]
    fn defaults_fill_only_missing_params() {
        static INDEX_SPEC: CollectionSpec = CollectionSpec {
            name: "bond_composite_index_cbond",
            display_name: "中债综合指数",
            domain: Domain::Bonds,
            akshare_func: "bond_composite_index_cbond",
            kind: ProviderKind::Mapped,
            unique_keys: &["指标类型", "期限", "date"],
            param_mapping: &[("indicator", "indicator"), ("period", "period")],
            default_params: &[("indicator", "财富"), ("period", "总值")],
            required_params: &["indicator", "period"],
            ..CollectionSpec::EMPTY
        };

        let mapped = map_params(&INDEX_SPEC, &params(&[("period", "1-3年")]));
        assert_eq!(mapped, params(&[("indicator", "财富"), ("period", "1-3年")]));
        assert!(validate_params(&INDEX_SPEC, &mapped).is_ok());

        // 空字符串视为缺失
        let mapped = map_params(&INDEX_SPEC, &params(&[("indicator", "")]));
        assert_eq!(mapped.get("indicator").map(String::as_str), Some("财富"));
    }

    #[test]
    fn secrets_are_masked_for_logging() {
        let redacted = redact_params(&params(&[
            ("base", "USD"),
            ("api_key", "sk-live-123"),
            ("Token", "abc"),
        ]));
        assert_eq!(redacted.get("base").map(String::as_str), Some("USD"));
        assert_eq!(redacted.get("api_key").map(String::as_str), Some("***"));
        assert_eq!(redacted.get("Token").map(String::as_str), Some("***"));
        assert!(!format!("{:?}", redacted).contains("sk-live-123"));
    }

    #[test]
    fn validation_reports_all_missing() {
        let err = validate_params(&HOLD_SPEC, &Params::new()).unwrap_err();
        match err {
            CollectionError::MissingParams { missing, .. } => {
                assert_eq!(missing, vec!["symbol".to_string(), "date".to_string()])
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(validate_params(&HOLD_SPEC, &params(&[("symbol", "1"), ("date", "2024")])).is_ok());
    }

    #[tokio::test]
    async fn missing_required_param_never_calls_fetcher() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows("fund_portfolio_hold_em", vec![json!({"股票代码": "600000"})]);
        let provider = BaseProvider::new(&HOLD_SPEC, fetcher.clone());

        let err = provider
            .fetch_data(params(&[("fund_code", "000001")]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "FUND_MISSING_PARAMS");
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn base_provider_adds_columns_renames_and_timestamps() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows(
            "fund_portfolio_hold_em",
            vec![
                json!({"股票代码": "600000", "name": "浦发银行", "季度": "2024年1季度"}),
                json!({"股票代码": "600036", "name": "招商银行", "季度": "2024年1季度", "基金代码": "keep"}),
            ],
        );
        let provider = BaseProvider::new(&HOLD_SPEC, fetcher.clone());

        let rows = provider
            .fetch_data(params(&[("code", "000001"), ("year", "2024")]))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["基金代码"], "000001");
        assert_eq!(rows[1]["基金代码"], "keep");
        assert_eq!(rows[0]["股票名称"], "浦发银行");
        assert!(rows[0].get("name").is_none());
        assert!(rows[0]["更新时间"].as_str().unwrap().ends_with("+08:00"));

        // 重命名后列位置不变
        let keys: Vec<&String> = rows[0].keys().collect();
        assert_eq!(keys[1], "股票名称");

        assert_eq!(
            fetcher.last_params().unwrap(),
            params(&[("symbol", "000001"), ("date", "2024")])
        );
    }

    #[tokio::test]
    async fn simple_provider_passes_params_unchanged() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows("fund_name_em", vec![json!({"基金代码": "000001"})]);
        let provider = SimpleProvider::new(&SIMPLE_SPEC, fetcher.clone());

        let rows = provider
            .fetch_data(params(&[("fund_code", "x")]))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains_key("scraped_at"));
        assert_eq!(fetcher.last_params().unwrap(), params(&[("fund_code", "x")]));
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let fetcher = Arc::new(StaticFetcher::new());
        fetcher.set_rows("fund_name_em", vec![]);
        let provider = SimpleProvider::new(&SIMPLE_SPEC, fetcher);
        assert!(provider.fetch_data(Params::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_failures_surface_as_fetch_errors() {
        let provider = SimpleProvider::new(&SIMPLE_SPEC, Arc::new(StaticFetcher::new()));
        let err = provider.fetch_data(Params::new()).await.unwrap_err();
        assert!(matches!(err, CollectionError::Fetch { .. }));
        assert_eq!(err.code(), "FUND_DATA_FETCH_ERROR");
    }

    #[test]
    fn field_info_falls_back_to_timestamp() {
        let provider = SimpleProvider::new(&SIMPLE_SPEC, Arc::new(StaticFetcher::new()));
        let fields = provider.field_info();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "scraped_at");
        assert_eq!(fields[0].description, "抓取时间");
        assert_eq!(provider.unique_keys(), &["基金代码"]);
    }
}
