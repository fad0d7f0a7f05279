//! akshare 数据获取
//!
//! akshare 是 Python 库，这里通过 HTTP 桥接服务调用（AKTools 约定）：
//! `GET {base_url}/api/public/{akshare_func}?参数` 返回行对象组成的 JSON 数组

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;
use crate::models::{Params, Record};

/// 调用单个 akshare 函数
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn call(&self, func: &str, params: &Params) -> Result<Vec<Record>, FetchError>;
}

/// AKTools HTTP 桥接客户端
pub struct AkToolsFetcher {
    /// HTTP 客户端
    client: Client,
    /// 桥接服务根地址（以 / 结尾）
    base_url: Url,
}

impl AkToolsFetcher {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    /// 拼接 akshare 函数的接口地址
    pub fn endpoint(&self, func: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(&format!("api/public/{}", func))?)
    }
}

#[async_trait]
impl DataFetcher for AkToolsFetcher {
    async fn call(&self, func: &str, params: &Params) -> Result<Vec<Record>, FetchError> {
        let url = self.endpoint(func)?;
        log::debug!(
            "请求 akshare 桥接接口 URL: {} 参数: {:?}",
            url,
            super::redact_params(params)
        );

        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::UnknownFunction(func.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                func: func.to_string(),
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let value: Value = response.json().await?;
        parse_rows(value)
    }
}

/// 按品种分表返回时补充的品种列
pub const KEYED_TABLE_COLUMN: &str = "symbol";

/// 把桥接服务的返回值解析成行列表
///
/// 支持裸数组、`{"data": [...]}` 包装、空值，以及按品种分表的
/// `{"CU": [...], "AL": [...]}`（展开后补 `symbol` 列）
pub fn parse_rows(value: Value) -> Result<Vec<Record>, FetchError> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => return Ok(Vec::new()),
            Some(other) => {
                return Err(FetchError::Decode(format!("data 字段不是数组: {}", other)))
            }
            None => return flatten_keyed_tables(obj),
        },
        other => return Err(FetchError::Decode(format!("期望 JSON 数组，实际为: {}", other))),
    };

    to_records(items)
}

fn to_records(items: Vec<Value>) -> Result<Vec<Record>, FetchError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(FetchError::Decode(format!("第 {} 行不是对象: {}", i, other))),
        })
        .collect()
}

fn flatten_keyed_tables(tables: Record) -> Result<Vec<Record>, FetchError> {
    let mut rows = Vec::new();
    for (key, table) in tables {
        let Value::Array(items) = table else {
            return Err(FetchError::Decode(format!("{} 不是数据表: {}", key, table)));
        };
        for mut row in to_records(items)? {
            if !row.contains_key(KEYED_TABLE_COLUMN) {
                row.insert(KEYED_TABLE_COLUMN.to_string(), Value::String(key.clone()));
            }
            rows.push(row);
        }
    }
    Ok(rows)
}

#[cfg(test)]
pub mod testing {
    //! 测试用的进程内数据源

    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 按函数名返回预设数据，并记录调用
    #[derive(Default)]
    pub struct StaticFetcher {
        responses: Mutex<HashMap<String, Vec<Record>>>,
        calls: AtomicUsize,
        last_params: Mutex<Option<Params>>,
    }

    impl StaticFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_rows(&self, func: &str, rows: Vec<Value>) {
            let rows = rows
                .into_iter()
                .filter_map(|v| match v {
                    Value::Object(m) => Some(m),
                    _ => None,
                })
                .collect();
            self.responses.lock().unwrap().insert(func.to_string(), rows);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_params(&self) -> Option<Params> {
            self.last_params.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DataFetcher for StaticFetcher {
        async fn call(&self, func: &str, params: &Params) -> Result<Vec<Record>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_params.lock().unwrap() = Some(params.clone());
            self.responses
                .lock()
                .unwrap()
                .get(func)
                .cloned()
                .ok_or_else(|| FetchError::UnknownFunction(func.to_string()))
        }
    }

    /// 根据参数动态生成数据
    pub struct FnFetcher<F>(pub F);

    #[async_trait]
    impl<F> DataFetcher for FnFetcher<F>
    where
        F: Fn(&str, &Params) -> Result<Vec<Record>, FetchError> + Send + Sync,
    {
        async fn call(&self, func: &str, params: &Params) -> Result<Vec<Record>, FetchError> {
            (self.0)(func, params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_joins_function_name() {
        let fetcher = AkToolsFetcher::new(
            "http://127.0.0.1:8080",
            Duration::from_secs(5),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            fetcher.endpoint("bond_zh_hs_cov_spot").unwrap().as_str(),
            "http://127.0.0.1:8080/api/public/bond_zh_hs_cov_spot"
        );

        let nested = AkToolsFetcher::new(
            "http://bridge.local/aktools/",
            Duration::from_secs(5),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            nested.endpoint("fund_name_em").unwrap().as_str(),
            "http://bridge.local/aktools/api/public/fund_name_em"
        );
    }

    #[test]
    fn parse_rows_accepts_array_and_wrapper() {
        let rows = parse_rows(json!([{"代码": "123001", "现价": 131.5}])).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["代码"], "123001");

        let rows = parse_rows(json!({"data": [{"a": 1}, {"a": 2}]})).unwrap();
        assert_eq!(rows.len(), 2);

        assert!(parse_rows(Value::Null).unwrap().is_empty());
        assert!(parse_rows(json!({"data": null})).unwrap().is_empty());
    }

    #[test]
    fn keyed_tables_are_flattened_with_symbol() {
        let rows = parse_rows(json!({
            "CU": [{"名次": 1, "会员简称": "中信期货"}],
            "AL": [{"名次": 1, "会员简称": "国泰君安"}, {"名次": 2, "symbol": "AL2405"}],
        }))
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["symbol"], "CU");
        assert_eq!(rows[1]["symbol"], "AL");
        assert_eq!(rows[2]["symbol"], "AL2405");

        assert!(parse_rows(json!({})).unwrap().is_empty());
        assert!(matches!(
            parse_rows(json!({"CU": "not a table"})),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn parse_rows_rejects_scalars() {
        assert!(matches!(parse_rows(json!("oops")), Err(FetchError::Decode(_))));
        assert!(matches!(parse_rows(json!([1, 2])), Err(FetchError::Decode(_))));
    }
}
