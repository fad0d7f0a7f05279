//! 存储层
//!
//! 集合数据以文档形式保存，写入时按唯一键 upsert：
//! - 唯一键已存在且数据不同 → 更新
//! - 唯一键已存在且数据相同 → 不变
//! - 唯一键不存在 → 插入
//! - 缺少唯一键字段的行 → 跳过

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::cmp::Ordering;

use crate::common::{SCRAPED_AT_FIELD, UPDATED_AT_FIELD};
use crate::error::StorageError;
use crate::models::{Record, UpsertStats};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// 单个字段的过滤条件
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// 等于
    Eq(Value),
    /// 等于任一候选值
    In(Vec<Value>),
    /// 字符串正则匹配，不区分大小写
    Regex(String),
}

/// 字段过滤条件，全部满足才命中
pub type Filter = Vec<(String, Condition)>;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }

    pub fn parse(s: &str) -> Option<SortOrder> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "1" => Some(SortOrder::Asc),
            "desc" | "-1" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// 集合存储接口
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// 按唯一键批量 upsert
    async fn upsert_many(
        &self,
        collection: &str,
        rows: Vec<Record>,
        unique_keys: &[&str],
    ) -> Result<UpsertStats, StorageError>;

    /// 分页查询，按 `sort_field` 排序
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort_field: &str,
        order: SortOrder,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Record>, StorageError>;

    /// 统计文档数
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StorageError>;

    /// 按字段排序后第一条文档中该字段的值
    async fn first_value(
        &self,
        collection: &str,
        field: &str,
        order: SortOrder,
    ) -> Result<Option<Value>, StorageError>;

    /// 删除集合内全部文档，返回删除条数
    async fn delete_all(&self, collection: &str) -> Result<u64, StorageError>;

    /// 字段去重取值
    async fn distinct(&self, collection: &str, field: &str) -> Result<Vec<Value>, StorageError>;

    /// 只读取指定字段
    async fn scan_fields(
        &self,
        collection: &str,
        fields: &[&str],
    ) -> Result<Vec<Record>, StorageError>;

    /// 创建唯一键组合索引
    async fn ensure_unique_index(
        &self,
        collection: &str,
        unique_keys: &[&str],
    ) -> Result<(), StorageError>;
}

/// 根据唯一键构建 upsert 的匹配条件
///
/// 没有唯一键时用整行（去掉时间字段）匹配；
/// 有唯一键但行内缺少任一唯一键字段时返回 None。
/// 唯一键的值原样放入条件，数组和对象与写入的文档保持一致
pub fn build_filter(row: &Record, unique_keys: &[&str]) -> Option<Record> {
    if unique_keys.is_empty() {
        let filter: Record = row
            .iter()
            .filter(|(k, _)| {
                !matches!(k.as_str(), UPDATED_AT_FIELD | SCRAPED_AT_FIELD | "_id")
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        return Some(filter);
    }

    let mut filter = Record::new();
    for key in unique_keys {
        match row.get(*key) {
            None | Some(Value::Null) => return None,
            Some(value) => {
                filter.insert(key.to_string(), value.clone());
            }
        }
    }
    Some(filter)
}

/// 字段值相等判断，数字按数值比较（整数 1 与浮点 1.0 相等）
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).map_or(false, |other| values_equal(v, other)))
        }
        _ => a == b,
    }
}

/// 编译正则条件，不区分大小写
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

enum Compiled {
    Eq(Value),
    In(Vec<Value>),
    Regex(Regex),
}

/// 编译后的过滤条件，逐行匹配
pub struct Matcher {
    conditions: Vec<(String, Compiled)>,
}

impl Matcher {
    pub fn new(filter: &Filter) -> Result<Self, StorageError> {
        let conditions = filter
            .iter()
            .map(|(field, condition)| {
                let compiled = match condition {
                    Condition::Eq(v) => Compiled::Eq(v.clone()),
                    Condition::In(values) => Compiled::In(values.clone()),
                    Condition::Regex(pattern) => Compiled::Regex(compile_pattern(pattern)?),
                };
                Ok((field.clone(), compiled))
            })
            .collect::<Result<Vec<_>, StorageError>>()?;
        Ok(Self { conditions })
    }

    pub fn matches(&self, row: &Record) -> bool {
        self.conditions.iter().all(|(field, condition)| {
            let Some(value) = row.get(field) else {
                return false;
            };
            match condition {
                Compiled::Eq(expected) => values_equal(value, expected),
                Compiled::In(candidates) => candidates.iter().any(|c| values_equal(value, c)),
                Compiled::Regex(re) => value.as_str().map_or(false, |s| re.is_match(s)),
            }
        })
    }
}

/// 文档字段值比较：缺失/null 最小且彼此相等，数字按数值，字符串按字典序
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => match (rank(a), rank(b)) {
            (0, 0) => Ordering::Equal,
            (ra, rb) if ra == rb => a.map(|v| v.to_string()).cmp(&b.map(|v| v.to_string())),
            (ra, rb) => ra.cmp(&rb),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn filter_uses_unique_keys_only() {
        let row = record(json!({"代码": "123001", "现价": 131.5, "更新时间": "t"}));
        let filter = build_filter(&row, &["代码"]).unwrap();
        assert_eq!(Value::Object(filter), json!({"代码": "123001"}));
    }

    #[test]
    fn filter_requires_every_unique_key() {
        let row = record(json!({"代码": "123001"}));
        assert!(build_filter(&row, &["代码", "日期"]).is_none());

        let row = record(json!({"代码": "123001", "日期": null}));
        assert!(build_filter(&row, &["代码", "日期"]).is_none());
    }

    #[test]
    fn filter_without_keys_ignores_timestamps() {
        let row = record(json!({"a": 1, "更新时间": "t", "scraped_at": "s"}));
        let filter = build_filter(&row, &[]).unwrap();
        assert_eq!(Value::Object(filter), json!({"a": 1}));
    }

    #[test]
    fn compound_values_keep_their_shape_in_filter() {
        let row = record(json!({"k": [1, 2], "m": {"a": 1}}));
        let filter = build_filter(&row, &["k", "m"]).unwrap();
        assert_eq!(filter["k"], json!([1, 2]));
        assert_eq!(filter["m"], json!({"a": 1}));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(values_equal(&json!([1, "a"]), &json!([1.0, "a"])));
        assert!(!values_equal(&json!("1"), &json!(1)));
    }

    #[test]
    fn matcher_handles_each_condition() {
        let row = record(json!({"代码": "123001", "名称": "蓝标转债", "现价": 131.5}));

        let filter: Filter = vec![(
            "现价".to_string(),
            Condition::In(vec![json!("131.5"), json!(131.5)]),
        )];
        assert!(Matcher::new(&filter).unwrap().matches(&row));

        let filter: Filter = vec![("名称".to_string(), Condition::Regex("蓝标".to_string()))];
        assert!(Matcher::new(&filter).unwrap().matches(&row));

        let filter: Filter = vec![("代码".to_string(), Condition::Regex("^1230".to_string()))];
        assert!(Matcher::new(&filter).unwrap().matches(&row));

        let filter: Filter = vec![("现价".to_string(), Condition::Regex("131".to_string()))];
        assert!(!Matcher::new(&filter).unwrap().matches(&row));

        let filter: Filter = vec![("缺失".to_string(), Condition::Eq(json!(1)))];
        assert!(!Matcher::new(&filter).unwrap().matches(&row));

        let filter: Filter = vec![("名称".to_string(), Condition::Regex("(".to_string()))];
        assert!(Matcher::new(&filter).is_err());
    }

    #[test]
    fn sort_order_parsing() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("up"), None);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn value_ordering() {
        assert_eq!(compare_values(Some(&json!(2)), Some(&json!(10))), Ordering::Less);
        assert_eq!(
            compare_values(Some(&json!("2024-01-02")), Some(&json!("2024-01-10"))),
            Ordering::Less
        );
        assert_eq!(compare_values(None, Some(&json!(0))), Ordering::Less);
        assert_eq!(compare_values(Some(&Value::Null), None), Ordering::Equal);
        assert_eq!(compare_values(None, Some(&Value::Null)), Ordering::Equal);
        assert_eq!(compare_values(Some(&Value::Null), Some(&json!(false))), Ordering::Less);
    }
}
