//! 进程内存储
//!
//! 与 MongoStore 语义一致的内存实现，用于本地开发（`storage.backend = "memory"`）和测试

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{
    build_filter, compare_values, values_equal, CollectionStore, Filter, Matcher, SortOrder,
};
use crate::error::StorageError;
use crate::models::{Record, UpsertStats};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// upsert 匹配：唯一键字段逐个按值相等
fn matches(row: &Record, filter: &Record) -> bool {
    filter
        .iter()
        .all(|(k, v)| row.get(k).map_or(false, |existing| values_equal(existing, v)))
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn upsert_many(
        &self,
        collection: &str,
        rows: Vec<Record>,
        unique_keys: &[&str],
    ) -> Result<UpsertStats, StorageError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let mut stats = UpsertStats::default();

        for row in rows {
            let Some(filter) = build_filter(&row, unique_keys) else {
                stats.skipped += 1;
                continue;
            };

            match docs.iter_mut().find(|doc| matches(doc, &filter)) {
                Some(existing) => {
                    let changed = row
                        .iter()
                        .any(|(k, v)| !existing.get(k).map_or(false, |e| values_equal(e, v)));
                    if changed {
                        for (k, v) in row {
                            existing.insert(k, v);
                        }
                        stats.updated += 1;
                    } else {
                        stats.unchanged += 1;
                    }
                }
                None => {
                    let mut doc = Record::new();
                    doc.insert("_id".to_string(), Value::String(ObjectId::new().to_hex()));
                    doc.extend(row);
                    docs.push(doc);
                    stats.inserted += 1;
                }
            }
        }

        Ok(stats)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        sort_field: &str,
        order: SortOrder,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Record>, StorageError> {
        let matcher = Matcher::new(filter)?;
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut selected: Vec<&Record> = docs.iter().filter(|d| matcher.matches(d)).collect();
        selected.sort_by(|a, b| {
            let ord = compare_values(a.get(sort_field), b.get(sort_field));
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        Ok(selected
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StorageError> {
        let matcher = Matcher::new(filter)?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matcher.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn first_value(
        &self,
        collection: &str,
        field: &str,
        order: SortOrder,
    ) -> Result<Option<Value>, StorageError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(None);
        };

        let values = docs
            .iter()
            .filter_map(|d| d.get(field))
            .filter(|v| !v.is_null());
        let picked = match order {
            SortOrder::Asc => values.min_by(|a, b| compare_values(Some(*a), Some(*b))),
            SortOrder::Desc => values.max_by(|a, b| compare_values(Some(*a), Some(*b))),
        };
        Ok(picked.cloned())
    }

    async fn delete_all(&self, collection: &str) -> Result<u64, StorageError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .remove(collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }

    async fn distinct(&self, collection: &str, field: &str) -> Result<Vec<Value>, StorageError> {
        let collections = self.collections.read().await;
        let mut values: Vec<Value> = Vec::new();
        if let Some(docs) = collections.get(collection) {
            for value in docs.iter().filter_map(|d| d.get(field)) {
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
        }
        Ok(values)
    }

    async fn scan_fields(
        &self,
        collection: &str,
        fields: &[&str],
    ) -> Result<Vec<Record>, StorageError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|d| {
                        fields
                            .iter()
                            .filter_map(|f| d.get(*f).map(|v| (f.to_string(), v.clone())))
                            .collect::<Record>()
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn ensure_unique_index(
        &self,
        collection: &str,
        unique_keys: &[&str],
    ) -> Result<(), StorageError> {
        log::debug!("[{}] 内存存储无需创建索引: {:?}", collection, unique_keys);
        Ok(())
    }
}
