//! MongoDB 存储
//!
//! 每个数据集合对应一个同名的 MongoDB collection

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::options::{ClientOptions, FindOneOptions, FindOptions, IndexOptions, UpdateOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use serde_json::Value;

use super::{build_filter, CollectionStore, Condition, Filter, SortOrder};
use crate::error::StorageError;
use crate::models::{Record, UpsertStats};

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// 连接 MongoDB
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("akshare-collections".to_string());
        let client = Client::with_options(options)?;

        log::info!("已连接 MongoDB，数据库: {}", database);
        Ok(Self {
            db: client.database(database),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

/// 行数据转 BSON 文档
fn to_document(record: &Record) -> Result<Document, StorageError> {
    let mut doc = Document::new();
    for (key, value) in record {
        doc.insert(key.clone(), bson::to_bson(value)?);
    }
    Ok(doc)
}

/// 过滤条件转查询文档
fn filter_to_document(filter: &Filter) -> Result<Document, StorageError> {
    let mut doc = Document::new();
    for (key, condition) in filter {
        let value = match condition {
            Condition::Eq(value) => bson::to_bson(value)?,
            Condition::In(values) => {
                let values = values
                    .iter()
                    .map(bson::to_bson)
                    .collect::<Result<Vec<Bson>, _>>()?;
                Bson::Document(doc! { "$in": values })
            }
            Condition::Regex(pattern) => {
                Bson::Document(doc! { "$regex": pattern.as_str(), "$options": "i" })
            }
        };
        doc.insert(key.clone(), value);
    }
    Ok(doc)
}

/// BSON 文档转行数据，`_id` 转成十六进制字符串
fn from_document(mut doc: Document) -> Record {
    if let Ok(id) = doc.get_object_id("_id") {
        doc.insert("_id", id.to_hex());
    }
    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

#[async_trait]
impl CollectionStore for MongoStore {
    async fn upsert_many(
        &self,
        collection: &str,
        rows: Vec<Record>,
        unique_keys: &[&str],
    ) -> Result<UpsertStats, StorageError> {
        let coll = self.collection(collection);
        let options = UpdateOptions::builder().upsert(true).build();
        let mut stats = UpsertStats::default();

        for row in &rows {
            let Some(filter) = build_filter(row, unique_keys) else {
                stats.skipped += 1;
                continue;
            };

            let result = coll
                .update_one(
                    to_document(&filter)?,
                    doc! { "$set": to_document(row)? },
                    options.clone(),
                )
                .await?;

            if result.upserted_id.is_some() {
                stats.inserted += 1;
            } else if result.modified_count > 0 {
                stats.updated += 1;
            } else {
                stats.unchanged += 1;
            }
        }

        log::debug!(
            "[{}] 写入 {} 条: 新增 {} 更新 {} 未变化 {} 跳过 {}",
            collection,
            rows.len(),
            stats.inserted,
            stats.updated,
            stats.unchanged,
            stats.skipped
        );
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
        let mut sort = Document::new();
        sort.insert(sort_field, order.as_i32());
        let options = FindOptions::builder()
            .sort(sort)
            .skip(skip)
            .limit(limit)
            .build();

        let cursor = self
            .collection(collection)
            .find(filter_to_document(filter)?, options)
            .await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(from_document).collect())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StorageError> {
        Ok(self
            .collection(collection)
            .count_documents(filter_to_document(filter)?, None)
            .await?)
    }

    async fn first_value(
        &self,
        collection: &str,
        field: &str,
        order: SortOrder,
    ) -> Result<Option<Value>, StorageError> {
        let mut filter = Document::new();
        filter.insert(field, doc! { "$exists": true, "$ne": Bson::Null });
        let mut sort = Document::new();
        sort.insert(field, order.as_i32());
        let options = FindOneOptions::builder().sort(sort).build();

        let found = self.collection(collection).find_one(filter, options).await?;
        Ok(found.and_then(|doc| from_document(doc).remove(field)))
    }

    async fn delete_all(&self, collection: &str) -> Result<u64, StorageError> {
        let result = self
            .collection(collection)
            .delete_many(doc! {}, None)
            .await?;
        Ok(result.deleted_count)
    }

    async fn distinct(&self, collection: &str, field: &str) -> Result<Vec<Value>, StorageError> {
        let values = self
            .collection(collection)
            .distinct(field, None, None)
            .await?;
        Ok(values.into_iter().map(Bson::into_relaxed_extjson).collect())
    }

    async fn scan_fields(
        &self,
        collection: &str,
        fields: &[&str],
    ) -> Result<Vec<Record>, StorageError> {
        let mut projection = doc! { "_id": 0 };
        for field in fields {
            projection.insert(*field, 1);
        }
        let options = FindOptions::builder().projection(projection).build();

        let cursor = self.collection(collection).find(None, options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(from_document).collect())
    }

    async fn ensure_unique_index(
        &self,
        collection: &str,
        unique_keys: &[&str],
    ) -> Result<(), StorageError> {
        if unique_keys.is_empty() {
            return Ok(());
        }

        let mut keys = Document::new();
        for key in unique_keys {
            keys.insert(*key, 1);
        }
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection(collection).create_index(index, None).await?;
        log::info!("[{}] 唯一索引已就绪: {:?}", collection, unique_keys);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn record_converts_to_document() {
        let record = match json!({"代码": "123001", "现价": 131.5, "成交量": 1200}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let doc = to_document(&record).unwrap();
        assert_eq!(doc.get_str("代码").unwrap(), "123001");
        assert_eq!(doc.get_f64("现价").unwrap(), 131.5);
        assert!(doc.get("成交量").is_some());
    }

    #[test]
    fn object_id_becomes_hex_string() {
        let id = ObjectId::new();
        let record = from_document(doc! { "_id": id, "代码": "123001", "现价": 131.5 });
        assert_eq!(record["_id"], json!(id.to_hex()));
        assert_eq!(record["代码"], json!("123001"));
        assert_eq!(record["现价"], json!(131.5));
    }

    #[test]
    fn filter_preserves_order_and_types() {
        let filter: Filter = vec![
            ("基金代码".to_string(), Condition::Eq(json!("000001"))),
            ("年份".to_string(), Condition::Eq(json!(2024))),
        ];
        let doc = filter_to_document(&filter).unwrap();
        let keys: Vec<&String> = doc.keys().collect();
        assert_eq!(keys, vec!["基金代码", "年份"]);
    }

    #[test]
    fn conditions_become_query_operators() {
        let filter: Filter = vec![
            ("现价".to_string(), Condition::In(vec![json!("131.5"), json!(131.5)])),
            ("名称".to_string(), Condition::Regex("转债".to_string())),
        ];
        let doc = filter_to_document(&filter).unwrap();

        let price = doc.get_document("现价").unwrap();
        let candidates = price.get_array("$in").unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1], Bson::Double(131.5));

        let name = doc.get_document("名称").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "转债");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn array_key_stays_array_in_upsert_filter() {
        let row = match json!({"k": [1, 2], "v": 1}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let filter = build_filter(&row, &["k"]).unwrap();
        let doc = to_document(&filter).unwrap();
        assert!(doc.get_array("k").is_ok());
    }
}
