//! 错误类型
//!
//! 按业务域标记的集合错误，携带可读消息和机器可读的错误码

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::models::Domain;

/// 数据获取错误（akshare 桥接服务）
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL 无效: {0}")]
    Url(#[from] url::ParseError),

    #[error("akshare 不存在函数: {0}")]
    UnknownFunction(String),

    #[error("akshare.{func} 返回状态码 {status}: {body}")]
    Status {
        func: String,
        status: u16,
        body: String,
    },

    #[error("返回数据格式无法解析: {0}")]
    Decode(String),
}

/// 存储层错误
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("MongoDB 错误: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("BSON 序列化失败: {0}")]
    BsonSer(#[from] mongodb::bson::ser::Error),

    #[error("BSON 反序列化失败: {0}")]
    BsonDe(#[from] mongodb::bson::de::Error),

    #[error("过滤条件无效: {0}")]
    Pattern(#[from] regex::Error),
}

/// 集合错误
///
/// 每个变体按业务域生成错误码，如 `FUTURES_COLLECTION_NOT_FOUND`
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("{domain}数据集合 '{name}' 不存在")]
    CollectionNotFound { domain: Domain, name: String },

    #[error("缺少必须参数: {}", .missing.join(", "))]
    MissingParams {
        domain: Domain,
        collection: String,
        missing: Vec<String>,
    },

    #[error("数据验证失败 - 字段 '{field}': {reason}")]
    DataValidation {
        domain: Domain,
        field: String,
        reason: String,
    },

    #[error("从 '{func}' 获取数据失败: {source}")]
    Fetch {
        domain: Domain,
        func: String,
        #[source]
        source: FetchError,
    },

    #[error("更新{domain}集合 '{name}' 失败: {reason}")]
    DataUpdate {
        domain: Domain,
        name: String,
        reason: String,
    },

    #[error("存储错误: {source}")]
    Storage {
        domain: Domain,
        #[source]
        source: StorageError,
    },
}

impl CollectionError {
    pub fn domain(&self) -> Domain {
        match self {
            CollectionError::CollectionNotFound { domain, .. }
            | CollectionError::MissingParams { domain, .. }
            | CollectionError::DataValidation { domain, .. }
            | CollectionError::Fetch { domain, .. }
            | CollectionError::DataUpdate { domain, .. }
            | CollectionError::Storage { domain, .. } => *domain,
        }
    }

    fn code_suffix(&self) -> &'static str {
        match self {
            CollectionError::CollectionNotFound { .. } => "COLLECTION_NOT_FOUND",
            CollectionError::MissingParams { .. } => "MISSING_PARAMS",
            CollectionError::DataValidation { .. } => "DATA_VALIDATION_ERROR",
            CollectionError::Fetch { .. } => "DATA_FETCH_ERROR",
            CollectionError::DataUpdate { .. } => "DATA_UPDATE_ERROR",
            CollectionError::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// 机器可读错误码
    pub fn code(&self) -> String {
        format!("{}_{}", self.domain().code_prefix(), self.code_suffix())
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            CollectionError::CollectionNotFound { .. } => StatusCode::NOT_FOUND,
            CollectionError::MissingParams { .. } | CollectionError::DataValidation { .. } => {
                StatusCode::BAD_REQUEST
            }
            CollectionError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            CollectionError::DataUpdate { .. } | CollectionError::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn storage(domain: Domain, source: StorageError) -> Self {
        CollectionError::Storage { domain, source }
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
