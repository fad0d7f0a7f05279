//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，环境变量可覆盖部分配置项

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::services::BatchSettings;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API Key（为空则不启用认证）
    #[serde(default)]
    pub api_key: String,
    /// 请求 akshare 桥接服务的超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// akshare 桥接服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AkshareConfig {
    /// 桥接服务根地址
    #[serde(default = "default_akshare_base_url")]
    pub base_url: String,
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Mongo,
    Memory,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    /// MongoDB 连接串
    #[serde(default = "default_mongo_uri")]
    pub mongo_uri: String,
    /// 数据库名称
    #[serde(default = "default_database")]
    pub database: String,
    /// 启动时创建唯一索引
    #[serde(default = "default_true")]
    pub create_indexes: bool,
}

/// 批量更新配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// 默认并发数
    #[serde(default = "default_batch_concurrency")]
    pub concurrency: usize,
    /// 单个任务超时（秒）
    #[serde(default = "default_task_timeout")]
    pub task_timeout_secs: u64,
    /// 已结束的后台任务保留时长（秒）
    #[serde(default = "default_task_retention")]
    pub task_retention_secs: u64,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// API 配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// akshare 桥接服务配置
    #[serde(default)]
    pub akshare: AkshareConfig,
    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,
    /// 批量更新配置
    #[serde(default)]
    pub batch: BatchConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_timeout() -> u64 { 60 }
fn default_connect_timeout() -> u64 { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_akshare_base_url() -> String { "http://127.0.0.1:8080".to_string() }
fn default_backend() -> StorageBackend { StorageBackend::Mongo }
fn default_mongo_uri() -> String { "mongodb://localhost:27017".to_string() }
fn default_database() -> String { "akshare".to_string() }
fn default_true() -> bool { true }
fn default_batch_concurrency() -> usize { 3 }
fn default_task_timeout() -> u64 { 300 }
fn default_task_retention() -> u64 { 3600 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AkshareConfig {
    fn default() -> Self {
        Self {
            base_url: default_akshare_base_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            mongo_uri: default_mongo_uri(),
            database: default_database(),
            create_indexes: true,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_batch_concurrency(),
            task_timeout_secs: default_task_timeout(),
            task_retention_secs: default_task_retention(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值，最后应用环境变量覆盖
    pub fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    fn load_file() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        log::info!("从 {} 加载配置成功", path);
                        return config;
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }

        log::info!("使用默认配置");
        Self::default()
    }

    /// 环境变量覆盖：API_KEY、AKSHARE_BASE_URL、MONGO_URI、MONGO_DATABASE
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = lookup("API_KEY") {
            self.api.api_key = v;
        }
        if let Some(v) = lookup("AKSHARE_BASE_URL") {
            self.akshare.base_url = v;
        }
        if let Some(v) = lookup("MONGO_URI") {
            self.storage.mongo_uri = v;
        }
        if let Some(v) = lookup("MONGO_DATABASE") {
            self.storage.database = v;
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn batch_settings(&self) -> BatchSettings {
        BatchSettings {
            concurrency: self.batch.concurrency.max(1),
            task_timeout: Duration::from_secs(self.batch.task_timeout_secs.max(1)),
            task_retention: Duration::from_secs(self.batch.task_retention_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }
}
