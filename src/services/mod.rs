//! 业务逻辑服务模块
//!
//! 封装集合数据的更新、查询、导出和清空逻辑，以及后台刷新任务

pub mod collection_service;
pub mod export;
pub mod task_manager;

pub use collection_service::{BatchSettings, CollectionService, DataQuery};
pub use task_manager::{ProgressReporter, TaskManager};
