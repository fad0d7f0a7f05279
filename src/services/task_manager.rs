//! 后台刷新任务管理
//!
//! 批量刷新可能展开成成千上万个子任务，放到后台执行，
//! 前端通过 `GET /api/v1/tasks/{task_id}` 轮询进度

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::common::get_beijing_time;
use crate::models::{TaskInfo, TaskStatus};

/// 任务管理器，保存在内存中，进程重启后丢失
pub struct TaskManager {
    tasks: RwLock<HashMap<String, TaskInfo>>,
    /// 已结束任务的保留时长
    retention: Duration,
}

impl TaskManager {
    pub fn new(retention: Duration) -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            retention,
        }
    }

    /// 创建任务，顺便清理过期任务
    pub async fn create(&self, collection_name: &str, description: String) -> TaskInfo {
        let task = TaskInfo {
            task_id: uuid::Uuid::new_v4().to_string(),
            collection_name: collection_name.to_string(),
            description,
            status: TaskStatus::Pending,
            progress: 0,
            total: 0,
            message: "等待开始...".to_string(),
            created_at: get_beijing_time(),
            started_at: None,
            completed_at: None,
            result: None,
            error: None,
        };

        let mut tasks = self.tasks.write().await;
        let retention = self.retention;
        let now = Utc::now();
        tasks.retain(|_, t| !is_expired(t, now, retention));
        tasks.insert(task.task_id.clone(), task.clone());
        task
    }

    pub async fn start(&self, task_id: &str) {
        self.update(task_id, |t| {
            t.status = TaskStatus::Running;
            t.started_at = Some(get_beijing_time());
            t.message = "正在处理...".to_string();
        })
        .await;
    }

    pub async fn update_progress(&self, task_id: &str, progress: u64, total: u64, message: String) {
        self.update(task_id, |t| {
            t.progress = progress;
            t.total = total;
            t.message = message;
        })
        .await;
    }

    pub async fn complete(&self, task_id: &str, result: Value, message: String) {
        self.update(task_id, |t| {
            t.status = TaskStatus::Success;
            t.progress = t.total.max(t.progress);
            t.message = message;
            t.completed_at = Some(get_beijing_time());
            t.result = Some(result);
        })
        .await;
    }

    pub async fn fail(&self, task_id: &str, error: String) {
        self.update(task_id, |t| {
            t.status = TaskStatus::Failed;
            t.message = format!("失败: {}", error);
            t.completed_at = Some(get_beijing_time());
            t.error = Some(error);
        })
        .await;
    }

    pub async fn get(&self, task_id: &str) -> Option<TaskInfo> {
        self.tasks.read().await.get(task_id).cloned()
    }

    async fn update<F>(&self, task_id: &str, apply: F)
    where
        F: FnOnce(&mut TaskInfo),
    {
        match self.tasks.write().await.get_mut(task_id) {
            Some(task) => apply(task),
            None => log::warn!("任务 {} 不存在或已过期", task_id),
        }
    }
}

/// 已结束且超过保留时长
fn is_expired(task: &TaskInfo, now: DateTime<Utc>, retention: Duration) -> bool {
    let Some(completed_at) = task.completed_at.as_deref() else {
        return false;
    };
    match DateTime::parse_from_rfc3339(completed_at) {
        Ok(at) => now
            .signed_duration_since(at.with_timezone(&Utc))
            .to_std()
            .map_or(false, |age| age > retention),
        Err(_) => true,
    }
}

/// 批量刷新的进度上报
pub struct ProgressReporter<'a> {
    tasks: &'a TaskManager,
    task_id: &'a str,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(tasks: &'a TaskManager, task_id: &'a str) -> Self {
        Self { tasks, task_id }
    }

    pub async fn report(&self, done: u64, total: u64) {
        self.tasks
            .update_progress(
                self.task_id,
                done,
                total,
                format!("已完成 {}/{} 个任务", done, total),
            )
            .await;
    }
}
