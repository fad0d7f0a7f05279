//! 公共常量和辅助函数

use chrono::{Datelike, Utc};
use chrono_tz::Asia::Shanghai;
use regex::Regex;
use std::sync::OnceLock;

/// 写库时间字段（排序、概览都以此字段为准）
pub const UPDATED_AT_FIELD: &str = "更新时间";
/// Provider 默认的抓取时间字段
pub const SCRAPED_AT_FIELD: &str = "scraped_at";
/// 数据源元数据字段
pub const DATA_SOURCE_FIELD: &str = "数据源";
/// 接口名称元数据字段
pub const INTERFACE_FIELD: &str = "接口名称";
/// 数据源固定取值
pub const DATA_SOURCE_AKSHARE: &str = "akshare";

/// 获取北京时间字符串（ISO 8601 格式，带+08:00时区）
pub fn get_beijing_time() -> String {
    Utc::now().with_timezone(&Shanghai).to_rfc3339()
}

/// 北京时间的当前年份
pub fn current_year() -> i32 {
    Utc::now().with_timezone(&Shanghai).year()
}

fn leading_year_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d{4})").ok()).as_ref()
}

/// 从字段值中提取开头的四位年份
///
/// 如 "2024年1季度" -> "2024"，"20240331" -> "2024"
pub fn extract_leading_year(value: &str) -> Option<String> {
    leading_year_re()?
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// 集合名称只允许小写字母、数字和下划线
pub fn is_valid_collection_name(name: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").ok())
        .as_ref()
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}
