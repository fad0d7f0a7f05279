//! 集合数据导出
//!
//! CSV 带 UTF-8 BOM，方便 Excel 直接打开中文列名

use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use serde_json::Value;
use thiserror::Error;

use crate::models::{ExportFormat, FieldInfo, Record};

/// 单次导出的最大行数
pub const EXPORT_LIMIT: i64 = 100_000;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("缓冲区写入失败: {0}")]
    Io(String),
}

/// 导出的文件
#[derive(Debug)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub content: Vec<u8>,
    /// 导出行数
    pub rows: usize,
}

/// 文件名：集合名_北京时间.扩展名
pub fn export_filename(collection: &str, format: ExportFormat) -> String {
    let stamp = Utc::now().with_timezone(&Shanghai).format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", collection, stamp, format.extension())
}

/// 按格式生成文件内容
pub fn render(
    format: ExportFormat,
    rows: &[Record],
    fields: &[FieldInfo],
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => to_csv(rows, fields),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(rows)?),
    }
}

/// 列顺序：声明字段中实际出现的在前，其余按首次出现顺序
pub fn export_columns(rows: &[Record], fields: &[FieldInfo]) -> Vec<String> {
    let mut columns: Vec<String> = fields
        .iter()
        .filter(|f| rows.iter().any(|r| r.contains_key(f.name)))
        .map(|f| f.name.to_string())
        .collect();

    for row in rows {
        for key in row.keys() {
            if key != "_id" && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn to_csv(rows: &[Record], fields: &[FieldInfo]) -> Result<Vec<u8>, ExportError> {
    let columns = export_columns(rows, fields);

    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    if columns.is_empty() {
        return writer.into_inner().map_err(|e| ExportError::Io(e.to_string()));
    }
    writer.write_record(&columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| cell(row.get(c))))?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    const FIELDS: &[FieldInfo] = &[
        FieldInfo::string("代码", "债券代码"),
        FieldInfo::float("现价", "最新价"),
        FieldInfo::float("涨跌幅", "涨跌幅"),
    ];

    #[test]
    fn csv_has_bom_and_declared_columns_first() {
        let data = rows(vec![
            json!({"_id": "x", "名称": "平银转债", "现价": 131.5, "代码": "123001"}),
            json!({"代码": "113009", "现价": null, "溢价率": "12,5%"}),
        ]);
        let bytes = render(ExportFormat::Csv, &data, FIELDS).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "代码,现价,名称,溢价率");
        assert_eq!(lines[1], "123001,131.5,平银转债,");
        assert_eq!(lines[2], "113009,,,\"12,5%\"");
    }

    #[test]
    fn empty_export_still_has_bom() {
        let bytes = render(ExportFormat::Csv, &[], FIELDS).unwrap();
        assert_eq!(bytes, UTF8_BOM);
        assert!(export_columns(&[], FIELDS).is_empty());
    }

    #[test]
    fn filename_carries_collection_and_extension() {
        let name = export_filename("bond_zh_hs_cov_spot", ExportFormat::Csv);
        assert!(name.starts_with("bond_zh_hs_cov_spot_"));
        assert!(name.ends_with(".csv"));
        // 集合名_YYYYmmdd_HHMMSS.csv
        assert_eq!(name.len(), "bond_zh_hs_cov_spot_".len() + 15 + 4);
    }

    #[test]
    fn json_export_is_an_array() {
        let data = rows(vec![json!({"代码": "123001"})]);
        let bytes = render(ExportFormat::Json, &data, FIELDS).unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, json!([{"代码": "123001"}]));
    }
}
