use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// 文档处理状态
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    /// 服务端返回的其他状态，原样保留
    Unknown(String),
}

impl From<String> for ProcessingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => ProcessingStatus::Pending,
            "processing" => ProcessingStatus::Processing,
            "completed" => ProcessingStatus::Completed,
            "failed" => ProcessingStatus::Failed,
            _ => ProcessingStatus::Unknown(value),
        }
    }
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProcessingStatus::Pending => "pending",
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Completed => "completed",
            ProcessingStatus::Failed => "failed",
            ProcessingStatus::Unknown(s) => s,
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 历史记录中的一条文档
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub filename: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub processing_status: ProcessingStatus,
}

impl HistoryEntry {
    /// 逐行解码 `GET /documents` 的结果
    ///
    /// 单行格式错误只跳过这一行，其余记录照常展示
    pub fn from_rows(rows: Vec<Value>) -> Vec<HistoryEntry> {
        rows.into_iter()
            .enumerate()
            .filter_map(|(i, row)| match serde_json::from_value::<HistoryEntry>(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("⚠️ 跳过第 {} 条历史记录: {}", i + 1, e);
                    None
                }
            })
            .collect()
    }
}

// RFC 3339，或不带时区的 ISO-8601（按 UTC 处理）
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid created_at timestamp: {}", raw))
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
