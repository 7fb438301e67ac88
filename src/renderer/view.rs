use chrono::TimeZone;
use std::fmt::Display;

use crate::models::{HistoryEntry, ProcessingResult, SyncStatus};

pub const RESULT_CARD_TITLE: &str = "Extracted Contact Information";

/// CRM 同步徽章
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncBadge {
    Success,
    Failed,
}

impl SyncBadge {
    pub fn label(self) -> &'static str {
        match self {
            SyncBadge::Success => "Success",
            SyncBadge::Failed => "Failed",
        }
    }
}

/// 单个文件的结果卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: &'static str,
    pub fields: Vec<(String, String)>,
    pub sync: SyncBadge,
    /// 只在同步成功时显示
    pub crm_contact_id: Option<String>,
}

impl From<&ProcessingResult> for ResultCard {
    fn from(result: &ProcessingResult) -> Self {
        let fields = result
            .extracted_data
            .iter()
            .flatten()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let (sync, crm_contact_id) = match result.sync_status() {
            SyncStatus::Synced(id) => (SyncBadge::Success, Some(id)),
            SyncStatus::Failed => (SyncBadge::Failed, None),
        };

        Self {
            title: RESULT_CARD_TITLE,
            fields,
            sync,
            crm_contact_id,
        }
    }
}

/// 历史列表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub filename: String,
    pub date: String,
    pub status: String,
}

impl HistoryRow {
    /// 按指定时区格式化日期，如 `Jan 5, 2024, 03:04 PM`
    pub fn new<Tz>(entry: &HistoryEntry, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            filename: entry.filename.clone(),
            date: entry
                .created_at
                .with_timezone(tz)
                .format("%b %-d, %Y, %I:%M %p")
                .to_string(),
            status: entry.processing_status.to_string(),
        }
    }
}
