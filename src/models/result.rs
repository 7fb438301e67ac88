use serde::Deserialize;
use std::collections::BTreeMap;

/// `POST /process/{id}` 的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessingResult {
    /// 提取出的字段（name / email / phone / company ...）
    #[serde(default)]
    pub extracted_data: Option<BTreeMap<String, String>>,
    /// CRM 联系人ID，只在同步成功时存在
    #[serde(default)]
    pub crm_contact_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// CRM 同步状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Synced(String),
    Failed,
}

impl ProcessingResult {
    pub fn sync_status(&self) -> SyncStatus {
        match self.crm_contact_id.as_deref() {
            Some(id) if !id.is_empty() => SyncStatus::Synced(id.to_string()),
            _ => SyncStatus::Failed,
        }
    }

    pub fn field_count(&self) -> usize {
        self.extracted_data.as_ref().map_or(0, |d| d.len())
    }
}
