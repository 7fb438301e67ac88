//! 历史记录加载 - 业务能力层
//!
//! 加载失败只记录日志，返回 `None`，调用方永远不会收到错误。

use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::HistoryEntry;
use crate::services::transport::HistorySource;

pub struct HistoryLoader {
    source: Arc<dyn HistorySource>,
}

impl HistoryLoader {
    pub fn new(source: Arc<dyn HistorySource>) -> Self {
        Self { source }
    }

    /// 获取完整的历史记录快照
    ///
    /// 返回的列表整体替换当前显示内容，不做合并。
    pub async fn load_history(&self) -> Option<Vec<HistoryEntry>> {
        match self.source.fetch_history().await {
            Ok(entries) => {
                debug!("历史记录加载成功: {} 条", entries.len());
                Some(entries)
            }
            Err(e) => {
                warn!("⚠️ 历史记录加载失败: {}", e);
                None
            }
        }
    }
}
