//! 远程服务能力 - 业务能力层
//!
//! 只描述"能做什么"：上传、处理、查询历史。每次调用都是一次请求/响应，
//! 不重试、不缓存。

use async_trait::async_trait;

use crate::error::{HistoryLoadError, ProcessError, UploadError};
use crate::models::{DocumentId, FileHandle, HistoryEntry, ProcessingResult};

/// 文档上传与处理
#[async_trait]
pub trait Transport: Send + Sync {
    /// 上传文件，返回服务端分配的文档ID
    async fn upload(&self, file: &FileHandle) -> Result<DocumentId, UploadError>;

    /// 对已上传的文档执行提取和 CRM 同步
    async fn process(&self, document_id: &DocumentId) -> Result<ProcessingResult, ProcessError>;
}

/// 已处理文档列表
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryLoadError>;
}
