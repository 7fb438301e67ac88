//! 错误类型
//!
//! - `UploadError` / `ProcessError`：终止单个文件的流程，以文本形式展示给用户
//! - `HistoryLoadError`：只记录日志，从不展示给用户，也不会中断批处理
//! - `ConfigError`：配置加载失败

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// 包装第三方库错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 上传阶段错误
#[derive(Debug, Error)]
pub enum UploadError {
    /// 读取本地文件失败
    #[error("Upload failed: could not read {file}: {source}")]
    ReadFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },
    /// 网络请求失败或响应无法解析
    #[error("Upload failed: {0}")]
    Network(#[source] BoxError),
    /// 服务返回非 2xx 状态码
    #[error("Upload failed: {}", describe_status(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    /// 响应中没有 document_id
    #[error("Upload failed: response did not contain a document_id")]
    MissingDocumentId,
}

/// 提取/同步阶段错误
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Processing failed: {0}")]
    Network(#[source] BoxError),
    #[error("Processing failed: {}", describe_status(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

/// 历史记录加载错误（非致命）
#[derive(Debug, Error)]
pub enum HistoryLoadError {
    #[error("history request failed: {0}")]
    Network(#[source] BoxError),
    #[error("history request returned {0}")]
    Status(StatusCode),
}

/// 单个文件失败所在的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Upload,
    Process,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Upload => write!(f, "upload"),
            PipelineStage::Process => write!(f, "process"),
        }
    }
}

/// 单个文件处理失败
#[derive(Debug, Error)]
pub enum FileProcessingError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl FileProcessingError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            FileProcessingError::Upload(_) => PipelineStage::Upload,
            FileProcessingError::Process(_) => PipelineStage::Process,
        }
    }

    /// 展示给用户的错误文本
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl UploadError {
    pub fn network(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        UploadError::Network(Box::new(source))
    }
}

impl ProcessError {
    pub fn network(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ProcessError::Network(Box::new(source))
    }
}

impl HistoryLoadError {
    pub fn network(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        HistoryLoadError::Network(Box::new(source))
    }
}

/// 状态码 + 服务端错误信息，如 `400 Bad Request (Invalid file type)`
fn describe_status(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(msg) if !msg.is_empty() => format!("{} ({})", status, msg),
        _ => status.to_string(),
    }
}
