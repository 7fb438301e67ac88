//! 单个文件的状态机
//!
//! `Idle → Uploading → Uploaded → Processing → {Succeeded | Failed}`
//!
//! 上传失败时 `Uploading → Failed`。终态没有任何出边，不存在重试。

use crate::error::PipelineStage;
use crate::models::DocumentId;

/// 展示给用户的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePhase {
    Uploading,
    Extracting,
}

impl FilePhase {
    pub fn label(self) -> &'static str {
        match self {
            FilePhase::Uploading => "Uploading file...",
            FilePhase::Extracting => "Extracting text from document...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    Idle,
    Uploading,
    Uploaded(DocumentId),
    Processing(DocumentId),
    Succeeded,
    Failed(PipelineStage),
}

impl FileState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FileState::Succeeded | FileState::Failed(_))
    }

    pub fn can_transition_to(&self, next: &FileState) -> bool {
        use FileState::*;
        match (self, next) {
            (Idle, Uploading) => true,
            (Uploading, Uploaded(_)) => true,
            (Uploading, Failed(PipelineStage::Upload)) => true,
            (Uploaded(a), Processing(b)) => a == b,
            (Processing(_), Succeeded) => true,
            (Processing(_), Failed(PipelineStage::Process)) => true,
            _ => false,
        }
    }
}
