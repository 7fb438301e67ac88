//! 单个文件处理流程 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 上传 → 获得文档ID
//! 2. 提取 / CRM 同步 → 获得处理结果
//!
//! 每一步只尝试一次，失败即进入终态。

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{FileProcessingError, PipelineStage};
use crate::models::{DocumentId, FileHandle, ProcessingResult};
use crate::renderer::Renderer;
use crate::services::Transport;
use crate::workflow::file_ctx::FileCtx;
use crate::workflow::file_state::{FilePhase, FileState};

/// 单个文件的处理结果
#[derive(Debug)]
pub struct FileOutcome {
    /// 上传成功时得到的文档ID
    pub document_id: Option<DocumentId>,
    /// 经历过的全部状态（第一个是 Idle，最后一个是终态）
    states: Vec<FileState>,
    pub result: Result<ProcessingResult, FileProcessingError>,
}

impl FileOutcome {
    pub fn states(&self) -> &[FileState] {
        &self.states
    }

    pub fn final_state(&self) -> Option<&FileState> {
        self.states.last()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 文件处理流程
///
/// - 只依赖 `Transport` 能力
/// - 只向界面报告阶段变化；结果和错误由编排层展示
pub struct FileFlow {
    transport: Arc<dyn Transport>,
}

impl FileFlow {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn run(&self, file: &FileHandle, ctx: &FileCtx, renderer: &dyn Renderer) -> FileOutcome {
        let mut tracker = StateTracker::new(ctx);

        // ========== 阶段 1: 上传 ==========
        renderer.on_phase_change(ctx, FilePhase::Uploading);
        tracker.advance(FileState::Uploading);
        info!("{} 📤 正在上传...", ctx);

        let document_id = match self.transport.upload(file).await {
            Ok(id) => id,
            Err(e) => {
                error!("{} ❌ 上传失败: {}", ctx, e);
                tracker.advance(FileState::Failed(PipelineStage::Upload));
                return tracker.finish(None, Err(e.into()));
            }
        };

        info!("{} ✓ 上传成功，文档ID: {}", ctx, document_id);
        tracker.advance(FileState::Uploaded(document_id.clone()));

        // ========== 阶段 2: 提取 + 同步 ==========
        renderer.on_phase_change(ctx, FilePhase::Extracting);
        tracker.advance(FileState::Processing(document_id.clone()));
        info!("{} 🔍 正在提取文档内容...", ctx);

        match self.transport.process(&document_id).await {
            Ok(result) => {
                info!(
                    "{} ✓ 提取完成: {} 个字段, CRM {:?}",
                    ctx,
                    result.field_count(),
                    result.sync_status()
                );
                tracker.advance(FileState::Succeeded);
                tracker.finish(Some(document_id), Ok(result))
            }
            Err(e) => {
                error!("{} ❌ 处理失败: {}", ctx, e);
                tracker.advance(FileState::Failed(PipelineStage::Process));
                tracker.finish(Some(document_id), Err(e.into()))
            }
        }
    }
}

struct StateTracker<'a> {
    ctx: &'a FileCtx,
    states: Vec<FileState>,
}

impl<'a> StateTracker<'a> {
    fn new(ctx: &'a FileCtx) -> Self {
        Self {
            ctx,
            states: vec![FileState::Idle],
        }
    }

    fn advance(&mut self, next: FileState) {
        if let Some(current) = self.states.last() {
            debug_assert!(
                current.can_transition_to(&next),
                "illegal transition {:?} -> {:?}",
                current,
                next
            );
            debug!("{} 状态: {:?} -> {:?}", self.ctx, current, next);
        }
        self.states.push(next);
    }

    fn finish(
        self,
        document_id: Option<DocumentId>,
        result: Result<ProcessingResult, FileProcessingError>,
    ) -> FileOutcome {
        debug_assert!(self.states.last().is_some_and(FileState::is_terminal));
        FileOutcome {
            document_id,
            states: self.states,
            result,
        }
    }
}
