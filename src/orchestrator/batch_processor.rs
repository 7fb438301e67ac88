//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **顺序处理**：严格按输入顺序逐个处理文件，同一时刻只有一个文件在途
//! 2. **错误隔离**：单个文件失败只展示错误，继续处理下一个文件
//! 3. **界面通知**：通过 `Renderer` 报告阶段、结果、错误和历史记录
//! 4. **历史刷新**：每个文件结束后（无论成败）重新加载一次历史记录
//!
//! 不做重试、不设超时、不支持取消：批次一旦开始就会跑完所有文件。

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::FileHandle;
use crate::orchestrator::batch_state::BatchState;
use crate::renderer::Renderer;
use crate::services::{HistoryLoader, Transport};
use crate::utils::logging::{log_batch_start, truncate_text};
use crate::workflow::{FileCtx, FileFlow, FileOutcome};

/// 批次统计（只用于日志，用户可见的反馈全部走 `Renderer`）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// 文件处理流程控制器
pub struct WorkflowController {
    flow: FileFlow,
    history_loader: HistoryLoader,
    renderer: Arc<dyn Renderer>,
    hide_delay: Duration,
}

impl WorkflowController {
    pub fn new(
        transport: Arc<dyn Transport>,
        history_loader: HistoryLoader,
        renderer: Arc<dyn Renderer>,
        hide_delay: Duration,
    ) -> Self {
        Self {
            flow: FileFlow::new(transport),
            history_loader,
            renderer,
            hide_delay,
        }
    }

    /// 按顺序处理一批文件
    pub async fn process_files(&self, files: Vec<FileHandle>) -> BatchSummary {
        let mut batch = BatchState::new(files);
        let mut summary = BatchSummary {
            total: batch.total(),
            ..Default::default()
        };

        if batch.is_done() {
            return summary;
        }

        log_batch_start(batch.total());

        let mut seen_ids = HashSet::new();

        while let Some((ctx, file)) = batch.next_file() {
            info!("\n{} {}", ctx, "─".repeat(30));

            let outcome = self.flow.run(file, &ctx, self.renderer.as_ref()).await;

            if let Some(id) = &outcome.document_id {
                if !seen_ids.insert(id.clone()) {
                    warn!("{} ⚠️ 服务端返回了重复的文档ID: {}", ctx, id);
                }
            }

            self.display_outcome(&ctx, &outcome);
            if outcome.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            self.schedule_hide_indicator();
            self.refresh_history().await;
        }

        info!(
            "✓ 本批完成: 成功 {}/{}，失败 {}",
            summary.succeeded, summary.total, summary.failed
        );

        summary
    }

    /// 重新加载历史记录并交给界面；失败时界面保持不变
    ///
    /// 返回是否成功刷新
    pub async fn refresh_history(&self) -> bool {
        match self.history_loader.load_history().await {
            Some(entries) => {
                self.renderer.on_history_updated(&entries);
                true
            }
            None => false,
        }
    }

    fn display_outcome(&self, ctx: &FileCtx, outcome: &FileOutcome) {
        match &outcome.result {
            Ok(result) => self.renderer.on_result(ctx, result),
            Err(e) => {
                let message = e.message();
                warn!(
                    "{} {} 阶段失败: {}",
                    ctx,
                    e.stage(),
                    truncate_text(&message, 120)
                );
                self.renderer.on_error(ctx, &message);
            }
        }
    }

    /// 固定延迟后隐藏"处理中"提示，不等待任何网络请求
    fn schedule_hide_indicator(&self) {
        let renderer = Arc::clone(&self.renderer);
        let delay = self.hide_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            renderer.on_indicator_hidden();
        });
    }
}
