//! 展示层（Presentation）
//!
//! 流程控制器只通过 `Renderer` 回调与界面交互，不关心界面如何绘制。
//! 终端、Web、测试桩都可以实现这个接口。

pub mod terminal;
pub mod view;

pub use terminal::TerminalRenderer;
pub use view::{HistoryRow, ResultCard, SyncBadge};

use crate::models::{HistoryEntry, ProcessingResult};
use crate::workflow::{FileCtx, FilePhase};

/// 界面回调
///
/// 所有方法都在批处理任务中同步调用，实现不应阻塞。
pub trait Renderer: Send + Sync {
    /// 某个文件进入新阶段（上传中 / 提取中）
    fn on_phase_change(&self, ctx: &FileCtx, phase: FilePhase);

    /// 文件处理成功
    fn on_result(&self, ctx: &FileCtx, result: &ProcessingResult);

    /// 文件处理失败，`message` 直接展示给用户
    fn on_error(&self, ctx: &FileCtx, message: &str);

    /// 历史记录整体替换
    fn on_history_updated(&self, entries: &[HistoryEntry]);

    /// 延迟隐藏"处理中"提示
    fn on_indicator_hidden(&self) {}
}
