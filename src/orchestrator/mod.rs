//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 按顺序遍历 `Vec<FileHandle>`，一次只处理一个文件
//! - 委托 `FileFlow` 处理单个文件
//! - 展示结果 / 错误，刷新历史记录
//!
//! ### `batch_state` - 批次状态
//! - 有序文件列表 + 游标
//!
//! ### `app` - 应用生命周期
//! - 组装客户端、渲染器和控制器，读取输入目录
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! batch_processor (处理 Vec<FileHandle>)
//!     ↓
//! workflow::FileFlow (处理单个文件)
//!     ↓
//! services (能力层：Transport / HistoryLoader)
//!     ↓
//! clients (HTTP：DocumentClient)
//! ```

pub mod app;
pub mod batch_processor;
pub mod batch_state;

pub use app::App;
pub use batch_processor::{BatchSummary, WorkflowController};
pub use batch_state::BatchState;
