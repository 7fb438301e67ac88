//! # Document Sync Client
//!
//! 把用户选择的文档逐个送入远程流水线（上传 → 提取 / CRM 同步），
//! 并展示每个文件的结果和处理历史。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露请求能力
//! - `DocumentClient` - `POST /upload`、`POST /process/{id}`、`GET /documents`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `Transport` - 上传 / 处理
//! - `HistoryLoader` - 尽力而为的历史记录加载，失败只记日志
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的完整处理流程
//! - `FileCtx` - 上下文封装（文件名 + 批次位置）
//! - `FileFlow` - 流程编排（upload → process），`FileState` 状态机
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 顺序处理整批文件，隔离单个文件的失败
//! - `orchestrator/app` - 应用生命周期
//!
//! ### 展示层（Renderer）
//! - `renderer/` - 回调接口 + 终端实现
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod renderer;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::DocumentClient;
pub use config::Config;
pub use error::{FileProcessingError, HistoryLoadError, PipelineStage, ProcessError, UploadError};
pub use models::{DocumentId, FileHandle, HistoryEntry, ProcessingResult, ProcessingStatus};
pub use orchestrator::{App, BatchSummary, WorkflowController};
pub use renderer::{Renderer, TerminalRenderer};
pub use services::{HistoryLoader, HistorySource, Transport};
pub use workflow::{FileCtx, FileFlow, FilePhase, FileState};
