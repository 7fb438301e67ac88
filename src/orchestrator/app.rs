//! 应用生命周期
//!
//! 1. **初始化**：创建 HTTP 客户端、终端渲染器和流程控制器
//! 2. **启动加载**：先加载一次历史记录
//! 3. **批量处理**：读取输入目录中的所有文件并逐个处理
//! 4. **收尾**：输出统计，等待"处理中"提示隐藏

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::DocumentClient;
use crate::config::Config;
use crate::models::load_input_files;
use crate::orchestrator::batch_processor::WorkflowController;
use crate::renderer::{Renderer, TerminalRenderer};
use crate::services::HistoryLoader;
use crate::utils::logging::{log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    controller: WorkflowController,
}

impl App {
    /// 使用终端渲染器初始化应用
    pub fn initialize(config: Config) -> Self {
        Self::with_renderer(config, Arc::new(TerminalRenderer::stdout()))
    }

    pub fn with_renderer(config: Config, renderer: Arc<dyn Renderer>) -> Self {
        log_startup(&config.api_base_url);

        let client = Arc::new(DocumentClient::new(&config));
        let controller = WorkflowController::new(
            client.clone(),
            HistoryLoader::new(client),
            renderer,
            config.hide_indicator_delay(),
        );

        Self { config, controller }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        self.controller.refresh_history().await;

        info!("\n📁 正在扫描待处理的文件: {}", self.config.input_folder);
        let files = load_input_files(&self.config.input_folder).await?;

        if files.is_empty() {
            warn!("⚠️ 没有找到待处理的文件，程序结束");
            return Ok(());
        }

        let summary = self.controller.process_files(files).await;
        print_final_stats(summary.succeeded, summary.failed, summary.total);

        // 让最后一个"隐藏提示"任务有机会执行
        tokio::time::sleep(self.config.hide_indicator_delay()).await;

        Ok(())
    }
}
