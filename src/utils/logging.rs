/// 日志工具模块
///
/// 提供日志初始化和批处理输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认级别 `info`，可通过 `RUST_LOG` 覆盖；`verbose` 为 true 时默认 `debug`。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(api_base_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文档提取与 CRM 同步");
    info!("🌐 服务地址: {}", api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
pub fn log_batch_start(total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理 {} 个文件（逐个处理）", total);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
