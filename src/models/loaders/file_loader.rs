use crate::models::document::FileHandle;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// 从文件夹中加载所有待上传的文件（按文件名排序）
///
/// 只收集普通文件，子目录和隐藏文件会被跳过。
pub async fn load_input_files(folder_path: &str) -> Result<Vec<FileHandle>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if is_hidden || !entry.file_type().await?.is_file() {
            continue;
        }
        paths.push(path);
    }

    paths.sort();

    let files: Vec<FileHandle> = paths.iter().map(FileHandle::from_path).collect();
    for file in &files {
        tracing::info!("正在加载: {}", file.name());
    }

    Ok(files)
}
