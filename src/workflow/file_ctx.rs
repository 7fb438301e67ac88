//! 文件处理上下文
//!
//! 封装"我正在处理这一批中的第几个文件"这一信息

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCtx {
    /// 文件名
    pub file_name: String,

    /// 在本批中的位置（从1开始）
    pub file_index: usize,

    /// 本批文件总数
    pub total: usize,
}

impl FileCtx {
    pub fn new(file_name: impl Into<String>, file_index: usize, total: usize) -> Self {
        Self {
            file_name: file_name.into(),
            file_index,
            total,
        }
    }
}

impl Display for FileCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件 {}/{} {}]",
            self.file_index, self.total, self.file_name
        )
    }
}
