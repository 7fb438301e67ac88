//! 一次 `process_files` 调用的批次状态
//!
//! 有序的待处理文件 + 当前游标；批次结束即销毁。

use crate::models::FileHandle;
use crate::workflow::FileCtx;

#[derive(Debug)]
pub struct BatchState {
    files: Vec<FileHandle>,
    cursor: usize,
}

impl BatchState {
    pub fn new(files: Vec<FileHandle>) -> Self {
        Self { files, cursor: 0 }
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.files.len()
    }

    /// 按输入顺序取出下一个文件
    pub fn next_file(&mut self) -> Option<(FileCtx, &FileHandle)> {
        let file = self.files.get(self.cursor)?;
        self.cursor += 1;
        Some((FileCtx::new(file.name(), self.cursor, self.files.len()), file))
    }
}
