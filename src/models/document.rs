use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// 用户选择的文件
///
/// 创建后不可修改；内容在上传时才读取。
#[derive(Debug, Clone)]
pub struct FileHandle {
    name: String,
    source: FileSource,
}

#[derive(Debug, Clone)]
enum FileSource {
    Memory(Vec<u8>),
    Disk(PathBuf),
}

impl FileHandle {
    /// 由内存中的数据创建
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Memory(bytes.into()),
        }
    }

    /// 由磁盘路径创建，文件名取路径的最后一段
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            name,
            source: FileSource::Disk(path.to_path_buf()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 读取文件内容
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            FileSource::Memory(bytes) => Ok(bytes.clone()),
            FileSource::Disk(path) => tokio::fs::read(path).await,
        }
    }
}

/// 上传成功后服务端返回的文档ID
///
/// 服务端可能返回字符串或整数，统一保存为字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct DocumentIdVisitor;

        impl<'de> Visitor<'de> for DocumentIdVisitor {
            type Value = DocumentId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer document id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(DocumentId::new(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(DocumentId::new(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(DocumentId::new(value.to_string()))
            }
        }

        deserializer.deserialize_any(DocumentIdVisitor)
    }
}

/// `POST /upload` 的响应体
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// 有效的文档ID（空字符串视为缺失）
    pub fn into_document_id(self) -> Option<DocumentId> {
        self.document_id.filter(|id| !id.is_empty())
    }
}

/// 服务端错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
