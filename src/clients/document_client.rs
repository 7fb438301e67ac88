/// 文档服务 HTTP 客户端
///
/// 封装与远程文档提取 / CRM 同步服务的所有交互
use crate::config::Config;
use crate::error::{BoxError, HistoryLoadError, ProcessError, UploadError};
use crate::models::{DocumentId, ErrorBody, FileHandle, HistoryEntry, ProcessingResult, UploadResponse};
use crate::services::{HistorySource, Transport};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

/// 文档服务客户端
#[derive(Clone)]
pub struct DocumentClient {
    http: Client,
    base_url: String,
}

impl DocumentClient {
    /// 创建新的文档服务客户端
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接接口地址，每一段都会做百分号编码
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BoxError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| format!("无效的服务地址: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for DocumentClient {
    async fn upload(&self, file: &FileHandle) -> Result<DocumentId, UploadError> {
        let bytes = file.read().await.map_err(|source| UploadError::ReadFailed {
            file: file.name().to_string(),
            source,
        })?;

        debug!("上传文件 {} ({} 字节)", file.name(), bytes.len());

        let part = Part::bytes(bytes).file_name(file.name().to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint(&["upload"]).map_err(UploadError::Network)?)
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status {
                status,
                message: error_text(response).await,
            });
        }

        let body: UploadResponse = response.json().await.map_err(UploadError::network)?;
        debug!("上传结果: {:?}", body.message);

        body.into_document_id().ok_or(UploadError::MissingDocumentId)
    }

    async fn process(&self, document_id: &DocumentId) -> Result<ProcessingResult, ProcessError> {
        let url = self
            .endpoint(&["process", document_id.as_str()])
            .map_err(ProcessError::Network)?;
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(ProcessError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessError::Status {
                status,
                message: error_text(response).await,
            });
        }

        let result: ProcessingResult = response.json().await.map_err(ProcessError::network)?;
        debug!("处理结果: {:?}", result.message);

        Ok(result)
    }
}

#[async_trait]
impl HistorySource for DocumentClient {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryLoadError> {
        let response = self
            .http
            .get(self.endpoint(&["documents"]).map_err(HistoryLoadError::Network)?)
            .send()
            .await
            .map_err(HistoryLoadError::network)?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            return Err(HistoryLoadError::Status(status));
        }

        let rows: Vec<serde_json::Value> =
            response.json().await.map_err(HistoryLoadError::network)?;
        Ok(HistoryEntry::from_rows(rows))
    }
}

/// 读取 `{"error": "..."}` 中的错误信息，读不到就返回 None
async fn error_text(response: Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().map(|b| b.error)
}
