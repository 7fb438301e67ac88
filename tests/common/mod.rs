#![allow(dead_code)]

pub mod stub_service;

use async_trait::async_trait;
use document_sync_client::{
    DocumentId, FileCtx, FileHandle, FilePhase, HistoryEntry, HistoryLoadError, HistorySource,
    ProcessError, ProcessingResult, Renderer, Transport, UploadError,
};
use reqwest::StatusCode;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 所有桩共用的事件日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Upload(String),
    Process(String),
    Phase(String, FilePhase),
    Result(String, Option<String>),
    Error(String, String),
    HistoryLoad(usize),
    HistoryUpdated(usize),
    IndicatorHidden,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<Event> {
    log.lock().unwrap().clone()
}

// ========== Transport ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Succeed,
    FailUpload,
    MissingId,
    FailProcess,
    NoCrmSync,
}

pub struct ScriptedTransport {
    log: EventLog,
    behaviours: HashMap<String, Behaviour>,
    next_id: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    id_owner: Mutex<HashMap<String, String>>,
}

impl ScriptedTransport {
    pub fn new(log: EventLog, behaviours: &[(&str, Behaviour)]) -> Arc<Self> {
        Arc::new(Self {
            log,
            behaviours: behaviours
                .iter()
                .map(|(name, b)| (name.to_string(), *b))
                .collect(),
            next_id: AtomicUsize::new(1),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            id_owner: Mutex::new(HashMap::new()),
        })
    }

    fn behaviour(&self, name: &str) -> Behaviour {
        self.behaviours.get(name).copied().unwrap_or(Behaviour::Succeed)
    }

    async fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // 让出执行权，若存在并发调用就会被观察到
        tokio::task::yield_now().await;
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn upload(&self, file: &FileHandle) -> Result<DocumentId, UploadError> {
        self.log.lock().unwrap().push(Event::Upload(file.name().to_string()));
        self.enter().await;
        let result = match self.behaviour(file.name()) {
            Behaviour::FailUpload => Err(UploadError::Status {
                status: StatusCode::BAD_REQUEST,
                message: Some("Invalid file type".to_string()),
            }),
            Behaviour::MissingId => Err(UploadError::MissingDocumentId),
            _ => {
                let id = format!("id{}", self.next_id.fetch_add(1, Ordering::SeqCst));
                self.id_owner
                    .lock()
                    .unwrap()
                    .insert(id.clone(), file.name().to_string());
                Ok(DocumentId::new(id))
            }
        };
        self.leave();
        result
    }

    async fn process(&self, document_id: &DocumentId) -> Result<ProcessingResult, ProcessError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Process(document_id.to_string()));
        self.enter().await;
        let owner = self
            .id_owner
            .lock()
            .unwrap()
            .get(document_id.as_str())
            .cloned()
            .unwrap_or_default();
        let result = match self.behaviour(&owner) {
            Behaviour::FailProcess => Err(ProcessError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("OCR processing failed".to_string()),
            }),
            Behaviour::NoCrmSync => Ok(contact_result(None)),
            _ => Ok(contact_result(Some(format!("C-{}", document_id)))),
        };
        self.leave();
        result
    }
}

pub fn contact_result(crm_contact_id: Option<String>) -> ProcessingResult {
    ProcessingResult {
        extracted_data: Some(BTreeMap::from([
            ("name".to_string(), "Alice".to_string()),
            ("email".to_string(), "a@x.com".to_string()),
        ])),
        crm_contact_id,
        message: None,
    }
}

// ========== History ==========

pub struct ScriptedHistory {
    log: EventLog,
    calls: AtomicUsize,
    /// 第几次调用（从1开始）返回错误
    fail_on: Vec<usize>,
}

impl ScriptedHistory {
    pub fn new(log: EventLog, fail_on: &[usize]) -> Arc<Self> {
        Arc::new(Self {
            log,
            calls: AtomicUsize::new(0),
            fail_on: fail_on.to_vec(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistorySource for ScriptedHistory {
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryLoadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.lock().unwrap().push(Event::HistoryLoad(call));
        if self.fail_on.contains(&call) {
            return Err(HistoryLoadError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(Vec::new())
    }
}

// ========== Renderer ==========

pub struct RecordingRenderer {
    log: EventLog,
}

impl RecordingRenderer {
    pub fn new(log: EventLog) -> Arc<Self> {
        Arc::new(Self { log })
    }
}

impl Renderer for RecordingRenderer {
    fn on_phase_change(&self, ctx: &FileCtx, phase: FilePhase) {
        self.log
            .lock()
            .unwrap()
            .push(Event::Phase(ctx.file_name.clone(), phase));
    }

    fn on_result(&self, ctx: &FileCtx, result: &ProcessingResult) {
        self.log.lock().unwrap().push(Event::Result(
            ctx.file_name.clone(),
            result.crm_contact_id.clone(),
        ));
    }

    fn on_error(&self, ctx: &FileCtx, message: &str) {
        self.log
            .lock()
            .unwrap()
            .push(Event::Error(ctx.file_name.clone(), message.to_string()));
    }

    fn on_history_updated(&self, entries: &[HistoryEntry]) {
        self.log
            .lock()
            .unwrap()
            .push(Event::HistoryUpdated(entries.len()));
    }

    fn on_indicator_hidden(&self) {
        self.log.lock().unwrap().push(Event::IndicatorHidden);
    }
}

pub fn file(name: &str) -> FileHandle {
    FileHandle::from_bytes(name, name.as_bytes().to_vec())
}
