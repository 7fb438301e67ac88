//! 基于 axum 的远程文档服务桩
//!
//! - `POST /api/upload`：`bad.txt` → 400；`noid.png` → 200 但没有 document_id；
//!   `crash.png` → 500 且没有 JSON；其余返回递增的整数ID
//! - `POST /api/process/{id}`：上传时文件名为 `ocrfail.png` → 500；
//!   `nocrm.png` → 200 但没有 crm_contact_id
//! - `GET /api/documents`：按上传倒序返回；`set_history_down(true)` 后返回 503

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct ServiceState {
    /// (id, filename, 上传内容长度)
    pub uploads: Mutex<Vec<(u64, String, usize)>>,
    pub processed: Mutex<Vec<String>>,
    history_down: AtomicBool,
}

pub struct StubService {
    pub addr: SocketAddr,
    pub state: Arc<ServiceState>,
}

impl StubService {
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn set_history_down(&self, down: bool) {
        self.state.history_down.store(down, Ordering::SeqCst);
    }
}

pub async fn spawn() -> StubService {
    let state = Arc::new(ServiceState::default());
    let app = Router::new()
        .route("/api/upload", post(upload))
        .route("/api/process/:id", post(process))
        .route("/api/documents", get(documents))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService { addr, state }
}

async fn upload(
    State(state): State<Arc<ServiceState>>,
    mut multipart: Multipart,
) -> Response {
    let mut received = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await.unwrap();
            received = Some((name, data.len()));
        }
    }

    let Some((name, len)) = received else {
        return reply(StatusCode::BAD_REQUEST, json!({"error": "No file provided"}));
    };

    match name.as_str() {
        "bad.txt" => reply(StatusCode::BAD_REQUEST, json!({"error": "Invalid file type"})),
        "crash.png" => (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response(),
        "noid.png" => reply(StatusCode::OK, json!({"message": "File uploaded successfully"})),
        _ => {
            let mut uploads = state.uploads.lock().unwrap();
            let id = uploads.len() as u64 + 1;
            uploads.push((id, name, len));
            reply(
                StatusCode::OK,
                json!({"message": "File uploaded successfully", "document_id": id}),
            )
        }
    }
}

async fn process(
    State(state): State<Arc<ServiceState>>,
    Path(id): Path<String>,
) -> Response {
    state.processed.lock().unwrap().push(id.clone());

    let filename = state
        .uploads
        .lock()
        .unwrap()
        .iter()
        .find(|(uid, _, _)| uid.to_string() == id)
        .map(|(_, name, _)| name.clone());

    let Some(filename) = filename else {
        return reply(StatusCode::NOT_FOUND, json!({"error": "Document not found"}));
    };

    let contact = json!({"name": "Alice Smith", "email": "alice@example.com"});
    match filename.as_str() {
        "ocrfail.png" => reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "OCR processing failed"}),
        ),
        "nocrm.png" => reply(
            StatusCode::OK,
            json!({"message": "OCR completed but CRM sync failed", "extracted_data": contact}),
        ),
        _ => reply(
            StatusCode::OK,
            json!({
                "message": "Document processed successfully",
                "extracted_data": contact,
                "crm_contact_id": format!("hs-{}", id)
            }),
        ),
    }
}

async fn documents(State(state): State<Arc<ServiceState>>) -> Response {
    if state.history_down.load(Ordering::SeqCst) {
        return reply(StatusCode::SERVICE_UNAVAILABLE, json!({"error": "db down"}));
    }

    let entries: Vec<Value> = state
        .uploads
        .lock()
        .unwrap()
        .iter()
        .rev()
        .map(|(id, name, _)| {
            json!({
                "id": id,
                "filename": name,
                "file_path": format!("uploads/{}_{}", id, name),
                "created_at": format!("2024-03-05T10:{:02}:00.000000+00:00", id),
                "processing_status": "completed"
            })
        })
        .collect();

    reply(StatusCode::OK, Value::Array(entries))
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}
