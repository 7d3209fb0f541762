#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use frontend::api::{ApiClient, Download, ExportLink, RequestOptions};
use frontend::error::AppError;
use frontend::models::RegistryRecord;
use frontend::notice::{Notice, NoticeBoard, Notifier};
use serde_json::{Value, json};
use tokio::sync::Semaphore;

pub enum Reply {
    Json(Value),
    Status(u16),
}

/// In-process backend: canned replies per endpoint, a call log and an
/// optional gate holding back matching requests.
pub struct FakeApi {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
    gate: Mutex<Option<(String, Arc<Semaphore>)>>,
    pub notices: Arc<NoticeBoard>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            notices: Arc::new(NoticeBoard::default()),
        })
    }

    pub fn reply(&self, endpoint: &str, value: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Json(value));
    }

    pub fn fail(&self, endpoint: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Reply::Status(status));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Blocks every request whose endpoint contains `needle` until `release`.
    pub fn hold(&self, needle: &str) {
        *self.gate.lock().unwrap() = Some((needle.to_string(), Arc::new(Semaphore::new(0))));
    }

    pub fn release(&self) {
        if let Some((_, gate)) = self.gate.lock().unwrap().take() {
            gate.add_permits(1024);
        }
    }

    pub async fn wait_for_calls(&self, count: usize) {
        for _ in 0..200 {
            if self.calls().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {} calls, saw {:?}", count, self.calls());
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn request(&self, endpoint: &str, _options: RequestOptions) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        let gate = self
            .gate
            .lock()
            .unwrap()
            .as_ref()
            .filter(|(needle, _)| endpoint.contains(needle.as_str()))
            .map(|(_, gate)| gate.clone());
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.unwrap();
        }

        let replies = self.replies.lock().unwrap();
        match replies.get(endpoint) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(401)) => {
                self.notices.notify(Notice::NotAuthorized);
                Err(AppError::Unauthorized)
            }
            Some(Reply::Status(403)) => {
                self.notices.notify(Notice::InvalidToken);
                Err(AppError::Forbidden)
            }
            Some(Reply::Status(status)) => Err(AppError::Http {
                status: *status,
                message: "Error desconocido".to_string(),
            }),
            None => Err(AppError::Http {
                status: 500,
                message: format!("no reply for {}", endpoint),
            }),
        }
    }

    async fn download(&self, link: &ExportLink) -> Result<Download, AppError> {
        self.calls.lock().unwrap().push(link.href.clone());
        Ok(Download {
            filename: link.filename.clone(),
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                .to_string(),
            bytes: b"PK\x03\x04".to_vec(),
        })
    }
}

pub fn record(codigo: &str, nombre: &str) -> RegistryRecord {
    RegistryRecord {
        id: Some(1),
        codigo_estudiante: codigo.to_string(),
        nombre: nombre.to_string(),
        grado: Some("5A".to_string()),
        tipo_alimentacion: "LUNCH".to_string(),
        fecha_hora: "2024-05-01T12:30:00.123".to_string(),
        plan: "MENSUAL".to_string(),
        estado: "VALIDO".to_string(),
    }
}

/// `{data, total}` body with `count` generated rows.
pub fn listing(count: usize, total: u64) -> Value {
    let data: Vec<RegistryRecord> = (0..count)
        .map(|i| record(&format!("C{:03}", i), &format!("Estudiante {}", i)))
        .collect();
    json!({ "data": data, "total": total })
}
