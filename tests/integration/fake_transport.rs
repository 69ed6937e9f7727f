//! In-process transport for driving the orchestrator without a network.

use async_trait::async_trait;
use flood_risk_client::transport::{InferenceTransport, RawResponse};
use flood_risk_client::{AnalysisError, AnalysisRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{oneshot, Notify};

pub type Reply = Result<RawResponse, AnalysisError>;

/// Holds each call open until the test releases it.
pub struct GatedTransport {
    started: Notify,
    pending: Mutex<Option<oneshot::Sender<Reply>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, AnalysisRequest)>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            pending: Mutex::new(None),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Wait until a call is parked inside `submit`.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Complete the parked call.
    pub fn release(&self, reply: Reply) {
        let tx = self
            .pending
            .lock()
            .unwrap()
            .take()
            .expect("no call in flight");
        tx.send(reply).expect("submit future dropped");
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, AnalysisRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceTransport for GatedTransport {
    async fn submit(&self, endpoint_path: &str, request: &AnalysisRequest) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((endpoint_path.to_string(), request.clone()));
        let (tx, rx) = oneshot::channel();
        *self.pending.lock().unwrap() = Some(tx);
        self.started.notify_one();
        rx.await
            .unwrap_or_else(|_| Err(AnalysisError::network("gate dropped")))
    }
}

pub fn ok_reply(body: serde_json::Value) -> Reply {
    Ok(RawResponse::new(200, body))
}
