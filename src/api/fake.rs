// Scripted FaqApi used by tests.
// Replays queued responses and records every submission it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::error::{FaqError, Result};

use super::endpoints::FaqApi;
use super::types::NewFaq;

#[derive(Default)]
pub struct ScriptedApi {
    lists: Mutex<VecDeque<Result<Value>>>,
    submits: Mutex<VecDeque<Result<StatusCode>>>,
    submitted: Mutex<Vec<NewFaq>>,
    list_calls: Mutex<usize>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next list response. An empty queue answers `[]`.
    pub fn push_list(self, response: Result<Value>) -> Self {
        self.lists.lock().unwrap().push_back(response);
        self
    }

    /// Queue the next submit response. An empty queue answers 201.
    pub fn push_submit(self, response: Result<StatusCode>) -> Self {
        self.submits.lock().unwrap().push_back(response);
        self
    }

    pub fn submitted(&self) -> Vec<NewFaq> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

/// Stand-in for a transport failure.
pub fn network_error() -> FaqError {
    FaqError::Other("connection refused".to_string())
}

/// Server representation of one record.
pub fn faq_json(id: &str, question: &str, answer: &str) -> Value {
    json!({
        "_id": id,
        "question": question,
        "answer": answer,
        "createdAt": "2024-01-01T00:00:00Z",
    })
}

#[async_trait]
impl FaqApi for ScriptedApi {
    async fn list(&self) -> Result<Value> {
        *self.list_calls.lock().unwrap() += 1;
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([])))
    }

    async fn submit(&self, faq: &NewFaq) -> Result<StatusCode> {
        self.submitted.lock().unwrap().push(faq.clone());
        self.submits
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(StatusCode::CREATED))
    }
}
