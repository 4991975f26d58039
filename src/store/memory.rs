use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use super::{Backend, InsertOutcome};
use crate::error::ApiResult;
use crate::models::Paste;

/// In-process backend. A single-process fallback for tests and local runs;
/// offers no durability and cannot serve multiple writer processes.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    pastes: Arc<Mutex<HashMap<String, Paste>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    async fn insert_unique(&mut self, code: &str, content: &str) -> ApiResult<InsertOutcome> {
        let mut pastes = self.pastes.lock().await;
        match pastes.entry(code.to_owned()) {
            Entry::Occupied(_) => Ok(InsertOutcome::Conflict),
            Entry::Vacant(entry) => {
                let paste = Paste {
                    code: code.to_owned(),
                    content: content.to_owned(),
                    created_at: Utc::now(),
                };
                entry.insert(paste.clone());
                Ok(InsertOutcome::Inserted(paste))
            }
        }
    }

    async fn find_by_key(&mut self, code: &str) -> ApiResult<Option<Paste>> {
        Ok(self.pastes.lock().await.get(code).cloned())
    }

    async fn delete_by_key(&mut self, code: &str) -> ApiResult<bool> {
        Ok(self.pastes.lock().await.remove(code).is_some())
    }
}
