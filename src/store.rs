// FAQ store client.
// Fetches and creates FAQ entries and mirrors the fetched list into the "faqs" cache slot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::api::{Faq, FaqApi, NewFaq};
use crate::cache::{self, CachedData};
use crate::error::{FaqError, Result};

/// How the store uses its cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Slot holds the last fetched list with a timestamp; read back only as a
    /// startup fallback.
    #[default]
    Snapshot,
    /// Slot holds the raw fetched body, is read back on every fetch, and is
    /// overwritten with the bare submitted fields on create.
    Legacy,
}

/// Store client for the FAQ collection.
pub struct FaqStore {
    api: Arc<dyn FaqApi>,
    slot: PathBuf,
    /// Held across every slot write, and across the legacy read-back.
    slot_lock: Mutex<()>,
    mode: CacheMode,
}

impl FaqStore {
    /// Create a store whose "faqs" slot lives in `cache_dir`.
    pub fn new(api: Arc<dyn FaqApi>, cache_dir: &Path, mode: CacheMode) -> Self {
        Self {
            api,
            slot: cache::slot_path(cache_dir, cache::FAQS_KEY),
            slot_lock: Mutex::new(()),
            mode,
        }
    }

    /// Path of the file backing the "faqs" slot.
    pub fn slot_path(&self) -> &Path {
        &self.slot
    }

    /// Fetch the full ordered list of entries.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn fetch_all(&self) -> Result<Vec<Faq>> {
        let body = self.api.list().await?;
        let _slot = self.slot_lock.lock().await;

        let faqs: Vec<Faq> = match self.mode {
            CacheMode::Legacy => {
                cache::write_text(&self.slot, &serde_json::to_string(&body)?)?;
                let stored: Value = match cache::read_text(&self.slot)? {
                    Some(text) => serde_json::from_str(&text)?,
                    None => Value::Array(Vec::new()),
                };
                serde_json::from_value(stored)?
            }
            CacheMode::Snapshot => {
                let faqs: Vec<Faq> = serde_json::from_value(body)?;
                if let Err(e) = cache::write_cached(&self.slot, &faqs) {
                    warn!(error = %e, path = %self.slot.display(), "failed to write FAQ snapshot");
                }
                faqs
            }
        };

        info!(count = faqs.len(), "fetched FAQs");
        Ok(faqs)
    }

    /// Create an entry. The response body is not consumed.
    #[instrument(skip(self, question, answer), fields(mode = ?self.mode))]
    pub async fn create(&self, question: &str, answer: &str) -> Result<()> {
        let faq = NewFaq {
            question: question.to_string(),
            answer: answer.to_string(),
        };

        let status = self.api.submit(&faq).await?;

        if self.mode == CacheMode::Legacy {
            let _slot = self.slot_lock.lock().await;
            cache::write_text(&self.slot, &serde_json::to_string(&faq)?)?;
        }

        if !status.is_success() {
            return Err(FaqError::Rejected(status));
        }

        info!(%status, "created FAQ");
        Ok(())
    }

    /// Last list written by a successful fetch, if the slot holds one.
    ///
    /// Always `None` in legacy mode, which never reads the slot outside `fetch_all`.
    pub fn cached_snapshot(&self) -> Option<CachedData<Vec<Faq>>> {
        if self.mode != CacheMode::Snapshot {
            return None;
        }

        match cache::read_cached(&self.slot) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, path = %self.slot.display(), "ignoring unreadable FAQ snapshot");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::api::fake::{ScriptedApi, faq_json, network_error};

    fn store(api: ScriptedApi, dir: &TempDir, mode: CacheMode) -> (Arc<ScriptedApi>, FaqStore) {
        let api = Arc::new(api);
        let store = FaqStore::new(api.clone(), dir.path(), mode);
        (api, store)
    }

    fn slot_json(store: &FaqStore) -> Value {
        let text = cache::read_text(store.slot_path()).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_preserves_server_order() {
        let dir = TempDir::new().unwrap();
        let body = json!([faq_json("2", "Second", "B"), faq_json("1", "First", "A")]);
        let (_, store) = store(
            ScriptedApi::new().push_list(Ok(body)),
            &dir,
            CacheMode::Snapshot,
        );

        let faqs = store.fetch_all().await.unwrap();

        let ids: Vec<&str> = faqs.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[tokio::test]
    async fn test_snapshot_mode_writes_full_list() {
        let dir = TempDir::new().unwrap();
        let body = json!([faq_json("1", "Q1", "A1")]);
        let (_, store) = store(
            ScriptedApi::new().push_list(Ok(body)),
            &dir,
            CacheMode::Snapshot,
        );

        let faqs = store.fetch_all().await.unwrap();

        let snapshot = store.cached_snapshot().unwrap();
        assert_eq!(snapshot.data, faqs);
    }

    #[tokio::test]
    async fn test_snapshot_mode_create_leaves_slot_alone() {
        let dir = TempDir::new().unwrap();
        let body = json!([faq_json("1", "Q1", "A1")]);
        let (api, store) = store(
            ScriptedApi::new().push_list(Ok(body)),
            &dir,
            CacheMode::Snapshot,
        );

        store.fetch_all().await.unwrap();
        store.create("What?", "That.").await.unwrap();

        assert_eq!(api.submitted().len(), 1);
        assert_eq!(store.cached_snapshot().unwrap().data.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_ignores_unreadable_slot() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(ScriptedApi::new(), &dir, CacheMode::Snapshot);

        assert!(store.cached_snapshot().is_none());

        cache::write_text(store.slot_path(), r#"{"question":"Q","answer":"A"}"#).unwrap();
        assert!(store.cached_snapshot().is_none());
    }

    #[tokio::test]
    async fn test_legacy_mode_mirrors_raw_body() {
        let dir = TempDir::new().unwrap();
        let body = json!([faq_json("1", "Q1", "A1")]);
        let (_, store) = store(
            ScriptedApi::new().push_list(Ok(body.clone())),
            &dir,
            CacheMode::Legacy,
        );

        let faqs = store.fetch_all().await.unwrap();

        assert_eq!(faqs.len(), 1);
        assert_eq!(slot_json(&store), body);
        assert!(store.cached_snapshot().is_none());
    }

    #[tokio::test]
    async fn test_legacy_create_overwrites_slot_before_status_check() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(
            ScriptedApi::new().push_submit(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            &dir,
            CacheMode::Legacy,
        );

        let err = store.create("What?", "That.").await.unwrap_err();

        assert!(matches!(err, FaqError::Rejected(StatusCode::INTERNAL_SERVER_ERROR)));
        assert_eq!(
            slot_json(&store),
            json!({"question": "What?", "answer": "That."})
        );
    }

    #[tokio::test]
    async fn test_legacy_create_transport_failure_skips_slot() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(
            ScriptedApi::new().push_submit(Err(network_error())),
            &dir,
            CacheMode::Legacy,
        );

        assert!(store.create("What?", "That.").await.is_err());
        assert!(cache::read_text(store.slot_path()).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_error() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(
            ScriptedApi::new().push_list(Err(network_error())),
            &dir,
            CacheMode::Snapshot,
        );

        assert!(store.fetch_all().await.is_err());
        assert!(store.cached_snapshot().is_none());
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_list_body() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(
            ScriptedApi::new().push_list(Ok(json!({"message": "Internal error"}))),
            &dir,
            CacheMode::Snapshot,
        );

        assert!(matches!(store.fetch_all().await, Err(FaqError::Json(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_legacy_overlapping_fetch_and_create() {
        let dir = TempDir::new().unwrap();
        let (_, store) = store(ScriptedApi::new(), &dir, CacheMode::Legacy);
        let store = Arc::new(store);

        let mut tasks = Vec::new();
        for i in 0..20 {
            let fetcher = store.clone();
            tasks.push(tokio::spawn(async move { fetcher.fetch_all().await.map(|_| ()) }));
            let creator = store.clone();
            tasks.push(tokio::spawn(async move {
                creator.create(&format!("Q{}", i), "A").await
            }));
        }

        for task in tasks {
            assert!(task.await.unwrap().is_ok());
        }
        let slot = slot_json(&store);
        assert!(slot.is_array() || slot.is_object());
    }

    #[tokio::test]
    async fn test_create_sends_untrimmed_fields() {
        let dir = TempDir::new().unwrap();
        let (api, store) = store(ScriptedApi::new(), &dir, CacheMode::Snapshot);

        store.create("  What? ", "That.\n").await.unwrap();

        let sent = api.submitted();
        assert_eq!(sent[0].question, "  What? ");
        assert_eq!(sent[0].answer, "That.\n");
    }
}
