// Background operations for the FAQ view.
// Runs store calls as tokio tasks and reports their outcomes over a channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::{Faq, NewFaq};
use crate::error::Result;
use crate::store::FaqStore;

/// Completion of a background operation, applied to the view state in arrival order.
#[derive(Debug)]
pub enum Outcome {
    /// Mount or manual refresh finished.
    Fetched(Result<Vec<Faq>>),
    /// POST stage of a submission finished.
    Created(Result<()>),
    /// Refetch chained after a successful POST finished.
    Refetched(Result<Vec<Faq>>),
}

/// Spawns store operations. Cloning shares the same outcome channel.
#[derive(Clone)]
pub struct Controller {
    store: Arc<FaqStore>,
    tx: mpsc::UnboundedSender<Outcome>,
}

impl Controller {
    pub fn new(store: Arc<FaqStore>) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { store, tx }, rx)
    }

    pub fn store(&self) -> &FaqStore {
        &self.store
    }

    /// Fetch the list in the background.
    pub fn spawn_fetch(&self) -> JoinHandle<()> {
        let store = self.store.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.fetch_all().await;
            if let Err(e) = &result {
                warn!(error = %e, "FAQ fetch failed");
            }
            report(&tx, Outcome::Fetched(result));
        })
    }

    /// Create an entry, then refetch the list if the server accepted it.
    pub fn spawn_submit(&self, faq: NewFaq) -> JoinHandle<()> {
        let store = self.store.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let created = store.create(&faq.question, &faq.answer).await;
            if let Err(e) = created {
                warn!(error = %e, "FAQ create failed");
                report(&tx, Outcome::Created(Err(e)));
                return;
            }
            report(&tx, Outcome::Created(Ok(())));

            let refetched = store.fetch_all().await;
            if let Err(e) = &refetched {
                warn!(error = %e, "FAQ refetch after create failed");
            }
            report(&tx, Outcome::Refetched(refetched));
        })
    }
}

fn report(tx: &mpsc::UnboundedSender<Outcome>, outcome: Outcome) {
    // Receiver is gone once the UI has quit.
    let _ = tx.send(outcome);
}
