// FAQ view state management.
// Tracks the displayed list, loading/submitting flags, the error banner, and the form.

use chrono::{DateTime, Utc};
use ratatui::widgets::TableState;

use crate::api::{Faq, NewFaq};
use crate::cache::CachedData;
use crate::controller::Outcome;
use crate::error::ViewError;

use super::form::FaqForm;

/// Complete state of the FAQ view.
#[derive(Debug, Default)]
pub struct FaqViewState {
    /// Entries in server order.
    pub faqs: Vec<Faq>,
    /// A fetch is in flight.
    pub loading: bool,
    /// A submission is in flight.
    pub submitting: bool,
    /// Inline error banner; a new error replaces the previous one.
    pub error: Option<ViewError>,
    /// Form field values.
    pub form: FaqForm,
    /// Set while the list comes from the cache snapshot rather than the server.
    pub cached_at: Option<DateTime<Utc>>,
    /// Table selection.
    pub table_state: TableState,
}

impl FaqViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a cached list until the first network response arrives.
    pub fn restore_snapshot(&mut self, snapshot: CachedData<Vec<Faq>>) {
        self.faqs = snapshot.data;
        self.cached_at = Some(snapshot.cached_at);
        self.reset_selection();
    }

    /// A fetch has been started. The error banner is left as it is.
    pub fn start_fetch(&mut self) {
        self.loading = true;
    }

    /// Begin a submission if both fields have content.
    ///
    /// Returns the body to send, or `None` without touching any state.
    pub fn start_submit(&mut self) -> Option<NewFaq> {
        if !self.form.is_submittable() {
            return None;
        }
        self.submitting = true;
        Some(self.form.to_new_faq())
    }

    /// Apply the completion of a background operation.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Fetched(Ok(faqs)) => {
                self.replace_list(faqs);
                self.loading = false;
            }
            Outcome::Fetched(Err(_)) => {
                self.error = Some(ViewError::FetchFailed);
                self.loading = false;
            }
            Outcome::Created(Ok(())) => {
                // The chained refetch counts as loading.
                self.loading = true;
            }
            Outcome::Created(Err(_)) => {
                self.error = Some(ViewError::AddFailed);
                self.submitting = false;
            }
            Outcome::Refetched(Ok(faqs)) => {
                self.replace_list(faqs);
                self.form.clear();
                self.loading = false;
                self.submitting = false;
            }
            Outcome::Refetched(Err(_)) => {
                self.error = Some(ViewError::AddFailed);
                self.loading = false;
                self.submitting = false;
            }
        }
    }

    fn replace_list(&mut self, faqs: Vec<Faq>) {
        self.faqs = faqs;
        self.error = None;
        self.cached_at = None;
        self.reset_selection();
    }

    /// Select the next entry in the table.
    pub fn select_next(&mut self) {
        if self.faqs.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= self.faqs.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Select the previous entry in the table.
    pub fn select_prev(&mut self) {
        if self.faqs.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        if self.faqs.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::network_error;
    use crate::error::FaqError;

    fn faq(id: &str, question: &str, answer: &str) -> Faq {
        Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn filled_form(state: &mut FaqViewState, question: &str, answer: &str) {
        state.form.question = question.to_string();
        state.form.answer = answer.to_string();
    }

    #[test]
    fn test_fetch_success_replaces_list_in_order() {
        let mut state = FaqViewState::new();
        state.faqs = vec![faq("old", "Old", "Gone")];
        state.error = Some(ViewError::FetchFailed);

        state.start_fetch();
        assert!(state.loading);

        let fetched = vec![faq("2", "Q2", "A2"), faq("1", "Q1", "A1")];
        state.apply(Outcome::Fetched(Ok(fetched.clone())));

        assert_eq!(state.faqs, fetched);
        assert_eq!(state.error, None);
        assert!(!state.loading);
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_start_fetch_keeps_error() {
        let mut state = FaqViewState::new();
        state.error = Some(ViewError::AddFailed);

        state.start_fetch();

        assert_eq!(state.error, Some(ViewError::AddFailed));
    }

    #[test]
    fn test_fetch_failure_keeps_previous_list() {
        let mut state = FaqViewState::new();
        let shown = vec![faq("1", "Q1", "A1")];
        state.faqs = shown.clone();

        state.start_fetch();
        state.apply(Outcome::Fetched(Err(network_error())));

        assert_eq!(state.faqs, shown);
        assert_eq!(state.error, Some(ViewError::FetchFailed));
        assert!(!state.loading);
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut state = FaqViewState::new();
        filled_form(&mut state, "What?", "");

        assert!(state.start_submit().is_none());
        assert!(!state.submitting);
        assert_eq!(state.form.question, "What?");
        assert_eq!(state.form.answer, "");

        filled_form(&mut state, "   ", "\t\n");
        assert!(state.start_submit().is_none());
        assert!(!state.submitting);
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut state = FaqViewState::new();
        filled_form(&mut state, "What?", "That.");

        let body = state.start_submit().unwrap();
        assert_eq!(body.question, "What?");
        assert!(state.submitting);

        state.apply(Outcome::Created(Ok(())));
        assert!(state.loading);
        assert!(state.submitting);

        let refreshed = vec![faq("1", "What?", "That.")];
        state.apply(Outcome::Refetched(Ok(refreshed.clone())));

        assert_eq!(state.faqs, refreshed);
        assert_eq!(state.form, FaqForm::default());
        assert!(!state.submitting);
        assert!(!state.loading);
    }

    #[test]
    fn test_rejected_create_keeps_typed_text() {
        let mut state = FaqViewState::new();
        let shown = vec![faq("1", "Q1", "A1")];
        state.faqs = shown.clone();
        filled_form(&mut state, "What?", "That.");

        state.start_submit().unwrap();
        state.apply(Outcome::Created(Err(FaqError::Rejected(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))));

        assert_eq!(state.error, Some(ViewError::AddFailed));
        assert_eq!(state.error.unwrap().to_string(), "Failed to add FAQ");
        assert_eq!(state.form.question, "What?");
        assert_eq!(state.form.answer, "That.");
        assert_eq!(state.faqs, shown);
        assert!(!state.submitting);
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_refetch_after_create_keeps_typed_text() {
        let mut state = FaqViewState::new();
        filled_form(&mut state, "What?", "That.");

        state.start_submit().unwrap();
        state.apply(Outcome::Created(Ok(())));
        state.apply(Outcome::Refetched(Err(network_error())));

        assert_eq!(state.error, Some(ViewError::AddFailed));
        assert_eq!(state.form.question, "What?");
        assert_eq!(state.form.answer, "That.");
        assert!(!state.submitting);
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_create_leaves_concurrent_fetch_loading() {
        let mut state = FaqViewState::new();
        filled_form(&mut state, "What?", "That.");

        state.start_fetch();
        state.start_submit().unwrap();
        state.apply(Outcome::Created(Err(network_error())));

        assert!(state.loading);
        assert!(!state.submitting);
    }

    #[test]
    fn test_snapshot_shown_until_first_fetch() {
        let mut state = FaqViewState::new();
        let snapshot = CachedData::new(vec![faq("1", "Cached", "Old")]);
        let cached_at = snapshot.cached_at;

        state.restore_snapshot(snapshot);
        assert_eq!(state.faqs[0].question, "Cached");
        assert_eq!(state.cached_at, Some(cached_at));

        state.apply(Outcome::Fetched(Ok(Vec::new())));
        assert!(state.faqs.is_empty());
        assert_eq!(state.cached_at, None);
        assert_eq!(state.table_state.selected(), None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = FaqViewState::new();
        state.select_next();
        assert_eq!(state.table_state.selected(), None);

        state.apply(Outcome::Fetched(Ok(vec![faq("1", "Q1", "A1"), faq("2", "Q2", "A2")])));
        state.select_prev();
        assert_eq!(state.table_state.selected(), Some(0));
        state.select_next();
        state.select_next();
        assert_eq!(state.table_state.selected(), Some(1));
    }
}
