//! Analytics page: log-event form plus search-by-event-type grid.

use ldk_core::{AnalyticsData, Payload};

use crate::api::AnalyticsApi;
use crate::phase::{Outcome, Phase};

/// Form fields for logging a new analytics event. The form captures a single
/// metadata key/value pair; all four fields are required.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsForm {
    pub event_type: String,
    pub user_id: String,
    pub metadata_key: String,
    pub metadata_value: String,
}

/// Controller for the Analytics page.
#[derive(Debug, Default)]
pub struct AnalyticsView {
    pub form: AnalyticsForm,
    pub search_event_type: String,
    pub events: Vec<AnalyticsData>,
    phase: Phase,
}

impl AnalyticsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn can_search(&self) -> bool {
        !self.phase.is_loading() && !self.search_event_type.is_empty()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading()
            && !self.form.event_type.is_empty()
            && !self.form.user_id.is_empty()
            && !self.form.metadata_key.is_empty()
            && !self.form.metadata_value.is_empty()
    }

    /// Fetch events of the current search event type, replacing the grid
    /// wholesale on success. A gated trigger is a no-op.
    pub async fn search<C: AnalyticsApi>(&mut self, api: &C) {
        if !self.can_search() {
            return;
        }
        self.phase = Phase::Loading;
        match api.analytics_by_type(&self.search_event_type).await {
            Ok(rows) => {
                self.events = rows;
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(event_type = %self.search_event_type, %error, "analytics search failed");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }

    /// Log a new event with a one-entry metadata map. On success the form is
    /// cleared and, if the active search shows the same event type, the
    /// search is re-issued.
    pub async fn submit<C: AnalyticsApi>(&mut self, api: &C) {
        if !self.can_submit() {
            return;
        }
        self.phase = Phase::Loading;
        let mut metadata = Payload::new();
        metadata.insert(
            self.form.metadata_key.clone(),
            serde_json::Value::String(self.form.metadata_value.clone()),
        );
        match api
            .log_analytics(&self.form.event_type, &self.form.user_id, &metadata)
            .await
        {
            Ok(_) => {
                let submitted_type = std::mem::take(&mut self.form.event_type);
                self.form.user_id.clear();
                self.form.metadata_key.clear();
                self.form.metadata_value.clear();
                self.phase = Phase::Settled(Outcome::Success);
                if self.search_event_type == submitted_type {
                    self.search(api).await;
                }
            }
            Err(error) => {
                tracing::error!(%error, "failed to log analytics event");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use ldk_client::ApiError;
    use ldk_core::{AnalyticsData, Payload};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{AnalyticsApi, AnalyticsView};
    use crate::phase::{Outcome, Phase};

    #[derive(Default)]
    struct FakeApi {
        list_calls: Cell<usize>,
        log_calls: Cell<usize>,
        last_metadata: RefCell<Option<Payload>>,
        rows: Vec<AnalyticsData>,
    }

    impl AnalyticsApi for FakeApi {
        async fn analytics_by_type(
            &self,
            _event_type: &str,
        ) -> Result<Vec<AnalyticsData>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self.rows.clone())
        }

        async fn log_analytics(
            &self,
            event_type: &str,
            user_id: &str,
            metadata: &Payload,
        ) -> Result<AnalyticsData, ApiError> {
            self.log_calls.set(self.log_calls.get() + 1);
            *self.last_metadata.borrow_mut() = Some(metadata.clone());
            Ok(AnalyticsData {
                id: Some("an1".to_string()),
                event_type: event_type.to_string(),
                user_id: user_id.to_string(),
                metadata: metadata.clone(),
                timestamp: None,
            })
        }
    }

    #[tokio::test]
    async fn empty_query_never_reaches_transport() {
        let api = FakeApi::default();
        let mut view = AnalyticsView::new();
        view.search(&api).await;
        assert_eq!(api.list_calls.get(), 0);
    }

    #[rstest]
    #[case("", "u1", "k", "v")]
    #[case("page_view", "", "k", "v")]
    #[case("page_view", "u1", "", "v")]
    #[case("page_view", "u1", "k", "")]
    #[tokio::test]
    async fn incomplete_form_never_reaches_transport(
        #[case] event_type: &str,
        #[case] user_id: &str,
        #[case] key: &str,
        #[case] value: &str,
    ) {
        let api = FakeApi::default();
        let mut view = AnalyticsView::new();
        view.form.event_type = event_type.to_string();
        view.form.user_id = user_id.to_string();
        view.form.metadata_key = key.to_string();
        view.form.metadata_value = value.to_string();
        view.submit(&api).await;
        assert_eq!(api.log_calls.get(), 0);
    }

    #[tokio::test]
    async fn submit_sends_single_pair_metadata_map() {
        let api = FakeApi::default();
        let mut view = AnalyticsView::new();
        view.form.event_type = "page_view".to_string();
        view.form.user_id = "u1".to_string();
        view.form.metadata_key = "page".to_string();
        view.form.metadata_value = "/sessions".to_string();
        view.submit(&api).await;

        let metadata = api.last_metadata.borrow().clone().expect("metadata sent");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["page"], "/sessions");
        assert_eq!(view.phase(), Phase::Settled(Outcome::Success));
    }

    #[tokio::test]
    async fn submit_matching_event_type_reissues_search() {
        let api = FakeApi::default();
        let mut view = AnalyticsView::new();
        view.search_event_type = "page_view".to_string();
        view.form.event_type = "page_view".to_string();
        view.form.user_id = "u1".to_string();
        view.form.metadata_key = "page".to_string();
        view.form.metadata_value = "/".to_string();
        view.submit(&api).await;

        assert_eq!(api.list_calls.get(), 1);
        assert!(view.form.event_type.is_empty());
    }

    #[tokio::test]
    async fn submit_other_event_type_leaves_grid_alone() {
        let api = FakeApi::default();
        let mut view = AnalyticsView::new();
        view.search_event_type = "login".to_string();
        view.form.event_type = "page_view".to_string();
        view.form.user_id = "u1".to_string();
        view.form.metadata_key = "page".to_string();
        view.form.metadata_value = "/".to_string();
        view.submit(&api).await;

        assert_eq!(api.list_calls.get(), 0);
    }
}
