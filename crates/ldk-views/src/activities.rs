//! User Activities page: log-activity form plus search-by-user grid.

use ldk_core::UserActivity;

use crate::api::ActivityApi;
use crate::phase::{Outcome, Phase};

/// Form fields for logging a new activity. All three are required.
#[derive(Debug, Clone, Default)]
pub struct ActivityForm {
    pub user_id: String,
    pub action: String,
    pub details: String,
}

/// Controller for the User Activities page.
#[derive(Debug, Default)]
pub struct ActivitiesView {
    pub form: ActivityForm,
    pub search_user_id: String,
    pub activities: Vec<UserActivity>,
    phase: Phase,
}

impl ActivitiesView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Search is enabled only with a non-empty query and no call in flight.
    #[must_use]
    pub fn can_search(&self) -> bool {
        !self.phase.is_loading() && !self.search_user_id.is_empty()
    }

    /// Submit is enabled only with every required field filled and no call in
    /// flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading()
            && !self.form.user_id.is_empty()
            && !self.form.action.is_empty()
            && !self.form.details.is_empty()
    }

    /// Fetch activities for the current search user id, replacing the grid
    /// wholesale on success. A gated trigger is a no-op.
    pub async fn search<C: ActivityApi>(&mut self, api: &C) {
        if !self.can_search() {
            return;
        }
        self.phase = Phase::Loading;
        match api.activities_by_user(&self.search_user_id).await {
            Ok(rows) => {
                self.activities = rows;
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(user_id = %self.search_user_id, %error, "activity search failed");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }

    /// Log a new activity. On success the form is cleared and, if the active
    /// search shows the same user, the search is re-issued so the grid picks
    /// up the new row.
    pub async fn submit<C: ActivityApi>(&mut self, api: &C) {
        if !self.can_submit() {
            return;
        }
        self.phase = Phase::Loading;
        match api
            .log_activity(&self.form.user_id, &self.form.action, &self.form.details)
            .await
        {
            Ok(_) => {
                let submitted_user = std::mem::take(&mut self.form.user_id);
                self.form.action.clear();
                self.form.details.clear();
                self.phase = Phase::Settled(Outcome::Success);
                if self.search_user_id == submitted_user {
                    self.search(api).await;
                }
            }
            Err(error) => {
                tracing::error!(%error, "failed to log activity");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }
}
