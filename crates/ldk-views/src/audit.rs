//! Audit Logs page: create form plus search-by-user grid.

use ldk_core::{AuditLog, Payload};

use crate::api::AuditApi;
use crate::phase::{Outcome, Phase};

/// Form fields for creating an audit entry. The form captures a single
/// change key/value pair; all six fields are required.
#[derive(Debug, Clone, Default)]
pub struct AuditForm {
    pub user_id: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub change_key: String,
    pub change_value: String,
}

impl AuditForm {
    fn is_complete(&self) -> bool {
        !self.user_id.is_empty()
            && !self.action.is_empty()
            && !self.resource_type.is_empty()
            && !self.resource_id.is_empty()
            && !self.change_key.is_empty()
            && !self.change_value.is_empty()
    }
}

/// Controller for the Audit Logs page.
#[derive(Debug, Default)]
pub struct AuditView {
    pub form: AuditForm,
    pub search_user_id: String,
    pub entries: Vec<AuditLog>,
    phase: Phase,
}

impl AuditView {
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
        !self.phase.is_loading() && !self.search_user_id.is_empty()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading() && self.form.is_complete()
    }

    /// Fetch audit entries for the current search user id, replacing the
    /// grid wholesale on success. A gated trigger is a no-op.
    pub async fn search<C: AuditApi>(&mut self, api: &C) {
        if !self.can_search() {
            return;
        }
        self.phase = Phase::Loading;
        match api.audit_by_user(&self.search_user_id).await {
            Ok(rows) => {
                self.entries = rows;
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(user_id = %self.search_user_id, %error, "audit search failed");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }

    /// Create an audit entry with a one-entry changes map. On success the
    /// form is cleared and, if the active search shows the same user, the
    /// search is re-issued.
    pub async fn submit<C: AuditApi>(&mut self, api: &C) {
        if !self.can_submit() {
            return;
        }
        self.phase = Phase::Loading;
        let mut changes = Payload::new();
        changes.insert(
            self.form.change_key.clone(),
            serde_json::Value::String(self.form.change_value.clone()),
        );
        match api
            .create_audit(
                &self.form.user_id,
                &self.form.action,
                &self.form.resource_type,
                &self.form.resource_id,
                &changes,
            )
            .await
        {
            Ok(_) => {
                let submitted_user = std::mem::take(&mut self.form.user_id);
                self.form.action.clear();
                self.form.resource_type.clear();
                self.form.resource_id.clear();
                self.form.change_key.clear();
                self.form.change_value.clear();
                self.phase = Phase::Settled(Outcome::Success);
                if self.search_user_id == submitted_user {
                    self.search(api).await;
                }
            }
            Err(error) => {
                tracing::error!(%error, "failed to create audit entry");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }
}
