//! Sessions page: create form, session grid, and per-row heartbeat and
//! invalidate actions.
//!
//! Row actions apply an optimistic local patch on success instead of
//! re-fetching: heartbeat stamps the row with the current time, invalidate
//! flips `is_valid`. The displayed state may diverge from backend truth
//! (e.g., server-side expiry) until the operator reloads.

use chrono::Utc;
use ldk_core::UserSession;

use crate::api::SessionApi;
use crate::phase::{Outcome, Phase};

/// Form fields for creating a session. Both are required.
#[derive(Debug, Clone, Default)]
pub struct SessionForm {
    pub user_id: String,
    pub session_token: String,
}

/// Controller for the Sessions page.
#[derive(Debug, Default)]
pub struct SessionsView {
    pub form: SessionForm,
    pub sessions: Vec<UserSession>,
    phase: Phase,
}

impl SessionsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn can_create(&self) -> bool {
        !self.phase.is_loading()
            && !self.form.user_id.is_empty()
            && !self.form.session_token.is_empty()
    }

    /// Row actions are enabled only for rows still marked valid, and only
    /// while no call is in flight.
    #[must_use]
    pub fn row_actions_enabled(&self, session_token: &str) -> bool {
        !self.phase.is_loading()
            && self
                .sessions
                .iter()
                .any(|session| session.session_token == session_token && session.is_valid)
    }

    /// Create a session and append the returned record to the grid. A gated
    /// trigger is a no-op.
    pub async fn create<C: SessionApi>(&mut self, api: &C) {
        if !self.can_create() {
            return;
        }
        self.phase = Phase::Loading;
        match api
            .create_session(&self.form.user_id, &self.form.session_token)
            .await
        {
            Ok(session) => {
                self.sessions.push(session);
                self.form.user_id.clear();
                self.form.session_token.clear();
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(%error, "failed to create session");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }

    /// Heartbeat one row by token. On success, only the matching row's
    /// last-active timestamp is patched, to the current time.
    pub async fn heartbeat<C: SessionApi>(&mut self, api: &C, session_token: &str) {
        if !self.row_actions_enabled(session_token) {
            return;
        }
        self.phase = Phase::Loading;
        match api.touch_session(session_token).await {
            Ok(()) => {
                let now = Utc::now().to_rfc3339();
                for session in &mut self.sessions {
                    if session.session_token == session_token {
                        session.last_active_timestamp = Some(now.clone());
                    }
                }
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(token = %session_token, %error, "session heartbeat failed");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }

    /// Invalidate one row by token. On success, only the matching row's
    /// `is_valid` flag flips to false, which also disables its row actions.
    pub async fn invalidate<C: SessionApi>(&mut self, api: &C, session_token: &str) {
        if !self.row_actions_enabled(session_token) {
            return;
        }
        self.phase = Phase::Loading;
        match api.invalidate_session(session_token).await {
            Ok(()) => {
                for session in &mut self.sessions {
                    if session.session_token == session_token {
                        session.is_valid = false;
                    }
                }
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(token = %session_token, %error, "session invalidate failed");
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ldk_client::ApiError;
    use ldk_core::UserSession;
    use pretty_assertions::assert_eq;

    use super::{SessionApi, SessionsView};
    use crate::phase::{Outcome, Phase};

    fn session(id: &str, user_id: &str, token: &str, valid: bool) -> UserSession {
        UserSession {
            id: Some(id.to_string()),
            user_id: user_id.to_string(),
            session_token: token.to_string(),
            ip_address: None,
            user_agent: None,
            last_active_timestamp: Some("T0".to_string()),
            created_timestamp: Some("T0".to_string()),
            is_valid: valid,
        }
    }

    #[derive(Default)]
    struct FakeApi {
        create_calls: Cell<usize>,
        touch_calls: Cell<usize>,
        invalidate_calls: Cell<usize>,
        fail: bool,
    }

    impl FakeApi {
        fn check(&self) -> Result<(), ApiError> {
            if self.fail {
                Err(ApiError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl SessionApi for FakeApi {
        async fn create_session(
            &self,
            user_id: &str,
            session_token: &str,
        ) -> Result<UserSession, ApiError> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.check()?;
            Ok(UserSession {
                id: Some("s1".to_string()),
                user_id: user_id.to_string(),
                session_token: session_token.to_string(),
                ip_address: None,
                user_agent: None,
                last_active_timestamp: None,
                created_timestamp: None,
                is_valid: true,
            })
        }

        async fn touch_session(&self, _session_token: &str) -> Result<(), ApiError> {
            self.touch_calls.set(self.touch_calls.get() + 1);
            self.check()
        }

        async fn invalidate_session(&self, _session_token: &str) -> Result<(), ApiError> {
            self.invalidate_calls.set(self.invalidate_calls.get() + 1);
            self.check()
        }
    }

    #[tokio::test]
    async fn create_with_missing_field_never_reaches_transport() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.form.user_id = "u1".to_string();
        view.create(&api).await;
        assert_eq!(api.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn create_appends_exactly_the_returned_record() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.sessions = vec![session("s0", "u0", "tok0", true)];
        view.form.user_id = "u1".to_string();
        view.form.session_token = "tok123".to_string();
        view.create(&api).await;

        assert_eq!(view.sessions.len(), 2);
        let appended = &view.sessions[1];
        assert_eq!(appended.id.as_deref(), Some("s1"));
        assert_eq!(appended.user_id, "u1");
        assert_eq!(appended.session_token, "tok123");
        assert!(appended.is_valid);
        assert!(view.form.user_id.is_empty());
        assert!(view.form.session_token.is_empty());
    }

    #[tokio::test]
    async fn heartbeat_patches_only_matching_row_timestamp() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.sessions = vec![
            session("s1", "u1", "tok123", true),
            session("s2", "u2", "tok456", true),
        ];
        view.heartbeat(&api, "tok123").await;

        assert_eq!(api.touch_calls.get(), 1);
        let patched = &view.sessions[0];
        assert_ne!(patched.last_active_timestamp.as_deref(), Some("T0"));
        assert!(patched.is_valid);
        assert_eq!(patched.created_timestamp.as_deref(), Some("T0"));
        // The other row is untouched.
        assert_eq!(view.sessions[1], session("s2", "u2", "tok456", true));
    }

    #[tokio::test]
    async fn invalidate_flips_only_matching_row_and_disables_its_actions() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.sessions = vec![
            session("s1", "u1", "tok123", true),
            session("s2", "u2", "tok456", true),
        ];
        view.invalidate(&api, "tok123").await;

        assert_eq!(api.invalidate_calls.get(), 1);
        assert!(!view.sessions[0].is_valid);
        assert!(view.sessions[1].is_valid);
        assert!(!view.row_actions_enabled("tok123"));
        assert!(view.row_actions_enabled("tok456"));
        // Only the validity flag changed on the matching row.
        assert_eq!(
            view.sessions[0].last_active_timestamp.as_deref(),
            Some("T0")
        );
    }

    #[tokio::test]
    async fn actions_on_invalid_rows_never_reach_transport() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.sessions = vec![session("s1", "u1", "tok123", false)];

        view.heartbeat(&api, "tok123").await;
        view.invalidate(&api, "tok123").await;

        assert_eq!(api.touch_calls.get(), 0);
        assert_eq!(api.invalidate_calls.get(), 0);
    }

    #[tokio::test]
    async fn actions_on_unknown_tokens_never_reach_transport() {
        let api = FakeApi::default();
        let mut view = SessionsView::new();
        view.sessions = vec![session("s1", "u1", "tok123", true)];
        view.heartbeat(&api, "no-such-token").await;
        assert_eq!(api.touch_calls.get(), 0);
    }

    #[tokio::test]
    async fn failed_invalidate_leaves_row_valid() {
        let api = FakeApi {
            fail: true,
            ..FakeApi::default()
        };
        let mut view = SessionsView::new();
        view.sessions = vec![session("s1", "u1", "tok123", true)];
        view.invalidate(&api, "tok123").await;

        assert_eq!(view.phase(), Phase::Settled(Outcome::Error));
        // No optimistic patch without a success response.
        assert!(view.sessions[0].is_valid);
        assert!(view.row_actions_enabled("tok123"));
    }
}
