//! Transport seams consumed by the view controllers.
//!
//! One small trait per page, implemented by [`ldk_client::ApiClient`]. Tests
//! substitute recording fakes, which is how the "gated triggers never reach
//! the transport" properties are checked.

#![allow(async_fn_in_trait)]

use ldk_client::{ApiClient, ApiError};
use ldk_core::{AnalyticsData, AuditLog, Payload, UserActivity, UserSession};

pub trait ActivityApi {
    async fn activities_by_user(&self, user_id: &str) -> Result<Vec<UserActivity>, ApiError>;
    async fn log_activity(
        &self,
        user_id: &str,
        action: &str,
        details: &str,
    ) -> Result<UserActivity, ApiError>;
}

pub trait AnalyticsApi {
    async fn analytics_by_type(&self, event_type: &str) -> Result<Vec<AnalyticsData>, ApiError>;
    async fn log_analytics(
        &self,
        event_type: &str,
        user_id: &str,
        metadata: &Payload,
    ) -> Result<AnalyticsData, ApiError>;
}

pub trait SessionApi {
    async fn create_session(
        &self,
        user_id: &str,
        session_token: &str,
    ) -> Result<UserSession, ApiError>;
    async fn touch_session(&self, session_token: &str) -> Result<(), ApiError>;
    async fn invalidate_session(&self, session_token: &str) -> Result<(), ApiError>;
}

pub trait AuditApi {
    async fn audit_by_user(&self, user_id: &str) -> Result<Vec<AuditLog>, ApiError>;
    async fn create_audit(
        &self,
        user_id: &str,
        action: &str,
        resource_type: &str,
        resource_id: &str,
        changes: &Payload,
    ) -> Result<AuditLog, ApiError>;
}

pub trait ImportApi {
    async fn import_users(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<String>, ApiError>;
}

impl ActivityApi for ApiClient {
    async fn activities_by_user(&self, user_id: &str) -> Result<Vec<UserActivity>, ApiError> {
        Self::activities_by_user(self, user_id).await
    }

    async fn log_activity(
        &self,
        user_id: &str,
        action: &str,
        details: &str,
    ) -> Result<UserActivity, ApiError> {
        Self::log_activity(self, user_id, action, details).await
    }
}

impl AnalyticsApi for ApiClient {
    async fn analytics_by_type(&self, event_type: &str) -> Result<Vec<AnalyticsData>, ApiError> {
        Self::analytics_by_type(self, event_type).await
    }

    async fn log_analytics(
        &self,
        event_type: &str,
        user_id: &str,
        metadata: &Payload,
    ) -> Result<AnalyticsData, ApiError> {
        Self::log_analytics(self, event_type, user_id, metadata).await
    }
}

impl SessionApi for ApiClient {
    async fn create_session(
        &self,
        user_id: &str,
        session_token: &str,
    ) -> Result<UserSession, ApiError> {
        Self::create_session(self, user_id, session_token).await
    }

    async fn touch_session(&self, session_token: &str) -> Result<(), ApiError> {
        Self::touch_session(self, session_token).await
    }

    async fn invalidate_session(&self, session_token: &str) -> Result<(), ApiError> {
        Self::invalidate_session(self, session_token).await
    }
}

impl AuditApi for ApiClient {
    async fn audit_by_user(&self, user_id: &str) -> Result<Vec<AuditLog>, ApiError> {
        Self::audit_by_user(self, user_id).await
    }

    async fn create_audit(
        &self,
        user_id: &str,
        action: &str,
        resource_type: &str,
        resource_id: &str,
        changes: &Payload,
    ) -> Result<AuditLog, ApiError> {
        Self::create_audit(self, user_id, action, resource_type, resource_id, changes).await
    }
}

impl ImportApi for ApiClient {
    async fn import_users(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<String>, ApiError> {
        Self::import_users(self, file_name, bytes).await
    }
}
