use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::domain::entities::ProfileRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Not authorized to read the profile")]
    Unauthorized,

    #[error("Profile not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode profile: {0}")]
    Decode(String),
}

/// Read side of the profile backend.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Profile of the authenticated user; `NotFound` when the backend has none.
    async fn fetch_own_profile(&self) -> Result<ProfileRecord, ProfileQueryError>;

    /// Profile of another user; `Ok(None)` when it does not exist.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, ProfileQueryError>;
}
