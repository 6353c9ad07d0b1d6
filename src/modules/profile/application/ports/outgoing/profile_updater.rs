use async_trait::async_trait;

use crate::profile::application::payload::ProfileUpdatePayload;
use crate::profile::domain::entities::ProfileRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileUpdateError {
    #[error("Not authorized to update the profile")]
    Unauthorized,

    #[error("Update rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode saved profile: {0}")]
    Decode(String),
}

/// Write side of the profile backend.
#[async_trait]
pub trait ProfileUpdater: Send + Sync {
    /// Send a partial update for the authenticated user and return the record as saved.
    async fn submit_update(
        &self,
        payload: ProfileUpdatePayload,
    ) -> Result<ProfileRecord, ProfileUpdateError>;
}
