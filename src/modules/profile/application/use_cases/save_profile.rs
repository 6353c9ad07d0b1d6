use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::profile::application::form_state::FormStateController;
use crate::profile::application::ports::outgoing::ProfileUpdateError;
use crate::profile::domain::entities::ProfileRecord;
use crate::profile::domain::fields::ProfileField;

#[derive(Debug, Clone, PartialEq)]
pub enum SaveProfileOutput {
    /// Working copy equals the baseline; nothing was sent.
    Unchanged,
    /// Edits exist but none of them survives payload sanitation; nothing was sent.
    NothingToSubmit { changed: Vec<ProfileField> },
    Saved {
        profile: ProfileRecord,
        submitted: Vec<ProfileField>,
        saved_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveProfileError {
    #[error("Update error: {0}")]
    UpdateError(#[from] ProfileUpdateError),
}

#[async_trait]
pub trait SaveProfileChangesUseCase: Send + Sync {
    async fn execute(
        &self,
        form: &mut FormStateController,
    ) -> Result<SaveProfileOutput, SaveProfileError>;
}
