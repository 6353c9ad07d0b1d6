use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::form_state::FormStateController;
use crate::profile::application::ports::outgoing::ProfileQueryError;

/// Whose profile to open in the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTarget {
    Me,
    User(Uuid),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] ProfileQueryError),
}

#[async_trait]
pub trait LoadProfileForEditingUseCase: Send + Sync {
    async fn execute(&self, target: ProfileTarget) -> Result<FormStateController, LoadProfileError>;
}
