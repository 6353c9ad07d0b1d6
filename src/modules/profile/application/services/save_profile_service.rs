use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::profile::application::form_state::FormStateController;
use crate::profile::application::ports::outgoing::ProfileUpdater;
use crate::profile::application::use_cases::save_profile::{
    SaveProfileChangesUseCase, SaveProfileError, SaveProfileOutput,
};

pub struct SaveProfileChangesService<U>
where
    U: ProfileUpdater + Send + Sync,
{
    profile_updater: U,
}

impl<U> SaveProfileChangesService<U>
where
    U: ProfileUpdater + Send + Sync,
{
    pub fn new(profile_updater: U) -> Self {
        Self { profile_updater }
    }
}

#[async_trait]
impl<U> SaveProfileChangesUseCase for SaveProfileChangesService<U>
where
    U: ProfileUpdater + Send + Sync,
{
    async fn execute(
        &self,
        form: &mut FormStateController,
    ) -> Result<SaveProfileOutput, SaveProfileError> {
        let changes = form.changed_fields();
        if changes.is_empty() {
            debug!("Save requested without pending changes");
            return Ok(SaveProfileOutput::Unchanged);
        }

        let payload = form.outbound_payload();
        if payload.is_empty() {
            warn!(
                changed = ?changes.fields(),
                "Pending profile changes contain nothing valid to submit"
            );
            return Ok(SaveProfileOutput::NothingToSubmit {
                changed: changes.fields(),
            });
        }

        let submitted = payload.fields();
        let saved = self
            .profile_updater
            .submit_update(payload)
            .await
            .inspect_err(|e| error!(error = %e, "Profile update failed"))?;

        form.commit_baseline(saved);
        info!(profile_id = %form.baseline().id, fields = ?submitted, "Profile saved");

        Ok(SaveProfileOutput::Saved {
            profile: form.baseline().clone(),
            submitted,
            saved_at: Utc::now(),
        })
    }
}
