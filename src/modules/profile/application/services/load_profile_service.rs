use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::profile::application::form_state::FormStateController;
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::profile::application::use_cases::load_profile::{
    LoadProfileError, LoadProfileForEditingUseCase, ProfileTarget,
};

pub struct LoadProfileForEditingService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    profile_query: Q,
}

impl<Q> LoadProfileForEditingService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> LoadProfileForEditingUseCase for LoadProfileForEditingService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, target: ProfileTarget) -> Result<FormStateController, LoadProfileError> {
        let fetched = match target {
            ProfileTarget::Me => self.profile_query.fetch_own_profile().await.map(Some),
            ProfileTarget::User(user_id) => self.profile_query.fetch_profile(user_id).await,
        };

        let profile = match fetched {
            Ok(Some(profile)) => profile,
            Ok(None) | Err(ProfileQueryError::NotFound) => {
                warn!(?target, "Profile to edit does not exist");
                return Err(LoadProfileError::NotFound);
            }
            Err(e) => {
                error!(?target, error = %e, "Failed to fetch profile for editing");
                return Err(e.into());
            }
        };

        info!(profile_id = %profile.id, role = %profile.role(), "Profile loaded for editing");
        Ok(FormStateController::new(profile))
    }
}
