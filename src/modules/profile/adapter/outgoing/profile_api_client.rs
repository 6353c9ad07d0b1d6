use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::profile::adapter::outgoing::profile_api_config::{ConfigError, ProfileApiConfig};
use crate::profile::application::payload::ProfileUpdatePayload;
use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileUpdateError, ProfileUpdater,
};
use crate::profile::domain::entities::ProfileRecord;

const OWN_PROFILE_PATH: &str = "users/me";

/// REST client for the DocLearn profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileApiClient {
    config: ProfileApiConfig,
    client: reqwest::Client,
}

impl ProfileApiClient {
    pub fn new(config: ProfileApiConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ProfileApiConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `Ok(None)` on 404, for own and foreign profiles alike.
    async fn read_profile(&self, url: String) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        debug!(%url, "Fetching profile");
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ProfileQueryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if let Some(err) = query_status_error(status) {
            warn!(%url, status = status.as_u16(), "Profile fetch failed");
            return Err(err);
        }

        response
            .json::<ProfileRecord>()
            .await
            .map(Some)
            .map_err(|e| ProfileQueryError::Decode(e.to_string()))
    }
}

fn query_status_error(status: StatusCode) -> Option<ProfileQueryError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(ProfileQueryError::Unauthorized),
        StatusCode::NOT_FOUND => Some(ProfileQueryError::NotFound),
        s if s.is_success() => None,
        s => Some(ProfileQueryError::Transport(format!(
            "unexpected status {}",
            s.as_u16()
        ))),
    }
}

fn update_status_error(status: StatusCode, body: String) -> Option<ProfileUpdateError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(ProfileUpdateError::Unauthorized),
        s if s.is_success() => None,
        s => Some(ProfileUpdateError::Rejected {
            status: s.as_u16(),
            message: body,
        }),
    }
}

async fn rejection_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

#[async_trait]
impl ProfileQuery for ProfileApiClient {
    async fn fetch_own_profile(&self) -> Result<ProfileRecord, ProfileQueryError> {
        self.read_profile(self.config.endpoint(OWN_PROFILE_PATH))
            .await?
            .ok_or(ProfileQueryError::NotFound)
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, ProfileQueryError> {
        self.read_profile(self.config.endpoint(&format!("users/{user_id}")))
            .await
    }
}

#[async_trait]
impl ProfileUpdater for ProfileApiClient {
    async fn submit_update(
        &self,
        payload: ProfileUpdatePayload,
    ) -> Result<ProfileRecord, ProfileUpdateError> {
        let url = self.config.endpoint(OWN_PROFILE_PATH);
        debug!(%url, fields = ?payload.fields(), "Submitting profile update");

        let response = self
            .authorized(self.client.patch(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProfileUpdateError::Transport(e.to_string()))?;

        let status = response.status();
        if let Some(err) = update_status_error(status, String::new()) {
            warn!(%url, status = status.as_u16(), "Profile update rejected");
            return Err(match err {
                ProfileUpdateError::Rejected { status, .. } => ProfileUpdateError::Rejected {
                    status,
                    message: rejection_body(response).await,
                },
                other => other,
            });
        }

        response
            .json::<ProfileRecord>()
            .await
            .map_err(|e| ProfileUpdateError::Decode(e.to_string()))
    }
}
