use serde::Deserialize;
use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};
use tokio::sync::RwLock;
use types::{Activities, MessageResponse};

use crate::{ApiError, catalogue};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

const fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    activities: Arc<RwLock<Activities>>,
}

impl mh_app::ContextProvider<Config> for AppState {
    async fn new(config: Config) -> Self {
        Self::with_activities(config, catalogue::activities())
    }
}

impl AppState {
    pub fn with_activities(config: Config, activities: Activities) -> Self {
        Self {
            config,
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// A copy of every activity and its current participants.
    pub async fn activities(&self) -> Activities {
        self.activities.read().await.clone()
    }

    /// Adds `email` to the participants of `activity_name`.
    ///
    /// # Errors
    /// `ActivityNotFound`, `AlreadySignedUp` or `ActivityFull`.
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(activity_name)
            .ok_or(ApiError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(ApiError::AlreadySignedUp);
        }

        if activity.spots_left() == 0 {
            return Err(ApiError::ActivityFull);
        }

        activity.participants.push(email.to_string());

        Ok(format!("Signed up {email} for {activity_name}").into())
    }

    /// Removes `email` from the participants of `activity_name`.
    ///
    /// # Errors
    /// `ActivityNotFound` or `NotSignedUp`.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(activity_name)
            .ok_or(ApiError::ActivityNotFound)?;

        let Some(position) =
            activity.participants.iter().position(|p| p == email)
        else {
            return Err(ApiError::NotSignedUp);
        };

        activity.participants.remove(position);

        Ok(format!("Unregistered {email} from {activity_name}").into())
    }
}
