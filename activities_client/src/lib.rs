//! Client for the Mergington activities API.
//!
//! [`ActivitiesClient::unregister_participant`] is the fire-and-forget form
//! used by the web page: it never returns an error and only logs what
//! happened. The other methods return a [`Result`] for callers that need to
//! react to failures.
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use types::{Activities, MessageResponse};
use url::Url;

mod error;
mod path;

pub use error::Error;
pub use path::{encode_component, participant_path};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// No timeout is applied when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ActivitiesClient {
    /// # Errors
    /// If the HTTP client cannot be built or `api_url` is not a valid URL.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self::with_http_client(builder.build()?, &config.api_url)
    }

    /// # Errors
    /// If `base_url` is not a valid URL, or has a query or fragment that
    /// request paths could not be appended to.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::UnsupportedBaseUrl(base_url));
        }

        Ok(Self { http, base_url })
    }

    /// Appends an already encoded `path` to the base URL, keeping any path
    /// prefix the base URL has.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Sends the request and parses the body as JSON before looking at the
    /// status, so error responses carry their body.
    async fn send(
        &self,
        method: Method,
        path: &str,
    ) -> Result<serde_json::Value, Error> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "sending request");

        let response = self.http.request(method, url).send().await?;
        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            return Err(Error::Rejected { status, body });
        }

        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, Error> {
        let body = self.send(method, path).await?;
        serde_json::from_value(body).map_err(Error::UnexpectedBody)
    }

    /// `GET /activities`
    ///
    /// # Errors
    /// See [`Error`].
    pub async fn list_activities(&self) -> Result<Activities, Error> {
        self.fetch(Method::GET, "/activities").await
    }

    /// `POST /activities/{activity}/signup?email={email}`
    ///
    /// # Errors
    /// See [`Error`]. The server rejects unknown activities, duplicate
    /// sign-ups and full activities.
    pub async fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, Error> {
        self.fetch(Method::POST, &participant_path("signup", activity, email))
            .await
    }

    /// `DELETE /activities/{activity}/unregister?email={email}`
    ///
    /// # Errors
    /// See [`Error`]. The server rejects unknown activities and emails that
    /// are not signed up.
    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, Error> {
        self.fetch(
            Method::DELETE,
            &participant_path("unregister", activity, email),
        )
        .await
    }

    /// Unregisters `email` from `activity` and logs the outcome.
    ///
    /// Any JSON body with a success status counts as success. A rejected
    /// request is logged with the body the server sent; a failed request is
    /// logged with the error. Nothing is returned either way.
    pub async fn unregister_participant(&self, activity: &str, email: &str) {
        let path = participant_path("unregister", activity, email);

        match self.send(Method::DELETE, &path).await {
            Ok(body) => {
                tracing::info!(
                    activity,
                    email,
                    %body,
                    "participant unregistered"
                );
            }
            Err(Error::Rejected { status, body }) => {
                tracing::error!(
                    %status,
                    %body,
                    "Error unregistering participant"
                );
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "Error unregistering participant"
                );
            }
        }
    }
}
