use crate::api::error::PlaylistError;
use crate::api::models::*;
use crate::config::AppConfig;
use async_trait::async_trait;
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const PLAYLIST_PATH: &str = "api/playlist";
const HEALTH_PATH: &str = "api/health";

/// The single call the controller makes against the playlist generation service.
#[async_trait(?Send)]
pub trait PlaylistTransport {
    async fn generate_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistResponse, PlaylistError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceHealth {
    Online,
    Offline(String),
}

#[derive(Debug, Clone)]
pub struct HttpPlaylistService {
    config: AppConfig,
}

impl HttpPlaylistService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn check_health(&self) -> ServiceHealth {
        match self.fetch_health().await {
            Ok(health) if health.status.eq_ignore_ascii_case("ok") => ServiceHealth::Online,
            Ok(health) => ServiceHealth::Offline(format!("status \"{}\"", health.status)),
            Err(reason) => {
                warn!(api_base = %self.config.api_base, %reason, "health check failed");
                ServiceHealth::Offline(reason)
            }
        }
    }

    async fn fetch_health(&self) -> Result<HealthStatus, String> {
        let response = HTTP_CLIENT
            .get(self.config.endpoint(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!(
                "Health check failed with status {}",
                response.status()
            ));
        }

        response.json().await.map_err(|e| e.to_string())
    }
}

#[async_trait(?Send)]
impl PlaylistTransport for HttpPlaylistService {
    async fn generate_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistResponse, PlaylistError> {
        let url = self.config.endpoint(PLAYLIST_PATH);
        debug!(%url, limit = ?request.limit, "requesting playlist");

        let response = HTTP_CLIENT
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| PlaylistError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaylistError::from_failure_body(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlaylistError::Network(e.to_string()))?;
        decode_playlist(&body)
    }
}

pub fn decode_playlist(body: &str) -> Result<PlaylistResponse, PlaylistError> {
    serde_json::from_str(body).map_err(|e| PlaylistError::MalformedResponse(e.to_string()))
}
