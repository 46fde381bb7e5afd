//! HTTP client for the turnos and view endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::envelope::{decode_turnos, decode_view};
use super::traits::{TurnoSource, ViewSource};
use crate::config::DashboardConfig;
use crate::core::{FetchError, FilterParams, Turno};
use crate::table::DynamicTable;

/// Endpoint client. URLs are injected at construction.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    turnos_url: Option<String>,
    views_url: Option<String>,
}

impl HttpClient {
    pub fn new(
        turnos_url: Option<String>,
        views_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("turnos-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self {
            client,
            turnos_url,
            views_url,
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, FetchError> {
        Self::new(
            config.endpoints.turnos_url.clone(),
            config.endpoints.views_url.clone(),
            Duration::from_secs(config.http.timeout_secs),
        )
    }

    /// GET `url` with `query`, returning the body of a success response.
    async fn get_text(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<String, FetchError> {
        debug!("GET {} {:?}", url, query);
        let transport = |e: reqwest::Error| FetchError::Transport {
            endpoint: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                what: what.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

#[async_trait]
impl TurnoSource for HttpClient {
    async fn fetch_turnos(&self, filters: &FilterParams) -> Result<Vec<Turno>, FetchError> {
        let url = self
            .turnos_url
            .as_deref()
            .ok_or(FetchError::MissingEndpoint("turnos"))?;
        let body = self.get_text(url, &filters.query_pairs(), "turnos").await?;
        let turnos = decode_turnos(url, &body)?;
        debug!("Fetched {} turnos", turnos.len());
        Ok(turnos)
    }
}

#[async_trait]
impl ViewSource for HttpClient {
    async fn fetch_view(&self, name: &str) -> Result<DynamicTable, FetchError> {
        let url = self
            .views_url
            .as_deref()
            .ok_or(FetchError::MissingEndpoint("views"))?;
        let query = [("view", name.to_string())];
        let body = self.get_text(url, &query, name).await?;
        let table = decode_view(url, &body)?;
        debug!("Fetched view {} with {} rows", name, table.len());
        Ok(table)
    }
}
