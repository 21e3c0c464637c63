// file: src/client/http.rs
// description: reqwest-backed transport for the query service
// reference: https://docs.rs/reqwest

use crate::client::transport::{Transport, TransportResponse};
use crate::config::ServerConfig;
use crate::error::Result;
use crate::models::QueryInput;
use crate::utils::Validator;
use reqwest::Client;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Validator::validate_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, endpoint: &str, input: &QueryInput) -> Result<TransportResponse> {
        let url = self.url_for(endpoint);

        debug!("POST {} with {} field(s)", url, input.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?.to_vec();

        debug!("{} responded {} ({} bytes)", url, status, body.len());

        Ok(TransportResponse {
            status,
            content_disposition,
            body,
        })
    }
}
