// file: src/client/transport.rs
// description: network seam between the flows and the query service

use crate::error::Result;
use crate::models::QueryInput;
use std::future::Future;

/// Raw response of a POST, before the flows interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_disposition: None,
            body: body.into(),
        }
    }

    pub fn with_content_disposition(mut self, value: impl Into<String>) -> Self {
        self.content_disposition = Some(value.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a [`QueryInput`] as a JSON body to an endpoint path.
///
/// Only failures to obtain a response are errors here; a non-success
/// status is returned as a normal response for the caller to classify.
pub trait Transport {
    fn post_json(
        &self,
        endpoint: &str,
        input: &QueryInput,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}
