use crate::populator::{decode_records, PopulateError, RecordSource};
use common::model::record::Record;
use gloo_console::warn;
use gloo_net::http::Request;

/// Reads records with a plain `GET`: no headers, no timeout, no retry.
pub struct HttpRecordSource {
    endpoint: String,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpRecordSource {
            endpoint: endpoint.into(),
        }
    }
}

/// Turns a response into records. The status is not checked: a non-2xx
/// answer only yields a warning and the body is parsed regardless.
pub fn read_response(
    endpoint: &str,
    status: u16,
    body: &str,
) -> (Option<String>, Result<Vec<Record>, PopulateError>) {
    let warning = if (200..300).contains(&status) {
        None
    } else {
        Some(format!("{} answered {}", endpoint, status))
    };
    (warning, decode_records(body))
}

impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, PopulateError> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| PopulateError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PopulateError::Network(e.to_string()))?;

        let (warning, records) = read_response(&self.endpoint, status, &body);
        if let Some(warning) = warning {
            warn!(warning);
        }
        records
    }
}
