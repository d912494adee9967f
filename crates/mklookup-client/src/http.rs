use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use mklookup_types::{
    Error, GenerateRequest, GenerateResponse, Result, SearchQuery, SearchResponse,
    explicit_error,
};

use crate::LookupApi;

pub const SEARCH_PATH: &str = "/api/search/";
pub const GENERATE_PATH: &str = "/api/generate-sap-code/";

/// Connection settings for [`HttpLookupApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking HTTP implementation of [`LookupApi`].
///
/// The underlying client is built once and shared by every worker thread.
pub struct HttpLookupApi {
    client: Client,
    base_url: String,
}

impl HttpLookupApi {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                Error::Network(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| Error::Network(e.to_string()))?;

        debug!(
            "POST {} -> {} in {}ms ({} bytes)",
            url,
            status.as_u16(),
            started.elapsed().as_millis(),
            text.len()
        );

        decode_body(status.as_u16(), &text)
    }
}

impl LookupApi for HttpLookupApi {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.post(SEARCH_PATH, query)
    }

    fn generate_sap_code(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.post(GENERATE_PATH, request)
    }
}

/// Interprets a response body.
///
/// The backend reports failures through an `error` field, often together
/// with a 4xx/5xx status, so the field is checked before the status code.
pub fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T> {
    let body: Value = serde_json::from_str(text)
        .map_err(|e| Error::Parse(format!("HTTP {} returned a non-JSON body ({})", status, e)))?;

    if let Some(message) = explicit_error(&body) {
        return Err(Error::Api(message));
    }

    if !body.is_object() {
        return Err(Error::Parse(format!(
            "HTTP {} returned JSON that is not an object",
            status
        )));
    }

    serde_json::from_value(body).map_err(|e| Error::Parse(format!("HTTP {}: {}", status, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = HttpLookupApi::new(&ClientOptions {
            base_url: "http://lookup.local:8000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            api.endpoint(SEARCH_PATH),
            "http://lookup.local:8000/api/search/"
        );
        assert_eq!(
            api.endpoint(GENERATE_PATH),
            "http://lookup.local:8000/api/generate-sap-code/"
        );
    }

    #[test]
    fn test_error_field_wins_over_status() {
        let err = decode_body::<SearchResponse>(500, r#"{"error": "Failed to retrieve Autoline data"}"#)
            .unwrap_err();
        assert_eq!(err, Error::Api("Failed to retrieve Autoline data".to_string()));
    }

    #[test]
    fn test_non_json_body_mentions_status() {
        let err = decode_body::<SearchResponse>(502, "<html>Bad Gateway</html>").unwrap_err();
        match err {
            Error::Parse(msg) => assert!(msg.contains("HTTP 502"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_array_body_is_a_parse_error() {
        let err = decode_body::<GenerateResponse>(200, "[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_success_body_decodes() {
        let response: GenerateResponse =
            decode_body(200, r#"{"success": true, "message": "queued"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("queued"));
    }
}
