use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorEnvelope};
use crate::v_debug;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
///
/// Every call is a single attempt: no retry, no backoff. Failures surface
/// immediately as [`Error::Http`] (transport) or [`Error::Api`] (non-2xx
/// body with the API's error envelope).
#[derive(Clone)]
pub struct RequestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RequestClient {
    pub fn new() -> Self {
        Self::with_base_url(crate::API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        RequestClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint, authenticated when `token` is present.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<T, Error> {
        self.send(Method::GET, endpoint, token, None).await
    }

    /// POST with a bearer token. Action endpoints that take no payload
    /// should pass `json!({})`; the API rejects empty bodies.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        token: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.send(
            Method::POST,
            endpoint,
            Some(token),
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    /// Unauthenticated POST, used only by `/register`.
    pub async fn post_guest<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.send(Method::POST, endpoint, None, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        token: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.send(
            Method::PATCH,
            endpoint,
            Some(token),
            Some(serde_json::to_value(body)?),
        )
        .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        v_debug!("🌐 {} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for RequestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a non-2xx body into [`Error::Api`]. Bodies that are not the
/// `{"error": ..}` envelope fall back to the HTTP status code and raw text.
pub(crate) fn parse_api_error(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::Api {
            code: envelope.error.code,
            message: envelope.error.message,
            data: envelope.error.data,
        },
        Err(_) => Error::Api {
            code: status.as_u16() as i64,
            message: if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            },
            data: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_body_maps_to_api_error() {
        let body = r#"{"error": {"code": 4214, "message": "Ship is in transit.", "data": {"arrival": "soon"}}}"#;
        let err = parse_api_error(StatusCode::CONFLICT, body);

        match err {
            Error::Api { code, message, data } => {
                assert_eq!(code, 4214);
                assert_eq!(message, "Ship is in transit.");
                assert!(data.is_some());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn html_error_page_falls_back_to_status() {
        let err = parse_api_error(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        match err {
            Error::Api { code, message, data } => {
                assert_eq!(code, 502);
                assert!(message.contains("nope"));
                assert!(data.is_none());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let err = parse_api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        match err {
            Error::Api { code, message, .. } => {
                assert_eq!(code, 503);
                assert!(!message.is_empty());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = RequestClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
