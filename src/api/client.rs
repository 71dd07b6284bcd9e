use super::{HttpBackend, HttpRequest, HttpResponse, Query, TransportError};
use crate::session::{mask_token, SessionHolder};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Longest raw body echoed back as an error message.
const MAX_ERROR_BODY: usize = 200;

/// The transport adapter every resource service talks through.
///
/// Resolves paths against the base URL, attaches the bearer token for
/// authenticated calls, and turns every non-2xx status or network failure
/// into a `TransportError`. It never retries, caches, or touches the session.
pub struct ApiClient<B> {
    backend: B,
    base_url: Url,
    session: SessionHolder,
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn new(backend: B, base_url: &str, session: SessionHolder) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::network(format!("invalid base URL {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::network(format!(
                "invalid base URL {:?}: not a base",
                base_url.as_str()
            )));
        }
        Ok(Self {
            backend,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Build the request `send` would issue, without issuing it.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &Query,
        auth: bool,
    ) -> Result<HttpRequest, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TransportError::network(format!("cannot append path to {}", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if auth {
            match self.session.token() {
                Some(token) => {
                    debug!("Attaching bearer token {}", mask_token(&token));
                    headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
                }
                None => warn!("{} {} requires auth but no session is active", method, path),
            }
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Issue a request and return the raw successful response.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &Query,
        auth: bool,
    ) -> Result<HttpResponse, TransportError> {
        let request = self.build_request(method, path, body, query, auth)?;
        debug!("{} {}", request.method, request.url);

        let response = self.backend.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(&response))
        }
    }

    /// Issue a request and return the JSON body (`Null` for an empty body).
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &Query,
        auth: bool,
    ) -> Result<Value, TransportError> {
        let response = self.exchange(method, path, body, query, auth).await?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| {
            TransportError::http(response.status, format!("invalid response body: {}", e))
        })
    }

    /// Like `send`, decoding the body into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &Query,
        auth: bool,
    ) -> Result<T, TransportError> {
        let response = self.exchange(method, path, body, query, auth).await?;
        let raw = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(raw).map_err(|e| {
            TransportError::http(response.status, format!("invalid response body: {}", e))
        })
    }

    /// Issue a request whose successful body is plain text.
    pub async fn send_text(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        auth: bool,
    ) -> Result<String, TransportError> {
        let response = self.exchange(method, path, None, query, auth).await?;
        Ok(response.body)
    }
}

/// Pick the most useful message out of an error response: the server's
/// `message`/`error` field, else the raw body, else the status reason.
fn error_from_response(response: &HttpResponse) -> TransportError {
    let from_json = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|json| {
            ["message", "mensagem", "error", "erro"]
                .iter()
                .find_map(|key| json.get(key).and_then(Value::as_str).map(str::to_string))
        });

    let message = from_json
        .filter(|m| !m.trim().is_empty())
        .or_else(|| {
            let body = response.body.trim();
            (!body.is_empty()).then(|| body.chars().take(MAX_ERROR_BODY).collect())
        })
        .unwrap_or_else(|| {
            StatusCode::from_u16(response.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        });

    TransportError::http(response.status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_error_prefers_server_message() {
        let err = error_from_response(&response(
            400,
            r#"{"status":400,"message":"Email já cadastrado"}"#,
        ));
        assert_eq!(err, TransportError::http(400, "Email já cadastrado"));
    }

    #[test]
    fn test_error_falls_back_to_body_then_reason() {
        assert_eq!(
            error_from_response(&response(500, "boom")).message,
            "boom"
        );
        assert_eq!(
            error_from_response(&response(404, "")).message,
            "Not Found"
        );
    }

    #[test]
    fn test_error_truncates_long_bodies() {
        let long = "x".repeat(1000);
        assert_eq!(
            error_from_response(&response(502, &long)).message.len(),
            MAX_ERROR_BODY
        );
    }
}
