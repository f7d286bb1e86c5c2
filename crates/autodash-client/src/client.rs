use autodash_core::{ClientConfig, DashboardError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::request::{ContentType, RequestBody};

const MAX_LOGGED_BODY: usize = 500;

/// Client for the automation backend's REST API.
///
/// Cloning is cheap and shares the underlying connection pool; the base URL
/// is fixed at construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.base_url.clone()))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request target for `path`: the base URL and path concatenated as-is
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, ContentType::Json, RequestBody::Empty)
            .await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body)?;
        self.send(Method::POST, path, ContentType::Json, RequestBody::Json(bytes))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::POST, path, ContentType::Json, RequestBody::Empty)
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        self.send(
            Method::POST,
            path,
            ContentType::Multipart,
            RequestBody::Multipart(form),
        )
        .await
    }

    /// Build a request for `path` with an explicit content type.
    ///
    /// A body is only accepted when it matches the content type.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        content_type: ContentType,
        body: RequestBody,
    ) -> Result<RequestBuilder> {
        let mut builder = self.http.request(method, self.url(path));

        if let Some(value) = content_type.header_value() {
            builder = builder.header(CONTENT_TYPE, value);
        }

        let builder = match (content_type, body) {
            (_, RequestBody::Empty) => builder,
            (ContentType::Json, RequestBody::Json(bytes)) => builder.body(bytes),
            (ContentType::Multipart, RequestBody::Multipart(form)) => builder.multipart(form),
            (content_type, body) => {
                return Err(DashboardError::InvalidRequest(format!(
                    "{} body cannot be sent as {:?}",
                    body.kind(),
                    content_type
                )));
            }
        };

        Ok(builder)
    }

    #[instrument(level = "debug", skip(self, body), fields(base_url = %self.base_url))]
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        content_type: ContentType,
        body: RequestBody,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%method, %url, "API request");

        let result = match self.build(method.clone(), path, content_type, body) {
            Ok(builder) => execute(builder).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!(%method, %url, "API error: {}", e);
        }
        result
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(autodash_core::DEFAULT_BASE_URL)
    }
}

async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let resp = builder.send().await.map_err(transport_error)?;
    let resp = check_status(resp).await?;

    let body = resp.text().await.map_err(transport_error)?;

    serde_json::from_str(&body).map_err(|e| {
        DashboardError::Parse(format!("{} - Body: {}", e, truncate(&body)))
    })
}

/// Turn a non-success response into `DashboardError::Status`
async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(DashboardError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extract the backend's `{"error": "..."}` message, if the body has one
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

fn transport_error(e: reqwest::Error) -> DashboardError {
    if e.is_builder() {
        return DashboardError::InvalidRequest(e.to_string());
    }
    DashboardError::Transport(e.to_string())
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_plain_concatenation() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.url("/api/health"), "http://localhost:8000/api/health");

        let trailing = ApiClient::new("http://localhost:8000/");
        assert_eq!(trailing.url("/api/health"), "http://localhost:8000//api/health");
    }

    #[test]
    fn test_json_request_sets_content_type() {
        let client = ApiClient::new("http://localhost:8000");
        let req = client
            .build(
                Method::POST,
                "/api/files/organize",
                ContentType::Json,
                RequestBody::Json(br#"{"directory":"downloads"}"#.to_vec()),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.url().as_str(), "http://localhost:8000/api/files/organize");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            req.body().and_then(|b| b.as_bytes()),
            Some(&br#"{"directory":"downloads"}"#[..])
        );
    }

    #[test]
    fn test_multipart_request_skips_json_header() {
        let client = ApiClient::new("http://localhost:8000");
        let form = reqwest::multipart::Form::new().text("file", "a,b\n1,2\n");
        let req = client
            .build(
                Method::POST,
                "/api/data/upload",
                ContentType::Multipart,
                RequestBody::Multipart(form),
            )
            .unwrap()
            .build()
            .unwrap();

        let content_type = req.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
    }

    #[test]
    fn test_mismatched_body_is_rejected() {
        let client = ApiClient::new("http://localhost:8000");
        let result = client.build(
            Method::POST,
            "/api/data/process",
            ContentType::Multipart,
            RequestBody::Json(b"{}".to_vec()),
        );
        assert!(matches!(result, Err(DashboardError::InvalidRequest(_))));
    }

    #[test]
    fn test_error_message_from_backend_body() {
        assert_eq!(
            error_message(r#"{"error": "File not found"}"#).as_deref(),
            Some("File not found")
        );
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"error": 42}"#), None);
    }

    #[test]
    fn test_from_config_validates() {
        assert!(ApiClient::from_config(&ClientConfig::new("ftp://files")).is_err());
        let client = ApiClient::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
