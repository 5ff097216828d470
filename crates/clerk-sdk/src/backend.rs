//! HTTP transport used by every resource client
//!
//! Resource clients describe a call as an [`ApiRequest`] and hand it to a
//! [`Backend`]. [`HttpBackend`] is the reqwest implementation; tests and
//! callers with special transport needs can provide their own.

use crate::config::Config;
use crate::error::{ApiErrorResponse, Error, Result};
use crate::params::{Query, ToQuery};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Header identifying the SDK to the API
pub const SDK_HEADER: &str = "X-Clerk-SDK";

/// A file upload sent as `multipart/form-data`
#[derive(Debug, Clone)]
pub struct MultipartFile {
    /// Form field holding the file
    pub field_name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
    /// Extra text fields sent next to the file
    pub fields: Vec<(String, String)>,
}

impl MultipartFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            field_name: "file".to_string(),
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Request payload
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartFile),
}

/// A single Backend API call: verb, path, query and optional body
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured API URL, starting with `/`
    pub path: String,
    pub query: Query,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query parameters
    pub fn with_query(mut self, params: &impl ToQuery) -> Self {
        self.query.extend(params.to_query());
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn with_multipart(mut self, file: MultipartFile) -> Self {
        self.body = Some(RequestBody::Multipart(file));
        self
    }
}

/// Join path segments onto `base`.
///
/// Every segment must be non-empty once surrounding slashes are trimmed;
/// an empty segment almost always means a missing ID.
pub fn join_path(base: &str, segments: &[&str]) -> Result<String> {
    let mut path = base.trim_end_matches('/').to_string();
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidPath(format!(
                "missing path parameter after {}",
                path
            )));
        }
        path.push('/');
        path.push_str(&urlencoding::encode(trimmed));
    }
    Ok(path)
}

/// Transport abstraction every resource client calls through
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Execute the request. Returns the raw body of a 2xx response, or
    /// [`Error::Api`] for any other status.
    async fn call(&self, request: ApiRequest) -> Result<Bytes>;
}

/// Call the backend and decode the JSON response
pub async fn call_json<T>(backend: &dyn Backend, request: ApiRequest) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = backend.call(request).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// reqwest-backed [`Backend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Arc<Config>,
    http_client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend with its own connection pool
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a backend sharing an existing reqwest client
    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn build(&self, request: ApiRequest) -> Result<reqwest::RequestBuilder> {
        let mut builder = self
            .http_client
            .request(request.method, self.url(&request.path))
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .header(SDK_HEADER, format!("rust/{}", env!("CARGO_PKG_VERSION")));

        if let Some(key) = self.config.secret_key.as_deref() {
            builder = builder.bearer_auth(key);
        }
        for (name, value) in &self.config.custom_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }

        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.json(&body),
            Some(RequestBody::Multipart(file)) => {
                let mut part = reqwest::multipart::Part::bytes(file.data.to_vec())
                    .file_name(file.file_name);
                if let Some(content_type) = file.content_type.as_deref() {
                    part = part.mime_str(content_type)?;
                }
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in file.fields {
                    form = form.text(name, value);
                }
                builder.multipart(form.part(file.field_name, part))
            }
            None => builder,
        };

        Ok(builder)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(&self, request: ApiRequest) -> Result<Bytes> {
        let method = request.method.clone();
        let path = request.path.clone();

        let response = self.build(request)?.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(%method, %path, status = status.as_u16(), "Clerk API call");

        if status.is_success() {
            return Ok(body);
        }

        let error = ApiErrorResponse::from_body(status.as_u16(), &body);
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            trace_id = error.trace_id.as_deref().unwrap_or(""),
            "Clerk API returned an error"
        );
        Err(Error::Api(error))
    }
}
