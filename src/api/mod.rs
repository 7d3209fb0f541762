pub mod dto;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderValue,
};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::error::AppError;
use crate::notice::{Notice, Notifier};
use crate::storage::{ACCESS_TOKEN_KEY, Storage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SPREADSHEET_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// Sent without an explicit content-type; the transport adds the boundary.
    Multipart(reqwest::multipart::Form),
}

#[derive(Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

/// Target of a spreadsheet export plus the filename offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLink {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Performs a JSON call; a 204 answer resolves to `{}`.
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, AppError>;
    async fn download(&self, link: &ExportLink) -> Result<Download, AppError>;
}

/// GETs `endpoint` and decodes the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &dyn ApiClient,
    endpoint: &str,
) -> Result<T, AppError> {
    let value = client.request(endpoint, RequestOptions::default()).await?;
    serde_json::from_value(value).map_err(|e| {
        error!("Failed to parse response from {}: {}", endpoint, e);
        AppError::Decode(e)
    })
}

pub struct HttpApiClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
}

impl HttpApiClient {
    pub fn new(
        base_url: &str,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
            notifier,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn authorization(&self) -> Result<Option<HeaderValue>, AppError> {
        let Some(token) = self.storage.get_item(ACCESS_TOKEN_KEY) else {
            return Ok(None);
        };
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map(Some)
            .map_err(|_| AppError::Config("stored access token is not a valid header".to_string()))
    }

    async fn check_status(&self, response: Response) -> Result<Response, AppError> {
        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.notifier.notify(Notice::NotAuthorized);
                Err(AppError::Unauthorized)
            }
            StatusCode::FORBIDDEN => {
                self.notifier.notify(Notice::InvalidToken);
                Err(AppError::Forbidden)
            }
            status if !status.is_success() => {
                let body = response.bytes().await.unwrap_or_default();
                Err(AppError::Http {
                    status: status.as_u16(),
                    message: dto::ErrorBody::message_from(&body),
                })
            }
            _ => Ok(response),
        }
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, AppError> {
        let RequestOptions {
            method,
            headers: extra,
            body,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers.extend(extra);
        if let Some(authorization) = self.authorization()? {
            headers.insert(AUTHORIZATION, authorization);
        }

        let builder = self.client.request(method, self.url(endpoint)).headers(headers);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = self.check_status(builder.send().await?).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Value::Object(Map::new()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_file(&self, link: &ExportLink) -> Result<Download, AppError> {
        let mut builder = self.client.get(self.url(&link.href));
        if let Some(authorization) = self.authorization()? {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = self.check_status(builder.send().await?).await?;
        let headers = response.headers();
        let filename = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_filename)
            .unwrap_or_else(|| link.filename.clone());
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(SPREADSHEET_MIME)
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        Ok(Download {
            filename,
            content_type,
            bytes,
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, AppError> {
        debug!("request {} {}", options.method, endpoint);
        let result = self.send(endpoint, options).await;
        if let Err(e) = &result {
            error!("Request to {} failed: {}", endpoint, e);
        }
        result
    }

    async fn download(&self, link: &ExportLink) -> Result<Download, AppError> {
        debug!("download {}", link.href);
        let result = self.fetch_file(link).await;
        if let Err(e) = &result {
            error!("Download of {} failed: {}", link.href, e);
        }
        result
    }
}

/// Extracts `filename=...` from a Content-Disposition value.
fn disposition_filename(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
