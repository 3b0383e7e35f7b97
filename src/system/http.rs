use super::error::HttpError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default idle-connection timeout for [`HttpClient`]
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and fully read body of a GET request
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Abstraction for outbound HTTP to enable testing without a network
pub trait HttpGetter {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

/// Real HTTP client asking for JSON, with a configurable idle timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub conn_timeout: Duration,
}

impl HttpClient {
    pub fn new(conn_timeout: Duration) -> Self {
        Self { conn_timeout }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

impl HttpGetter for HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url, timeout = ?self.conn_timeout, "GET");

        // Only idle connections are bounded; a slow response is waited for.
        let client = Client::builder()
            .pool_idle_timeout(self.conn_timeout)
            .timeout(None::<Duration>)
            .build()?;
        let request = client.get(url).header(ACCEPT, "application/json").build()?;

        // The response owns the connection; it is released when it drops,
        // including when reading the body fails.
        let response = client.execute(request)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        tracing::debug!(url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Configurable stand-in for [`HttpClient`]
///
/// `throw_error` wins over everything else. A `body_file_path` is read on
/// every call and overrides `body`.
#[derive(Default)]
pub struct MockHttpClient {
    pub throw_error: bool,
    pub status_code: Option<u16>,
    pub body: Option<Vec<u8>>,
    pub body_file_path: Option<PathBuf>,
    /// Called with the requested URL before the response is built
    pub validate: Option<Box<dyn Fn(&str)>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            throw_error: true,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_body_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.body_file_path = Some(path.into());
        self
    }

    pub fn with_validation(mut self, validate: impl Fn(&str) + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    fn load_body_file(path: &Path) -> Result<Vec<u8>, HttpError> {
        std::fs::read(path).map_err(|e| HttpError::body_file(path, e))
    }
}

impl HttpGetter for MockHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        if self.throw_error {
            tracing::trace!(url, "mock GET forced to fail");
            return Err(HttpError::Simulated);
        }

        if let Some(validate) = &self.validate {
            validate(url);
        }

        let status = match self.status_code {
            Some(code) if code > 0 => code,
            _ => 200,
        };

        let body = match &self.body_file_path {
            Some(path) => Self::load_body_file(path)?,
            None => self.body.clone().unwrap_or_default(),
        };

        Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body,
        })
    }
}
