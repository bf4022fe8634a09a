//! # Service Client
//!
//! The single HTTP entry point for every adapter. Builds URLs from the
//! configured base addresses, attaches the bearer token, applies the timeout,
//! and turns transport failures into [`ToolError`]s.

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::config::ServiceConfig;

/// Backend a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Employees and meetings
    Hr,
    /// Organization directory lookup
    Directory,
}

impl Service {
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Hr => "HR",
            Service::Directory => "Directory",
        }
    }
}

/// HTTP client shared by the adapters. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent("onboarding-tools/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, config })
    }

    /// Client configured from `ONBOARDING_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ServiceConfig::from_env())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Hr => &self.config.hr_base_url,
            Service::Directory => &self.config.directory_base_url,
        }
    }

    pub(crate) fn request(&self, service: Service, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(service), path);
        let builder = self.http.request(method, url);

        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send one request. There are no retries; a failure is final.
    pub(crate) async fn send(
        &self,
        service: Service,
        action: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, ToolError> {
        request
            .send()
            .await
            .map_err(|e| self.classify(service, action, e))
    }

    /// Decode a success body, treating malformed JSON as a transport failure
    pub(crate) async fn decode<T: DeserializeOwned>(
        &self,
        service: Service,
        action: &'static str,
        response: Response,
    ) -> Result<T, ToolError> {
        response
            .json::<T>()
            .await
            .map_err(|e| self.classify(service, action, e))
    }

    fn classify(&self, service: Service, action: &'static str, err: reqwest::Error) -> ToolError {
        if err.is_timeout() {
            ToolError::Timeout {
                service: service.display_name(),
                timeout: self.config.timeout,
            }
        } else if err.is_connect() {
            ToolError::Connect {
                service: service.display_name(),
                location: self.base_url(service).to_string(),
            }
        } else {
            ToolError::Transport {
                action,
                message: error_chain(&err),
            }
        }
    }
}

/// Render an error followed by each of its causes, `outer: cause: root`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Capture status and raw body of an unexpected response
pub(crate) async fn remote_failure(context: &'static str, response: Response) -> ToolError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ToolError::Remote {
        context,
        status,
        body,
    }
}
