//! HTTP client for the Kong admin API
//!
//! [`KongClient`] owns the connection state (base URL) and the shared transport. The
//! resource operations in [`crate::operations`] are implemented on top of the request
//! helpers defined here, so that every call goes through the same validate, send,
//! classify and decode steps.

pub mod status;

use std::borrow::Cow;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, trace, warn};

use crate::config::{ClientConfig, ConnectionSettings};
use crate::errors::{KongError, Result};
use status::{OperationClass, Rejection, StatusOutcome};

/// Client for one gateway's admin API
///
/// Cloning is cheap: clones share the underlying connection pool but carry their own
/// base URL, so reconfiguring one clone does not affect the others.
#[derive(Debug, Clone)]
pub struct KongClient {
    http: Client,
    config: ClientConfig,
    base_url: Option<String>,
}

/// Status and raw body of an admin API answer
#[derive(Debug)]
pub(crate) struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl KongClient {
    /// Create a client that is not yet connected to any gateway
    ///
    /// Every operation fails with [`KongError::ConnectionNotConfigured`] until
    /// [`KongClient::configure`] succeeds.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| KongError::transport("Failed to build HTTP client", e))?;

        Ok(Self { http, config, base_url: None })
    }

    /// Create a client and point it at `host:port`
    pub fn connect(host: &str, port: u32, use_tls: bool) -> Result<Self> {
        let mut client = Self::new(ClientConfig::default())?;
        client.configure(host, port, use_tls)?;
        Ok(client)
    }

    /// Create a client from connection settings and transport configuration
    pub fn from_settings(settings: &ConnectionSettings, config: ClientConfig) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.base_url = Some(settings.base_url()?);
        Ok(client)
    }

    /// Point the client at the admin API on `host:port`
    ///
    /// The port must lie in `1..=65535`. On failure the previous base URL is kept.
    pub fn configure(&mut self, host: &str, port: u32, use_tls: bool) -> Result<()> {
        let base_url = ConnectionSettings::new(host, port, use_tls).base_url()?;
        debug!(base_url = %base_url, "Configured gateway connection");
        self.base_url = Some(base_url);
        Ok(())
    }

    /// Whether a base URL has been configured
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// The configured base URL
    pub fn base_url(&self) -> Result<&str> {
        self.base_url.as_deref().ok_or(KongError::ConnectionNotConfigured)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url()?, path);
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    async fn send(&self, builder: RequestBuilder, description: &str) -> Result<GatewayResponse> {
        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "Unable to reach the gateway");
            KongError::transport(format!("Failed to send {} request", description), e)
        })?;

        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| KongError::transport(format!("Failed to read {} response", description), e))?;

        if self.config.verbose {
            trace!("Response body:\n{}", body);
        }

        Ok(GatewayResponse { status, body })
    }

    /// Send a GET request
    pub(crate) async fn get(&self, path: &str) -> Result<GatewayResponse> {
        let builder = self.request(Method::GET, path)?;
        self.send(builder, &format!("GET {}", path)).await
    }

    /// Send a form-encoded request (POST or PATCH)
    pub(crate) async fn send_form(
        &self,
        method: Method,
        path: &str,
        form: &[(String, String)],
    ) -> Result<GatewayResponse> {
        if self.config.verbose {
            trace!("Request form: {:?}", form);
        }

        let description = format!("{} {}", method, path);
        let builder = self.request(method, path)?.form(form);
        self.send(builder, &description).await
    }

    /// Send a DELETE request with an empty body
    pub(crate) async fn delete(&self, path: &str) -> Result<GatewayResponse> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(builder, &format!("DELETE {}", path)).await
    }

    /// GET a single resource and report whether it exists
    pub(crate) async fn check_exists(&self, path: &str, resource: &str, name: &str) -> Result<bool> {
        let response = self.get(path).await?;

        match OperationClass::Existence.classify(response.status) {
            StatusOutcome::Success => {
                debug!(resource, name, "The gateway responded with 200 OK, the resource is configured");
                Ok(true)
            }
            StatusOutcome::Missing => {
                warn!(resource, name, "The resource is not configured on the gateway");
                Ok(false)
            }
            StatusOutcome::Failure(rejection) => {
                error!(resource, name, http_code = response.status, "The gateway responded with an unexpected status code");
                Err(rejection.into_error(resource, name, &format!("GET {}", path), response.status, &response.body))
            }
        }
    }

    /// GET a resource or collection and decode its body
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
        name: &str,
    ) -> Result<T> {
        let response = self.get(path).await?;

        match OperationClass::Read.classify(response.status) {
            StatusOutcome::Success => serde_json::from_str(&response.body).map_err(|e| {
                error!(resource, name, error = %e, "Unable to parse the gateway's response");
                KongError::decode(format!("Failed to decode {} '{}'", resource, name), e)
            }),
            StatusOutcome::Failure(Rejection::NotFound) | StatusOutcome::Missing => {
                warn!(resource, name, "The resource is not configured on the gateway");
                Err(KongError::not_found(resource, name))
            }
            StatusOutcome::Failure(rejection) => {
                error!(resource, name, http_code = response.status, "The gateway responded with an unexpected status code");
                Err(rejection.into_error(resource, name, &format!("GET {}", path), response.status, &response.body))
            }
        }
    }

    /// Send a mutation and map its status for the given class
    ///
    /// Returns `Ok(())` when the class accepts the status; verification of the result
    /// is left to the caller.
    pub(crate) async fn mutate(
        &self,
        class: OperationClass,
        method: Method,
        path: &str,
        form: &[(String, String)],
        resource: &str,
        name: &str,
    ) -> Result<()> {
        let operation = format!("{} {}", method, path);
        let response = if method == Method::DELETE {
            self.delete(path).await?
        } else {
            self.send_form(method, path, form).await?
        };

        match class.classify(response.status) {
            StatusOutcome::Success => {
                debug!(resource, name, http_code = response.status, "The gateway accepted the request");
                Ok(())
            }
            StatusOutcome::Missing => Err(KongError::not_found(resource, name)),
            StatusOutcome::Failure(rejection) => {
                error!(resource, name, http_code = response.status, "The gateway rejected the request");
                Err(rejection.into_error(resource, name, &operation, response.status, &response.body))
            }
        }
    }
}

/// Percent-encode one identifier for use as a path segment
pub(crate) fn segment(identifier: &str) -> Cow<'_, str> {
    urlencoding::encode(identifier)
}

/// Fail with [`KongError::EmptyParameter`] when `value` is blank
pub(crate) fn require(value: &str, parameter: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KongError::empty_parameter(parameter));
    }
    Ok(())
}
