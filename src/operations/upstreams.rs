//! Upstream operations

use reqwest::Method;
use tracing::instrument;

use crate::client::status::OperationClass;
use crate::client::{require, segment, KongClient};
use crate::domain::UpstreamConfiguration;
use crate::errors::Result;

/// Health-check defaults sent with every new upstream
const UPSTREAM_HEALTHCHECK_DEFAULTS: &[(&str, &str)] = &[
    ("healthchecks.active.http_path", "/ping"),
    ("healthchecks.active.timeout", "2"),
    ("healthchecks.active.healthy.http_statuses", "204"),
    ("healthchecks.active.concurrency", "2"),
    ("healthchecks.active.healthy.interval", "1"),
    ("healthchecks.active.unhealthy.interval", "1"),
];

impl KongClient {
    /// Check whether an upstream named `upstream` is configured
    ///
    /// A 404 from the gateway yields `Ok(false)`, not an error.
    #[instrument(skip(self))]
    pub async fn is_upstream_set_up(&self, upstream: &str) -> Result<bool> {
        self.base_url()?;
        require(upstream, "upstream")?;

        self.check_exists(&format!("/upstreams/{}", segment(upstream)), "upstream", upstream).await
    }

    /// Read the configuration of an upstream
    #[instrument(skip(self))]
    pub async fn read_upstream_configuration(&self, upstream: &str) -> Result<UpstreamConfiguration> {
        self.base_url()?;
        require(upstream, "upstream")?;

        self.fetch(&format!("/upstreams/{}", segment(upstream)), "upstream", upstream).await
    }

    /// Create an upstream with the default active health checks
    ///
    /// Returns `Ok(true)` once the gateway answered 201. A 409 maps to
    /// [`KongError::ResourceExists`](crate::KongError::ResourceExists).
    #[instrument(skip(self))]
    pub async fn create_upstream(&self, upstream: &str) -> Result<bool> {
        self.base_url()?;
        require(upstream, "upstream")?;

        let mut form = vec![("name".to_string(), upstream.to_string())];
        form.extend(
            UPSTREAM_HEALTHCHECK_DEFAULTS
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );

        self.mutate(OperationClass::Create, Method::POST, "/upstreams", &form, "upstream", upstream)
            .await?;
        Ok(true)
    }
}
