//! Upstream target operations

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::status::OperationClass;
use crate::client::{require, segment, KongClient};
use crate::domain::TargetList;
use crate::errors::{KongError, Result};

lazy_static! {
    /// Dotted IPv4 quad anywhere in the address (so `10.0.0.5:8000` matches)
    /// NOTE: expect() acceptable - pattern is validated by tests
    static ref IPV4_REGEX: Regex = Regex::new(r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}")
        .expect("IPV4_REGEX should be a valid regex pattern");
}

impl KongClient {
    /// Read the first page of an upstream's targets
    #[instrument(skip(self))]
    pub async fn read_upstream_targets(&self, upstream: &str) -> Result<TargetList> {
        self.base_url()?;
        require(upstream, "upstream")?;

        self.fetch(&format!("/upstreams/{}/targets", segment(upstream)), "upstream", upstream).await
    }

    /// Check whether `address` is one of the upstream's targets
    ///
    /// Only the first page of targets is inspected.
    #[instrument(skip(self))]
    pub async fn is_address_in_upstream_target_list(
        &self,
        address: &str,
        upstream: &str,
    ) -> Result<bool> {
        self.base_url()?;
        require(address, "address")?;
        require(upstream, "upstream")?;

        let targets = self.read_upstream_targets(upstream).await?;
        let found = targets.data.iter().any(|target| target.address == address);
        if !found && targets.has_more() {
            debug!(upstream, "Target not found on the first page; further pages are not read");
        }
        Ok(found)
    }

    /// Like [`KongClient::is_address_in_upstream_target_list`], but first checks that
    /// `address` contains a dotted IPv4 quad
    #[instrument(skip(self))]
    pub async fn is_ipv4_address_in_upstream_target_list(
        &self,
        address: &str,
        upstream: &str,
    ) -> Result<bool> {
        self.base_url()?;
        require(address, "address")?;
        if !IPV4_REGEX.is_match(address) {
            return Err(KongError::InvalidAddress { address: address.to_string() });
        }

        self.is_address_in_upstream_target_list(address, upstream).await
    }

    /// Register `address` as a target of the upstream
    #[instrument(skip(self))]
    pub async fn create_upstream_target(&self, upstream: &str, address: &str) -> Result<bool> {
        self.base_url()?;
        require(upstream, "upstream")?;
        require(address, "address")?;

        let form = vec![("target".to_string(), address.to_string())];
        self.mutate(
            OperationClass::Create,
            Method::POST,
            &format!("/upstreams/{}/targets", segment(upstream)),
            &form,
            "target",
            address,
        )
        .await?;
        Ok(true)
    }

    /// Remove `address` from the upstream's targets
    ///
    /// Only a 204 counts as success; any other status, 200 included, is
    /// [`KongError::UnexpectedHttpCode`].
    #[instrument(skip(self))]
    pub async fn delete_upstream_target(&self, upstream: &str, address: &str) -> Result<bool> {
        self.base_url()?;
        require(upstream, "upstream")?;
        require(address, "address")?;

        self.mutate(
            OperationClass::Delete,
            Method::DELETE,
            &format!("/upstreams/{}/targets/{}", segment(upstream), segment(address)),
            &[],
            "target",
            address,
        )
        .await?;
        Ok(true)
    }
}
