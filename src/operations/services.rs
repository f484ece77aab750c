//! Service operations

use reqwest::Method;
use tracing::{error, instrument};

use crate::client::status::OperationClass;
use crate::client::{require, segment, KongClient};
use crate::domain::ServiceConfiguration;
use crate::errors::{KongError, Result};

impl KongClient {
    /// Check whether a service named `service` exists
    ///
    /// Existence says nothing about the service's configuration; see
    /// [`KongClient::service_has_upstream`] for that.
    #[instrument(skip(self))]
    pub async fn is_service_set_up(&self, service: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;

        self.check_exists(&format!("/services/{}", segment(service)), "service", service).await
    }

    /// Read the configuration of a service
    #[instrument(skip(self))]
    pub async fn read_service_configuration(&self, service: &str) -> Result<ServiceConfiguration> {
        self.base_url()?;
        require(service, "service")?;

        self.fetch(&format!("/services/{}", segment(service)), "service", service).await
    }

    /// Create a service proxying to `host` (a hostname or an upstream name)
    #[instrument(skip(self))]
    pub async fn create_service(&self, service: &str, host: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(host, "host")?;

        let form = vec![
            ("name".to_string(), service.to_string()),
            ("host".to_string(), host.to_string()),
        ];
        self.mutate(OperationClass::Create, Method::POST, "/services", &form, "service", service)
            .await?;
        Ok(true)
    }

    /// Check whether the service's `host` field equals `upstream`
    #[instrument(skip(self))]
    pub async fn service_has_upstream(&self, service: &str, upstream: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(upstream, "upstream")?;

        let configuration = self.read_service_configuration(service).await?;
        Ok(configuration.host == upstream)
    }

    /// Point the service at a new host, then read it back
    ///
    /// Fails with [`KongError::ResourceNotModified`] when the gateway accepted the
    /// update but the service still reports a different host.
    #[instrument(skip(self))]
    pub async fn update_service_host(&self, service: &str, new_host: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(new_host, "host")?;

        let form = vec![("host".to_string(), new_host.to_string())];
        self.mutate(
            OperationClass::Update,
            Method::PATCH,
            &format!("/services/{}", segment(service)),
            &form,
            "service",
            service,
        )
        .await?;

        if !self.service_has_upstream(service, new_host).await? {
            error!(service, new_host, "The service host update was not applied");
            return Err(KongError::not_modified("service", service));
        }
        Ok(true)
    }
}
