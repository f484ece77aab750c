//! Route operations

use reqwest::Method;
use tracing::{error, instrument};

use crate::client::status::OperationClass;
use crate::client::{require, segment, KongClient};
use crate::domain::RouteConfigurationList;
use crate::errors::{KongError, Result};

impl KongClient {
    /// Read the first page of routes attached to a service
    #[instrument(skip(self))]
    pub async fn read_route_configuration_list(
        &self,
        service: &str,
    ) -> Result<RouteConfigurationList> {
        self.base_url()?;
        require(service, "service")?;

        self.fetch(&format!("/services/{}/routes", segment(service)), "service", service).await
    }

    /// Check whether the service has at least one route
    #[instrument(skip(self))]
    pub async fn service_has_route_set_up(&self, service: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;

        let routes = self.read_route_configuration_list(service).await?;
        Ok(!routes.data.is_empty())
    }

    /// Check whether one of the service's routes lists exactly `path`
    ///
    /// Paths are compared verbatim, so the leading slash must be included.
    #[instrument(skip(self))]
    pub async fn service_has_route_with_path_set_up(&self, service: &str, path: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(path, "path")?;

        let routes = self.read_route_configuration_list(service).await?;
        Ok(routes.data.iter().any(|route| route.has_path(path)))
    }

    /// Create an HTTP route for `path` on the service, then check it is listed
    ///
    /// The gateway answers 200 or 201. Fails with [`KongError::ResourceNotCreated`]
    /// when the route cannot be found afterwards.
    #[instrument(skip(self))]
    pub async fn create_route(&self, service: &str, path: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(path, "path")?;

        let form = vec![
            ("paths".to_string(), path.to_string()),
            ("protocols".to_string(), "http".to_string()),
            ("request_buffering".to_string(), "false".to_string()),
            ("response_buffering".to_string(), "false".to_string()),
        ];
        self.mutate(
            OperationClass::RouteCreate,
            Method::POST,
            &format!("/services/{}/routes", segment(service)),
            &form,
            "route",
            path,
        )
        .await?;

        if !self.service_has_route_with_path_set_up(service, path).await? {
            error!(service, path, "The route is missing after creation");
            return Err(KongError::not_created("route", path));
        }
        Ok(true)
    }
}
