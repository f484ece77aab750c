//! Plugin operations

use std::collections::BTreeMap;

use reqwest::Method;
use tracing::{error, instrument};

use crate::client::status::OperationClass;
use crate::client::{require, segment, KongClient};
use crate::domain::PluginList;
use crate::errors::{KongError, Result};

impl KongClient {
    /// Read the first page of plugins attached to a service
    #[instrument(skip(self))]
    pub async fn read_service_plugins(&self, service: &str) -> Result<PluginList> {
        self.base_url()?;
        require(service, "service")?;

        self.fetch(&format!("/services/{}/plugins", segment(service)), "service", service).await
    }

    /// Check whether a plugin named `plugin` is attached to the service
    #[instrument(skip(self))]
    pub async fn service_has_plugin(&self, service: &str, plugin: &str) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(plugin, "plugin")?;

        let plugins = self.read_service_plugins(service).await?;
        Ok(plugins.data.iter().any(|candidate| candidate.name == plugin))
    }

    /// Attach `plugin` to the service, then check it is listed
    ///
    /// Each `config` entry is sent as `config.<key>=<value>`. Fails with
    /// [`KongError::ResourceNotCreated`] when the plugin cannot be found afterwards.
    #[instrument(skip(self, config), fields(config_keys = config.len()))]
    pub async fn add_service_plugin(
        &self,
        service: &str,
        plugin: &str,
        config: &BTreeMap<String, String>,
    ) -> Result<bool> {
        self.base_url()?;
        require(service, "service")?;
        require(plugin, "plugin")?;

        let form = plugin_form(plugin, config);
        self.mutate(
            OperationClass::Create,
            Method::POST,
            &format!("/services/{}/plugins", segment(service)),
            &form,
            "plugin",
            plugin,
        )
        .await?;

        if !self.service_has_plugin(service, plugin).await? {
            error!(service, plugin, "The plugin is missing after creation");
            return Err(KongError::not_created("plugin", plugin));
        }
        Ok(true)
    }
}

fn plugin_form(plugin: &str, config: &BTreeMap<String, String>) -> Vec<(String, String)> {
    let mut form = vec![("name".to_string(), plugin.to_string())];
    form.extend(config.iter().map(|(key, value)| (format!("config.{}", key), value.clone())));
    form
}
