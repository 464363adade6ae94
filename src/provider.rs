use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::graph::GraphClients;
use crate::resource::Resource;
use crate::resources::{self, ResourceDescriptor, ResourceError};
use crate::terraform::Diagnostics;

pub const PROVIDER_TYPE_NAME: &str = "microsoft365";

/// Owns the shared Graph clients and hands out configured resources.
pub struct M365Provider {
    version: String,
    clients: Option<Arc<GraphClients>>,
}

impl M365Provider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            clients: None,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_configured(&self) -> bool {
        self.clients.is_some()
    }

    pub fn configure(&mut self, config: &ProviderConfig) -> Diagnostics {
        let mut diags = Diagnostics::new();

        if let Err(e) = config.validate() {
            diags.add_error("Invalid provider configuration", e.to_string());
            return diags;
        }
        let Some(token) = config.access_token.as_deref() else {
            return diags;
        };

        let endpoints = config.cloud.endpoints();
        tracing::debug!(
            cloud = %config.cloud,
            authority_url = endpoints.authority_url,
            api_scope = endpoints.api_scope,
            graph_service_root = endpoints.graph_service_root,
            graph_beta_service_root = endpoints.graph_beta_service_root,
            "resolved cloud endpoints"
        );

        match GraphClients::new(token, config.cloud) {
            Ok(clients) => {
                self.clients = Some(Arc::new(clients));
                tracing::info!(
                    cloud = %config.cloud,
                    version = %self.version,
                    "provider configured"
                );
            }
            Err(e) => {
                diags.add_error("Unable to create Graph clients", e.to_string());
            }
        }
        diags
    }

    /// Uses pre-built clients, e.g. pointed at a mock server.
    pub fn configure_with_clients(&mut self, clients: Arc<GraphClients>) {
        self.clients = Some(clients);
    }

    pub fn resources(&self) -> Vec<ResourceDescriptor> {
        resources::registry()
    }

    /// Resolves a full type name such as
    /// `microsoft365_graph_cloud_pc_provisioning_policy` into a configured resource.
    pub fn resource(&self, full_type_name: &str) -> Result<Box<dyn Resource>, ResourceError> {
        let type_name = strip_provider_prefix(full_type_name)?;
        let clients = self
            .clients
            .clone()
            .ok_or_else(|| ResourceError::Unconfigured(full_type_name.to_string()))?;

        let mut resource = resources::new_resource(type_name)?;
        resource.configure(Some(clients));
        Ok(resource)
    }
}

pub fn strip_provider_prefix(full_type_name: &str) -> Result<&str, ResourceError> {
    full_type_name
        .strip_prefix(PROVIDER_TYPE_NAME)
        .and_then(|rest| rest.strip_prefix('_'))
        .ok_or_else(|| ResourceError::UnknownResourceType(full_type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Cloud;

    #[test]
    fn test_strip_provider_prefix() {
        assert_eq!(
            strip_provider_prefix("microsoft365_graph_cloud_pc_provisioning_policy").unwrap(),
            "graph_cloud_pc_provisioning_policy"
        );
        assert!(strip_provider_prefix("azuread_group").is_err());
        assert!(strip_provider_prefix("microsoft365graph").is_err());
    }

    #[test]
    fn test_resource_requires_configuration() {
        let provider = M365Provider::new("0.1.0");
        let result = provider.resource("microsoft365_graph_cloud_pc_provisioning_policy");
        assert!(matches!(result, Err(ResourceError::Unconfigured(_))));
    }

    #[test]
    fn test_configure_builds_clients() {
        let mut provider = M365Provider::new("0.1.0");
        let diags = provider.configure(&ProviderConfig {
            cloud: Cloud::China,
            access_token: Some("token".to_string()),
            ..Default::default()
        });
        assert!(diags.is_empty());
        assert!(provider.is_configured());
        assert_eq!(provider.version(), "0.1.0");
        assert!(
            provider
                .resource("microsoft365_graph_beta_identity_and_access_conditional_access_policy")
                .is_ok()
        );
    }

    #[test]
    fn test_configure_reports_invalid_config() {
        let mut provider = M365Provider::new("0.1.0");
        let diags = provider.configure(&ProviderConfig {
            tenant_id: Some("not-a-guid".to_string()),
            access_token: Some("token".to_string()),
            ..Default::default()
        });
        assert!(diags.has_error());
        assert!(!provider.is_configured());
    }

    #[test]
    fn test_unknown_resource() {
        let mut provider = M365Provider::new("0.1.0");
        provider.configure_with_clients(Arc::new(
            GraphClients::with_base_urls("t", "http://localhost/v1.0", "http://localhost/beta")
                .unwrap(),
        ));
        assert!(matches!(
            provider.resource("microsoft365_graph_beta_user"),
            Err(ResourceError::UnknownResourceType(_))
        ));
    }
}
