pub mod assignment_filter;
pub mod cloud_pc_provisioning_policy;
pub mod conditional_access_policy;

use thiserror::Error;

use crate::graph::ApiVersion;
use crate::resource::{GraphResource, Lifecycle, Resource};

#[derive(Debug, Error, PartialEq)]
pub enum ResourceError {
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
    #[error("provider is not configured: {0}")]
    Unconfigured(String),
    #[error("invalid {what} for {resource_type}: {message}")]
    InvalidDocument {
        what: &'static str,
        resource_type: String,
        message: String,
    },
}

/// One registered resource type.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// Type name without the provider prefix.
    pub type_name: &'static str,
    pub api_version: ApiVersion,
    pub collection_path: &'static str,
    factory: fn() -> Box<dyn Resource>,
}

impl ResourceDescriptor {
    fn of<R: GraphResource>() -> Self {
        Self {
            type_name: R::TYPE_NAME,
            api_version: R::API_VERSION,
            collection_path: R::COLLECTION_PATH,
            factory: unconfigured::<R>,
        }
    }

    /// A fresh, unconfigured instance.
    pub fn instantiate(&self) -> Box<dyn Resource> {
        (self.factory)()
    }
}

fn unconfigured<R: GraphResource>() -> Box<dyn Resource> {
    Box::new(Lifecycle::<R>::new())
}

pub fn registry() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::of::<assignment_filter::AssignmentFilter>(),
        ResourceDescriptor::of::<cloud_pc_provisioning_policy::CloudPcProvisioningPolicyResource>(),
        ResourceDescriptor::of::<conditional_access_policy::ConditionalAccessPolicyResource>(),
    ]
}

/// Looks up a resource by its type name without the provider prefix.
pub fn new_resource(type_name: &str) -> Result<Box<dyn Resource>, ResourceError> {
    registry()
        .into_iter()
        .find(|descriptor| descriptor.type_name == type_name)
        .map(|descriptor| descriptor.instantiate())
        .ok_or_else(|| ResourceError::UnknownResourceType(type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource_known() {
        let resource = new_resource("graph_cloud_pc_provisioning_policy").unwrap();
        assert_eq!(
            resource.type_name("microsoft365"),
            "microsoft365_graph_cloud_pc_provisioning_policy"
        );
    }

    #[test]
    fn test_new_resource_unknown() {
        let result = new_resource("graph_beta_user");
        match result {
            Err(ResourceError::UnknownResourceType(name)) => assert_eq!(name, "graph_beta_user"),
            _ => panic!("expected UnknownResourceType error"),
        }
    }

    #[test]
    fn test_registry_entries() {
        let registry = registry();
        assert_eq!(registry.len(), 3);

        let filter = registry
            .iter()
            .find(|d| d.type_name == "graph_beta_device_and_app_management_assignment_filter")
            .unwrap();
        assert_eq!(filter.api_version, ApiVersion::Beta);
        assert_eq!(filter.collection_path, "deviceManagement/assignmentFilters");

        let policy = registry
            .iter()
            .find(|d| d.type_name == "graph_beta_identity_and_access_conditional_access_policy")
            .unwrap();
        assert_eq!(policy.collection_path, "identity/conditionalAccess/policies");
    }

    #[test]
    fn test_every_schema_has_id_and_timeouts() {
        for descriptor in registry() {
            let schema = descriptor.instantiate().schema();
            assert!(schema.attribute("id").is_some(), "{} lacks id", descriptor.type_name);
            assert!(
                schema.attribute("timeouts").is_some(),
                "{} lacks timeouts",
                descriptor.type_name,
            );
        }
    }

    #[tokio::test]
    async fn test_unconfigured_resource_reports_error() {
        let resource =
            new_resource("graph_beta_device_and_app_management_assignment_filter").unwrap();
        let plan = serde_json::json!({
            "display_name": "x",
            "platform": "iOS",
            "rule": "(device.osVersion -startsWith \"17\")"
        });
        let response = resource.create(&plan).await;
        assert!(response.state.is_none());
        assert!(response.diagnostics.has_error());
        assert_eq!(
            response.diagnostics.errors().next().unwrap().summary,
            "Client is not initialized"
        );
    }

    #[test]
    fn test_import_passthrough() {
        let resource =
            new_resource("graph_beta_identity_and_access_conditional_access_policy").unwrap();
        let response = resource.import_state("0d5f4c0e-4c5a-4d2f-9f7e-1d2c3b4a5f6e");
        let state = response.state.unwrap();
        assert_eq!(state["id"], "0d5f4c0e-4c5a-4d2f-9f7e-1d2c3b4a5f6e");
        assert!(state["display_name"].is_null());
        assert!(response.diagnostics.is_empty());
    }
}
