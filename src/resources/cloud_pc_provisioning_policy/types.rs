use serde::{Deserialize, Serialize};

use crate::graph::enums::graph_enum;

pub const ODATA_TYPE: &str = "#microsoft.graph.cloudPcProvisioningPolicy";

graph_enum! {
    pub enum CloudPcDomainJoinType {
        AzureAdJoin => "azureADJoin",
        HybridAzureAdJoin => "hybridAzureADJoin",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcProvisioningPolicyImageType {
        Gallery => "gallery",
        Custom => "custom",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudPcProvisioningType {
        Dedicated => "dedicated",
        Shared => "shared",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum MicrosoftManagedDesktopType {
        NotManaged => "notManaged",
        PremiumManaged => "premiumManaged",
        StandardManaged => "standardManaged",
        StarterManaged => "starterManaged",
        UnknownFutureValue => "unknownFutureValue",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPcProvisioningPolicy {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_resource_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_pc_group_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_pc_naming_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_join_configurations: Option<Vec<CloudPcDomainJoinConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_single_sign_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_in_hours: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<CloudPcProvisioningPolicyImageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_admin_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microsoft_managed_desktop: Option<MicrosoftManagedDesktop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_type: Option<CloudPcProvisioningType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_setting: Option<CloudPcWindowsSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPcDomainJoinConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_join_type: Option<CloudPcDomainJoinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_premises_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftManagedDesktop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_type: Option<MicrosoftManagedDesktopType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPcWindowsSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
