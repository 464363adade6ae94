use serde::{Deserialize, Serialize};

use crate::terraform::{BoolValue, Int64Value, ListValue, StringValue, Timeouts, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudPcProvisioningPolicyModel {
    pub id: StringValue,
    pub alternate_resource_url: StringValue,
    pub cloud_pc_group_display_name: StringValue,
    pub cloud_pc_naming_template: StringValue,
    pub description: StringValue,
    pub display_name: StringValue,
    /// Ordered by priority.
    pub domain_join_configurations: ListValue<DomainJoinConfigurationModel>,
    pub enable_single_sign_on: BoolValue,
    pub grace_period_in_hours: Int64Value,
    pub image_display_name: StringValue,
    pub image_id: StringValue,
    pub image_type: StringValue,
    pub local_admin_enabled: BoolValue,
    pub microsoft_managed_desktop: Value<MicrosoftManagedDesktopModel>,
    pub provisioning_type: StringValue,
    pub windows_setting: Value<WindowsSettingModel>,
    pub timeouts: Value<Timeouts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainJoinConfigurationModel {
    pub domain_join_type: StringValue,
    pub on_premises_connection_id: StringValue,
    pub region_name: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrosoftManagedDesktopModel {
    pub managed_type: StringValue,
    pub profile: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsSettingModel {
    pub locale: StringValue,
}
