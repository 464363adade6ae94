use super::model::{
    CloudPcProvisioningPolicyModel, DomainJoinConfigurationModel, MicrosoftManagedDesktopModel,
    WindowsSettingModel,
};
use super::types::CloudPcProvisioningPolicy;
use crate::mapping::{flatten_enum, flatten_list, flatten_object, flatten_string};

pub(super) fn map_remote_state(
    data: &mut CloudPcProvisioningPolicyModel,
    remote: &CloudPcProvisioningPolicy,
) {
    data.alternate_resource_url = flatten_string(&remote.alternate_resource_url);
    data.cloud_pc_group_display_name = flatten_string(&remote.cloud_pc_group_display_name);
    data.cloud_pc_naming_template = flatten_string(&remote.cloud_pc_naming_template);
    data.description = flatten_string(&remote.description);
    data.display_name = flatten_string(&remote.display_name);
    data.domain_join_configurations =
        flatten_list(&remote.domain_join_configurations, |config| DomainJoinConfigurationModel {
            domain_join_type: flatten_enum(&config.domain_join_type),
            on_premises_connection_id: flatten_string(&config.on_premises_connection_id),
            region_name: flatten_string(&config.region_name),
        });
    data.enable_single_sign_on = remote.enable_single_sign_on.into();
    data.grace_period_in_hours = remote.grace_period_in_hours.map(i64::from).into();
    data.image_display_name = flatten_string(&remote.image_display_name);
    data.image_id = flatten_string(&remote.image_id);
    data.image_type = flatten_enum(&remote.image_type);
    data.local_admin_enabled = remote.local_admin_enabled.into();
    data.microsoft_managed_desktop =
        flatten_object(&remote.microsoft_managed_desktop, |desktop| MicrosoftManagedDesktopModel {
            managed_type: flatten_enum(&desktop.managed_type),
            profile: flatten_string(&desktop.profile),
        });
    data.provisioning_type = flatten_enum(&remote.provisioning_type);
    data.windows_setting = flatten_object(&remote.windows_setting, |setting| WindowsSettingModel {
        locale: flatten_string(&setting.locale),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::cloud_pc_provisioning_policy::types::{
        CloudPcDomainJoinConfiguration, CloudPcDomainJoinType,
    };
    use crate::terraform::{Timeouts, Value};

    #[test]
    fn test_computed_fields_populated() {
        let mut data = CloudPcProvisioningPolicyModel::default();
        let remote = CloudPcProvisioningPolicy {
            alternate_resource_url: Some("https://intune.microsoft.com/alt".to_string()),
            cloud_pc_group_display_name: Some("Finance".to_string()),
            grace_period_in_hours: Some(4),
            image_display_name: Some("Windows 11 Enterprise".to_string()),
            ..Default::default()
        };

        map_remote_state(&mut data, &remote);

        assert_eq!(data.alternate_resource_url, "https://intune.microsoft.com/alt".into());
        assert_eq!(data.cloud_pc_group_display_name, "Finance".into());
        assert_eq!(data.grace_period_in_hours, Value::Known(4));
        assert_eq!(data.image_display_name, "Windows 11 Enterprise".into());
    }

    #[test]
    fn test_absent_fields_become_null_and_timeouts_survive() {
        let timeouts = Value::Known(Timeouts {
            create: "10m".into(),
            ..Default::default()
        });
        let mut data = CloudPcProvisioningPolicyModel {
            id: "policy-1".into(),
            enable_single_sign_on: Value::Known(true),
            grace_period_in_hours: Value::Known(2),
            windows_setting: Value::Known(WindowsSettingModel {
                locale: "en-US".into(),
            }),
            timeouts: timeouts.clone(),
            ..Default::default()
        };

        map_remote_state(&mut data, &CloudPcProvisioningPolicy::default());

        assert_eq!(data.id, "policy-1".into());
        assert_eq!(data.timeouts, timeouts);
        assert!(data.enable_single_sign_on.is_null());
        assert!(data.grace_period_in_hours.is_null());
        assert!(data.windows_setting.is_null());
    }

    #[test]
    fn test_domain_join_order_preserved() {
        let mut data = CloudPcProvisioningPolicyModel::default();
        let remote = CloudPcProvisioningPolicy {
            domain_join_configurations: Some(vec![
                CloudPcDomainJoinConfiguration {
                    domain_join_type: Some(CloudPcDomainJoinType::HybridAzureAdJoin),
                    on_premises_connection_id: Some("conn-1".to_string()),
                    region_name: None,
                },
                CloudPcDomainJoinConfiguration {
                    domain_join_type: Some(CloudPcDomainJoinType::AzureAdJoin),
                    on_premises_connection_id: None,
                    region_name: Some("westeurope".to_string()),
                },
            ]),
            ..Default::default()
        };

        map_remote_state(&mut data, &remote);

        let joins = data.domain_join_configurations.as_known().unwrap();
        assert_eq!(joins[0].domain_join_type, "hybridAzureADJoin".into());
        assert!(joins[0].region_name.is_null());
        assert_eq!(joins[1].domain_join_type, "azureADJoin".into());
        assert_eq!(joins[1].region_name, "westeurope".into());
    }
}
