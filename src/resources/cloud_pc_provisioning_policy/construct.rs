use super::model::{
    CloudPcProvisioningPolicyModel, DomainJoinConfigurationModel, MicrosoftManagedDesktopModel,
    WindowsSettingModel,
};
use super::types::{
    CloudPcDomainJoinConfiguration, CloudPcProvisioningPolicy, CloudPcWindowsSetting,
    MicrosoftManagedDesktop, ODATA_TYPE,
};
use crate::mapping::{
    ConstructError, optional, optional_enum, optional_list, optional_object, required,
    required_enum,
};

pub(super) fn construct_resource(
    data: &CloudPcProvisioningPolicyModel,
) -> Result<CloudPcProvisioningPolicy, ConstructError> {
    Ok(CloudPcProvisioningPolicy {
        odata_type: Some(ODATA_TYPE.to_string()),
        cloud_pc_naming_template: Some(required(
            "cloud_pc_naming_template",
            &data.cloud_pc_naming_template,
        )?),
        description: optional(&data.description),
        display_name: Some(required("display_name", &data.display_name)?),
        domain_join_configurations: optional_list(
            &data.domain_join_configurations,
            construct_domain_join_configuration,
        )?,
        enable_single_sign_on: optional(&data.enable_single_sign_on),
        image_id: Some(required("image_id", &data.image_id)?),
        image_type: Some(required_enum("image_type", &data.image_type)?),
        local_admin_enabled: optional(&data.local_admin_enabled),
        microsoft_managed_desktop: optional_object(
            &data.microsoft_managed_desktop,
            construct_microsoft_managed_desktop,
        )?,
        provisioning_type: Some(required_enum("provisioning_type", &data.provisioning_type)?),
        windows_setting: optional_object(&data.windows_setting, |setting: &WindowsSettingModel| {
            Ok(CloudPcWindowsSetting {
                locale: optional(&setting.locale),
            })
        })?,
        ..Default::default()
    })
}

fn construct_domain_join_configuration(
    data: &DomainJoinConfigurationModel,
) -> Result<CloudPcDomainJoinConfiguration, ConstructError> {
    Ok(CloudPcDomainJoinConfiguration {
        domain_join_type: Some(required_enum(
            "domain_join_configurations.domain_join_type",
            &data.domain_join_type,
        )?),
        on_premises_connection_id: optional(&data.on_premises_connection_id),
        region_name: optional(&data.region_name),
    })
}

fn construct_microsoft_managed_desktop(
    data: &MicrosoftManagedDesktopModel,
) -> Result<MicrosoftManagedDesktop, ConstructError> {
    Ok(MicrosoftManagedDesktop {
        managed_type: optional_enum("microsoft_managed_desktop.managed_type", &data.managed_type)?,
        profile: optional(&data.profile),
    })
}
