//! `graph_cloud_pc_provisioning_policy`: Windows 365 provisioning policies on v1.0.

mod construct;
mod model;
mod state;
mod types;

pub use model::{
    CloudPcProvisioningPolicyModel, DomainJoinConfigurationModel, MicrosoftManagedDesktopModel,
    WindowsSettingModel,
};
pub use types::{
    CloudPcDomainJoinConfiguration, CloudPcDomainJoinType, CloudPcProvisioningPolicy,
    CloudPcProvisioningPolicyImageType, CloudPcProvisioningType, CloudPcWindowsSetting,
    MicrosoftManagedDesktop, MicrosoftManagedDesktopType,
};

use crate::graph::{ApiVersion, GraphEnum};
use crate::mapping::ConstructError;
use crate::resource::GraphResource;
use crate::terraform::{Attribute, Mode, Schema, StringValue, Timeouts, Value};

pub struct CloudPcProvisioningPolicyResource;

impl GraphResource for CloudPcProvisioningPolicyResource {
    type Model = CloudPcProvisioningPolicyModel;
    type Remote = CloudPcProvisioningPolicy;

    const TYPE_NAME: &'static str = "graph_cloud_pc_provisioning_policy";
    const API_VERSION: ApiVersion = ApiVersion::V1;
    const COLLECTION_PATH: &'static str = "deviceManagement/virtualEndpoint/provisioningPolicies";
    const DISPLAY_NAME: &'static str = "Cloud PC provisioning policy";

    fn schema() -> Schema {
        Schema {
            description: "Manages Windows 365 Cloud PC provisioning policies.",
            attributes: vec![
                Attribute::string(
                    "id",
                    Mode::Computed,
                    "The unique identifier of the provisioning policy.",
                ),
                Attribute::string(
                    "alternate_resource_url",
                    Mode::Computed,
                    "The URL of the alternate resource that links to this provisioning policy. \
                     Read-only.",
                ),
                Attribute::string(
                    "cloud_pc_group_display_name",
                    Mode::Computed,
                    "The display name of the Cloud PC group that the Cloud PCs reside in. \
                     Read-only.",
                ),
                Attribute::string(
                    "cloud_pc_naming_template",
                    Mode::Required,
                    "The template used to name Cloud PCs provisioned using this policy, \
                     e.g. CPC-%USERNAME:4%-%RAND:5%. \
                     The generated name can't exceed 15 characters.",
                ),
                Attribute::string(
                    "description",
                    Mode::Optional,
                    "The provisioning policy description.",
                ),
                Attribute::string(
                    "display_name",
                    Mode::Required,
                    "The display name for the provisioning policy.",
                ),
                Attribute::list_nested(
                    "domain_join_configurations",
                    Mode::Optional,
                    "A list ordered by priority on how Cloud PCs join Microsoft Entra ID.",
                    vec![
                        Attribute::string(
                            "domain_join_type",
                            Mode::Required,
                            "The method by which the provisioned Cloud PC joins \
                             Microsoft Entra ID.",
                        )
                        .one_of(CloudPcDomainJoinType::VALUES),
                        Attribute::string(
                            "on_premises_connection_id",
                            Mode::Optional,
                            "The Azure network connection ID the provisioning policy uses \
                             when creating Cloud PCs.",
                        ),
                        Attribute::string(
                            "region_name",
                            Mode::Optional,
                            "The supported Azure region where Cloud PCs are created.",
                        ),
                    ],
                ),
                Attribute::bool(
                    "enable_single_sign_on",
                    Mode::Optional,
                    "True if the provisioned Cloud PC can be accessed by single sign-on.",
                ),
                Attribute::int64(
                    "grace_period_in_hours",
                    Mode::Computed,
                    "The number of hours to wait before reprovisioning/deprovisioning happens. \
                     Read-only.",
                ),
                Attribute::string(
                    "image_display_name",
                    Mode::Computed,
                    "The display name of the operating system image that is used for provisioning.",
                ),
                Attribute::string(
                    "image_id",
                    Mode::Required,
                    "The operating system image used for provisioning. \
                     Gallery images use {publisherName_offerName_skuName}.",
                ),
                Attribute::string(
                    "image_type",
                    Mode::Required,
                    "The type of operating system image used for provisioning.",
                )
                .one_of(CloudPcProvisioningPolicyImageType::VALUES),
                Attribute::bool(
                    "local_admin_enabled",
                    Mode::Optional,
                    "When true, the local admin is enabled for Cloud PCs.",
                ),
                Attribute::single_nested(
                    "microsoft_managed_desktop",
                    Mode::Optional,
                    "Microsoft Managed Desktop settings for Cloud PCs provisioned by this policy.",
                    vec![
                        Attribute::string(
                            "managed_type",
                            Mode::Optional,
                            "The Microsoft Managed Desktop management type.",
                        )
                        .one_of(MicrosoftManagedDesktopType::VALUES),
                        Attribute::string(
                            "profile",
                            Mode::Optional,
                            "The Microsoft Managed Desktop profile the Cloud PC \
                             is associated with.",
                        ),
                    ],
                ),
                Attribute::string(
                    "provisioning_type",
                    Mode::Required,
                    "The type of license used when provisioning Cloud PCs using this policy.",
                )
                .one_of(CloudPcProvisioningType::VALUES),
                Attribute::single_nested(
                    "windows_setting",
                    Mode::Optional,
                    "Windows settings applied while creating Cloud PCs for this policy.",
                    vec![Attribute::string(
                        "locale",
                        Mode::Optional,
                        "The Windows language or region tag, e.g. en-US.",
                    )],
                ),
                Attribute::timeouts(),
            ],
        }
    }

    fn construct(model: &Self::Model) -> Result<Self::Remote, ConstructError> {
        construct::construct_resource(model)
    }

    fn flatten(model: &mut Self::Model, remote: &Self::Remote) {
        state::map_remote_state(model, remote)
    }

    fn id(model: &Self::Model) -> &StringValue {
        &model.id
    }

    fn set_id(model: &mut Self::Model, id: String) {
        model.id = Value::Known(id);
    }

    fn remote_id(remote: &Self::Remote) -> Option<&str> {
        remote.id.as_deref()
    }

    fn timeouts(model: &Self::Model) -> &Value<Timeouts> {
        &model.timeouts
    }
}
