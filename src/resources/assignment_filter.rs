//! `graph_beta_device_and_app_management_assignment_filter`: Intune assignment
//! filters on the beta endpoint.

mod construct;
mod model;
mod state;
mod types;

pub use model::{AssignmentFilterModel, PayloadModel};
pub use types::{
    AssignmentFilterManagementType, AssociatedAssignmentPayloadType,
    DeviceAndAppManagementAssignmentFilter, DeviceAndAppManagementAssignmentFilterType,
    DevicePlatformType, PayloadByFilter,
};

use crate::graph::{ApiVersion, GraphEnum};
use crate::mapping::ConstructError;
use crate::resource::GraphResource;
use crate::terraform::{Attribute, Mode, Schema, StringValue, Timeouts, Value};

pub struct AssignmentFilter;

impl GraphResource for AssignmentFilter {
    type Model = AssignmentFilterModel;
    type Remote = DeviceAndAppManagementAssignmentFilter;

    const TYPE_NAME: &'static str = "graph_beta_device_and_app_management_assignment_filter";
    const API_VERSION: ApiVersion = ApiVersion::Beta;
    const COLLECTION_PATH: &'static str = "deviceManagement/assignmentFilters";
    const DISPLAY_NAME: &'static str = "assignment filter";

    fn schema() -> Schema {
        Schema {
            description:
                "Manages Intune assignment filters used to narrow app and policy assignments.",
            attributes: vec![
                Attribute::string(
                    "id",
                    Mode::Computed,
                    "The unique identifier of the assignment filter.",
                ),
                Attribute::string(
                    "display_name",
                    Mode::Required,
                    "The display name of the assignment filter.",
                ),
                Attribute::string(
                    "description",
                    Mode::Optional,
                    "The optional description of the assignment filter.",
                ),
                Attribute::string(
                    "platform",
                    Mode::Required,
                    "The Intune device management type (platform) for the assignment filter.",
                )
                .one_of(DevicePlatformType::VALUES),
                Attribute::string(
                    "rule",
                    Mode::Required,
                    "Rule definition of the assignment filter.",
                ),
                Attribute::string(
                    "assignment_filter_management_type",
                    Mode::Optional,
                    "Indicates filter is applied to either 'devices' or 'apps' management type.",
                )
                .one_of(AssignmentFilterManagementType::VALUES),
                Attribute::string(
                    "created_date_time",
                    Mode::Computed,
                    "The creation time of the assignment filter.",
                ),
                Attribute::string(
                    "last_modified_date_time",
                    Mode::Computed,
                    "Last modified time of the assignment filter.",
                ),
                Attribute::string_list(
                    "role_scope_tags",
                    Mode::Optional,
                    "Indicates role scope tags assigned for the assignment filter.",
                ),
                Attribute::list_nested(
                    "payloads",
                    Mode::Optional,
                    "Indicates associated assignments for a specific filter.",
                    vec![
                        Attribute::string("payload_id", Mode::Optional, "The policy identifier."),
                        Attribute::string(
                            "payload_type",
                            Mode::Optional,
                            "The type of the payload.",
                        )
                        .one_of(AssociatedAssignmentPayloadType::VALUES),
                        Attribute::string(
                            "group_id",
                            Mode::Optional,
                            "The Azure AD security group ID.",
                        ),
                        Attribute::string(
                            "assignment_filter_type",
                            Mode::Optional,
                            "The type of filter.",
                        )
                        .one_of(DeviceAndAppManagementAssignmentFilterType::VALUES),
                    ],
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
