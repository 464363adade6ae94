use super::model::{AssignmentFilterModel, PayloadModel};
use super::types::{DeviceAndAppManagementAssignmentFilter, ODATA_TYPE, PayloadByFilter};
use crate::mapping::{
    ConstructError, optional, optional_enum, optional_list, required, required_enum,
};

pub(super) fn construct_resource(
    data: &AssignmentFilterModel,
) -> Result<DeviceAndAppManagementAssignmentFilter, ConstructError> {
    Ok(DeviceAndAppManagementAssignmentFilter {
        odata_type: Some(ODATA_TYPE.to_string()),
        display_name: Some(required("display_name", &data.display_name)?),
        description: optional(&data.description),
        platform: Some(required_enum("platform", &data.platform)?),
        rule: Some(required("rule", &data.rule)?),
        assignment_filter_management_type: optional_enum(
            "assignment_filter_management_type",
            &data.assignment_filter_management_type,
        )?,
        role_scope_tags: optional(&data.role_scope_tags),
        payloads: optional_list(&data.payloads, construct_payload)?,
        ..Default::default()
    })
}

fn construct_payload(data: &PayloadModel) -> Result<PayloadByFilter, ConstructError> {
    Ok(PayloadByFilter {
        payload_id: optional(&data.payload_id),
        payload_type: optional_enum("payloads.payload_type", &data.payload_type)?,
        group_id: optional(&data.group_id),
        assignment_filter_type: optional_enum(
            "payloads.assignment_filter_type",
            &data.assignment_filter_type,
        )?,
    })
}
