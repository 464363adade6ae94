use super::model::{AssignmentFilterModel, PayloadModel};
use super::types::{DeviceAndAppManagementAssignmentFilter, PayloadByFilter};
use crate::mapping::{flatten_enum, flatten_list, flatten_string};

pub(super) fn map_remote_state(
    data: &mut AssignmentFilterModel,
    remote: &DeviceAndAppManagementAssignmentFilter,
) {
    data.display_name = flatten_string(&remote.display_name);
    data.description = flatten_string(&remote.description);
    data.platform = flatten_enum(&remote.platform);
    data.rule = flatten_string(&remote.rule);
    data.assignment_filter_management_type =
        flatten_enum(&remote.assignment_filter_management_type);
    data.created_date_time = flatten_string(&remote.created_date_time);
    data.last_modified_date_time = flatten_string(&remote.last_modified_date_time);
    data.role_scope_tags = remote.role_scope_tags.clone().into();
    data.payloads = flatten_list(&remote.payloads, map_payload);
}

fn map_payload(remote: &PayloadByFilter) -> PayloadModel {
    PayloadModel {
        payload_id: flatten_string(&remote.payload_id),
        payload_type: flatten_enum(&remote.payload_type),
        group_id: flatten_string(&remote.group_id),
        assignment_filter_type: flatten_enum(&remote.assignment_filter_type),
    }
}
