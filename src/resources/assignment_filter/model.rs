use serde::{Deserialize, Serialize};

use crate::terraform::{ListValue, StringValue, Timeouts, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentFilterModel {
    pub id: StringValue,
    pub display_name: StringValue,
    pub description: StringValue,
    pub platform: StringValue,
    pub rule: StringValue,
    pub assignment_filter_management_type: StringValue,
    pub created_date_time: StringValue,
    pub last_modified_date_time: StringValue,
    pub role_scope_tags: ListValue<String>,
    pub payloads: ListValue<PayloadModel>,
    pub timeouts: Value<Timeouts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadModel {
    pub payload_id: StringValue,
    pub payload_type: StringValue,
    pub group_id: StringValue,
    pub assignment_filter_type: StringValue,
}
