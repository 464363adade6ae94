use serde::{Deserialize, Serialize};

use crate::graph::enums::graph_enum;

pub const ODATA_TYPE: &str = "#microsoft.graph.deviceAndAppManagementAssignmentFilter";

graph_enum! {
    pub enum DevicePlatformType {
        Android => "android",
        AndroidForWork => "androidForWork",
        Ios => "iOS",
        MacOs => "macOS",
        WindowsPhone81 => "windowsPhone81",
        Windows81AndLater => "windows81AndLater",
        Windows10AndLater => "windows10AndLater",
        AndroidWorkProfile => "androidWorkProfile",
        Unknown => "unknown",
        AndroidAosp => "androidAOSP",
        AndroidMobileApplicationManagement => "androidMobileApplicationManagement",
        IosMobileApplicationManagement => "iOSMobileApplicationManagement",
        UnknownFutureValue => "unknownFutureValue",
        WindowsMobileApplicationManagement => "windowsMobileApplicationManagement",
    }
}

graph_enum! {
    pub enum AssignmentFilterManagementType {
        Devices => "devices",
        Apps => "apps",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum AssociatedAssignmentPayloadType {
        Unknown => "unknown",
        DeviceConfigurationAndCompliance => "deviceConfigurationAndCompliance",
        Application => "application",
        AndroidEnterpriseApp => "androidEnterpriseApp",
        EnrollmentConfiguration => "enrollmentConfiguration",
        GroupPolicyConfiguration => "groupPolicyConfiguration",
        ZeroTouchDeploymentDeviceConfigProfile => "zeroTouchDeploymentDeviceConfigProfile",
        AndroidEnterpriseConfiguration => "androidEnterpriseConfiguration",
        DeviceFirmwareConfigurationInterfacePolicy => "deviceFirmwareConfigurationInterfacePolicy",
        ResourceAccessPolicy => "resourceAccessPolicy",
        Win32App => "win32app",
        // Graph spells this value without the second "e".
        ConfigurationAndCompliancePolicy => "deviceManagmentConfigurationAndCompliancePolicy",
    }
}

graph_enum! {
    pub enum DeviceAndAppManagementAssignmentFilterType {
        NoFilter => "none",
        Include => "include",
        Exclude => "exclude",
    }
}

/// `deviceAndAppManagementAssignmentFilter` as sent to and returned by Graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAndAppManagementAssignmentFilter {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<DevicePlatformType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_filter_management_type: Option<AssignmentFilterManagementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_scope_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payloads: Option<Vec<PayloadByFilter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadByFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<AssociatedAssignmentPayloadType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_filter_type: Option<DeviceAndAppManagementAssignmentFilterType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_graph_response() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.deviceAndAppManagementAssignmentFilter",
            "id": "5b2c2f8a-9d2e-4d41-b1cd-2d9fb3c0d0aa",
            "displayName": "Corporate Windows",
            "description": null,
            "platform": "windows10AndLater",
            "rule": "(device.manufacturer -eq \"Contoso\")",
            "assignmentFilterManagementType": "devices",
            "createdDateTime": "2024-05-01T10:00:00Z",
            "lastModifiedDateTime": "2024-05-02T10:00:00Z",
            "roleScopeTags": ["0"],
            "payloads": []
        }"##;

        let filter: DeviceAndAppManagementAssignmentFilter = serde_json::from_str(json).unwrap();
        assert_eq!(filter.id.as_deref(), Some("5b2c2f8a-9d2e-4d41-b1cd-2d9fb3c0d0aa"));
        assert_eq!(filter.platform, Some(DevicePlatformType::Windows10AndLater));
        assert_eq!(filter.description, None);
        assert_eq!(filter.payloads, Some(vec![]));
    }

    #[test]
    fn test_unset_members_are_omitted() {
        let filter = DeviceAndAppManagementAssignmentFilter {
            display_name: Some("x".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({"displayName": "x"}));
    }

    #[test]
    fn test_filter_type_none_wire_name() {
        assert_eq!(
            serde_json::to_string(&DeviceAndAppManagementAssignmentFilterType::NoFilter).unwrap(),
            r#""none""#
        );
    }
}
