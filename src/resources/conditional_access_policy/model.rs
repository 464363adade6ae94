use serde::{Deserialize, Serialize};

use crate::terraform::{BoolValue, Int64Value, ListValue, StringValue, Timeouts, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionalAccessPolicyModel {
    pub id: StringValue,
    pub display_name: StringValue,
    pub description: StringValue,
    pub state: StringValue,
    pub created_date_time: StringValue,
    pub modified_date_time: StringValue,
    pub conditions: Value<ConditionsModel>,
    pub grant_controls: Value<GrantControlsModel>,
    pub session_controls: Value<SessionControlsModel>,
    pub timeouts: Value<Timeouts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionsModel {
    pub applications: Value<ApplicationsModel>,
    pub users: Value<UsersModel>,
    pub client_applications: Value<ClientApplicationsModel>,
    pub client_app_types: ListValue<String>,
    pub devices: Value<DevicesModel>,
    pub device_states: Value<DeviceStatesModel>,
    pub locations: Value<LocationsModel>,
    pub platforms: Value<PlatformsModel>,
    pub authentication_flows: Value<AuthenticationFlowsModel>,
    /// Comma-separated flags, e.g. `minor,moderate`.
    pub insider_risk_levels: StringValue,
    pub sign_in_risk_levels: ListValue<String>,
    pub user_risk_levels: ListValue<String>,
    pub service_principal_risk_levels: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationsModel {
    pub include_applications: ListValue<String>,
    pub exclude_applications: ListValue<String>,
    pub include_user_actions: ListValue<String>,
    pub include_authentication_context_class_references: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersModel {
    pub include_users: ListValue<String>,
    pub exclude_users: ListValue<String>,
    pub include_groups: ListValue<String>,
    pub exclude_groups: ListValue<String>,
    pub include_roles: ListValue<String>,
    pub exclude_roles: ListValue<String>,
    pub include_guests_or_external_users: Value<GuestsOrExternalUsersModel>,
    pub exclude_guests_or_external_users: Value<GuestsOrExternalUsersModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestsOrExternalUsersModel {
    /// Comma-separated flags, e.g. `internalGuest,b2bCollaborationGuest`.
    pub guest_or_external_user_types: StringValue,
    pub external_tenants: Value<ExternalTenantsModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalTenantsModel {
    pub membership_kind: StringValue,
    /// Tenant ids; only meaningful when `membership_kind` is `enumerated`.
    pub members: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientApplicationsModel {
    pub include_service_principals: ListValue<String>,
    pub exclude_service_principals: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesModel {
    pub include_devices: ListValue<String>,
    pub exclude_devices: ListValue<String>,
    pub device_filter: Value<DeviceFilterModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStatesModel {
    pub include_states: ListValue<String>,
    pub exclude_states: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFilterModel {
    pub mode: StringValue,
    pub rule: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationsModel {
    pub include_locations: ListValue<String>,
    pub exclude_locations: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformsModel {
    pub include_platforms: ListValue<String>,
    pub exclude_platforms: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticationFlowsModel {
    pub transfer_methods: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantControlsModel {
    pub operator: StringValue,
    pub built_in_controls: ListValue<String>,
    pub custom_authentication_factors: ListValue<String>,
    pub terms_of_use: ListValue<String>,
    pub authentication_strength: Value<AuthenticationStrengthModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticationStrengthModel {
    pub id: StringValue,
    pub display_name: StringValue,
    pub description: StringValue,
    pub policy_type: StringValue,
    pub requirements_satisfied: StringValue,
    pub allowed_combinations: ListValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionControlsModel {
    pub application_enforced_restrictions: Value<SessionControlToggleModel>,
    pub cloud_app_security: Value<CloudAppSecurityModel>,
    pub continuous_access_evaluation: Value<ContinuousAccessEvaluationModel>,
    pub persistent_browser: Value<PersistentBrowserModel>,
    pub sign_in_frequency: Value<SignInFrequencyModel>,
    pub secure_sign_in_session: Value<SessionControlToggleModel>,
    pub disable_resilience_defaults: BoolValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionControlToggleModel {
    pub is_enabled: BoolValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudAppSecurityModel {
    pub is_enabled: BoolValue,
    pub cloud_app_security_type: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousAccessEvaluationModel {
    pub mode: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentBrowserModel {
    pub is_enabled: BoolValue,
    pub mode: StringValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInFrequencyModel {
    pub is_enabled: BoolValue,
    #[serde(rename = "type")]
    pub frequency_type: StringValue,
    pub value: Int64Value,
    pub frequency_interval: StringValue,
    pub authentication_type: StringValue,
}
