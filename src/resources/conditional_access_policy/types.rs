//! Graph beta `conditionalAccessPolicy` and its nested complex types.

use serde::{Deserialize, Serialize};

use crate::graph::Flags;
use crate::graph::enums::graph_enum;

pub const ODATA_TYPE: &str = "#microsoft.graph.conditionalAccessPolicy";
pub const ALL_EXTERNAL_TENANTS_ODATA_TYPE: &str =
    "#microsoft.graph.conditionalAccessAllExternalTenants";
pub const ENUMERATED_EXTERNAL_TENANTS_ODATA_TYPE: &str =
    "#microsoft.graph.conditionalAccessEnumeratedExternalTenants";

graph_enum! {
    pub enum ConditionalAccessPolicyState {
        Enabled => "enabled",
        Disabled => "disabled",
        EnabledForReportingButNotEnforced => "enabledForReportingButNotEnforced",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ConditionalAccessClientApp {
        All => "all",
        Browser => "browser",
        MobileAppsAndDesktopClients => "mobileAppsAndDesktopClients",
        ExchangeActiveSync => "exchangeActiveSync",
        EasSupported => "easSupported",
        Other => "other",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ConditionalAccessDevicePlatform {
        Android => "android",
        Ios => "iOS",
        Windows => "windows",
        WindowsPhone => "windowsPhone",
        MacOs => "macOS",
        All => "all",
        UnknownFutureValue => "unknownFutureValue",
        Linux => "linux",
    }
}

graph_enum! {
    pub enum RiskLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
        Hidden => "hidden",
        NoRisk => "none",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum FilterMode {
        Include => "include",
        Exclude => "exclude",
    }
}

graph_enum! {
    /// Member of the `guestOrExternalUserTypes` flags value.
    pub enum ConditionalAccessGuestOrExternalUserType {
        NoGuestType => "none",
        InternalGuest => "internalGuest",
        B2bCollaborationGuest => "b2bCollaborationGuest",
        B2bCollaborationMember => "b2bCollaborationMember",
        B2bDirectConnectUser => "b2bDirectConnectUser",
        OtherExternalUser => "otherExternalUser",
        ServiceProvider => "serviceProvider",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ConditionalAccessExternalTenantsMembershipKind {
        All => "all",
        Enumerated => "enumerated",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Member of the `insiderRiskLevels` flags value.
    pub enum ConditionalAccessInsiderRiskLevel {
        Minor => "minor",
        Moderate => "moderate",
        Elevated => "elevated",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    /// Member of the `transferMethods` flags value.
    pub enum ConditionalAccessTransferMethod {
        NoTransferMethod => "none",
        DeviceCodeFlow => "deviceCodeFlow",
        AuthenticationTransfer => "authenticationTransfer",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ConditionalAccessGrantControlOperator {
        And => "AND",
        Or => "OR",
    }
}

graph_enum! {
    pub enum ConditionalAccessGrantControl {
        Block => "block",
        Mfa => "mfa",
        CompliantDevice => "compliantDevice",
        DomainJoinedDevice => "domainJoinedDevice",
        ApprovedApplication => "approvedApplication",
        CompliantApplication => "compliantApplication",
        PasswordChange => "passwordChange",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum CloudAppSecuritySessionControlType {
        McasConfigured => "mcasConfigured",
        MonitorOnly => "monitorOnly",
        BlockDownloads => "blockDownloads",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum ContinuousAccessEvaluationMode {
        StrictEnforcement => "strictEnforcement",
        Disabled => "disabled",
        UnknownFutureValue => "unknownFutureValue",
        StrictLocation => "strictLocation",
    }
}

graph_enum! {
    pub enum PersistentBrowserSessionMode {
        Always => "always",
        Never => "never",
    }
}

graph_enum! {
    pub enum SigninFrequencyType {
        Days => "days",
        Hours => "hours",
    }
}

graph_enum! {
    pub enum SignInFrequencyInterval {
        TimeBased => "timeBased",
        EveryTime => "everyTime",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum SignInFrequencyAuthenticationType {
        PrimaryAndSecondaryAuthentication => "primaryAndSecondaryAuthentication",
        SecondaryAuthentication => "secondaryAuthentication",
        UnknownFutureValue => "unknownFutureValue",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessPolicy {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ConditionalAccessPolicyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionalAccessConditionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_controls: Option<ConditionalAccessGrantControls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_controls: Option<ConditionalAccessSessionControls>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessConditionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<ConditionalAccessApplications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<ConditionalAccessUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_applications: Option<ConditionalAccessClientApplications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_app_types: Option<Vec<ConditionalAccessClientApp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<ConditionalAccessDevices>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_states: Option<ConditionalAccessDeviceStates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<ConditionalAccessLocations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<ConditionalAccessPlatforms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_flows: Option<ConditionalAccessAuthenticationFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insider_risk_levels: Option<Flags<ConditionalAccessInsiderRiskLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in_risk_levels: Option<Vec<RiskLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_risk_levels: Option<Vec<RiskLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_risk_levels: Option<Vec<RiskLevel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessApplications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_applications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_applications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_user_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_authentication_context_class_references: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_guests_or_external_users: Option<ConditionalAccessGuestsOrExternalUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_guests_or_external_users: Option<ConditionalAccessGuestsOrExternalUsers>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessGuestsOrExternalUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_or_external_user_types: Option<Flags<ConditionalAccessGuestOrExternalUserType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_tenants: Option<ConditionalAccessExternalTenants>,
}

/// Either `conditionalAccessAllExternalTenants` or
/// `conditionalAccessEnumeratedExternalTenants`, told apart by `@odata.type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessExternalTenants {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_kind: Option<ConditionalAccessExternalTenantsMembershipKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessClientApplications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_service_principals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_service_principals: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessDevices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_devices: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_devices: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_filter: Option<ConditionalAccessFilter>,
}

/// Deprecated by Graph in favour of `devices.deviceFilter`, still accepted on beta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessDeviceStates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_states: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<FilterMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessPlatforms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_platforms: Option<Vec<ConditionalAccessDevicePlatform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_platforms: Option<Vec<ConditionalAccessDevicePlatform>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessAuthenticationFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_methods: Option<Flags<ConditionalAccessTransferMethod>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessGrantControls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<ConditionalAccessGrantControlOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_in_controls: Option<Vec<ConditionalAccessGrantControl>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_authentication_factors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_use: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_strength: Option<AuthenticationStrengthPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationStrengthPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements_satisfied: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_combinations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAccessSessionControls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_enforced_restrictions: Option<SessionControlToggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_app_security: Option<CloudAppSecuritySessionControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_access_evaluation: Option<ContinuousAccessEvaluationSessionControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_browser: Option<PersistentBrowserSessionControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in_frequency: Option<SignInFrequencySessionControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_sign_in_session: Option<SessionControlToggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_resilience_defaults: Option<bool>,
}

/// Session controls that only carry `isEnabled`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionControlToggle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAppSecuritySessionControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_app_security_type: Option<CloudAppSecuritySessionControlType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousAccessEvaluationSessionControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ContinuousAccessEvaluationMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentBrowserSessionControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PersistentBrowserSessionMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInFrequencySessionControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub frequency_type: Option<SigninFrequencyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_interval: Option<SignInFrequencyInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<SignInFrequencyAuthenticationType>,
}
