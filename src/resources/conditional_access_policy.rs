//! `graph_beta_identity_and_access_conditional_access_policy`: Entra ID
//! conditional access policies on the beta endpoint.

mod construct;
mod model;
mod state;
mod types;

pub use model::*;
pub use types::*;

use crate::graph::{ApiVersion, GraphEnum};
use crate::mapping::ConstructError;
use crate::resource::GraphResource;
use crate::terraform::{Attribute, Mode, Schema, StringValue, Timeouts, Value};

pub struct ConditionalAccessPolicyResource;

impl GraphResource for ConditionalAccessPolicyResource {
    type Model = ConditionalAccessPolicyModel;
    type Remote = ConditionalAccessPolicy;

    const TYPE_NAME: &'static str = "graph_beta_identity_and_access_conditional_access_policy";
    const API_VERSION: ApiVersion = ApiVersion::Beta;
    const COLLECTION_PATH: &'static str = "identity/conditionalAccess/policies";
    const DISPLAY_NAME: &'static str = "conditional access policy";

    fn schema() -> Schema {
        Schema {
            description: "Manages Microsoft Entra ID conditional access policies.",
            attributes: vec![
                Attribute::string(
                    "id",
                    Mode::Computed,
                    "The unique identifier of the conditional access policy.",
                ),
                Attribute::string(
                    "display_name",
                    Mode::Required,
                    "The display name of the policy.",
                ),
                Attribute::string("description", Mode::Optional, "The description of the policy."),
                Attribute::string("state", Mode::Optional, "Specifies the state of the policy.")
                    .one_of(ConditionalAccessPolicyState::VALUES),
                Attribute::string(
                    "created_date_time",
                    Mode::Computed,
                    "The creation date and time of the policy.",
                ),
                Attribute::string(
                    "modified_date_time",
                    Mode::Computed,
                    "The last modified date and time of the policy.",
                ),
                Attribute::single_nested(
                    "conditions",
                    Mode::Optional,
                    "Rules that must be met for the policy to apply.",
                    conditions_schema(),
                ),
                Attribute::single_nested(
                    "grant_controls",
                    Mode::Optional,
                    "Controls that must be fulfilled to pass the policy.",
                    grant_controls_schema(),
                ),
                Attribute::single_nested(
                    "session_controls",
                    Mode::Optional,
                    "Controls to enforce after sign-in.",
                    session_controls_schema(),
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

fn include_exclude(
    include: &'static str,
    exclude: &'static str,
    what: &'static str,
) -> Vec<Attribute> {
    vec![
        Attribute::string_list(include, Mode::Optional, what),
        Attribute::string_list(exclude, Mode::Optional, what),
    ]
}

fn guests_or_external_users_schema(name: &'static str, description: &'static str) -> Attribute {
    Attribute::single_nested(
        name,
        Mode::Optional,
        description,
        vec![
            Attribute::string(
                "guest_or_external_user_types",
                Mode::Optional,
                "Comma-separated guest or external user types.",
            )
            .one_of(ConditionalAccessGuestOrExternalUserType::VALUES),
            Attribute::single_nested(
                "external_tenants",
                Mode::Optional,
                "The tenant ids of the selected types of guests or external users.",
                vec![
                    Attribute::string(
                        "membership_kind",
                        Mode::Required,
                        "All tenants or an enumerated list.",
                    )
                    .one_of(&["all", "enumerated"]),
                    Attribute::string_list(
                        "members",
                        Mode::Optional,
                        "Tenant ids when membership is enumerated.",
                    ),
                ],
            ),
        ],
    )
}

fn conditions_schema() -> Vec<Attribute> {
    let mut applications = include_exclude(
        "include_applications",
        "exclude_applications",
        "Application ids, or All, Office365 or MicrosoftAdminPortals.",
    );
    applications.push(Attribute::string_list(
        "include_user_actions",
        Mode::Optional,
        "User actions to include, e.g. urn:user:registersecurityinfo.",
    ));
    applications.push(Attribute::string_list(
        "include_authentication_context_class_references",
        Mode::Optional,
        "Authentication context class references to include, e.g. c1.",
    ));

    let mut users = include_exclude(
        "include_users",
        "exclude_users",
        "User ids, or None, All or GuestsOrExternalUsers.",
    );
    users.extend(include_exclude("include_groups", "exclude_groups", "Group ids."));
    users.extend(include_exclude("include_roles", "exclude_roles", "Directory role template ids."));
    users.push(guests_or_external_users_schema(
        "include_guests_or_external_users",
        "Internal guests or external users included in the policy scope.",
    ));
    users.push(guests_or_external_users_schema(
        "exclude_guests_or_external_users",
        "Internal guests or external users excluded from the policy scope.",
    ));

    let mut devices = include_exclude(
        "include_devices",
        "exclude_devices",
        "Device states or ids.",
    );
    devices.push(Attribute::single_nested(
        "device_filter",
        Mode::Optional,
        "Filter defining the dynamic device syntax rule.",
        vec![
            Attribute::string(
                "mode",
                Mode::Optional,
                "Whether devices matching the rule are included or excluded.",
            )
            .one_of(FilterMode::VALUES),
            Attribute::string("rule", Mode::Optional, "The filter rule expression."),
        ],
    ));

    vec![
        Attribute::single_nested(
            "applications",
            Mode::Optional,
            "Applications and user actions in scope.",
            applications,
        ),
        Attribute::single_nested(
            "users",
            Mode::Optional,
            "Users, groups and roles in scope.",
            users,
        ),
        Attribute::single_nested(
            "client_applications",
            Mode::Optional,
            "Client applications (service principals and workload identities) in scope.",
            include_exclude(
                "include_service_principals",
                "exclude_service_principals",
                "Service principal ids.",
            ),
        ),
        Attribute::string_list(
            "client_app_types",
            Mode::Optional,
            "Client application types in scope.",
        )
        .one_of(ConditionalAccessClientApp::VALUES),
        Attribute::single_nested("devices", Mode::Optional, "Devices in scope.", devices),
        Attribute::single_nested(
            "device_states",
            Mode::Optional,
            "Deprecated device states in scope; prefer devices.device_filter.",
            include_exclude("include_states", "exclude_states", "All, Compliant or DomainJoined."),
        ),
        Attribute::single_nested(
            "locations",
            Mode::Optional,
            "Named locations in scope.",
            include_exclude(
                "include_locations",
                "exclude_locations",
                "Named location ids, or All or AllTrusted.",
            ),
        ),
        Attribute::single_nested(
            "platforms",
            Mode::Optional,
            "Device platforms in scope.",
            vec![
                Attribute::string_list("include_platforms", Mode::Optional, "Platforms to include.")
                    .one_of(ConditionalAccessDevicePlatform::VALUES),
                Attribute::string_list("exclude_platforms", Mode::Optional, "Platforms to exclude.")
                    .one_of(ConditionalAccessDevicePlatform::VALUES),
            ],
        ),
        Attribute::single_nested(
            "authentication_flows",
            Mode::Optional,
            "Authentication flows in scope.",
            vec![
                Attribute::string(
                    "transfer_methods",
                    Mode::Optional,
                    "Comma-separated transfer methods.",
                )
                .one_of(ConditionalAccessTransferMethod::VALUES),
            ],
        ),
        Attribute::string(
            "insider_risk_levels",
            Mode::Optional,
            "Comma-separated insider risk levels.",
        )
        .one_of(ConditionalAccessInsiderRiskLevel::VALUES),
        Attribute::string_list(
            "sign_in_risk_levels",
            Mode::Optional,
            "Sign-in risk levels in scope.",
        )
        .one_of(RiskLevel::VALUES),
        Attribute::string_list("user_risk_levels", Mode::Optional, "User risk levels in scope.")
            .one_of(RiskLevel::VALUES),
        Attribute::string_list(
            "service_principal_risk_levels",
            Mode::Optional,
            "Service principal risk levels in scope.",
        )
        .one_of(RiskLevel::VALUES),
    ]
}

fn grant_controls_schema() -> Vec<Attribute> {
    vec![
        Attribute::string("operator", Mode::Optional, "Relationship of the grant controls.")
            .one_of(ConditionalAccessGrantControlOperator::VALUES),
        Attribute::string_list("built_in_controls", Mode::Optional, "Built-in grant controls.")
            .one_of(ConditionalAccessGrantControl::VALUES),
        Attribute::string_list(
            "custom_authentication_factors",
            Mode::Optional,
            "Custom controls ids required by the policy.",
        ),
        Attribute::string_list(
            "terms_of_use",
            Mode::Optional,
            "Terms of use ids required by the policy.",
        ),
        Attribute::single_nested(
            "authentication_strength",
            Mode::Optional,
            "The authentication strength required by the policy.",
            vec![
                Attribute::string("id", Mode::Optional, "The authentication strength policy id."),
                Attribute::string(
                    "display_name",
                    Mode::Optional,
                    "The authentication strength display name.",
                ),
                Attribute::string(
                    "description",
                    Mode::Optional,
                    "The authentication strength description.",
                ),
                Attribute::string("policy_type", Mode::Optional, "builtIn or custom."),
                Attribute::string(
                    "requirements_satisfied",
                    Mode::Optional,
                    "The requirements satisfied by the policy.",
                ),
                Attribute::string_list(
                    "allowed_combinations",
                    Mode::Optional,
                    "Authentication method combinations allowed by the policy.",
                ),
            ],
        ),
    ]
}

fn session_controls_schema() -> Vec<Attribute> {
    let toggle = |name, description| {
        Attribute::single_nested(
            name,
            Mode::Optional,
            description,
            vec![
                Attribute::bool(
                    "is_enabled",
                    Mode::Optional,
                    "Whether the session control is enabled.",
                ),
            ],
        )
    };

    vec![
        toggle(
            "application_enforced_restrictions",
            "Enforce application restrictions. \
             Only Exchange Online and SharePoint Online support it.",
        ),
        Attribute::single_nested(
            "cloud_app_security",
            Mode::Optional,
            "Route sessions through Defender for Cloud Apps.",
            vec![
                Attribute::bool(
                    "is_enabled",
                    Mode::Optional,
                    "Whether the session control is enabled.",
                ),
                Attribute::string(
                    "cloud_app_security_type",
                    Mode::Optional,
                    "The Cloud App Security session control type.",
                )
                .one_of(CloudAppSecuritySessionControlType::VALUES),
            ],
        ),
        Attribute::single_nested(
            "continuous_access_evaluation",
            Mode::Optional,
            "Continuous access evaluation settings.",
            vec![
                Attribute::string("mode", Mode::Optional, "The continuous access evaluation mode.")
                    .one_of(ContinuousAccessEvaluationMode::VALUES),
            ],
        ),
        Attribute::single_nested(
            "persistent_browser",
            Mode::Optional,
            "Persistent browser session settings.",
            vec![
                Attribute::bool(
                    "is_enabled",
                    Mode::Optional,
                    "Whether the session control is enabled.",
                ),
                Attribute::string("mode", Mode::Optional, "Whether browser sessions persist.")
                    .one_of(PersistentBrowserSessionMode::VALUES),
            ],
        ),
        Attribute::single_nested(
            "sign_in_frequency",
            Mode::Optional,
            "Sign-in frequency enforcement.",
            vec![
                Attribute::bool(
                    "is_enabled",
                    Mode::Optional,
                    "Whether the session control is enabled.",
                ),
                Attribute::string("type", Mode::Optional, "The unit of the frequency value.")
                    .one_of(SigninFrequencyType::VALUES),
                Attribute::int64("value", Mode::Optional, "The number of days or hours."),
                Attribute::string("frequency_interval", Mode::Optional, "Time based or every time.")
                    .one_of(SignInFrequencyInterval::VALUES),
                Attribute::string(
                    "authentication_type",
                    Mode::Optional,
                    "The authentication type the frequency applies to.",
                )
                .one_of(SignInFrequencyAuthenticationType::VALUES),
            ],
        ),
        toggle("secure_sign_in_session", "Require token protection for sign-in sessions."),
        Attribute::bool(
            "disable_resilience_defaults",
            Mode::Optional,
            "Whether Entra ID extends existing sessions during an outage.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Value<Vec<String>> {
        Value::Known(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_round_trip_reproduces_configured_fields() {
        let planned = ConditionalAccessPolicyModel {
            display_name: "Require MFA for admins".into(),
            description: "Tier 0".into(),
            state: "enabledForReportingButNotEnforced".into(),
            conditions: Value::Known(ConditionsModel {
                applications: Value::Known(ApplicationsModel {
                    include_applications: strings(&["All"]),
                    ..Default::default()
                }),
                users: Value::Known(UsersModel {
                    include_roles: strings(&["62e90394-69f5-4237-9190-012177145e10"]),
                    exclude_users: strings(&["break-glass"]),
                    include_guests_or_external_users: Value::Known(GuestsOrExternalUsersModel {
                        guest_or_external_user_types: "internalGuest,b2bCollaborationGuest".into(),
                        external_tenants: Value::Known(ExternalTenantsModel {
                            membership_kind: "all".into(),
                            members: Value::Null,
                        }),
                    }),
                    ..Default::default()
                }),
                client_app_types: strings(&["all"]),
                devices: Value::Known(DevicesModel {
                    device_filter: Value::Known(DeviceFilterModel {
                        mode: "exclude".into(),
                        rule: "device.isCompliant -eq True".into(),
                    }),
                    ..Default::default()
                }),
                authentication_flows: Value::Known(AuthenticationFlowsModel {
                    transfer_methods: "deviceCodeFlow,authenticationTransfer".into(),
                }),
                device_states: Value::Known(DeviceStatesModel {
                    include_states: strings(&["All"]),
                    exclude_states: strings(&["Compliant", "DomainJoined"]),
                }),
                insider_risk_levels: "minor,elevated".into(),
                sign_in_risk_levels: strings(&["high", "medium"]),
                ..Default::default()
            }),
            grant_controls: Value::Known(GrantControlsModel {
                operator: "OR".into(),
                built_in_controls: strings(&["mfa"]),
                ..Default::default()
            }),
            session_controls: Value::Known(SessionControlsModel {
                persistent_browser: Value::Known(PersistentBrowserModel {
                    is_enabled: Value::Known(true),
                    mode: "never".into(),
                }),
                secure_sign_in_session: Value::Known(SessionControlToggleModel {
                    is_enabled: Value::Known(false),
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let body = ConditionalAccessPolicyResource::construct(&planned).unwrap();
        let mut echoed = serde_json::to_value(&body).unwrap();
        echoed["id"] = "policy-1".into();
        echoed["createdDateTime"] = "2024-05-01T10:00:00Z".into();
        let remote: ConditionalAccessPolicy = serde_json::from_value(echoed).unwrap();

        let mut state = planned.clone();
        state.id = "policy-1".into();
        ConditionalAccessPolicyResource::flatten(&mut state, &remote);

        let expected = ConditionalAccessPolicyModel {
            id: "policy-1".into(),
            created_date_time: "2024-05-01T10:00:00Z".into(),
            ..planned
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn test_schema_paths() {
        let schema = ConditionalAccessPolicyResource::schema();
        assert_eq!(schema.attribute("display_name").unwrap().mode, Mode::Required);
        let tenants = "conditions.users.include_guests_or_external_users.external_tenants";
        assert!(schema.lookup(&format!("{tenants}.members")).is_some());
        assert_eq!(
            schema.lookup(&format!("{tenants}.membership_kind")).unwrap().mode,
            Mode::Required
        );
        assert!(schema.lookup("conditions.device_states.exclude_states").is_some());
        assert_eq!(
            schema.lookup("grant_controls.operator").unwrap().allowed_values,
            &["AND", "OR"]
        );
        assert!(
            schema
                .lookup("conditions.sign_in_risk_levels")
                .unwrap()
                .allowed_values
                .contains(&"unknownFutureValue")
        );
    }
}
